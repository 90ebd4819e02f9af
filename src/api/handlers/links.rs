//! Handlers for link management endpoints (create, list, fetch, delete).

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse, MessageResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a link.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// JSON or `application/x-www-form-urlencoded`:
///
/// ```json
/// {
///   "url": "https://example.com",
///   "slug": "my-link"   // optional, generated when omitted
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "slug": "my-link", "url": "https://example.com", "created_at": "..." }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the slug is already in use.
pub async fn create_link_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let CreateLinkRequest { slug, url } = payload;
    let url = url.unwrap_or_default();

    let link = state.link_service.create_link(url, slug).await?;

    Ok(Json(link.into()))
}

/// Lists every link in insertion order.
///
/// # Endpoint
///
/// `GET /urls`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single link.
///
/// # Endpoint
///
/// `GET /url/{id}` where `id` is the slug
///
/// # Errors
///
/// Returns 404 Not Found if no link has this slug.
pub async fn get_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&slug).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /{id}`
///
/// Always answers `{"message": "Delete successful"}`, whether or not a
/// record matched; the removed count is only logged.
pub async fn delete_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let removed = state.link_service.delete_link(&slug).await?;

    if removed == 0 {
        tracing::debug!(slug = %slug, "Delete matched no link");
    }

    Ok(Json(MessageResponse::new("Delete successful")))
}
