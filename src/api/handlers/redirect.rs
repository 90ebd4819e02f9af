//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its stored URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Answers `302 Found` with `Location` set to the stored URL, byte for byte.
///
/// # Errors
///
/// Returns 404 Not Found if no link has this slug.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.get_link(&slug).await?;

    let location = HeaderValue::from_str(&link.url).map_err(|e| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "slug": link.slug, "reason": e.to_string() }),
        )
    })?;

    tracing::debug!(slug = %link.slug, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
