//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All link routes.
///
/// # Endpoints
///
/// - `POST   /url`       - Create a link (JSON or form body)
/// - `GET    /urls`      - List all links
/// - `GET    /url/{id}`  - Fetch one link by slug
/// - `GET    /{id}`      - Redirect to the link's URL
/// - `DELETE /{id}`      - Delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(create_link_handler))
        .route("/urls", get(list_links_handler))
        .route("/url/{id}", get(get_link_handler))
        .route("/{id}", get(redirect_handler).delete(delete_link_handler))
}
