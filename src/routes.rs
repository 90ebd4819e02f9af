//! Top-level router: static assets first, then the link API.
//!
//! # Route Structure
//!
//! - `/*`          - Files from the static directory, when one matches
//! - `POST /url`   - Create a link
//! - `GET  /urls`  - List links
//! - `GET  /url/{id}` - Fetch a link
//! - `GET  /{id}`  - Redirect
//! - `DELETE /{id}` - Delete a link
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Security headers** - nosniff, frame and referrer policies
//! - **CORS** - Permissive, any origin
//! - **Error stacks** - Stack traces in error bodies outside production

use std::path::Path;

use crate::api;
use crate::api::middleware::{error_stack, security_headers, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served at the root; requests that match no file
///   fall through to the API, whatever their method
/// - `expose_stack` - when `true`, error bodies carry the real stack instead of
///   the placeholder
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>, expose_stack: bool) -> Router {
    let api_router = api::routes::routes().with_state(state);

    let static_files = ServeDir::new(static_dir.as_ref())
        .call_fallback_on_method_not_allowed(true)
        .fallback(api_router);

    let router = Router::new()
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(
            expose_stack,
            error_stack::layer,
        ))
        .layer(CorsLayer::permissive());

    security_headers::apply(router).layer(tracing::layer())
}
