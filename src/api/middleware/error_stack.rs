//! Boundary middleware deciding whether error stacks reach clients.
//!
//! [`AppError`](crate::error::AppError) always renders the placeholder stack
//! and attaches an [`ErrorReport`]. When stacks are exposed this layer
//! replaces the body with one carrying the real stack.

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ErrorReport;

/// Rewrites error bodies when `expose_stack` is true; passes everything else through.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{id}", get(redirect_handler))
///     .layer(middleware::from_fn_with_state(!config.is_production(), error_stack::layer));
/// ```
pub async fn layer(State(expose_stack): State<bool>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    if !expose_stack {
        return response;
    }

    match response.extensions_mut().remove::<ErrorReport>() {
        Some(report) => (response.status(), Json(report.body(true))).into_response(),
        None => response,
    }
}
