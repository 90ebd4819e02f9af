//! HTTP layer: translates requests into [`LinkService`](crate::application::services::LinkService)
//! calls and formats the responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Custom extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Error rendering, headers and tracing layers
//! - [`routes`] - Route table

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
