//! HTTP middleware applied around every route.
//!
//! - [`error_stack`] - Re-renders error bodies with their stack outside production
//! - [`security_headers`] - Conservative response headers
//! - [`tracing`] - Request/response spans

pub mod error_stack;
pub mod security_headers;
pub mod tracing;
