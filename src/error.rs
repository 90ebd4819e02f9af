//! Application error type and its HTTP rendering.
//!
//! Every handler returns [`AppError`]; the mapping to a status code happens in
//! one place ([`AppError::status_code`]). The JSON body always has the shape
//! `{"message": ..., "stack": ...}`. The rendered `stack` is the placeholder
//! [`STACK_PLACEHOLDER`] unless the
//! [`error_stack`](crate::api::middleware::error_stack) middleware is told to
//! expose it.

use std::fmt::Write as _;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::db_error::is_unique_violation_on_slug;

/// Stack value shown to clients when stacks are hidden.
pub const STACK_PLACEHOLDER: &str = "🥞";

/// JSON error body returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub stack: String,
}

/// Error details carried on the response so the boundary middleware can
/// re-render the body with the full stack.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    pub stack: String,
}

impl ErrorReport {
    /// Builds the client-facing body, hiding the stack unless `expose_stack`.
    pub fn body(&self, expose_stack: bool) -> ErrorBody {
        ErrorBody {
            message: self.message.clone(),
            stack: if expose_stack {
                self.stack.clone()
            } else {
                STACK_PLACEHOLDER.to_string()
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("Store operation failed: {0}")]
    Store(#[source] sqlx::Error),

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// The error used for every slug collision, whichever layer detected it.
    pub fn slug_in_use(slug: Option<&str>) -> Self {
        Self::conflict("Slug in use.", json!({ "slug": slug }))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Debug rendering of the error followed by its `source()` chain.
    pub fn stack(&self) -> String {
        let mut stack = format!("{self:?}");
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let _ = write!(stack, "\ncaused by: {err}");
            source = err.source();
        }
        stack
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            message: self.to_string(),
            stack: self.stack(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let report = self.report();

        if status.is_server_error() {
            tracing::error!(status = %status, stack = %report.stack, "{}", report.message);
        } else {
            tracing::debug!(status = %status, "{}", report.message);
        }

        let mut response = (status, Json(report.body(false))).into_response();
        response.extensions_mut().insert(report);
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_slug(&e) {
            return AppError::slug_in_use(None);
        }
        AppError::Store(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request(errors.to_string(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::slug_in_use(Some("abc")).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::not_found("gone", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Store(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_stack_includes_source_chain() {
        let err = AppError::Store(sqlx::Error::RowNotFound);
        let stack = err.stack();

        assert!(stack.starts_with("Store("));
        assert!(stack.contains("caused by:"));
        assert_eq!(
            err.to_string(),
            format!("Store operation failed: {}", sqlx::Error::RowNotFound)
        );
    }

    #[test]
    fn test_report_body_hides_stack_by_default() {
        let report = AppError::slug_in_use(Some("taken")).report();

        let hidden = report.body(false);
        assert_eq!(hidden.message, "Slug in use.");
        assert_eq!(hidden.stack, STACK_PLACEHOLDER);

        let exposed = report.body(true);
        assert!(exposed.stack.contains("Conflict"));
    }

    #[test]
    fn test_into_response_attaches_report() {
        let response = AppError::not_found("Slug not found", json!({ "slug": "x" })).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.message, "Slug not found");
    }

    #[test]
    fn test_store_message_carries_cause_when_stack_hidden() {
        let body = AppError::Store(sqlx::Error::PoolTimedOut).report().body(false);

        assert_eq!(body.stack, STACK_PLACEHOLDER);
        assert!(body.message.starts_with("Store operation failed: "));
        assert!(body.message.contains(&sqlx::Error::PoolTimedOut.to_string()));
    }

    #[test]
    fn test_row_not_found_maps_to_store_error() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Store(_)));
    }
}
