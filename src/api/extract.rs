//! Request extractors that report failures as [`AppError`].

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Deserializes the body as an urlencoded form when the request says so,
/// and as JSON otherwise.
///
/// Rejections become [`AppError::Validation`] so malformed bodies get the
/// same error shape as every other failure.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Invalid form body", json!({ "reason": e.body_text() }))
            })?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
            })?;
            Ok(Self(value))
        }
    }
}
