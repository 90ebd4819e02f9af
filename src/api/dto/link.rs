//! DTOs for the link endpoints.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Link;
use crate::utils::slug::validate_custom_slug;
use crate::utils::target_url::validate_target_url;

/// Body of `POST /url`, accepted as JSON or as an urlencoded form.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Optional custom slug; omitted or blank means "generate one".
    #[validate(custom(function = "validate_slug_field"))]
    pub slug: Option<String>,

    /// Target URL; must be an absolute http(s) URL.
    #[validate(
        required(message = "url is required"),
        custom(function = "validate_url_field")
    )]
    pub url: Option<String>,
}

impl CreateLinkRequest {
    /// Trims both fields and turns blank values into `None`.
    pub fn normalized(self) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            slug: non_blank(self.slug),
            url: non_blank(self.url),
        }
    }
}

// Both field checks delegate to the helpers `LinkService::create_link` runs
// again, so the HTTP and admin paths share one rule set.
fn validate_slug_field(slug: &str) -> Result<(), ValidationError> {
    validate_custom_slug(slug)
        .map(drop)
        .map_err(|e| ValidationError::new("slug").with_message(Cow::Owned(e.to_string())))
}

fn validate_url_field(url: &str) -> Result<(), ValidationError> {
    validate_target_url(url)
        .map_err(|e| ValidationError::new("url").with_message(Cow::Owned(e.to_string())))
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            url: link.url,
            created_at: link.created_at,
        }
    }
}

/// Plain `{"message": ...}` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
