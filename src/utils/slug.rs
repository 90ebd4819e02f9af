//! Slug validation, normalization and generation.
//!
//! Slugs accept `[A-Za-z0-9_-]+` on input and are always stored lowercase.
//! Generated slugs draw from the lowercase form of that alphabet directly, so
//! they never need normalizing.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Length of generated slugs.
pub const GENERATED_SLUG_LENGTH: usize = 5;

/// Alphabet for generated slugs.
const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_-";

/// Slugs that would be shadowed by fixed API routes.
pub const RESERVED_SLUGS: &[&str] = &["url", "urls"];

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("slug pattern is a valid regex")
});

/// Source of slugs for links created without one.
#[cfg_attr(test, mockall::automock)]
pub trait SlugGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates uniformly random slugs from [`SLUG_ALPHABET`].
#[derive(Debug, Clone)]
pub struct RandomSlugGenerator {
    length: usize,
}

impl RandomSlugGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomSlugGenerator {
    fn default() -> Self {
        Self::new(GENERATED_SLUG_LENGTH)
    }
}

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..SLUG_ALPHABET.len());
                SLUG_ALPHABET[idx] as char
            })
            .collect()
    }
}

/// Returns true if `slug` only uses `[A-Za-z0-9_-]` and is not empty.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

/// Canonical stored form of a slug.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_ascii_lowercase()
}

/// Validates a user-supplied slug and returns its normalized form.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the slug contains characters outside
/// `[A-Za-z0-9_-]`, is empty, or collides with a fixed route.
pub fn validate_custom_slug(slug: &str) -> Result<String, AppError> {
    let trimmed = slug.trim();

    if !is_valid_slug(trimmed) {
        return Err(AppError::bad_request(
            "Slug may only contain letters, digits, underscores and hyphens",
            json!({ "slug": slug }),
        ));
    }

    let normalized = normalize_slug(trimmed);

    if RESERVED_SLUGS.contains(&normalized.as_str()) {
        return Err(AppError::bad_request(
            "This slug is reserved",
            json!({ "slug": normalized }),
        ));
    }

    Ok(normalized)
}
