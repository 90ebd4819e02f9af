//! Link creation, lookup and removal service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::slug::{SlugGenerator, normalize_slug, validate_custom_slug};
use crate::utils::target_url::validate_target_url;
use serde_json::json;

/// Number of generated slugs tried before giving up on a create.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service for creating, resolving and deleting links.
///
/// The store's uniqueness constraint is the source of truth for slug
/// collisions; the lookup done before inserting a custom slug only lets the
/// common case fail early.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    slug_generator: Arc<dyn SlugGenerator>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        slug_generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            link_repository,
            slug_generator,
        }
    }

    /// Creates a link, generating a slug when none is supplied.
    ///
    /// A blank `slug` counts as omitted. Supplied slugs are lowercased before
    /// they are checked and stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or slug is invalid.
    /// Returns [`AppError::Conflict`] if the slug is already in use.
    /// Returns [`AppError::Internal`] if no free slug could be generated.
    pub async fn create_link(&self, url: String, slug: Option<String>) -> Result<Link, AppError> {
        let url = url.trim().to_string();
        validate_target_url(&url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "url": url })))?;

        match slug.filter(|s| !s.trim().is_empty()) {
            Some(custom) => self.create_with_custom_slug(url, &custom).await,
            None => self.create_with_generated_slug(url).await,
        }
    }

    async fn create_with_custom_slug(&self, url: String, custom: &str) -> Result<Link, AppError> {
        let slug = validate_custom_slug(custom)?;

        if self
            .link_repository
            .find_by_slug(&slug)
            .await?
            .is_some()
        {
            return Err(AppError::slug_in_use(Some(&slug)));
        }

        let link = self.link_repository.create(NewLink { slug, url }).await?;
        tracing::info!(slug = %link.slug, id = link.id, "Link created");
        Ok(link)
    }

    async fn create_with_generated_slug(&self, url: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let slug = self.slug_generator.generate();

            match self
                .link_repository
                .create(NewLink {
                    slug,
                    url: url.clone(),
                })
                .await
            {
                Ok(link) => {
                    tracing::info!(slug = %link.slug, id = link.id, "Link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!(attempt, "Generated slug already taken, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique slug",
            json!({ "attempts": MAX_GENERATE_ATTEMPTS }),
        ))
    }

    /// Returns every link in insertion order.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Looks up a link by slug. Absence is `Ok(None)`, not an error.
    pub async fn find_link(&self, slug: &str) -> Result<Option<Link>, AppError> {
        self.link_repository
            .find_by_slug(&normalize_slug(slug))
            .await
    }

    /// Looks up a link that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    pub async fn get_link(&self, slug: &str) -> Result<Link, AppError> {
        self.find_link(slug).await?.ok_or_else(|| {
            AppError::not_found("Slug not found", json!({ "slug": normalize_slug(slug) }))
        })
    }

    /// Removes the link with this slug, returning how many records went away.
    ///
    /// Removing a missing slug is not an error.
    pub async fn delete_link(&self, slug: &str) -> Result<u64, AppError> {
        let slug = normalize_slug(slug);
        let removed = self.link_repository.delete_by_slug(&slug).await?;
        tracing::info!(slug = %slug, removed, "Link delete processed");
        Ok(removed)
    }
}
