//! In-process link repository.
//!
//! Used when no database is configured and by the HTTP test suite. Records
//! live only as long as the process.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    links: BTreeMap<i64, Link>,
    ids_by_slug: HashMap<String, i64>,
}

/// In-memory implementation of [`LinkRepository`].
///
/// A single write lock covers the uniqueness check and the insert, giving the
/// same atomicity as a database constraint.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.ids_by_slug.contains_key(&new_link.slug) {
            return Err(AppError::slug_in_use(Some(&new_link.slug)));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        let link = Link::new(id, new_link.slug, new_link.url, Utc::now());

        inner.ids_by_slug.insert(link.slug.clone(), id);
        inner.links.insert(id, link.clone());

        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner
            .ids_by_slug
            .get(slug)
            .and_then(|id| inner.links.get(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.links.values().cloned().collect())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;

        let Some(id) = inner.ids_by_slug.remove(slug) else {
            return Ok(0);
        };
        inner.links.remove(&id);

        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(slug: &str, url: &str) -> NewLink {
        NewLink {
            slug: slug.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_find() {
        let repo = MemoryLinkRepository::new();

        let created = repo
            .create(new_link("abc12", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let found = repo.find_by_slug("abc12").await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_missing() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.find_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_conflict_keeps_original() {
        let repo = MemoryLinkRepository::new();

        repo.create(new_link("taken", "https://first.com"))
            .await
            .unwrap();
        let err = repo
            .create(new_link("taken", "https://second.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        let kept = repo.find_by_slug("taken").await.unwrap().unwrap();
        assert_eq!(kept.url, "https://first.com");
    }

    #[tokio::test]
    async fn list_in_insertion_order() {
        let repo = MemoryLinkRepository::new();

        for slug in ["c", "a", "b"] {
            repo.create(new_link(slug, "https://example.com"))
                .await
                .unwrap();
        }

        let slugs: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.slug)
            .collect();
        assert_eq!(slugs, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn delete_reports_removed_count() {
        let repo = MemoryLinkRepository::new();

        repo.create(new_link("gone", "https://example.com"))
            .await
            .unwrap();

        assert_eq!(repo.delete_by_slug("gone").await.unwrap(), 1);
        assert_eq!(repo.delete_by_slug("gone").await.unwrap(), 0);
        assert!(repo.find_by_slug("gone").await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_creates_with_same_slug() {
        let repo = Arc::new(MemoryLinkRepository::new());
        let mut handles = vec![];

        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_link("race", &format!("https://example{i}.com")))
                    .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
