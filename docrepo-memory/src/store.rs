//! In-memory storage implementation for the document repository.
//!
//! This module provides a simple in-memory backend that stores documents in
//! a vector behind an async-safe read-write lock. Storage order is insertion
//! order, and upserts replace documents in place, so the order exposed by
//! search stays stable across replacements.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mea::rwlock::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use docrepo_core::{
    document::Document,
    error::RepositoryResult,
    query::SearchRequest,
    repository::DocumentRepository,
};

use crate::evaluator::RequestEvaluator;

/// Thread-safe in-memory document repository.
///
/// This struct implements the [`DocumentRepository`] trait with a linear-scan
/// store held entirely in memory.
///
/// # Thread Safety
///
/// `InMemoryRepository` is cloneable and uses an `Arc`-wrapped internal
/// state, allowing it to be safely shared across async tasks. Multiple clones
/// of the same instance share the same underlying data. `save` holds the
/// write lock for its full duration, making each upsert atomic per identity;
/// `search`, `find_by_id`, and `count` take the read lock and may run
/// concurrently with each other.
///
/// # Performance
///
/// Every operation scans the stored documents (no indexing). For the small
/// to medium datasets this backend is intended for, that is acceptable.
///
/// # Example
///
/// ```ignore
/// use docrepo_memory::InMemoryRepository;
/// use docrepo_core::{document::Document, repository::DocumentRepository};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let repository = InMemoryRepository::new();
///
///     let saved = repository.save(Document::default()).await?;
///     assert!(saved.id.is_some());
///     assert!(saved.created.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryRepository {
    /// Stored documents in insertion order.
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn save(&self, mut document: Document) -> RepositoryResult<Document> {
        let mut documents = self.documents.write().await;

        let id = match document.identity() {
            Some(id) => id.to_string(),
            None => {
                let generated = Uuid::new_v4().to_string();
                debug!(id = %generated, "generated identifier for new document");
                document.id = Some(generated.clone());
                generated
            }
        };

        match documents
            .iter_mut()
            .find(|stored| stored.identity() == Some(id.as_str()))
        {
            Some(stored) => {
                // created is fixed at first insertion; whatever the caller
                // supplied on this upsert is discarded in favor of the
                // stored value.
                document.created = stored.created;
                *stored = document.clone();
                debug!(id = %id, "replaced existing document");
            }
            None => {
                if document.created.is_none() {
                    let now = Utc::now();
                    debug!(id = %id, created = %now, "set creation time for new document");
                    document.created = Some(now);
                }
                documents.push(document.clone());
                debug!(id = %id, "stored new document");
            }
        }

        Ok(document)
    }

    async fn search(&self, request: Option<&SearchRequest>) -> RepositoryResult<Vec<Document>> {
        let documents = self.documents.read().await;

        let matched = match request {
            Some(request) if !request.is_unconstrained() => {
                RequestEvaluator::filter(documents.iter(), request)
            }
            _ => documents.to_vec(),
        };

        debug!(matched = matched.len(), "search completed");
        Ok(matched)
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Document>> {
        if id.is_empty() {
            warn!("lookup attempted with a blank identifier");
            return Ok(None);
        }

        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .find(|stored| stored.identity() == Some(id))
            .cloned())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.documents.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn save_generates_id_and_created_when_missing() {
        let repository = InMemoryRepository::new();

        let saved = repository.save(Document::default()).await.unwrap();

        assert!(saved.identity().is_some());
        assert!(saved.created.is_some());
    }

    #[tokio::test]
    async fn save_treats_blank_id_as_missing() {
        let repository = InMemoryRepository::new();

        let saved = repository
            .save(Document {
                id: Some(String::new()),
                ..Document::default()
            })
            .await
            .unwrap();

        assert!(saved.identity().is_some());
    }

    #[tokio::test]
    async fn save_keeps_caller_supplied_created_on_first_insertion() {
        let repository = InMemoryRepository::new();
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let saved = repository
            .save(Document {
                created: Some(created),
                ..Document::default()
            })
            .await
            .unwrap();

        assert_eq!(saved.created, Some(created));
    }

    #[tokio::test]
    async fn upsert_preserves_created_and_replaces_other_fields() {
        let repository = InMemoryRepository::new();

        let first = repository
            .save(Document {
                title: Some("v1".to_string()),
                ..Document::default()
            })
            .await
            .unwrap();

        let second = repository
            .save(Document {
                id: first.id.clone(),
                title: Some("v2".to_string()),
                created: Some(Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap()),
                ..Document::default()
            })
            .await
            .unwrap();

        assert_eq!(second.created, first.created);
        assert_eq!(second.title.as_deref(), Some("v2"));
        assert_eq!(repository.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_by_id_with_blank_id_is_not_found() {
        let repository = InMemoryRepository::new();
        repository.save(Document::default()).await.unwrap();

        assert!(repository.find_by_id("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clones_share_the_same_storage() {
        let repository = InMemoryRepository::new();
        let clone = repository.clone();

        let saved = clone.save(Document::default()).await.unwrap();

        let found = repository
            .find_by_id(saved.id.as_deref().unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn upsert_keeps_a_document_in_its_original_position() {
        let repository = InMemoryRepository::new();

        let first = repository
            .save(Document {
                title: Some("first".to_string()),
                ..Document::default()
            })
            .await
            .unwrap();
        repository
            .save(Document {
                title: Some("second".to_string()),
                ..Document::default()
            })
            .await
            .unwrap();

        repository
            .save(Document {
                id: first.id.clone(),
                title: Some("first, revised".to_string()),
                ..Document::default()
            })
            .await
            .unwrap();

        let all = repository.search(None).await.unwrap();
        let titles: Vec<_> = all.iter().filter_map(|d| d.title.as_deref()).collect();
        assert_eq!(titles, vec!["first, revised", "second"]);
    }
}
