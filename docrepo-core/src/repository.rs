//! Storage abstraction for the document repository.
//!
//! This module defines the trait that abstracts over concrete storage
//! implementations, so the repository contract can be served by an in-memory
//! backend or anything else that upholds the same invariants.
//!
//! # Overview
//!
//! The [`DocumentRepository`] trait provides a unified async interface for
//! the three repository operations (upsert, filtered search, point lookup)
//! plus a size accessor. Implementations are required to be thread-safe
//! (`Send + Sync`); the exact concurrency model is implementation-specific
//! but must make `save` effectively atomic per identity, since the
//! uniqueness and immutable-`created` invariants depend on it.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{document::Document, error::RepositoryResult, query::SearchRequest};

/// Abstract interface for document repository backends.
///
/// # Invariants
///
/// Every implementation must guarantee, for all documents it has handed back
/// from [`save`](DocumentRepository::save):
///
/// - the document carries a non-empty identifier that is unique within the
///   repository, and a populated `created` timestamp;
/// - the repository holds at most one document per identifier (upsert, not
///   append);
/// - `created` never changes across later saves of the same identity.
///
/// # Error Handling
///
/// Operations return [`RepositoryResult<T>`]. Absence is a normal outcome
/// (`None` from lookup, an empty vector from search), never an error; the
/// fallible signatures exist for backends with real failure modes.
#[async_trait]
pub trait DocumentRepository: Send + Sync + Debug {
    /// Upserts a document, assigning identity and creation time on first insertion.
    ///
    /// If the document's id is absent or empty, a fresh globally-unique
    /// identifier is generated. If the identity is new to the repository and
    /// `created` is absent, it is set to the current time. If the identity
    /// already exists, the stored entry is replaced whole-object while its
    /// original `created` timestamp is preserved.
    ///
    /// Returns the authoritative stored document with identity and creation
    /// time populated.
    async fn save(&self, document: Document) -> RepositoryResult<Document>;

    /// Finds every document matching the request, in storage order.
    ///
    /// An absent request matches every document. Otherwise a document is
    /// included iff it satisfies all non-empty constraint groups of the
    /// request; within a group, matching any one value suffices. The returned
    /// vector is a fresh snapshot, never a live view into storage.
    async fn search(&self, request: Option<&SearchRequest>) -> RepositoryResult<Vec<Document>>;

    /// Finds the document with the given identifier.
    ///
    /// An absent or empty id yields `Ok(None)` without inspecting storage.
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Document>>;

    /// Returns the number of documents currently stored.
    async fn count(&self) -> RepositoryResult<usize>;
}
