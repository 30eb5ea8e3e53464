//! Main docrepo crate providing a unified interface to the document repository.
//!
//! This crate is the primary entry point for users of the docrepo project.
//! It re-exports the core types and the in-memory backend, and provides a
//! prelude for convenient imports.
//!
//! # Features
//!
//! - **Upsert with identity assignment** - Documents receive a unique id and a
//!   first-insertion timestamp the first time they are saved
//! - **Multi-criteria search** - Constraint groups over title prefixes, content
//!   substrings, author ids, and an inclusive creation-time window
//! - **Point lookup** - Exact retrieval by identifier
//!
//! # Quick Start
//!
//! ```ignore
//! use docrepo::{prelude::*, memory::InMemoryRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = InMemoryRepository::new();
//!
//!     // Save a document; id and created are assigned on first insertion.
//!     let saved = repository
//!         .save(Document {
//!             title: Some("Quarterly Report".to_string()),
//!             content: Some("Numbers are up.".to_string()),
//!             ..Document::default()
//!         })
//!         .await?;
//!
//!     // Point lookup by identifier.
//!     let found = repository.find_by_id(saved.id.as_deref().unwrap()).await?;
//!     assert!(found.is_some());
//!
//!     // Filtered search: AND across groups, OR within a group.
//!     let matches = repository
//!         .search(Some(&SearchRequest {
//!             title_prefixes: vec!["Quarterly".to_string()],
//!             ..SearchRequest::default()
//!         }))
//!         .await?;
//!     assert_eq!(matches.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage for embedding, development, and testing

pub mod prelude;

pub use docrepo_core::{document, error, query, repository};

/// In-memory repository backend implementations.
pub mod memory {
    pub use docrepo_memory::InMemoryRepository;
}
