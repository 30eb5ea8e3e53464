//! In-memory repository backend for docrepo.
//!
//! This crate provides a thread-safe, in-memory implementation of the
//! `DocumentRepository` trait. It uses an async-aware read-write lock for
//! concurrent access and is ideal for development, testing, and embedding
//! behind a service layer that does not need durability.
//!
//! # Features
//!
//! - **Thread-safe access** - Exclusive writes and concurrent reads via an async-aware RwLock
//! - **Upsert semantics** - Identity and creation time assigned on first insertion
//! - **Full search support** - Multi-criteria constraint-group filtering in storage order
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
//!     let saved = repository
//!         .save(Document {
//!             title: Some("Quarterly Report".to_string()),
//!             ..Document::default()
//!         })
//!         .await?;
//!
//!     assert!(repository.find_by_id(saved.id.as_deref().unwrap()).await?.is_some());
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docrepo_memory;

pub mod evaluator;
pub mod store;

pub use store::InMemoryRepository;
