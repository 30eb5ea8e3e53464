//! Core types and traits for the docrepo document repository.
//!
//! This crate is the core of the docrepo project and provides:
//!
//! - **Document model** ([`document`]) - The stored document and its embedded author value
//! - **Search requests** ([`query`]) - Multi-criteria filter descriptions for searches
//! - **Repository abstraction** ([`repository`]) - The trait implemented by storage backends
//! - **Error handling** ([`error`]) - Error and result types shared across backends
//!
//! # Example
//!
//! ```ignore
//! use docrepo_core::document::Document;
//!
//! let document = Document {
//!     title: Some("Quarterly Report".to_string()),
//!     content: Some("Numbers are up.".to_string()),
//!     ..Document::default()
//! };
//! ```

#[allow(unused_extern_crates)]
extern crate self as docrepo_core;

pub mod document;
pub mod error;
pub mod query;
pub mod repository;
