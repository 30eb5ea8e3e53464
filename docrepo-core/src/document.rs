//! The document model stored by the repository.
//!
//! This module defines the unit of storage, [`Document`], its embedded
//! [`Author`] value, and utilities for converting documents to and from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::RepositoryResult;

/// The unit of storage in a document repository.
///
/// Every field is optional on input. The repository assigns `id` and
/// `created` on first insertion and guarantees that both are populated on
/// every document it hands back out:
///
/// - `id` is generated when absent or empty at save time and is never
///   reassigned afterwards.
/// - `created` is fixed at first-insertion time per identity and survives
///   later upserts of the same identity, regardless of what the caller
///   supplies in the replacement value.
///
/// # Example
///
/// ```ignore
/// use docrepo_core::document::{Author, Document};
///
/// let document = Document {
///     title: Some("Quarterly Report".to_string()),
///     content: Some("Numbers are up.".to_string()),
///     author: Some(Author {
///         id: "a-17".to_string(),
///         name: "Alice".to_string(),
///     }),
///     ..Document::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Opaque unique identifier, assigned by the repository when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Optional document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional document body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Optional embedded author value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// First-insertion timestamp, assigned by the repository when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Returns the identifier when it is present and non-empty.
    ///
    /// A blank identifier is treated the same as a missing one: the
    /// repository will assign a fresh identity at save time.
    pub fn identity(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// An author embedded in a document.
///
/// This is a plain value with no lifecycle of its own; searches compare
/// authors only by their `id` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Opaque author identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Extension trait providing JSON conversion utilities for documents.
pub trait DocumentExt: Sized {
    /// Converts this document to a JSON value for serialization.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> RepositoryResult<Value>;

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> RepositoryResult<Self>;
}

impl DocumentExt for Document {
    fn to_json(&self) -> RepositoryResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> RepositoryResult<Self> {
        Ok(from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn identity_treats_blank_id_as_missing() {
        let mut document = Document::default();
        assert_eq!(document.identity(), None);

        document.id = Some(String::new());
        assert_eq!(document.identity(), None);

        document.id = Some("doc-1".to_string());
        assert_eq!(document.identity(), Some("doc-1"));
    }

    #[test]
    fn json_round_trip_preserves_all_fields() {
        let document = Document {
            id: Some("doc-1".to_string()),
            title: Some("Report".to_string()),
            content: Some("body".to_string()),
            author: Some(Author {
                id: "a-1".to_string(),
                name: "Alice".to_string(),
            }),
            created: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        };

        let value = document.to_json().unwrap();
        assert_eq!(value["author"]["id"], "a-1");

        let restored = Document::from_json(value).unwrap();
        assert_eq!(restored, document);
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let value = Document::default().to_json().unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
