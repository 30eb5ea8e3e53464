//! Search request types for filtered document queries.
//!
//! A [`SearchRequest`] describes a conjunction of constraint groups. Each
//! group lists alternative values that are OR-ed together, while the groups
//! themselves are AND-ed: a document matches the request iff it satisfies
//! every non-empty group.
//!
//! # Example
//!
//! ```ignore
//! use docrepo_core::query::SearchRequest;
//!
//! let request = SearchRequest {
//!     title_prefixes: vec!["Report".to_string()],
//!     author_ids: vec!["a-17".to_string()],
//!     ..SearchRequest::default()
//! };
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stateless description of a multi-criteria document search.
///
/// All fields are optional; an empty vector or `None` means "no constraint
/// on this field". A request with every group empty matches every document,
/// exactly like an absent request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Matches documents whose title starts with at least one prefix.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title_prefixes: Vec<String>,
    /// Matches documents whose content contains at least one substring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains_contents: Vec<String>,
    /// Matches documents whose author id equals at least one id.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author_ids: Vec<String>,
    /// Inclusive lower bound on the `created` timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the `created` timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a new request with no constraints.
    pub fn new() -> Self {
        SearchRequest::default()
    }

    /// Returns `true` when every constraint group is empty.
    ///
    /// An unconstrained request behaves identically to an absent one: every
    /// stored document matches.
    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_empty()
            && self.contains_contents.is_empty()
            && self.author_ids.is_empty()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_unconstrained() {
        assert!(SearchRequest::new().is_unconstrained());
    }

    #[test]
    fn any_populated_group_constrains_the_request() {
        let request = SearchRequest {
            title_prefixes: vec!["Report".to_string()],
            ..SearchRequest::default()
        };
        assert!(!request.is_unconstrained());

        let request = SearchRequest {
            created_to: Some(Utc::now()),
            ..SearchRequest::default()
        };
        assert!(!request.is_unconstrained());
    }

    #[test]
    fn deserializes_from_camel_case_json() {
        let request: SearchRequest = serde_json::from_value(serde_json::json!({
            "titlePrefixes": ["Report"],
            "containsContents": ["numbers"],
            "authorIds": ["a-1"],
        }))
        .unwrap();

        assert_eq!(request.title_prefixes, vec!["Report"]);
        assert_eq!(request.contains_contents, vec!["numbers"]);
        assert_eq!(request.author_ids, vec!["a-1"]);
        assert_eq!(request.created_from, None);
    }
}
