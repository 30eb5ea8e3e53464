//! Search request evaluation for in-memory document filtering.
//!
//! This module provides the evaluation engine for search requests: one
//! constraint group per request field, AND-ed across groups, OR-ed within a
//! group. A document missing a field that a non-empty group tests fails that
//! group and is excluded.

use docrepo_core::{document::Document, query::SearchRequest};

/// Evaluates a [`SearchRequest`] against individual documents.
///
/// Empty groups act as pass-through; a request with every group empty
/// matches every document.
pub(crate) struct RequestEvaluator<'a> {
    request: &'a SearchRequest,
}

impl<'a> RequestEvaluator<'a> {
    pub fn new(request: &'a SearchRequest) -> Self {
        Self { request }
    }

    /// Returns `true` when the document satisfies every non-empty group.
    pub fn matches(&self, document: &Document) -> bool {
        self.matches_title(document)
            && self.matches_content(document)
            && self.matches_author(document)
            && self.matches_created_lower(document)
            && self.matches_created_upper(document)
    }

    /// Filters an iterator of stored documents into a fresh vector,
    /// preserving the iteration order of the input.
    pub fn filter(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &'a SearchRequest,
    ) -> Vec<Document> {
        let evaluator = RequestEvaluator::new(request);

        documents
            .into_iter()
            .filter(|document| evaluator.matches(document))
            .cloned()
            .collect()
    }

    fn matches_title(&self, document: &Document) -> bool {
        if self.request.title_prefixes.is_empty() {
            return true;
        }

        match &document.title {
            Some(title) => self
                .request
                .title_prefixes
                .iter()
                .any(|prefix| title.starts_with(prefix.as_str())),
            None => false,
        }
    }

    fn matches_content(&self, document: &Document) -> bool {
        if self.request.contains_contents.is_empty() {
            return true;
        }

        match &document.content {
            Some(content) => self
                .request
                .contains_contents
                .iter()
                .any(|needle| content.contains(needle.as_str())),
            None => false,
        }
    }

    fn matches_author(&self, document: &Document) -> bool {
        if self.request.author_ids.is_empty() {
            return true;
        }

        match &document.author {
            Some(author) => self
                .request
                .author_ids
                .iter()
                .any(|author_id| author_id == &author.id),
            None => false,
        }
    }

    fn matches_created_lower(&self, document: &Document) -> bool {
        match self.request.created_from {
            // Inclusive bound: created == created_from matches.
            Some(from) => matches!(document.created, Some(created) if created >= from),
            None => true,
        }
    }

    fn matches_created_upper(&self, document: &Document) -> bool {
        match self.request.created_to {
            // Inclusive bound: created == created_to matches.
            Some(to) => matches!(document.created, Some(created) if created <= to),
            None => true,
        }
    }
}
