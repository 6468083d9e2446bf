//! Retrieved documents attached to an answer.
//!
//! Scores and relevance flags are computed by the backend and carried
//! through untouched. The order of a [`SearchResultSet`] is the backend's
//! ranking and is never re-sorted.

use serde::{Deserialize, Serialize};

/// One retrieved document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document text
    pub content: String,
    /// Similarity score, higher is more relevant
    pub score: f64,
    /// Whether the backend judged the document relevant
    pub relevant: bool,
}

/// Ranked list of retrieved documents.
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResultSet(pub Vec<SearchResult>);

impl SearchResultSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SearchResult> {
        self.0.get(index)
    }

    /// Number of documents flagged relevant by the backend.
    pub fn relevant_count(&self) -> usize {
        self.0.iter().filter(|r| r.relevant).count()
    }
}

impl From<Vec<SearchResult>> for SearchResultSet {
    fn from(results: Vec<SearchResult>) -> Self {
        Self(results)
    }
}

impl<'a> IntoIterator for &'a SearchResultSet {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
