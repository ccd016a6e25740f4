//! Immutable policy corpus
//!
//! The corpus is a fixed, versioned set of institutional policy documents
//! loaded once at process start. Query handling never mutates it; reload is
//! a redeploy-time concern.

pub mod dataset;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single policy document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// Unique identifier, stable across releases
    pub key: String,
    /// Short human-readable label
    pub title: String,
    /// Full policy text
    pub body: String,
}

/// Read-only, ordered collection of policy documents
///
/// Iteration order is the dataset order and doubles as the tie-break order
/// during retrieval, so it must stay stable.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    documents: Arc<Vec<PolicyDocument>>,
}

impl CorpusStore {
    /// Build the store from the built-in dataset
    pub fn builtin() -> Self {
        Self::from_documents(dataset::documents())
    }

    /// Build the store from an explicit document list (tests, fixtures)
    pub fn from_documents(documents: Vec<PolicyDocument>) -> Self {
        Self {
            documents: Arc::new(documents),
        }
    }

    /// Look up a document by key
    pub fn get(&self, key: &str) -> Option<&PolicyDocument> {
        self.documents.iter().find(|d| d.key == key)
    }

    /// Iterate documents in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &PolicyDocument> {
        self.documents.iter()
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus_loads() {
        let corpus = CorpusStore::builtin();
        assert!(!corpus.is_empty());
        assert_eq!(corpus.len(), 53);
    }

    #[test]
    fn test_lookup_by_key() {
        let corpus = CorpusStore::builtin();
        let fees = corpus.get("fees").expect("fees document present");
        assert_eq!(fees.title, "Tuition Fees and Payment");
        assert!(corpus.get("no_such_key").is_none());
    }

    #[test]
    fn test_keys_are_unique() {
        let corpus = CorpusStore::builtin();
        let mut keys: Vec<&str> = corpus.iter().map(|d| d.key.as_str()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let a: Vec<String> = CorpusStore::builtin().iter().map(|d| d.key.clone()).collect();
        let b: Vec<String> = CorpusStore::builtin().iter().map(|d| d.key.clone()).collect();
        assert_eq!(a, b);
    }
}
