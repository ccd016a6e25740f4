//! Content moderation gate
//!
//! Checks free text against the active banned-term snapshot. A term matches
//! if it equals a whitespace token of the lower-cased text or appears as a
//! raw substring of it; either test suffices. The substring test is
//! intentionally looser than tokenization so multi-word terms still match.
//!
//! Both the standalone check and the send path fail closed: if the snapshot
//! cannot be obtained the error propagates and the request is not processed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::errors::{PolicyError, Result};

/// A banned term with its administrative record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannedTerm {
    /// Lower-cased term text
    pub term: String,
    /// Administrator who added the term
    pub added_by: String,
    /// When the term was added
    pub added_at: DateTime<Utc>,
    /// Inactive terms stay on record but do not match
    pub active: bool,
}

/// Read accessor for the externally-owned banned-term set
///
/// The core only ever reads a snapshot per request; mutation is an admin
/// concern outside this crate's pipeline.
#[async_trait]
pub trait TermStore: Send + Sync {
    /// Current active terms, lower-cased
    async fn active_terms(&self) -> Result<Vec<String>>;
}

/// In-memory term store used by the CLI and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryTermStore {
    terms: Arc<Mutex<Vec<BannedTerm>>>,
}

impl InMemoryTermStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active term; the text is lower-cased on entry
    pub fn add_term(&self, term: &str, added_by: &str) -> Result<()> {
        let mut terms = self
            .terms
            .lock()
            .map_err(|_| PolicyError::TermStoreError("poisoned term store lock".to_string()))?;
        terms.push(BannedTerm {
            term: term.to_lowercase(),
            added_by: added_by.to_string(),
            added_at: Utc::now(),
            active: true,
        });
        Ok(())
    }

    /// Deactivate a term without removing its record
    pub fn deactivate_term(&self, term: &str) -> Result<()> {
        let needle = term.to_lowercase();
        let mut terms = self
            .terms
            .lock()
            .map_err(|_| PolicyError::TermStoreError("poisoned term store lock".to_string()))?;
        for t in terms.iter_mut() {
            if t.term == needle {
                t.active = false;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TermStore for InMemoryTermStore {
    async fn active_terms(&self) -> Result<Vec<String>> {
        let terms = self
            .terms
            .lock()
            .map_err(|_| PolicyError::TermStoreError("poisoned term store lock".to_string()))?;
        Ok(terms
            .iter()
            .filter(|t| t.active)
            .map(|t| t.term.clone())
            .collect())
    }
}

/// Result of a moderation check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCheck {
    /// Whether any banned term matched
    pub violated: bool,
    /// Matched terms in snapshot order, deduplicated
    pub matched_terms: Vec<String>,
    /// Human-readable summary for the caller
    pub message: String,
}

/// Moderation gate over a term store
pub struct ContentModerator {
    store: Arc<dyn TermStore>,
}

impl ContentModerator {
    pub fn new(store: Arc<dyn TermStore>) -> Self {
        Self { store }
    }

    /// Check text against the active banned-term snapshot
    ///
    /// Empty or whitespace-only text is non-violating. A snapshot failure
    /// propagates as an error (fail-closed).
    pub async fn check_content(&self, text: &str) -> Result<ContentCheck> {
        if text.trim().is_empty() {
            return Ok(ContentCheck {
                violated: false,
                matched_terms: Vec::new(),
                message: "Message is acceptable".to_string(),
            });
        }

        let active_terms = self.store.active_terms().await?;

        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        let mut matched = Vec::new();
        for term in &active_terms {
            // Token match OR raw substring match; either satisfies
            if tokens.contains(&term.as_str()) || lowered.contains(term.as_str()) {
                if !matched.contains(term) {
                    matched.push(term.clone());
                }
            }
        }

        let violated = !matched.is_empty();
        let message = if violated {
            format!(
                "Your message contains prohibited content: {}. Please revise your message.",
                matched.join(", ")
            )
        } else {
            "Message is acceptable".to_string()
        };

        Ok(ContentCheck {
            violated,
            matched_terms: matched,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moderator_with(terms: &[&str]) -> ContentModerator {
        let store = InMemoryTermStore::new();
        for t in terms {
            store.add_term(t, "admin").unwrap();
        }
        ContentModerator::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_clean_text_passes() {
        let moderator = moderator_with(&["slur"]);
        let check = moderator.check_content("when are fees due").await.unwrap();
        assert!(!check.violated);
        assert!(check.matched_terms.is_empty());
        assert_eq!(check.message, "Message is acceptable");
    }

    #[tokio::test]
    async fn test_token_match() {
        let moderator = moderator_with(&["slur"]);
        let check = moderator.check_content("this is a SLUR indeed").await.unwrap();
        assert!(check.violated);
        assert_eq!(check.matched_terms, vec!["slur"]);
        assert!(check.message.contains("slur"));
    }

    #[tokio::test]
    async fn test_substring_match_inside_word() {
        // Substring semantics are looser than tokenization on purpose
        let moderator = moderator_with(&["slur"]);
        let check = moderator.check_content("slurring words").await.unwrap();
        assert!(check.violated);
    }

    #[tokio::test]
    async fn test_multi_word_term_matches_as_substring() {
        let moderator = moderator_with(&["bad phrase"]);
        let check = moderator
            .check_content("contains a bad phrase somewhere")
            .await
            .unwrap();
        assert!(check.violated);
        assert_eq!(check.matched_terms, vec!["bad phrase"]);
    }

    #[tokio::test]
    async fn test_empty_text_is_non_violating() {
        let moderator = moderator_with(&["slur"]);
        let check = moderator.check_content("   ").await.unwrap();
        assert!(!check.violated);
    }

    #[tokio::test]
    async fn test_deactivated_term_does_not_match() {
        let store = InMemoryTermStore::new();
        store.add_term("slur", "admin").unwrap();
        store.deactivate_term("slur").unwrap();
        let moderator = ContentModerator::new(Arc::new(store));
        let check = moderator.check_content("a slur here").await.unwrap();
        assert!(!check.violated);
    }

    #[tokio::test]
    async fn test_idempotent_for_same_text_and_terms() {
        let moderator = moderator_with(&["slur", "bad phrase"]);
        let a = moderator.check_content("one slur and a bad phrase").await.unwrap();
        let b = moderator.check_content("one slur and a bad phrase").await.unwrap();
        assert_eq!(a.violated, b.violated);
        assert_eq!(a.matched_terms, b.matched_terms);
        assert_eq!(a.message, b.message);
    }

    #[tokio::test]
    async fn test_store_failure_fails_closed() {
        struct FailingStore;

        #[async_trait]
        impl TermStore for FailingStore {
            async fn active_terms(&self) -> Result<Vec<String>> {
                Err(PolicyError::TermStoreError("connection refused".to_string()))
            }
        }

        let moderator = ContentModerator::new(Arc::new(FailingStore));
        let result = moderator.check_content("anything").await;
        assert!(matches!(result, Err(PolicyError::TermStoreError(_))));
    }

    #[tokio::test]
    async fn test_poisoned_lock_errors_on_every_path() {
        let store = InMemoryTermStore::new();
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.terms.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(
            store.add_term("slur", "admin"),
            Err(PolicyError::TermStoreError(_))
        ));
        assert!(matches!(
            store.deactivate_term("slur"),
            Err(PolicyError::TermStoreError(_))
        ));
        assert!(matches!(
            store.active_terms().await,
            Err(PolicyError::TermStoreError(_))
        ));
    }
}
