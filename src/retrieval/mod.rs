//! Top-K retrieval over the corpus
//!
//! Scores every document, drops zero-score candidates, sorts descending with
//! ties keeping corpus order, and truncates to the configured limit. An
//! empty result is a valid outcome and flows downstream as the no-grounding
//! case, never as an error.

use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusStore, PolicyDocument};
use crate::scoring::{IntentSignals, RelevanceScorer};

/// Default number of documents returned per query
pub const DEFAULT_TOP_K: usize = 3;

/// Retrieval parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalParams {
    /// Maximum number of results
    pub top_k: usize,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

/// A document with its relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document: PolicyDocument,
    pub score: u32,
}

/// Retriever over an immutable corpus
#[derive(Debug, Clone)]
pub struct Retriever {
    corpus: CorpusStore,
    scorer: RelevanceScorer,
    params: RetrievalParams,
}

impl Retriever {
    /// Create a retriever with default parameters
    pub fn new(corpus: CorpusStore) -> Self {
        Self::with_params(corpus, RetrievalParams::default())
    }

    /// Create with custom parameters
    pub fn with_params(corpus: CorpusStore, params: RetrievalParams) -> Self {
        Self {
            corpus,
            scorer: RelevanceScorer::new(),
            params,
        }
    }

    /// Retrieve the top-K documents for a query, highest score first
    pub fn retrieve(&self, query: &str) -> Vec<ScoredDocument> {
        let lower_query = query.to_lowercase();
        let signals = IntentSignals::detect(&lower_query);

        let mut scored: Vec<ScoredDocument> = self
            .corpus
            .iter()
            .filter_map(|doc| {
                let score = self.scorer.score_with_signals(&lower_query, &signals, doc);
                (score > 0).then(|| ScoredDocument {
                    document: doc.clone(),
                    score,
                })
            })
            .collect();

        // Stable sort: ties keep corpus enumeration order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.params.top_k);
        scored
    }

    /// The corpus this retriever scans
    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }
}
