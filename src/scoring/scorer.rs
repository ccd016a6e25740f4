//! Relevance scorer
//!
//! Deterministic, additive scoring of one document against one query. No
//! normalization and no upper bound; a zero score means the document is not
//! a candidate at all. Rule-based scoring keeps every ranking decision
//! auditable, which embedding similarity cannot offer here.

use crate::corpus::PolicyDocument;
use crate::scoring::intent::{IntentSignals, INTENT_BONUS};
use crate::scoring::rules::DOMAIN_RULES;

/// Bonus when the title contains the query's first token
pub const TITLE_PREFIX_BONUS: u32 = 10;

/// Bonus per query token (length > 2) found in the body
pub const KEYWORD_BONUS: u32 = 5;

/// Minimum token length considered in the keyword-overlap pass
const MIN_KEYWORD_LEN: usize = 3;

/// Stateless relevance scorer over the rule bank
#[derive(Debug, Default, Clone, Copy)]
pub struct RelevanceScorer;

impl RelevanceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score one document against a query
    ///
    /// Additive passes: title-prefix bonus, keyword overlap, intent boosts,
    /// domain rules. The full-corpus O(N) scan this feeds is fine at tens to
    /// a few hundred documents; past that, the keyword pass should move to a
    /// pre-built inverted index with the same scoring contract.
    pub fn score(&self, query: &str, document: &PolicyDocument) -> u32 {
        let lower_query = query.to_lowercase();
        let signals = IntentSignals::detect(&lower_query);
        self.score_with_signals(&lower_query, &signals, document)
    }

    /// Score with precomputed intent signals (one detection per request)
    pub fn score_with_signals(
        &self,
        lower_query: &str,
        signals: &IntentSignals,
        document: &PolicyDocument,
    ) -> u32 {
        let lower_title = document.title.to_lowercase();
        let lower_body = document.body.to_lowercase();

        let mut score = 0u32;

        // Title-prefix bonus on the first whitespace-delimited token
        if let Some(first_token) = lower_query.split_whitespace().next() {
            if lower_title.contains(first_token) {
                score += TITLE_PREFIX_BONUS;
            }
        }

        // Keyword overlap; repeated query tokens add repeatedly
        for token in lower_query.split_whitespace() {
            if token.len() >= MIN_KEYWORD_LEN && lower_body.contains(token) {
                score += KEYWORD_BONUS;
            }
        }

        // Intent boosts
        for intent in signals.active() {
            if intent.applies_to(document) {
                score += INTENT_BONUS;
            }
        }

        // Domain rule bank
        for rule in DOMAIN_RULES {
            if rule.target_key == document.key && rule.matches(lower_query) {
                score += rule.bonus;
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(key: &str, title: &str, body: &str) -> PolicyDocument {
        PolicyDocument {
            key: key.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_title_prefix_bonus() {
        let scorer = RelevanceScorer::new();
        let d = doc("x", "Attendance Requirements", "Nothing relevant here.");
        assert_eq!(scorer.score("attendance rules", &d), TITLE_PREFIX_BONUS);
    }

    #[test]
    fn test_keyword_overlap_counts_repeats() {
        let scorer = RelevanceScorer::new();
        let d = doc("x", "T", "fees fees everywhere");
        // "fees" appears twice in the query, each occurrence adds
        assert_eq!(scorer.score("fees fees", &d), 2 * KEYWORD_BONUS);
    }

    #[test]
    fn test_short_tokens_ignored() {
        let scorer = RelevanceScorer::new();
        let d = doc("x", "T", "an ab at it is to");
        assert_eq!(scorer.score("an ab at", &d), 0);
    }

    #[test]
    fn test_unrelated_query_scores_zero() {
        let scorer = RelevanceScorer::new();
        let d = doc("x", "Library Rules", "Quiet please.");
        assert_eq!(scorer.score("zzqq wwxx", &d), 0);
    }

    #[test]
    fn test_tuition_fee_query_scores_fees_document() {
        let scorer = RelevanceScorer::new();
        let corpus = crate::corpus::CorpusStore::builtin();
        let fees = corpus.get("fees").unwrap();
        let score = scorer.score("How much are the tuition fees?", fees);
        // cost intent (+20) and the fees domain rule (+15) both fire,
        // plus keyword overlap on "tuition" and "fees"
        assert!(score >= INTENT_BONUS + 15 + 2 * KEYWORD_BONUS);
    }

    #[test]
    fn test_calculator_query_prefers_calculator_policy() {
        let scorer = RelevanceScorer::new();
        let corpus = crate::corpus::CorpusStore::builtin();
        let calc = corpus.get("calculator_policy").unwrap();
        let library = corpus.get("library_regulations").unwrap();
        let q = "can I use a calculator in the exam";
        assert!(scorer.score(q, calc) > scorer.score(q, library));
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = RelevanceScorer::new();
        let corpus = crate::corpus::CorpusStore::builtin();
        for d in corpus.iter() {
            assert_eq!(
                scorer.score("when are exams held", d),
                scorer.score("when are exams held", d)
            );
        }
    }
}
