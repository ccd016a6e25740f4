//! Query-to-document relevance scoring
//!
//! Three heuristic passes plus a declarative per-document rule bank. All of
//! it is deterministic and pure: same query, same document, same score.

pub mod intent;
pub mod rules;
pub mod scorer;

pub use intent::{Intent, IntentSignals, INTENT_BONUS};
pub use rules::{Clause, DomainRule, DOMAIN_RULES};
pub use scorer::{RelevanceScorer, KEYWORD_BONUS, TITLE_PREFIX_BONUS};
