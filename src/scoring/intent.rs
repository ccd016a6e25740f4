//! Query intent classification
//!
//! A query is classified into a fixed set of non-exclusive intents via
//! substring pattern tests. Each intent carries the document keys and body
//! keywords it boosts; the boost fires only when the intent matches AND the
//! document predicate (key in the target list, or any keyword in the body)
//! also matches.

use serde::{Deserialize, Serialize};

use crate::corpus::PolicyDocument;

/// Score added per matching intent whose document predicate also matches
pub const INTENT_BONUS: u32 = 20;

/// Non-exclusive query intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Cost,
    Time,
    Permission,
    Process,
    Requirements,
    Consequences,
    Help,
    Location,
    Deadline,
    Exception,
}

impl Intent {
    /// All intents, in evaluation order
    pub const ALL: [Intent; 10] = [
        Intent::Cost,
        Intent::Time,
        Intent::Permission,
        Intent::Process,
        Intent::Requirements,
        Intent::Consequences,
        Intent::Help,
        Intent::Location,
        Intent::Deadline,
        Intent::Exception,
    ];

    /// Substring patterns that signal this intent
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Intent::Cost => &["how much", "what does it cost", "price", "expensive"],
            Intent::Time => &["when", "what time", "how long", "duration"],
            Intent::Permission => &["can i", "am i allowed", "is it ok", "permitted"],
            Intent::Process => &["how do i", "how to", "what do i need", "steps"],
            Intent::Requirements => &["what do i need", "requirements", "need to have"],
            Intent::Consequences => &["what happens if", "penalty", "consequence"],
            Intent::Help => &["where can i get help", "who should i contact", "need help"],
            Intent::Location => &["where", "location", "find"],
            Intent::Deadline => &["deadline", "due date", "when is it due"],
            Intent::Exception => &["emergency", "special circumstances", "exception"],
        }
    }

    /// Document keys this intent boosts directly
    pub fn target_keys(&self) -> &'static [&'static str] {
        match self {
            Intent::Cost => &["fees"],
            Intent::Time => &[
                "semesters",
                "study_periods",
                "examination_procedures",
                "coursework_submission",
            ],
            Intent::Permission => &[
                "library_regulations",
                "calculator_policy",
                "code_of_conduct",
                "attendance",
            ],
            Intent::Process => &[
                "coursework_submission",
                "examination_procedures",
                "leave_of_absence",
                "complaints_procedure",
                "appeals_complaints_procedures",
            ],
            Intent::Requirements => &[
                "undergraduate_admission_requirements",
                "postgraduate_admission_requirements",
                "executive_mba_admission_requirements",
                "english_language_requirements",
                "enrollment",
                "attendance",
            ],
            Intent::Consequences => &[
                "coursework_submission",
                "unfair_means",
                "disciplinary_issues",
                "attendance",
                "compensation_rules",
                "reassessment_rules",
            ],
            Intent::Help => &[
                "student_office",
                "career_office",
                "campus_resources",
                "complaints_procedure",
            ],
            Intent::Location => &[
                "campus_resources",
                "library_ilc",
                "student_office",
                "career_office",
            ],
            Intent::Deadline => &["coursework_submission", "examination_process"],
            Intent::Exception => &["extenuating_circumstances", "leave_of_absence"],
        }
    }

    /// Body keywords that satisfy the document predicate for this intent
    pub fn body_keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::Cost => &["fee", "cost", "payment"],
            Intent::Time => &["week", "semester", "deadline"],
            Intent::Permission => &["allow", "permit", "rule"],
            Intent::Process => &["process", "procedure", "submit"],
            Intent::Requirements => &["requirement", "need", "qualification"],
            Intent::Consequences => &["penalty", "consequence", "late"],
            Intent::Help => &["help", "support", "contact", "office"],
            Intent::Location => &["building", "room", "location", "where"],
            Intent::Deadline => &["deadline", "due"],
            Intent::Exception => &["emergency", "exceptional", "circumstance"],
        }
    }

    /// Whether this intent's document predicate holds for `document`
    pub fn applies_to(&self, document: &PolicyDocument) -> bool {
        if self.target_keys().contains(&document.key.as_str()) {
            return true;
        }
        let body = document.body.to_lowercase();
        self.body_keywords().iter().any(|kw| body.contains(kw))
    }
}

/// Ephemeral record of which intents a query signals
///
/// Computed fresh per query; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentSignals {
    active: Vec<Intent>,
}

impl IntentSignals {
    /// Classify a lower-cased query
    pub fn detect(lower_query: &str) -> Self {
        let active = Intent::ALL
            .iter()
            .copied()
            .filter(|intent| intent.patterns().iter().any(|p| lower_query.contains(p)))
            .collect();
        Self { active }
    }

    /// Intents the query signals, in evaluation order
    pub fn active(&self) -> &[Intent] {
        &self.active
    }

    /// Whether a specific intent is signaled
    pub fn is_active(&self, intent: Intent) -> bool {
        self.active.contains(&intent)
    }

    /// Whether no intent matched
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusStore;

    #[test]
    fn test_cost_intent_detection() {
        let signals = IntentSignals::detect("how much are the tuition fees?");
        assert!(signals.is_active(Intent::Cost));
    }

    #[test]
    fn test_intents_are_non_exclusive() {
        // "when is it due" signals time and deadline at once
        let signals = IntentSignals::detect("when is it due");
        assert!(signals.is_active(Intent::Time));
        assert!(signals.is_active(Intent::Deadline));
    }

    #[test]
    fn test_no_intent_for_plain_statement() {
        let signals = IntentSignals::detect("the library is nice");
        assert!(signals.is_empty());
    }

    #[test]
    fn test_cost_intent_applies_to_fees_document() {
        let corpus = CorpusStore::builtin();
        let fees = corpus.get("fees").unwrap();
        assert!(Intent::Cost.applies_to(fees));
    }

    #[test]
    fn test_permission_intent_applies_via_body_keyword() {
        let corpus = CorpusStore::builtin();
        // Not in the permission target list, but its body mentions "allowed"
        let exams = corpus.get("examination_procedures").unwrap();
        assert!(Intent::Permission.applies_to(exams));
    }

    #[test]
    fn test_intent_target_keys_exist_in_corpus() {
        let corpus = CorpusStore::builtin();
        for intent in Intent::ALL {
            for key in intent.target_keys() {
                assert!(corpus.get(key).is_some(), "{intent:?} targets unknown key {key}");
            }
        }
    }
}
