//! Prompt assembly
//!
//! Turns the retrieved documents plus the query into a typed generation
//! request. Instructions are built from named template parts per tone
//! profile rather than ad hoc concatenation, so assembly stays testable
//! independent of wording changes.

use serde::{Deserialize, Serialize};

use crate::retrieval::ScoredDocument;

/// Named support channel for no-grounding and fallback answers
pub const SUPPORT_CHANNEL: &str =
    "Student Services (studentservices@york.citycollege.eu, +44 (0) 1904 717200)";

const BASE_INSTRUCTION: &str = "You are the official AI assistant for City College Thessaloniki, \
University of York. Your role is to provide accurate, helpful information about university \
policies and regulations.";

/// Selectable response tone presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneProfile {
    /// Friendly but authoritative, cites policy sections
    #[default]
    Helpful,
    /// Precise official language
    Formal,
    /// Brief, essentials only
    Concise,
}

impl ToneProfile {
    /// The full system instruction for this profile
    pub fn system_instruction(&self) -> String {
        let style = match self {
            ToneProfile::Helpful => {
                "INSTRUCTIONS:\n\
                 - Answer questions using ONLY the provided university policies\n\
                 - Be helpful, clear, and professional\n\
                 - If information isn't in the policies, say so clearly\n\
                 - Provide specific details and cite policy sections when relevant\n\
                 - Use a friendly but authoritative tone"
            }
            ToneProfile::Formal => {
                "INSTRUCTIONS:\n\
                 - Provide formal, official responses based strictly on university policies\n\
                 - Use precise, professional language\n\
                 - Cite specific policy sections and regulations\n\
                 - Maintain official university tone and authority"
            }
            ToneProfile::Concise => {
                "INSTRUCTIONS:\n\
                 - Give brief, direct answers based on university policies\n\
                 - Focus on essential information only\n\
                 - Be clear and to the point\n\
                 - Avoid unnecessary elaboration"
            }
        };
        format!("{BASE_INSTRUCTION}\n\n{style}")
    }

    /// Parse a profile name (CLI/config input)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "helpful" => Some(ToneProfile::Helpful),
            "formal" => Some(ToneProfile::Formal),
            "concise" => Some(ToneProfile::Concise),
            _ => None,
        }
    }
}

/// Sampling parameters sent to the generation backend
///
/// Defaults favor determinism over creativity; policy answers should not
/// improvise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_output_tokens: 1000,
            top_p: 0.9,
        }
    }
}

/// Caller-supplied parameter overrides; unset fields keep defaults
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SamplingOverrides {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub tone: Option<ToneProfile>,
}

impl SamplingParams {
    /// Merge overrides over these defaults
    pub fn merged(self, overrides: &SamplingOverrides) -> Self {
        Self {
            temperature: overrides.temperature.unwrap_or(self.temperature),
            max_output_tokens: overrides.max_output_tokens.unwrap_or(self.max_output_tokens),
            top_p: overrides.top_p.unwrap_or(self.top_p),
        }
    }
}

/// Fully assembled request for the generation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_instruction: String,
    pub sampling: SamplingParams,
}

/// Builds generation requests from retrieval results
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    defaults: SamplingParams,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            defaults: SamplingParams::default(),
        }
    }

    /// Create with custom sampling defaults (from configuration)
    pub fn with_defaults(defaults: SamplingParams) -> Self {
        Self { defaults }
    }

    /// Assemble a request from the query and ranked retrieval results
    pub fn build(
        &self,
        query: &str,
        retrieved: &[ScoredDocument],
        tone: ToneProfile,
        overrides: &SamplingOverrides,
    ) -> GenerationRequest {
        let user_instruction = if retrieved.is_empty() {
            self.no_grounding_instruction(query)
        } else {
            self.grounded_instruction(query, retrieved)
        };

        GenerationRequest {
            system_instruction: tone.system_instruction(),
            user_instruction,
            sampling: self.defaults.merged(overrides),
        }
    }

    fn grounded_instruction(&self, query: &str, retrieved: &[ScoredDocument]) -> String {
        let mut context = String::from("RELEVANT UNIVERSITY POLICIES:\n\n");
        for (idx, scored) in retrieved.iter().enumerate() {
            context.push_str(&format!(
                "{}. {}:\n{}\n\n",
                idx + 1,
                scored.document.title,
                scored.document.body
            ));
        }

        format!(
            "{context}STUDENT QUESTION: {query}\n\n\
             Please answer this question based on the university policies provided above. \
             If the answer isn't covered in these policies, please say so.",
        )
    }

    fn no_grounding_instruction(&self, query: &str) -> String {
        format!(
            "STUDENT QUESTION: {query}\n\n\
             I don't have specific policy information for this question. Please provide a \
             helpful response directing the student to contact {SUPPORT_CHANNEL}.",
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::PolicyDocument;

    fn scored(key: &str, title: &str, body: &str, score: u32) -> ScoredDocument {
        ScoredDocument {
            document: PolicyDocument {
                key: key.to_string(),
                title: title.to_string(),
                body: body.to_string(),
            },
            score,
        }
    }

    #[test]
    fn test_grounded_request_contains_docs_in_rank_order() {
        let builder = PromptBuilder::new();
        let retrieved = vec![
            scored("fees", "Tuition Fees and Payment", "Fees are due each semester.", 40),
            scored("semesters", "Academic Calendar", "Two semesters per year.", 20),
        ];
        let req = builder.build(
            "when are fees due",
            &retrieved,
            ToneProfile::Helpful,
            &SamplingOverrides::default(),
        );
        let fees_pos = req.user_instruction.find("Tuition Fees and Payment").unwrap();
        let cal_pos = req.user_instruction.find("Academic Calendar").unwrap();
        assert!(fees_pos < cal_pos);
        assert!(req.user_instruction.contains("when are fees due"));
        assert!(req.user_instruction.contains("please say so"));
    }

    #[test]
    fn test_no_grounding_variant() {
        let builder = PromptBuilder::new();
        let req = builder.build(
            "unrelated question",
            &[],
            ToneProfile::Helpful,
            &SamplingOverrides::default(),
        );
        assert!(req.user_instruction.contains("don't have specific policy information"));
        assert!(req.user_instruction.contains("Student Services"));
        assert!(!req.user_instruction.contains("RELEVANT UNIVERSITY POLICIES"));
    }

    #[test]
    fn test_tone_profiles_are_distinct() {
        let helpful = ToneProfile::Helpful.system_instruction();
        let formal = ToneProfile::Formal.system_instruction();
        let concise = ToneProfile::Concise.system_instruction();
        assert_ne!(helpful, formal);
        assert_ne!(formal, concise);
        for instruction in [&helpful, &formal, &concise] {
            assert!(instruction.contains("official AI assistant"));
        }
    }

    #[test]
    fn test_sampling_defaults() {
        let params = SamplingParams::default();
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_output_tokens, 1000);
        assert_eq!(params.top_p, 0.9);
    }

    #[test]
    fn test_overrides_merge_partially() {
        let overrides = SamplingOverrides {
            temperature: Some(0.7),
            ..Default::default()
        };
        let merged = SamplingParams::default().merged(&overrides);
        assert_eq!(merged.temperature, 0.7);
        assert_eq!(merged.max_output_tokens, 1000);
        assert_eq!(merged.top_p, 0.9);
    }

    #[test]
    fn test_tone_parse() {
        assert_eq!(ToneProfile::parse("FORMAL"), Some(ToneProfile::Formal));
        assert_eq!(ToneProfile::parse("casual"), None);
    }
}
