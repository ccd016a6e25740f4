//! Generation orchestration
//!
//! Drives one query through moderation, retrieval, prompt assembly, and
//! backend dispatch, tracking progress on the request state machine. The
//! pipeline itself never fails on a backend error; that path degrades to a
//! fallback answer. Only input validation and a term-store outage surface
//! as errors to the caller.

pub mod state;

use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::backend::{GenerationBackend, TokenUsage};
use crate::errors::{PolicyError, Result};
use crate::moderation::ContentModerator;
use crate::prompt::{PromptBuilder, SamplingOverrides, SamplingParams, ToneProfile, SUPPORT_CHANNEL};
use crate::retrieval::Retriever;
use crate::telemetry::{TelemetryCollector, TelemetryEvent};

pub use state::{RequestEvent, RequestState};

/// Terminal outcome of one pipeline run
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    /// Backend produced an answer
    Success {
        text: String,
        /// Titles of the grounding documents, rank order
        source_titles: Vec<String>,
        token_usage: TokenUsage,
        sampling: SamplingParams,
    },
    /// Moderation blocked the query; the backend was never contacted
    Violation {
        matched_terms: Vec<String>,
        message: String,
    },
    /// Backend dispatch failed; a static fallback answer stands in
    Failure {
        error_detail: String,
        fallback_text: String,
    },
}

impl GenerationOutcome {
    /// The user-facing answer text for this outcome
    pub fn answer_text(&self) -> &str {
        match self {
            GenerationOutcome::Success { text, .. } => text,
            GenerationOutcome::Violation { message, .. } => message,
            GenerationOutcome::Failure { fallback_text, .. } => fallback_text,
        }
    }

    /// Terminal state this outcome corresponds to
    pub fn final_state(&self) -> RequestState {
        match self {
            GenerationOutcome::Success { .. } => RequestState::Succeeded,
            GenerationOutcome::Violation { .. } => RequestState::Rejected,
            GenerationOutcome::Failure { .. } => RequestState::Failed,
        }
    }
}

/// End-to-end pipeline for grounded policy answers
pub struct ChatPipeline {
    moderator: ContentModerator,
    retriever: Retriever,
    prompt_builder: PromptBuilder,
    backend: Arc<dyn GenerationBackend>,
    telemetry: TelemetryCollector,
    tone: ToneProfile,
}

impl ChatPipeline {
    pub fn new(
        moderator: ContentModerator,
        retriever: Retriever,
        prompt_builder: PromptBuilder,
        backend: Arc<dyn GenerationBackend>,
    ) -> Self {
        Self {
            moderator,
            retriever,
            prompt_builder,
            backend,
            telemetry: TelemetryCollector::new(),
            tone: ToneProfile::default(),
        }
    }

    /// Set the default tone profile for built prompts
    pub fn with_tone(mut self, tone: ToneProfile) -> Self {
        self.tone = tone;
        self
    }

    /// Telemetry collected across requests on this pipeline
    pub fn telemetry(&self) -> &TelemetryCollector {
        &self.telemetry
    }

    /// Run one query to a terminal outcome
    ///
    /// Errors only on invalid input (empty query) or a term-store outage;
    /// every backend problem resolves to `GenerationOutcome::Failure`.
    pub async fn generate_grounded_response(
        &self,
        query: &str,
        overrides: &SamplingOverrides,
    ) -> Result<GenerationOutcome> {
        if query.trim().is_empty() {
            return Err(PolicyError::InputError(
                "query must not be empty".to_string(),
            ));
        }

        let request_id = Uuid::new_v4();
        self.telemetry.request_started();
        let mut state = RequestState::Received;

        // Moderation gate; a term-store failure propagates (fail-closed)
        let check = match self.moderator.check_content(query).await {
            Ok(check) => check,
            Err(e) => {
                self.telemetry.record(TelemetryEvent::TermStoreDegraded {
                    request_id,
                    detail: e.to_string(),
                    timestamp: Instant::now(),
                });
                return Err(e);
            }
        };

        if check.violated {
            state = self.advance(request_id, state, RequestEvent::ModerationBlocked)?;
            self.telemetry.record(TelemetryEvent::ModerationBlocked {
                request_id,
                term_count: check.matched_terms.len(),
                timestamp: Instant::now(),
            });
            debug_assert!(state.is_terminal());
            return Ok(GenerationOutcome::Violation {
                matched_terms: check.matched_terms,
                message: check.message,
            });
        }
        state = self.advance(request_id, state, RequestEvent::ModerationPassed)?;

        let retrieved = self.retriever.retrieve(query);
        state = self.advance(request_id, state, RequestEvent::RetrievalComplete)?;
        self.telemetry.record(TelemetryEvent::DocumentsRetrieved {
            request_id,
            count: retrieved.len(),
            timestamp: Instant::now(),
        });

        let tone = overrides.tone.unwrap_or(self.tone);
        let request = self.prompt_builder.build(query, &retrieved, tone, overrides);
        state = self.advance(request_id, state, RequestEvent::PromptReady)?;

        state = self.advance(request_id, state, RequestEvent::DispatchIssued)?;
        self.telemetry.record(TelemetryEvent::BackendDispatched {
            request_id,
            timestamp: Instant::now(),
        });

        match self.backend.generate(&request).await {
            Ok(response) => {
                let state = self.advance(request_id, state, RequestEvent::BackendSucceeded)?;
                debug_assert_eq!(state, RequestState::Succeeded);
                Ok(GenerationOutcome::Success {
                    text: response.text,
                    source_titles: retrieved
                        .iter()
                        .map(|r| r.document.title.clone())
                        .collect(),
                    token_usage: response.token_usage,
                    sampling: request.sampling,
                })
            }
            Err(e) => {
                let detail = e.to_string();
                let state = self.advance(request_id, state, RequestEvent::BackendFailed)?;
                debug_assert_eq!(state, RequestState::Failed);
                self.telemetry.record(TelemetryEvent::BackendFailed {
                    request_id,
                    detail: detail.clone(),
                    timestamp: Instant::now(),
                });
                Ok(GenerationOutcome::Failure {
                    error_detail: detail,
                    fallback_text: fallback_answer(query),
                })
            }
        }
    }

    fn advance(
        &self,
        request_id: Uuid,
        state: RequestState,
        event: RequestEvent,
    ) -> Result<RequestState> {
        let next = state.transition(event)?;
        self.telemetry.record(TelemetryEvent::StateTransition {
            request_id,
            from: format!("{state:?}"),
            to: format!("{next:?}"),
            timestamp: Instant::now(),
        });
        Ok(next)
    }
}

/// Static answer used when the backend is unavailable
fn fallback_answer(query: &str) -> String {
    format!(
        "I apologize, but I'm currently unable to process your question: \"{query}\"\n\n\
         Our AI service is temporarily unavailable. For immediate assistance with university \
         policies, please contact {SUPPORT_CHANNEL}.\n\n\
         Office hours: Monday to Friday, 9:00 AM - 5:00 PM."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::corpus::CorpusStore;
    use crate::moderation::InMemoryTermStore;

    fn pipeline_with(backend: MockBackend, banned: &[&str]) -> (ChatPipeline, MockBackend) {
        let store = InMemoryTermStore::new();
        for term in banned {
            store.add_term(term, "admin").unwrap();
        }
        let pipeline = ChatPipeline::new(
            ContentModerator::new(Arc::new(store)),
            Retriever::new(CorpusStore::builtin()),
            PromptBuilder::new(),
            Arc::new(backend.clone()),
        );
        (pipeline, backend)
    }

    #[tokio::test]
    async fn test_empty_query_rejected_before_moderation() {
        let (pipeline, backend) = pipeline_with(MockBackend::replying("ok"), &[]);
        let result = pipeline
            .generate_grounded_response("   ", &SamplingOverrides::default())
            .await;
        assert!(matches!(result, Err(PolicyError::InputError(_))));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_violation_never_reaches_backend() {
        let (pipeline, backend) = pipeline_with(MockBackend::replying("ok"), &["slur"]);
        let outcome = pipeline
            .generate_grounded_response("a slur here", &SamplingOverrides::default())
            .await
            .unwrap();
        match outcome {
            GenerationOutcome::Violation { matched_terms, message } => {
                assert_eq!(matched_terms, vec!["slur"]);
                assert!(message.contains("prohibited content"));
            }
            other => panic!("expected violation, got {other:?}"),
        }
        assert_eq!(backend.call_count(), 0);
        assert_eq!(pipeline.telemetry().stats().moderation_blocks, 1);
    }

    #[tokio::test]
    async fn test_success_carries_source_titles_in_rank_order() {
        let (pipeline, backend) = pipeline_with(MockBackend::replying("Fees are due..."), &[]);
        let outcome = pipeline
            .generate_grounded_response(
                "how much are the tuition fees?",
                &SamplingOverrides::default(),
            )
            .await
            .unwrap();
        match outcome {
            GenerationOutcome::Success { text, source_titles, sampling, .. } => {
                assert_eq!(text, "Fees are due...");
                assert!(!source_titles.is_empty());
                assert!(source_titles[0].to_lowercase().contains("fee"));
                assert_eq!(sampling.temperature, 0.2);
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_yields_fallback_not_error() {
        let (pipeline, backend) = pipeline_with(MockBackend::failing("quota exceeded"), &[]);
        let outcome = pipeline
            .generate_grounded_response("when are exams held", &SamplingOverrides::default())
            .await
            .unwrap();
        match outcome {
            GenerationOutcome::Failure { error_detail, fallback_text } => {
                assert!(error_detail.contains("quota exceeded"));
                assert!(fallback_text.contains("when are exams held"));
                assert!(fallback_text.contains("Student Services"));
            }
            other => panic!("expected failure outcome, got {other:?}"),
        }
        assert_eq!(backend.call_count(), 1);
        assert_eq!(pipeline.telemetry().stats().backend_failures, 1);
    }

    #[tokio::test]
    async fn test_nonsense_query_still_dispatches_without_grounding() {
        let (pipeline, backend) = pipeline_with(MockBackend::replying("no policy found"), &[]);
        let outcome = pipeline
            .generate_grounded_response("xyzzy plugh", &SamplingOverrides::default())
            .await
            .unwrap();
        match outcome {
            GenerationOutcome::Success { source_titles, .. } => {
                assert!(source_titles.is_empty());
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(backend.call_count(), 1);
        assert_eq!(pipeline.telemetry().stats().zero_grounding_requests, 1);
    }

    #[tokio::test]
    async fn test_tone_override_applies() {
        let (pipeline, _) = pipeline_with(MockBackend::replying("ok"), &[]);
        let overrides = SamplingOverrides {
            tone: Some(ToneProfile::Concise),
            temperature: Some(0.5),
            ..Default::default()
        };
        let outcome = pipeline
            .generate_grounded_response("how many semesters are there?", &overrides)
            .await
            .unwrap();
        match outcome {
            GenerationOutcome::Success { sampling, .. } => {
                assert_eq!(sampling.temperature, 0.5);
                assert_eq!(sampling.max_output_tokens, 1000);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
