//! End-to-end pipeline tests with a scripted backend

use std::sync::Arc;

use policypilot::backend::MockBackend;
use policypilot::corpus::CorpusStore;
use policypilot::moderation::{ContentModerator, InMemoryTermStore};
use policypilot::pipeline::{ChatPipeline, GenerationOutcome, RequestState};
use policypilot::prompt::{PromptBuilder, SamplingOverrides};
use policypilot::PolicyError;

fn pipeline_with(backend: MockBackend, banned: &[&str]) -> ChatPipeline {
    let store = InMemoryTermStore::new();
    for term in banned {
        store.add_term(term, "admin").unwrap();
    }
    ChatPipeline::new(
        ContentModerator::new(Arc::new(store)),
        policypilot::retrieval::Retriever::new(CorpusStore::builtin()),
        PromptBuilder::new(),
        Arc::new(backend),
    )
}

#[tokio::test]
async fn happy_path_returns_answer_with_sources() {
    let backend = MockBackend::replying("Tuition fees are due at the start of each semester.");
    let pipeline = pipeline_with(backend.clone(), &["slur"]);

    let outcome = pipeline
        .generate_grounded_response(
            "When are tuition fees due?",
            &SamplingOverrides::default(),
        )
        .await
        .expect("pipeline should not error");

    match outcome {
        GenerationOutcome::Success {
            text,
            source_titles,
            token_usage,
            ..
        } => {
            assert!(text.contains("Tuition fees"));
            assert!(!source_titles.is_empty());
            assert!(source_titles.len() <= 3);
            assert!(token_usage.total_tokens > 0);
        }
        other => panic!("expected success, got {other:?}"),
    }
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn violation_is_terminal_and_backend_untouched() {
    let backend = MockBackend::replying("should never be seen");
    let pipeline = pipeline_with(backend.clone(), &["slur"]);

    let outcome = pipeline
        .generate_grounded_response("tell me a slur", &SamplingOverrides::default())
        .await
        .unwrap();

    assert_eq!(outcome.final_state(), RequestState::Rejected);
    match outcome {
        GenerationOutcome::Violation {
            matched_terms,
            message,
        } => {
            assert_eq!(matched_terms, vec!["slur"]);
            assert!(message.contains("prohibited content"));
            assert!(message.contains("slur"));
        }
        other => panic!("expected violation, got {other:?}"),
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn backend_failure_degrades_to_fallback() {
    let backend = MockBackend::failing("HTTP 503: upstream unavailable");
    let pipeline = pipeline_with(backend.clone(), &[]);

    let outcome = pipeline
        .generate_grounded_response(
            "How many absences are allowed in a module?",
            &SamplingOverrides::default(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.final_state(), RequestState::Failed);
    match outcome {
        GenerationOutcome::Failure {
            error_detail,
            fallback_text,
        } => {
            assert!(error_detail.contains("upstream unavailable"));
            assert!(fallback_text.contains("How many absences are allowed in a module?"));
            assert!(fallback_text.contains("Student Services"));
            assert!(fallback_text.contains("Office hours"));
        }
        other => panic!("expected failure outcome, got {other:?}"),
    }
    assert_eq!(backend.call_count(), 1);
    assert_eq!(pipeline.telemetry().stats().backend_failures, 1);
}

#[tokio::test]
async fn empty_query_is_an_input_error() {
    let backend = MockBackend::replying("ok");
    let pipeline = pipeline_with(backend.clone(), &[]);

    let result = pipeline
        .generate_grounded_response("", &SamplingOverrides::default())
        .await;

    assert!(matches!(result, Err(PolicyError::InputError(_))));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn nonsense_query_dispatches_ungrounded() {
    let backend = MockBackend::replying("I don't have policy information on that.");
    let pipeline = pipeline_with(backend.clone(), &[]);

    let outcome = pipeline
        .generate_grounded_response("xyzzy frobnicate", &SamplingOverrides::default())
        .await
        .unwrap();

    match outcome {
        GenerationOutcome::Success { source_titles, .. } => {
            assert!(source_titles.is_empty());
        }
        other => panic!("expected success, got {other:?}"),
    }
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn term_store_outage_fails_closed() {
    use async_trait::async_trait;
    use policypilot::moderation::TermStore;
    use policypilot::Result;

    struct FailingStore;

    #[async_trait]
    impl TermStore for FailingStore {
        async fn active_terms(&self) -> Result<Vec<String>> {
            Err(PolicyError::TermStoreError("connection refused".to_string()))
        }
    }

    let backend = MockBackend::replying("ok");
    let pipeline = ChatPipeline::new(
        ContentModerator::new(Arc::new(FailingStore)),
        policypilot::retrieval::Retriever::new(CorpusStore::builtin()),
        PromptBuilder::new(),
        Arc::new(backend.clone()),
    );

    let result = pipeline
        .generate_grounded_response("anything at all", &SamplingOverrides::default())
        .await;

    assert!(matches!(result, Err(PolicyError::TermStoreError(_))));
    assert_eq!(backend.call_count(), 0);
    assert_eq!(pipeline.telemetry().stats().term_store_degradations, 1);
}

#[tokio::test]
async fn concurrent_requests_share_one_pipeline() {
    let backend = MockBackend::replying("answer");
    let pipeline = Arc::new(pipeline_with(backend.clone(), &[]));

    let mut handles = Vec::new();
    for query in [
        "When are tuition fees due?",
        "Can I bring my calculator to an exam?",
        "How many semesters are there?",
    ] {
        let pipeline = Arc::clone(&pipeline);
        handles.push(tokio::spawn(async move {
            pipeline
                .generate_grounded_response(query, &SamplingOverrides::default())
                .await
        }));
    }

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        assert!(matches!(outcome, GenerationOutcome::Success { .. }));
    }
    assert_eq!(backend.call_count(), 3);
    assert_eq!(pipeline.telemetry().stats().requests_started, 3);
}
