//! Scripted backend for tests and offline runs
//!
//! Counts invocations so tests can assert the backend was or was not
//! dispatched, and can be scripted to fail.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::backend::{BackendResponse, GenerationBackend, TokenUsage};
use crate::errors::{PolicyError, Result};
use crate::prompt::GenerationRequest;

/// Backend that replies with a canned answer or a scripted error
#[derive(Debug, Clone)]
pub struct MockBackend {
    reply: String,
    fail_with: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Backend that always succeeds with `reply`
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail_with: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Backend that always fails with the given error detail
    pub fn failing(detail: &str) -> Self {
        Self {
            reply: String::new(),
            fail_with: Some(detail.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `generate` has been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, _request: &GenerationRequest) -> Result<BackendResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(detail) = &self.fail_with {
            return Err(PolicyError::BackendError(detail.clone()));
        }

        Ok(BackendResponse {
            text: self.reply.clone(),
            token_usage: TokenUsage {
                prompt_tokens: 120,
                completion_tokens: 40,
                total_tokens: 160,
            },
        })
    }
}
