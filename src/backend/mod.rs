//! Generation backend boundary
//!
//! The pipeline only sees the `GenerationBackend` trait; any compliant
//! text-generation service satisfies it. The bundled implementation targets
//! an OpenAI-style chat-completions API.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::prompt::GenerationRequest;

pub use mock::MockBackend;
pub use openai::OpenAiBackend;

/// Token accounting reported by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Successful backend reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendResponse {
    pub text: String,
    pub token_usage: TokenUsage,
}

/// Opaque text-generation dependency
///
/// Implementations own their transport and credentials; the pipeline treats
/// every failure the same way at the dispatch boundary.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate a completion for the assembled request
    async fn generate(&self, request: &GenerationRequest) -> Result<BackendResponse>;
}
