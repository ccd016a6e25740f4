//! PolicyPilot - Grounded university policy Q&A
//!
//! Deterministic retrieval over a built-in policy corpus, a moderation gate
//! over an administered banned-term set, and a generation pipeline that
//! always resolves a query to a terminal outcome.
//!
//! # Architecture
//!
//! - **corpus**: immutable built-in policy documents
//! - **moderation**: banned-term gate over a pluggable term store
//! - **scoring / retrieval**: rule-based relevance and top-K selection
//! - **prompt / backend**: typed generation requests and the LLM boundary
//! - **pipeline**: the per-request state machine and orchestration

pub mod errors;

pub mod corpus;
pub mod moderation;
pub mod scoring;
pub mod retrieval;
pub mod prompt;
pub mod backend;
pub mod pipeline;

pub mod telemetry;
pub mod config;
pub mod cli;

// Re-export commonly used types
pub use errors::{PolicyError, Result};
pub use pipeline::{ChatPipeline, GenerationOutcome};
