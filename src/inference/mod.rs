//! Text generation against a hosted chat-style completion endpoint.
//!
//! This module provides:
//!
//! - **InferenceClient**: the seam the pipeline calls, one prompt in, one text out
//! - **Payload**: Messages request/response bodies
//! - **Retry**: opt-in backoff for throttling errors
//! - **Bedrock**: the AWS Bedrock Runtime implementation

mod bedrock;
mod payload;
mod retry;

pub use bedrock::BedrockClient;

use crate::error::PromptResult;

/// Generates text for a rendered prompt.
///
/// Implementations make exactly one logical request per call and return the
/// first generated text segment. Transport, auth, and throttling failures are
/// `PromptError::InferenceRequest`; malformed bodies are
/// `PromptError::InferenceResponse`.
pub trait InferenceClient {
    fn generate(&self, prompt: &str, max_tokens: u32) -> PromptResult<String>;
}
