//! Request and response bodies for the Messages protocol on Bedrock.

use crate::error::{PromptError, PromptResult};
use serde::{Deserialize, Serialize};

/// Role of the single message we send.
const USER_ROLE: &str = "user";

/// Body of an `InvokeModel` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessagesRequest<'a> {
    pub anthropic_version: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<Message<'a>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> MessagesRequest<'a> {
    /// A request carrying `prompt` as one user-role message.
    pub fn single_user_message(
        anthropic_version: &'a str,
        prompt: &'a str,
        max_tokens: u32,
    ) -> Self {
        Self {
            anthropic_version,
            max_tokens,
            messages: vec![Message {
                role: USER_ROLE,
                content: prompt,
            }],
        }
    }

    pub fn to_json_bytes(&self) -> PromptResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| {
            PromptError::InferenceRequest(format!("failed to encode request body: {}", e))
        })
    }
}

/// The parts of a Messages response we read.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Option<Vec<ContentBlock>>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Extract `content[0].text` from a response body.
pub fn extract_text(body: &[u8]) -> PromptResult<String> {
    let response: MessagesResponse = serde_json::from_slice(body).map_err(|e| {
        PromptError::InferenceResponse(format!("response body is not valid JSON: {}", e))
    })?;

    let content = response.content.ok_or_else(|| {
        PromptError::InferenceResponse("response has no 'content' array".to_string())
    })?;

    let first = content.into_iter().next().ok_or_else(|| {
        PromptError::InferenceResponse("response 'content' array is empty".to_string())
    })?;

    match first.text {
        Some(text) if !text.is_empty() => Ok(text),
        Some(_) => Err(PromptError::InferenceResponse(
            "first content block has empty text".to_string(),
        )),
        None => Err(PromptError::InferenceResponse(
            "first content block has no text".to_string(),
        )),
    }
}
