//! Settings types and defaults for promptcast.
//!
//! This module defines the environment tag and the default value functions
//! used by the PipelineSettings struct.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication environment; also the remote key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Preview publication from pull requests (default).
    #[default]
    Beta,
    /// Production publication from merges.
    Prod,
}

impl Environment {
    /// Parse an environment tag from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beta" => Some(Self::Beta),
            "prod" => Some(Self::Prod),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beta => "beta",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default Bedrock model used for generation.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

/// Messages protocol version tag sent with every request.
pub const DEFAULT_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Upper bound on `throttle_retries`.
pub const MAX_THROTTLE_RETRIES: u32 = 10;

// Default value functions for serde
pub(crate) fn default_prompts_dir() -> String {
    "prompts".to_string()
}
pub(crate) fn default_templates_dir() -> String {
    "prompt_templates".to_string()
}
pub(crate) fn default_outputs_dir() -> String {
    "outputs".to_string()
}
pub(crate) fn default_prompt_pattern() -> String {
    "*.json".to_string()
}
pub(crate) fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}
pub(crate) fn default_anthropic_version() -> String {
    DEFAULT_ANTHROPIC_VERSION.to_string()
}
pub(crate) fn default_inference_timeout_secs() -> u64 {
    120
}
pub(crate) fn default_upload_timeout_secs() -> u64 {
    60
}
