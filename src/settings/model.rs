//! PipelineSettings struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for one pipeline run.
///
/// Built once at startup from `promptcast.yaml` (if present), then CLI flags
/// and environment variables layered on top. Components receive it by
/// reference and never read process state themselves.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    // =========================================================================
    // Layout
    // =========================================================================
    /// Directory holding prompt definition files.
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: String,

    /// Directory holding template files.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Directory generated artifacts are written to.
    #[serde(default = "default_outputs_dir")]
    pub outputs_dir: String,

    /// Glob matched against file names in `prompts_dir`.
    #[serde(default = "default_prompt_pattern")]
    pub prompt_pattern: String,

    // =========================================================================
    // Inference
    // =========================================================================
    /// Bedrock model identifier.
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Protocol version tag included in every request body.
    #[serde(default = "default_anthropic_version")]
    pub anthropic_version: String,

    /// Per-call timeout for inference, in seconds.
    #[serde(default = "default_inference_timeout_secs")]
    pub inference_timeout_secs: u64,

    /// Extra attempts allowed after a throttling error (0 = fail fast).
    #[serde(default)]
    pub throttle_retries: u32,

    // =========================================================================
    // Publication
    // =========================================================================
    /// AWS region for both Bedrock and S3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Destination bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    /// Remote key prefix.
    #[serde(default)]
    pub environment: Environment,

    /// Per-call timeout for uploads, in seconds.
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            prompts_dir: default_prompts_dir(),
            templates_dir: default_templates_dir(),
            outputs_dir: default_outputs_dir(),
            prompt_pattern: default_prompt_pattern(),
            model_id: default_model_id(),
            anthropic_version: default_anthropic_version(),
            inference_timeout_secs: default_inference_timeout_secs(),
            throttle_retries: 0,
            region: None,
            bucket: None,
            environment: Environment::default(),
            upload_timeout_secs: default_upload_timeout_secs(),
        }
    }
}
