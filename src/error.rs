//! Error types for promptcast.
//!
//! Two layers, both built with thiserror:
//!
//! - [`PromptError`] is raised while processing a single prompt definition.
//!   Each variant belongs to one pipeline [`Stage`]; the run driver records it
//!   and moves on to the next prompt.
//! - [`PipelineError`] ends the whole run and maps to a process exit code.

use crate::exit_codes;
use crate::template::TemplateError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The pipeline stage a prompt was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Render,
    Infer,
    Write,
    Publish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Load => write!(f, "load"),
            Stage::Render => write!(f, "render"),
            Stage::Infer => write!(f, "infer"),
            Stage::Write => write!(f, "write"),
            Stage::Publish => write!(f, "publish"),
        }
    }
}

/// Failure while taking one prompt definition through the pipeline.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The prompt file is not valid JSON, misses a field, or fails validation.
    #[error("invalid prompt config '{}': {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// The referenced template does not exist in the template directory.
    #[error("template '{name}' not found (looked for '{}')", .path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    /// The template could not be rendered with the given variables.
    #[error("failed to render template '{name}': {source}")]
    TemplateRender {
        name: String,
        #[source]
        source: TemplateError,
    },

    /// The inference call failed in transport or was rejected by the service.
    #[error("inference request failed: {0}")]
    InferenceRequest(String),

    /// The inference service answered with a body of the wrong shape.
    #[error("unexpected inference response: {0}")]
    InferenceResponse(String),

    /// The generated artifact could not be written to disk.
    #[error("failed to write artifact '{}': {source}", .path.display())]
    LocalWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact could not be uploaded to object storage.
    #[error("failed to upload '{key}': {reason}")]
    Upload { key: String, reason: String },
}

impl PromptError {
    /// The stage this error originates from.
    pub fn stage(&self) -> Stage {
        match self {
            PromptError::ConfigParse { .. } => Stage::Load,
            PromptError::TemplateNotFound { .. } | PromptError::TemplateRender { .. } => {
                Stage::Render
            }
            PromptError::InferenceRequest(_) | PromptError::InferenceResponse(_) => Stage::Infer,
            PromptError::LocalWrite { .. } => Stage::Write,
            PromptError::Upload { .. } => Stage::Publish,
        }
    }
}

/// Run-level error for promptcast.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// User provided invalid arguments or settings.
    #[error("{0}")]
    UserError(String),

    /// The runtime or a service client could not be set up.
    #[error("setup failed: {0}")]
    Setup(String),

    /// The run finished but some prompts failed.
    #[error("{failed} of {total} prompt(s) failed")]
    PromptsFailed { failed: usize, total: usize },
}

impl PipelineError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::UserError(_) => exit_codes::USER_ERROR,
            PipelineError::Setup(_) => exit_codes::USER_ERROR,
            PipelineError::PromptsFailed { .. } => exit_codes::PROMPT_FAILURE,
        }
    }
}

/// Result type alias for run-level operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type alias for per-prompt operations.
pub type PromptResult<T> = std::result::Result<T, PromptError>;
