//! Settings loading, layering, and validation.

use super::model::PipelineSettings;
use super::types::{Environment, MAX_THROTTLE_RETRIES};
use crate::error::{PipelineError, Result};
use globset::Glob;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file picked up from the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "promptcast.yaml";

/// Values supplied on the command line or through environment variables.
///
/// `None` leaves the file/default value in place.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub prompts_dir: Option<String>,
    pub templates_dir: Option<String>,
    pub outputs_dir: Option<String>,
    pub model_id: Option<String>,
    pub throttle_retries: Option<u32>,
    pub region: Option<String>,
    pub bucket: Option<String>,
    pub environment: Option<String>,
}

impl PipelineSettings {
    /// Load settings from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(PipelineSettings)` - Successfully loaded and validated settings
    /// * `Err(PipelineError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the settings file for this run.
    ///
    /// An explicit path must exist. Without one, `promptcast.yaml` in the
    /// working directory is used when present, otherwise all defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document parses as null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: PipelineSettings = serde_yaml::from_str(yaml).map_err(|e| {
            PipelineError::UserError(format!("failed to parse settings YAML: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Layer CLI/env values over the file values, then re-validate.
    pub fn apply_overrides(mut self, overrides: SettingsOverrides) -> Result<Self> {
        if let Some(v) = overrides.prompts_dir {
            self.prompts_dir = v;
        }
        if let Some(v) = overrides.templates_dir {
            self.templates_dir = v;
        }
        if let Some(v) = overrides.outputs_dir {
            self.outputs_dir = v;
        }
        if let Some(v) = overrides.model_id {
            self.model_id = v;
        }
        if let Some(v) = overrides.throttle_retries {
            self.throttle_retries = v;
        }
        if let Some(v) = overrides.region {
            self.region = Some(v);
        }
        if let Some(v) = overrides.bucket {
            self.bucket = Some(v);
        }
        if let Some(v) = overrides.environment {
            self.environment = Environment::from_str(&v).ok_or_else(|| {
                PipelineError::UserError(format!(
                    "invalid environment '{}': expected 'beta' or 'prod'",
                    v
                ))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate settings values and return error on invalid values.
    ///
    /// Validation rules:
    /// - timeouts must be positive
    /// - `throttle_retries` must not exceed `MAX_THROTTLE_RETRIES`
    /// - `model_id` and `anthropic_version` must be non-empty
    /// - `prompt_pattern` must be a valid glob
    /// - `region` and `bucket`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.inference_timeout_secs == 0 {
            return Err(invalid("inference_timeout_secs must be greater than 0"));
        }

        if self.upload_timeout_secs == 0 {
            return Err(invalid("upload_timeout_secs must be greater than 0"));
        }

        if self.throttle_retries > MAX_THROTTLE_RETRIES {
            return Err(PipelineError::UserError(format!(
                "settings validation failed: throttle_retries must be at most {} (found {})",
                MAX_THROTTLE_RETRIES, self.throttle_retries
            )));
        }

        if self.model_id.trim().is_empty() {
            return Err(invalid("model_id must be non-empty"));
        }

        if self.anthropic_version.trim().is_empty() {
            return Err(invalid("anthropic_version must be non-empty"));
        }

        if let Err(e) = Glob::new(&self.prompt_pattern) {
            return Err(PipelineError::UserError(format!(
                "settings validation failed: prompt_pattern '{}' is not a valid glob: {}",
                self.prompt_pattern, e
            )));
        }

        if self.region.as_deref().is_some_and(|r| r.trim().is_empty()) {
            return Err(invalid("region must be non-empty when set"));
        }

        if self.bucket.as_deref().is_some_and(|b| b.trim().is_empty()) {
            return Err(invalid("bucket must be non-empty when set"));
        }

        Ok(())
    }

    /// The configured region, or a user error naming how to set it.
    pub fn require_region(&self) -> Result<&str> {
        self.region.as_deref().ok_or_else(|| {
            PipelineError::UserError(
                "no AWS region configured: pass --region or set AWS_REGION".to_string(),
            )
        })
    }

    /// The configured bucket, or a user error naming how to set it.
    pub fn require_bucket(&self) -> Result<&str> {
        self.bucket.as_deref().ok_or_else(|| {
            PipelineError::UserError(
                "no bucket configured: pass --bucket or set S3_BUCKET".to_string(),
            )
        })
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference_timeout_secs)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }
}

fn invalid(message: &str) -> PipelineError {
    PipelineError::UserError(format!("settings validation failed: {}", message))
}
