use crate::error::{PromptError, PromptResult};
use crate::inference::InferenceClient;
use crate::publish::ObjectStore;
use crate::settings::PipelineSettings;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Inference stand-in that answers `generated: {prompt}`.
pub(crate) struct FakeInference {
    fail_when_prompt_contains: Option<String>,
    calls: RefCell<Vec<(String, u32)>>,
}

impl FakeInference {
    pub(crate) fn echo() -> Self {
        Self {
            fail_when_prompt_contains: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Fails with a transport error for prompts containing `needle`.
    pub(crate) fn failing_on(needle: &str) -> Self {
        Self {
            fail_when_prompt_contains: Some(needle.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Prompts and token ceilings received, in call order.
    pub(crate) fn calls(&self) -> Vec<(String, u32)> {
        self.calls.borrow().clone()
    }
}

impl InferenceClient for FakeInference {
    fn generate(&self, prompt: &str, max_tokens: u32) -> PromptResult<String> {
        self.calls
            .borrow_mut()
            .push((prompt.to_string(), max_tokens));

        if let Some(needle) = &self.fail_when_prompt_contains
            && prompt.contains(needle.as_str())
        {
            return Err(PromptError::InferenceRequest(
                "dispatch failure: connection refused".to_string(),
            ));
        }

        Ok(format!("generated: {}", prompt))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Upload {
    pub key: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Object store stand-in that keeps uploads in memory.
pub(crate) struct RecordingStore {
    bucket: String,
    fail_with: Option<String>,
    uploads: RefCell<Vec<Upload>>,
}

impl RecordingStore {
    pub(crate) fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            fail_with: None,
            uploads: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(bucket: &str, reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::new(bucket)
        }
    }

    pub(crate) fn uploads(&self) -> Vec<Upload> {
        self.uploads.borrow().clone()
    }
}

impl ObjectStore for RecordingStore {
    fn put_file(&self, path: &Path, key: &str, content_type: &str) -> PromptResult<()> {
        if let Some(reason) = &self.fail_with {
            return Err(PromptError::Upload {
                key: key.to_string(),
                reason: reason.clone(),
            });
        }

        let body = std::fs::read(path).map_err(|e| PromptError::Upload {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        self.uploads.borrow_mut().push(Upload {
            key: key.to_string(),
            content_type: content_type.to_string(),
            body,
        });
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        format!("memory://{}/{}", self.bucket, key)
    }
}

/// A temporary project layout: `prompts/`, `prompt_templates/`, `outputs/`.
pub(crate) struct Workspace {
    temp: TempDir,
}

impl Workspace {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("prompts")).unwrap();
        std::fs::create_dir(temp.path().join("prompt_templates")).unwrap();
        Self { temp }
    }

    pub(crate) fn root(&self) -> &Path {
        self.temp.path()
    }

    pub(crate) fn prompts_dir(&self) -> PathBuf {
        self.root().join("prompts")
    }

    pub(crate) fn outputs_dir(&self) -> PathBuf {
        self.root().join("outputs")
    }

    pub(crate) fn write_prompt(&self, file_name: &str, json: &str) -> PathBuf {
        let path = self.prompts_dir().join(file_name);
        std::fs::write(&path, json).unwrap();
        path
    }

    pub(crate) fn write_template(&self, file_name: &str, body: &str) {
        std::fs::write(self.root().join("prompt_templates").join(file_name), body).unwrap();
    }

    /// Settings pointing every directory into this workspace.
    pub(crate) fn settings(&self) -> PipelineSettings {
        PipelineSettings {
            prompts_dir: self.prompts_dir().to_string_lossy().to_string(),
            templates_dir: self
                .root()
                .join("prompt_templates")
                .to_string_lossy()
                .to_string(),
            outputs_dir: self.outputs_dir().to_string_lossy().to_string(),
            region: Some("us-east-1".to_string()),
            bucket: Some("site".to_string()),
            ..PipelineSettings::default()
        }
    }
}

/// JSON for a prompt definition.
pub(crate) fn prompt_json(
    slug: &str,
    template: &str,
    output_format: &str,
    variables: &[(&str, &str)],
) -> String {
    let variables: serde_json::Map<String, serde_json::Value> = variables
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();

    serde_json::json!({
        "slug": slug,
        "template": template,
        "output_format": output_format,
        "max_tokens": 500,
        "variables": variables,
    })
    .to_string()
}
