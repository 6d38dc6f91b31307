//! Local artifact files and their remote keys.

use crate::error::{PromptError, PromptResult};
use crate::fs::atomic_write;
use crate::prompt::OutputFormat;
use crate::settings::Environment;
use std::path::{Path, PathBuf};

/// Key segment between the environment prefix and the file name.
const OUTPUTS_SEGMENT: &str = "outputs";

/// A generated document written to the outputs directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub slug: String,
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(outputs_dir: &Path, slug: &str, format: OutputFormat) -> Self {
        let path = outputs_dir.join(format!("{}.{}", slug, format.extension()));
        Self {
            slug: slug.to_string(),
            format,
            path,
        }
    }

    /// `{slug}.{ext}`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.slug, self.format.extension())
    }

    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    /// `{environment}/outputs/{slug}.{ext}`
    pub fn remote_key(&self, environment: Environment) -> String {
        format!("{}/{}/{}", environment, OUTPUTS_SEGMENT, self.file_name())
    }
}

/// Write generated text to `{outputs_dir}/{slug}.{ext}`.
///
/// The outputs directory is created if missing and any previous artifact
/// with the same name is replaced.
pub fn write_artifact(
    outputs_dir: &Path,
    slug: &str,
    format: OutputFormat,
    body: &str,
) -> PromptResult<Artifact> {
    let artifact = Artifact::new(outputs_dir, slug, format);

    atomic_write(&artifact.path, body.as_bytes()).map_err(|source| PromptError::LocalWrite {
        path: artifact.path.clone(),
        source,
    })?;

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use tempfile::TempDir;

    #[test]
    fn html_artifact_uses_html_extension() {
        let artifact = Artifact::new(Path::new("outputs"), "welcome_jordan", OutputFormat::Html);
        assert_eq!(artifact.path, Path::new("outputs/welcome_jordan.html"));
        assert_eq!(artifact.content_type(), "text/html");
    }

    #[test]
    fn other_formats_use_markdown() {
        for raw in ["markdown", "md", "txt", "HTML"] {
            let artifact =
                Artifact::new(Path::new("outputs"), "notes", OutputFormat::parse(raw));
            assert_eq!(artifact.file_name(), "notes.md");
            assert_eq!(artifact.content_type(), "text/markdown");
        }
    }

    #[test]
    fn remote_key_is_environment_scoped() {
        let artifact = Artifact::new(Path::new("outputs"), "welcome_jordan", OutputFormat::Html);
        assert_eq!(
            artifact.remote_key(Environment::Beta),
            "beta/outputs/welcome_jordan.html"
        );
        assert_eq!(
            artifact.remote_key(Environment::Prod),
            "prod/outputs/welcome_jordan.html"
        );
    }

    #[test]
    fn remote_keys_never_collide_across_environments() {
        let slugs = ["a", "welcome_jordan", "release-notes", "v1.2"];
        let formats = [OutputFormat::Html, OutputFormat::Markdown];
        let mut seen = std::collections::HashSet::new();

        for slug in slugs {
            for format in formats {
                let artifact = Artifact::new(Path::new("outputs"), slug, format);
                for env in [Environment::Beta, Environment::Prod] {
                    let key = artifact.remote_key(env);
                    assert_eq!(key, format!("{}/outputs/{}.{}", env, slug, format.extension()));
                    assert!(key.contains("/outputs/"));
                    assert!(seen.insert(key), "duplicate key for {slug}");
                }
            }
        }
    }

    #[test]
    fn write_creates_outputs_dir() {
        let temp = TempDir::new().unwrap();
        let outputs = temp.path().join("outputs");

        let artifact = write_artifact(&outputs, "page", OutputFormat::Html, "<h1>Hi</h1>").unwrap();

        assert_eq!(artifact.path, outputs.join("page.html"));
        assert_eq!(std::fs::read_to_string(&artifact.path).unwrap(), "<h1>Hi</h1>");
    }

    #[test]
    fn write_overwrites_previous_run() {
        let temp = TempDir::new().unwrap();
        write_artifact(temp.path(), "page", OutputFormat::Markdown, "old").unwrap();
        let artifact = write_artifact(temp.path(), "page", OutputFormat::Markdown, "new").unwrap();
        assert_eq!(std::fs::read_to_string(artifact.path).unwrap(), "new");
    }

    #[test]
    fn write_failure_is_local_write_error() {
        let temp = TempDir::new().unwrap();
        // A file where the outputs directory should be
        let blocker = temp.path().join("outputs");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = write_artifact(&blocker, "page", OutputFormat::Markdown, "x").unwrap_err();
        assert_eq!(err.stage(), Stage::Write);
    }
}
