//! Publication of generated documents.
//!
//! An artifact is first written locally to `{outputs_dir}/{slug}.{ext}`, then
//! uploaded to `{environment}/outputs/{slug}.{ext}` in the object store. The
//! local file is kept even when the upload fails so it can be inspected or
//! re-uploaded.

mod artifact;
mod s3;

pub use artifact::{Artifact, write_artifact};
pub use s3::S3Store;

use crate::error::PromptResult;
use crate::settings::Environment;
use std::path::Path;
use tracing::info;

/// Remote storage that accepts whole-file, overwriting puts.
pub trait ObjectStore {
    /// Upload the file at `path` to `key`, replacing any existing object.
    fn put_file(&self, path: &Path, key: &str, content_type: &str) -> PromptResult<()>;

    /// Fully qualified, human-readable location of `key`.
    fn location(&self, key: &str) -> String;
}

/// Upload an artifact under its environment-scoped key.
///
/// Prints `Uploaded to <location>` on success and returns the location.
pub fn publish(
    store: &dyn ObjectStore,
    artifact: &Artifact,
    environment: Environment,
) -> PromptResult<String> {
    let key = artifact.remote_key(environment);
    store.put_file(&artifact.path, &key, artifact.content_type())?;

    let location = store.location(&key);
    info!(slug = %artifact.slug, %location, "Published artifact");
    println!("Uploaded to {}", location);
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use crate::prompt::OutputFormat;
    use crate::test_support::RecordingStore;
    use tempfile::TempDir;

    #[test]
    fn publish_uses_scoped_key_and_content_type() {
        let temp = TempDir::new().unwrap();
        let artifact =
            write_artifact(temp.path(), "welcome_jordan", OutputFormat::Html, "<p>hi</p>").unwrap();
        let store = RecordingStore::new("site");

        let location = publish(&store, &artifact, Environment::Prod).unwrap();

        assert_eq!(location, "memory://site/prod/outputs/welcome_jordan.html");
        let uploads = store.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].key, "prod/outputs/welcome_jordan.html");
        assert_eq!(uploads[0].content_type, "text/html");
        assert_eq!(uploads[0].body, b"<p>hi</p>");
    }

    #[test]
    fn upload_failure_keeps_local_file() {
        let temp = TempDir::new().unwrap();
        let artifact =
            write_artifact(temp.path(), "notes", OutputFormat::Markdown, "# Notes").unwrap();
        let store = RecordingStore::failing("site", "AccessDenied");

        let err = publish(&store, &artifact, Environment::Beta).unwrap_err();

        assert_eq!(err.stage(), Stage::Publish);
        assert!(err.to_string().contains("beta/outputs/notes.md"));
        assert!(artifact.path.exists());
    }
}
