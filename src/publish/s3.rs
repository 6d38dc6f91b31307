//! S3 implementation of [`ObjectStore`].

use super::ObjectStore;
use crate::aws::AwsRuntime;
use crate::error::{PromptError, PromptResult, Result};
use crate::settings::PipelineSettings;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tracing::debug;

/// Uploads artifacts to one bucket with `PutObject`.
pub struct S3Store {
    runtime: AwsRuntime,
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Build a store from run settings.
    ///
    /// # Returns
    ///
    /// * `Ok(S3Store)` - Ready to upload
    /// * `Err(PipelineError::UserError)` - No region or bucket configured
    pub fn from_settings(runtime: AwsRuntime, settings: &PipelineSettings) -> Result<Self> {
        let region = settings.require_region()?;
        let bucket = settings.require_bucket()?.to_string();
        let sdk_config = runtime.load_config(region, settings.upload_timeout());

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
            bucket,
        })
    }
}

impl ObjectStore for S3Store {
    fn put_file(&self, path: &Path, key: &str, content_type: &str) -> PromptResult<()> {
        let upload_error = |reason: String| PromptError::Upload {
            key: key.to_string(),
            reason,
        };

        debug!(bucket = %self.bucket, key, content_type, "Uploading artifact");

        self.runtime.block_on(async {
            let body = ByteStream::from_path(path).await.map_err(|e| {
                upload_error(format!("failed to read '{}': {}", path.display(), e))
            })?;

            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(key)
                .content_type(content_type)
                .body(body)
                .send()
                .await
                .map_err(|e| upload_error(DisplayErrorContext(&e).to_string()))?;

            Ok::<(), PromptError>(())
        })
    }

    fn location(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket, key)
    }
}
