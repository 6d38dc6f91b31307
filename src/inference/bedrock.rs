//! Bedrock Runtime implementation of [`InferenceClient`].

use super::InferenceClient;
use super::payload::{MessagesRequest, extract_text};
use super::retry::{RetryPolicy, retry_throttled};
use crate::aws::AwsRuntime;
use crate::error::{PromptError, PromptResult, Result};
use crate::settings::PipelineSettings;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::config::http::HttpResponse;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Calls `InvokeModel` on a Messages-protocol model.
pub struct BedrockClient {
    runtime: AwsRuntime,
    client: Client,
    model_id: String,
    anthropic_version: String,
    retry: RetryPolicy,
}

impl BedrockClient {
    /// Build a client from run settings.
    ///
    /// # Returns
    ///
    /// * `Ok(BedrockClient)` - Ready to generate
    /// * `Err(PipelineError::UserError)` - No region configured
    pub fn from_settings(runtime: AwsRuntime, settings: &PipelineSettings) -> Result<Self> {
        let region = settings.require_region()?;
        let sdk_config = runtime.load_config(region, settings.inference_timeout());

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
            model_id: settings.model_id.clone(),
            anthropic_version: settings.anthropic_version.clone(),
            retry: RetryPolicy::throttling(settings.throttle_retries),
        })
    }

    async fn invoke(
        &self,
        body: Vec<u8>,
    ) -> std::result::Result<Vec<u8>, SdkError<InvokeModelError, HttpResponse>> {
        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await?;

        Ok(output.body.into_inner())
    }
}

/// Only `ThrottlingException` is worth another attempt.
fn is_throttling<R>(err: &SdkError<InvokeModelError, R>) -> bool {
    err.as_service_error()
        .is_some_and(|e| e.is_throttling_exception())
}

fn request_error<R: std::fmt::Debug>(err: &SdkError<InvokeModelError, R>) -> PromptError {
    PromptError::InferenceRequest(DisplayErrorContext(err).to_string())
}

impl InferenceClient for BedrockClient {
    fn generate(&self, prompt: &str, max_tokens: u32) -> PromptResult<String> {
        let request =
            MessagesRequest::single_user_message(&self.anthropic_version, prompt, max_tokens);
        let body = request.to_json_bytes()?;

        debug!(
            model_id = %self.model_id,
            prompt_bytes = prompt.len(),
            max_tokens,
            "Invoking model"
        );

        let response = self
            .runtime
            .block_on(retry_throttled(
                self.retry,
                is_throttling::<HttpResponse>,
                || self.invoke(body.clone()),
            ))
            .map_err(|e| request_error(&e))?;

        debug!(response_bytes = response.len(), "Model responded");
        extract_text(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use aws_sdk_bedrockruntime::types::error::{AccessDeniedException, ThrottlingException};

    fn throttled() -> SdkError<InvokeModelError, ()> {
        let inner = ThrottlingException::builder().message("slow down").build();
        SdkError::service_error(InvokeModelError::ThrottlingException(inner), ())
    }

    fn denied() -> SdkError<InvokeModelError, ()> {
        let inner = AccessDeniedException::builder()
            .message("model access not granted")
            .build();
        SdkError::service_error(InvokeModelError::AccessDeniedException(inner), ())
    }

    #[test]
    fn only_throttling_is_retryable() {
        assert!(is_throttling(&throttled()));
        assert!(!is_throttling(&denied()));
    }

    #[test]
    fn service_errors_fail_the_infer_stage() {
        for (err, detail) in [(throttled(), "slow down"), (denied(), "model access not granted")] {
            let mapped = request_error(&err);
            assert_eq!(mapped.stage(), Stage::Infer);
            assert!(matches!(mapped, PromptError::InferenceRequest(_)));
            assert!(mapped.to_string().contains(detail), "{mapped}");
        }
    }
}
