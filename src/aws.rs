//! Blocking bridge to the async AWS SDK.
//!
//! The pipeline is strictly sequential, so a single current-thread runtime
//! owned here drives every SDK call and the rest of the crate stays
//! synchronous.

use crate::error::{PipelineError, Result};
use aws_config::{BehaviorVersion, SdkConfig};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_sdk_s3::config::Region;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

/// Shared runtime handle used by every AWS-backed client.
#[derive(Clone)]
pub struct AwsRuntime {
    runtime: Arc<Runtime>,
}

impl AwsRuntime {
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| PipelineError::Setup(format!("failed to start async runtime: {}", e)))?;

        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    /// Run a future to completion on the shared runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Load SDK configuration for `region` from the standard provider chain.
    ///
    /// Every operation gets `timeout` as its overall deadline. SDK-level
    /// retries are disabled; callers decide what, if anything, is retried.
    pub fn load_config(&self, region: &str, timeout: Duration) -> SdkConfig {
        let timeouts = TimeoutConfig::builder().operation_timeout(timeout).build();

        self.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .timeout_config(timeouts)
                .retry_config(RetryConfig::disabled())
                .load(),
        )
    }
}
