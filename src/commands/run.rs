//! Implementation of the `promptcast run` command.

use super::resolve_settings;
use crate::aws::AwsRuntime;
use crate::cli::RunArgs;
use crate::error::Result;
use crate::inference::BedrockClient;
use crate::pipeline::Pipeline;
use crate::prompt::{discover_prompt_files, prompt_matcher};
use crate::publish::{ObjectStore, S3Store};
use crate::settings::SettingsOverrides;
use std::path::Path;
use tracing::{info, warn};

/// Execute the `promptcast run` command.
///
/// Settings problems, a missing region or bucket, and an unreadable prompts
/// directory end the run before any prompt is touched. After that, each
/// prompt succeeds or fails on its own.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let overrides = SettingsOverrides {
        outputs_dir: args.outputs_dir,
        model_id: args.model_id,
        throttle_retries: args.throttle_retries,
        region: args.region,
        bucket: args.bucket,
        environment: args.environment,
        ..Default::default()
    };
    let settings = resolve_settings(&args.layout, overrides)?;

    info!(
        environment = %settings.environment,
        prompts_dir = %settings.prompts_dir,
        model_id = %settings.model_id,
        skip_upload = args.skip_upload,
        "Starting run"
    );

    let matcher = prompt_matcher(&settings.prompt_pattern)?;
    let files = discover_prompt_files(Path::new(&settings.prompts_dir), &matcher)?;
    if files.is_empty() {
        warn!(prompts_dir = %settings.prompts_dir, "No prompt files found");
        println!("No prompt files found in '{}'", settings.prompts_dir);
        return Ok(());
    }

    let runtime = AwsRuntime::new()?;
    let inference = BedrockClient::from_settings(runtime.clone(), &settings)?;
    let store = if args.skip_upload {
        None
    } else {
        Some(S3Store::from_settings(runtime, &settings)?)
    };

    let pipeline = Pipeline::new(
        &settings,
        &inference,
        store.as_ref().map(|s| s as &dyn ObjectStore),
    )
    .with_only(args.only);

    let report = pipeline.run(&files);
    report.print_summary();
    report.into_result()
}
