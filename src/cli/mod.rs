//! CLI argument parsing for promptcast.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// promptcast: render prompt definitions, generate documents, publish them.
///
/// Every JSON file in the prompts directory names a template, its variables,
/// an output format, and a token ceiling. `run` generates each document with
/// Bedrock and uploads it to `{environment}/outputs/` in an S3 bucket.
#[derive(Parser, Debug)]
#[command(name = "promptcast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptcast.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate and publish every prompt.
    ///
    /// Loads, renders, generates, writes, and uploads each prompt in file
    /// name order. A failing prompt does not stop the others; the exit code
    /// is non-zero if any failed.
    Run(RunArgs),

    /// Load and render every prompt without calling any service.
    ///
    /// Catches bad JSON, missing templates, and missing variables before a
    /// change is merged.
    Check(CheckArgs),
}

/// Where to find settings, prompts, and templates.
#[derive(Args, Debug, Default)]
pub struct LayoutArgs {
    /// Settings file (default: promptcast.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory containing prompt definition files.
    #[arg(long, value_name = "DIR")]
    pub prompts_dir: Option<String>,

    /// Directory containing template files.
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<String>,
}

/// Arguments for the `run` command.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Directory generated artifacts are written to.
    #[arg(long, value_name = "DIR")]
    pub outputs_dir: Option<String>,

    /// Publication environment: beta or prod.
    #[arg(short, long, env = "ENVIRONMENT")]
    pub environment: Option<String>,

    /// AWS region for Bedrock and S3.
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Destination S3 bucket.
    #[arg(long, env = "S3_BUCKET")]
    pub bucket: Option<String>,

    /// Bedrock model identifier.
    #[arg(long)]
    pub model_id: Option<String>,

    /// Retries with exponential backoff after a throttling error.
    #[arg(long, value_name = "N")]
    pub throttle_retries: Option<u32>,

    /// Only process prompts with this slug (repeatable).
    #[arg(long = "only", value_name = "SLUG")]
    pub only: Vec<String>,

    /// Write artifacts locally but do not upload them.
    #[arg(long)]
    pub skip_upload: bool,
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Print each rendered prompt.
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
