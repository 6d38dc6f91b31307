//! Command implementations for promptcast.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod run;

use crate::cli::{Command, LayoutArgs};
use crate::error::Result;
use crate::settings::{PipelineSettings, SettingsOverrides};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Check(args) => check::cmd_check(args),
    }
}

/// Load the settings file named by `layout` and apply `overrides` on top.
fn resolve_settings(
    layout: &LayoutArgs,
    mut overrides: SettingsOverrides,
) -> Result<PipelineSettings> {
    overrides.prompts_dir = layout.prompts_dir.clone();
    overrides.templates_dir = layout.templates_dir.clone();

    PipelineSettings::discover(layout.config.as_deref())?.apply_overrides(overrides)
}
