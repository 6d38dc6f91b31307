//! Run settings for promptcast.
//!
//! This module defines the PipelineSettings struct that represents
//! `promptcast.yaml`. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), sensible defaults for optional fields, layering of
//! CLI/env overrides, and validation of settings values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::PipelineSettings;
pub use operations::SettingsOverrides;
pub use types::Environment;
