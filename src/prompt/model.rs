//! Prompt definition model.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Slugs become file names locally and key segments remotely.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-][A-Za-z0-9._-]*$").expect("Invalid slug regex"));

/// Format of the generated document.
///
/// Only the exact value `html` selects HTML; every other value, including an
/// empty string, is Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OutputFormat {
    Html,
    Markdown,
}

impl From<String> for OutputFormat {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        if s == "html" {
            Self::Html
        } else {
            Self::Markdown
        }
    }

    /// File extension for artifacts of this format (no leading dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    /// MIME type attached to the uploaded object.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Markdown => "text/markdown",
        }
    }
}

/// One generation job, read from a JSON file in the prompts directory.
///
/// Unknown fields are ignored. All five fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptDefinition {
    /// Output filename stem and remote key stem.
    pub slug: String,

    /// File name of the template inside the template directory.
    pub template: String,

    pub output_format: OutputFormat,

    /// Upper bound on generated tokens.
    pub max_tokens: u32,

    /// Values substituted into the template.
    pub variables: HashMap<String, String>,
}

impl PromptDefinition {
    /// Parse a prompt definition from JSON text and validate it.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let def: PromptDefinition = serde_json::from_str(json).map_err(|e| e.to_string())?;
        def.validate()?;
        Ok(def)
    }

    /// Validation rules:
    /// - `slug` is filesystem-safe: letters, digits, `.`, `_`, `-`, no leading dot
    /// - `template` is non-empty
    /// - `max_tokens` is positive
    pub fn validate(&self) -> Result<(), String> {
        if !SLUG_REGEX.is_match(&self.slug) {
            return Err(format!(
                "slug '{}' is not filesystem-safe \
                 (use letters, digits, '.', '_' or '-', not starting with '.')",
                self.slug
            ));
        }

        if self.template.trim().is_empty() {
            return Err("template must not be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }

        Ok(())
    }
}
