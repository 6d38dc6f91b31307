//! Placeholder substitution engine.
//!
//! # Syntax
//!
//! - `{{ name }}` - Substitutes the value of variable `name`. Whitespace inside
//!   the braces is optional.
//! - Everything else, including single `{` / `}` and a stray `}}`, is literal.
//!
//! # Error Handling
//!
//! The engine is strict: a placeholder naming a variable that is not in the
//! map is an error, never an empty substitution. Generated documents are
//! reviewed and then published, so a silently blank field is worse than a
//! failed prompt.

use std::collections::HashMap;
use std::fmt;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the placeholder in the template.
        position: usize,
    },
    /// A `{{` was found without a matching `}}`.
    UnclosedPlaceholder {
        /// Byte offset of the unclosed `{{`.
        position: usize,
    },
    /// A placeholder with nothing inside (e.g., `{{ }}`).
    EmptyVariableName {
        /// Byte offset of the empty placeholder.
        position: usize,
    },
    /// A placeholder whose name is not made of letters, digits, and underscores.
    InvalidVariableName {
        /// The offending name, trimmed.
        name: String,
        /// Byte offset of the placeholder.
        position: usize,
    },
    /// The template file exists but could not be read.
    Unreadable {
        /// The underlying I/O error message.
        reason: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnclosedPlaceholder { position } => {
                write!(
                    f,
                    "unclosed '{{{{' at position {} in template",
                    position
                )
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty placeholder '{{{{ }}}}' at position {} in template",
                    position
                )
            }
            TemplateError::InvalidVariableName { name, position } => {
                write!(
                    f,
                    "invalid variable name '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::Unreadable { reason } => {
                write!(f, "template could not be read: {}", reason)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// A parsed piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder { name: &'a str, position: usize },
}

fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split a template into literal and placeholder segments.
fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find("{{") {
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }

        let position = offset + open;
        let inner = &rest[open + 2..];
        let close = inner
            .find("}}")
            .ok_or(TemplateError::UnclosedPlaceholder { position })?;

        let name = inner[..close].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyVariableName { position });
        }
        if !is_valid_name(name) {
            return Err(TemplateError::InvalidVariableName {
                name: name.to_string(),
                position,
            });
        }
        segments.push(Segment::Placeholder { name, position });

        let consumed = open + 2 + close + 2;
        rest = &rest[consumed..];
        offset += consumed;
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    Ok(segments)
}

/// Render a template string by substituting variables.
///
/// # Arguments
///
/// * `template` - The template text containing `{{ variable }}` placeholders
/// * `variables` - A map of variable names to their values
///
/// # Returns
///
/// * `Ok(String)` - The rendered string with every placeholder substituted
/// * `Err(TemplateError)` - If a variable is undefined or syntax is invalid
///
/// Nothing is emitted on error; a template either renders completely or not
/// at all.
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let segments = parse(template)?;
    let mut result = String::with_capacity(template.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Placeholder { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    Ok(result)
}

/// List the variable names a template references, in order of first use.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();
    for segment in parse(template)? {
        if let Segment::Placeholder { name, .. } = segment
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Helper to create a variables map from a list of key-value pairs.
#[cfg(test)]
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
