//! Prompt template rendering.
//!
//! This module provides:
//!
//! - **Render**: strict `{{ name }}` substitution over a template string
//! - **Store**: lookup of named templates in the template directory
//!
//! # Template Syntax
//!
//! Templates are plain text with `{{ name }}` placeholders:
//!
//! ```text
//! Hello {{ student_name }}, welcome to {{ course_name }}!
//! Start here: {{ onboarding_link }}
//! ```
//!
//! There are no filters, partials, conditionals, or loops.

mod render;
mod store;

pub use render::{TemplateError, placeholders, render_template};
pub use store::TemplateStore;

#[cfg(test)]
pub use render::vars;
