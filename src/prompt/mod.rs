//! Prompt definitions and the loader that reads them from disk.
//!
//! Each JSON file in the prompts directory describes one generation job:
//!
//! ```text
//! {
//!   "slug": "welcome_jordan",
//!   "template": "welcome_email.txt",
//!   "output_format": "html",
//!   "max_tokens": 500,
//!   "variables": { "student_name": "Jordan" }
//! }
//! ```

mod loader;
mod model;


pub use loader::{discover_prompt_files, load_prompt, prompt_matcher};
pub use model::{OutputFormat, PromptDefinition};
