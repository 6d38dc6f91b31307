//! Run summary and the exit status it implies.

use super::Completed;
use crate::error::{PipelineError, PromptError, Result, Stage};
use std::path::PathBuf;

/// One prompt file that did not make it through.
#[derive(Debug)]
pub struct Failure {
    pub file: PathBuf,
    pub stage: Stage,
    pub error: PromptError,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub completed: Vec<Completed>,
    pub skipped: Vec<String>,
    pub failures: Vec<Failure>,
    /// Artifacts written by more than one prompt file in this run.
    pub overwritten: Vec<PathBuf>,
    /// Slugs passed to `--only` that no prompt file has.
    pub unmatched_only: Vec<String>,
}

impl RunReport {
    /// Prompts that were attempted (skipped ones are not counted).
    pub fn attempted(&self) -> usize {
        self.completed.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.unmatched_only.is_empty()
    }

    /// Print the end-of-run summary to stdout.
    pub fn print_summary(&self) {
        println!();
        println!("Summary");
        println!("=======");
        println!("  {:10} {:>3}", "Completed", self.completed.len());
        println!("  {:10} {:>3}", "Failed", self.failures.len());
        if !self.skipped.is_empty() {
            println!("  {:10} {:>3}", "Skipped", self.skipped.len());
        }

        if !self.unmatched_only.is_empty() {
            println!();
            println!("Unknown --only slug(s): {}", self.unmatched_only.join(", "));
        }

        if !self.failures.is_empty() {
            println!();
            println!("Failures:");
            for failure in &self.failures {
                println!(
                    "  - {} [{}]: {}",
                    failure.file.display(),
                    failure.stage,
                    failure.error
                );
            }
        }
    }

    /// `Ok` when nothing failed.
    ///
    /// An `--only` slug that matched no prompt file is a user error and takes
    /// precedence over prompt failures.
    pub fn into_result(self) -> Result<()> {
        if !self.unmatched_only.is_empty() {
            Err(PipelineError::UserError(format!(
                "no prompt file has slug(s) given to --only: {}",
                self.unmatched_only.join(", ")
            )))
        } else if self.failures.is_empty() {
            Ok(())
        } else {
            Err(PipelineError::PromptsFailed {
                failed: self.failures.len(),
                total: self.attempted(),
            })
        }
    }
}
