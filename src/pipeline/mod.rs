//! The per-prompt pipeline and the run driver.
//!
//! Each prompt file moves through
//! `Loaded → Rendered → Inferred → Written → Published`, strictly in order.
//! A failure at any stage stops that file only; the driver records it and
//! continues with the next file. The run fails at the end if anything failed.

mod report;


pub use report::{Failure, RunReport};

use crate::error::PromptResult;
use crate::inference::InferenceClient;
use crate::prompt::{PromptDefinition, load_prompt};
use crate::publish::{ObjectStore, publish, write_artifact};
use crate::settings::PipelineSettings;
use crate::template::TemplateStore;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// A prompt that made it through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    pub slug: String,
    pub artifact: PathBuf,
    /// Remote location, or `None` when uploads are skipped.
    pub location: Option<String>,
}

/// What happened to one prompt file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Completed),
    /// Filtered out by `--only`.
    Skipped { slug: String },
}

/// Load a prompt file and render its template, without any network call.
pub fn load_and_render(
    path: &Path,
    templates: &TemplateStore,
) -> PromptResult<(PromptDefinition, String)> {
    let def = load_prompt(path)?;
    debug!(slug = %def.slug, file = %path.display(), "Loaded prompt");

    let prompt = templates.render(&def.template, &def.variables)?;
    debug!(slug = %def.slug, template = %def.template, bytes = prompt.len(), "Rendered prompt");

    Ok((def, prompt))
}

/// Drives prompt files through generation and publication.
pub struct Pipeline<'a> {
    settings: &'a PipelineSettings,
    templates: TemplateStore,
    inference: &'a dyn InferenceClient,
    store: Option<&'a dyn ObjectStore>,
    only: Vec<String>,
}

impl<'a> Pipeline<'a> {
    /// `store` of `None` writes artifacts locally and skips uploading.
    pub fn new(
        settings: &'a PipelineSettings,
        inference: &'a dyn InferenceClient,
        store: Option<&'a dyn ObjectStore>,
    ) -> Self {
        Self {
            settings,
            templates: TemplateStore::new(&settings.templates_dir),
            inference,
            store,
            only: Vec::new(),
        }
    }

    /// Restrict the run to these slugs; empty means every prompt.
    pub fn with_only(mut self, slugs: Vec<String>) -> Self {
        self.only = slugs;
        self
    }

    /// Take one prompt file through every stage.
    pub fn process_file(&self, path: &Path) -> PromptResult<Outcome> {
        let def = load_prompt(path)?;
        self.process_definition(def)
    }

    fn process_definition(&self, def: PromptDefinition) -> PromptResult<Outcome> {
        if !self.only.is_empty() && !self.only.iter().any(|s| s == &def.slug) {
            debug!(slug = %def.slug, "Skipping prompt not selected by --only");
            return Ok(Outcome::Skipped { slug: def.slug });
        }

        let prompt = self.templates.render(&def.template, &def.variables)?;
        info!(slug = %def.slug, template = %def.template, "Rendered prompt");

        let text = self.inference.generate(&prompt, def.max_tokens)?;
        info!(slug = %def.slug, bytes = text.len(), "Generated text");

        let outputs_dir = Path::new(&self.settings.outputs_dir);
        let artifact = write_artifact(outputs_dir, &def.slug, def.output_format, &text)?;
        info!(slug = %def.slug, path = %artifact.path.display(), "Wrote artifact");

        let location = match self.store {
            Some(store) => Some(publish(store, &artifact, self.settings.environment)?),
            None => {
                info!(slug = %def.slug, "Upload skipped");
                None
            }
        };

        Ok(Outcome::Completed(Completed {
            slug: def.slug,
            artifact: artifact.path,
            location,
        }))
    }

    /// Process every file in order, collecting failures instead of stopping.
    pub fn run(&self, files: &[PathBuf]) -> RunReport {
        let mut report = RunReport::default();
        let mut seen_slugs: HashSet<String> = HashSet::new();
        let mut artifact_sources: HashMap<PathBuf, PathBuf> = HashMap::new();

        for path in files {
            let result = load_prompt(path).and_then(|def| {
                seen_slugs.insert(def.slug.clone());
                self.process_definition(def)
            });

            match result {
                Ok(Outcome::Completed(done)) => {
                    let previous = artifact_sources.insert(done.artifact.clone(), path.clone());
                    if let Some(previous) = previous {
                        warn!(
                            artifact = %done.artifact.display(),
                            first = %previous.display(),
                            second = %path.display(),
                            "Later prompt file overwrote an earlier artifact"
                        );
                        report.overwritten.push(done.artifact.clone());
                    }
                    report.completed.push(done);
                }
                Ok(Outcome::Skipped { slug }) => report.skipped.push(slug),
                Err(err) => {
                    error!(
                        file = %path.display(),
                        stage = %err.stage(),
                        error = %err,
                        "Prompt failed"
                    );
                    report.failures.push(Failure {
                        file: path.clone(),
                        stage: err.stage(),
                        error: err,
                    });
                }
            }
        }

        let mut unmatched: Vec<String> = self
            .only
            .iter()
            .filter(|slug| !seen_slugs.contains(*slug))
            .cloned()
            .collect();
        unmatched.sort();
        unmatched.dedup();
        if !unmatched.is_empty() {
            warn!(slugs = ?unmatched, "No prompt file has the slug(s) given to --only");
        }
        report.unmatched_only = unmatched;

        report
    }
}
