//! Implementation of the `promptcast check` command.
//!
//! Runs the load and render stages for every prompt so broken definitions
//! are caught in review, before anything is generated or published.

use super::resolve_settings;
use crate::cli::CheckArgs;
use crate::error::{PipelineError, Result};
use crate::pipeline::load_and_render;
use crate::prompt::{discover_prompt_files, prompt_matcher};
use crate::settings::{PipelineSettings, SettingsOverrides};
use crate::template::TemplateStore;
use std::collections::HashMap;
use std::path::Path;

/// Execute the `promptcast check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let settings = resolve_settings(&args.layout, SettingsOverrides::default())?;
    check_all(&settings, args.print)
}

fn check_all(settings: &PipelineSettings, print: bool) -> Result<()> {
    let matcher = prompt_matcher(&settings.prompt_pattern)?;
    let files = discover_prompt_files(Path::new(&settings.prompts_dir), &matcher)?;
    let templates = TemplateStore::new(&settings.templates_dir);

    let mut failed = 0;
    for path in &files {
        match load_and_render(path, &templates) {
            Ok((def, prompt)) => {
                println!("ok      {} ({})", path.display(), def.slug);
                for name in unused_variables(&templates, &def.template, &def.variables) {
                    println!("        note: variable '{}' is not used by '{}'", name, def.template);
                }
                if print {
                    println!("{}", prompt);
                    println!();
                }
            }
            Err(err) => {
                failed += 1;
                println!("FAILED  {} [{}]: {}", path.display(), err.stage(), err);
            }
        }
    }

    println!();
    println!("{} prompt(s) checked, {} failed", files.len(), failed);

    if failed > 0 {
        return Err(PipelineError::PromptsFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

/// Variables a definition provides that its template never references.
fn unused_variables(
    templates: &TemplateStore,
    template: &str,
    variables: &HashMap<String, String>,
) -> Vec<String> {
    let Ok(referenced) = templates.variables_of(template) else {
        return Vec::new();
    };
    let mut unused: Vec<String> = variables
        .keys()
        .filter(|k| !referenced.contains(*k))
        .cloned()
        .collect();
    unused.sort();
    unused
}
