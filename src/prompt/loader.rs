//! Discovery and loading of prompt definition files.

use super::model::PromptDefinition;
use crate::error::{PipelineError, PromptError, PromptResult, Result};
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};

/// Compile the file-name pattern used to pick prompt files.
pub fn prompt_matcher(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|e| {
            PipelineError::UserError(format!("invalid prompt pattern '{}': {}", pattern, e))
        })
}

/// List prompt files in `dir` whose file name matches `matcher`.
///
/// The scan is not recursive. Results are sorted by file name so runs
/// process prompts in a stable order.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Matching files, possibly empty
/// * `Err(PipelineError::UserError)` - The directory cannot be read
pub fn discover_prompt_files(dir: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        PipelineError::UserError(format!(
            "failed to read prompts directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            PipelineError::UserError(format!(
                "failed to read prompts directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        if matcher.is_match(Path::new(name)) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read and validate one prompt definition.
pub fn load_prompt(path: &Path) -> PromptResult<PromptDefinition> {
    let content = std::fs::read_to_string(path).map_err(|e| PromptError::ConfigParse {
        path: path.to_path_buf(),
        reason: format!("failed to read file: {}", e),
    })?;

    PromptDefinition::from_json(&content).map_err(|reason| PromptError::ConfigParse {
        path: path.to_path_buf(),
        reason,
    })
}
