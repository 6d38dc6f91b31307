//! Template lookup in the fixed template directory.

use super::render::{TemplateError, placeholders, render_template};
use crate::error::{PromptError, PromptResult};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Loads named templates from a single directory and renders them.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve a template reference to a path inside the template directory.
    ///
    /// References must be a plain file name; anything with a directory
    /// component (including `..`) does not resolve.
    fn resolve(&self, name: &str) -> PromptResult<PathBuf> {
        let candidate = Path::new(name);
        let mut components = candidate.components();
        let is_plain_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        let path = self.dir.join(candidate);
        if !is_plain_name {
            return Err(PromptError::TemplateNotFound {
                name: name.to_string(),
                path,
            });
        }
        Ok(path)
    }

    /// Read the raw text of a template.
    pub fn load(&self, name: &str) -> PromptResult<String> {
        let path = self.resolve(name)?;
        std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound || path.is_dir() {
                PromptError::TemplateNotFound {
                    name: name.to_string(),
                    path: path.clone(),
                }
            } else {
                PromptError::TemplateRender {
                    name: name.to_string(),
                    source: TemplateError::Unreadable {
                        reason: e.to_string(),
                    },
                }
            }
        })
    }

    /// Load a template and substitute every placeholder.
    pub fn render(&self, name: &str, variables: &HashMap<String, String>) -> PromptResult<String> {
        let text = self.load(name)?;
        render_template(&text, variables).map_err(|source| PromptError::TemplateRender {
            name: name.to_string(),
            source,
        })
    }

    /// Variable names referenced by a template.
    pub fn variables_of(&self, name: &str) -> PromptResult<Vec<String>> {
        let text = self.load(name)?;
        placeholders(&text).map_err(|source| PromptError::TemplateRender {
            name: name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use crate::template::render::vars;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, TemplateStore) {
        let temp = TempDir::new().unwrap();
        for (name, body) in files {
            std::fs::write(temp.path().join(name), body).unwrap();
        }
        let store = TemplateStore::new(temp.path());
        (temp, store)
    }

    #[test]
    fn renders_named_template() {
        let (_temp, store) = store_with(&[("greet.txt", "Hi {{ who }}")]);
        let out = store.render("greet.txt", &vars([("who", "Sam")])).unwrap();
        assert_eq!(out, "Hi Sam");
    }

    #[test]
    fn missing_template_is_not_found() {
        let (_temp, store) = store_with(&[]);
        let err = store.render("nope.txt", &HashMap::new()).unwrap_err();
        assert!(
            matches!(err, PromptError::TemplateNotFound { ref name, .. } if name == "nope.txt")
        );
        assert_eq!(err.stage(), Stage::Render);
    }

    #[test]
    fn path_traversal_does_not_resolve() {
        let (_temp, store) = store_with(&[]);
        for name in ["../outside.txt", "sub/inner.txt", "/etc/hostname", ""] {
            let err = store.load(name).unwrap_err();
            assert!(
                matches!(err, PromptError::TemplateNotFound { .. }),
                "{name} should not resolve"
            );
        }
    }

    #[test]
    fn directory_is_not_a_template() {
        let (temp, store) = store_with(&[]);
        std::fs::create_dir(temp.path().join("folder")).unwrap();
        let err = store.load("folder").unwrap_err();
        assert!(matches!(err, PromptError::TemplateNotFound { .. }));
    }

    #[test]
    fn missing_variable_is_render_error() {
        let (_temp, store) = store_with(&[("t.txt", "Hello {{ missing_field }}")]);
        let err = store.render("t.txt", &HashMap::new()).unwrap_err();
        match err {
            PromptError::TemplateRender { name, source } => {
                assert_eq!(name, "t.txt");
                assert!(matches!(source, TemplateError::UndefinedVariable { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn lists_template_variables() {
        let (_temp, store) = store_with(&[("t.txt", "{{ a }} and {{ b }}")]);
        assert_eq!(store.variables_of("t.txt").unwrap(), vec!["a", "b"]);
    }
}
