use crate::error::{HookError, Result};
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera, Value};

pub struct TemplateEnvironment {
    tera: Tera,
    globals: Context,
}

impl Default for TemplateEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEnvironment {
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
            globals: Context::new(),
        }
    }

    pub fn from_directory(templates_dir: &Path) -> Result<Self> {
        if !templates_dir.is_dir() {
            return Err(HookError::TemplatesNotFound {
                path: templates_dir.to_path_buf(),
            });
        }

        let pattern = templates_dir.join("**").join("*.html");
        let pattern_str = pattern.to_string_lossy();

        let tera = Tera::new(&pattern_str)?;
        tracing::debug!(
            templates = tera.get_template_names().count(),
            dir = %templates_dir.display(),
            "loaded templates"
        );

        Ok(Self {
            tera,
            globals: Context::new(),
        })
    }

    pub fn add_raw_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.tera.add_raw_template(name, source)?;
        Ok(())
    }

    pub fn insert_global<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.globals.insert(key, value);
    }

    pub fn global(&self, key: &str) -> Option<&Value> {
        self.globals.get(key)
    }

    pub fn globals(&self) -> &Context {
        &self.globals
    }

    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        let mut merged = self.globals.clone();
        merged.extend(context.clone());
        Ok(self.tera.render(template_name, &merged)?)
    }
}
