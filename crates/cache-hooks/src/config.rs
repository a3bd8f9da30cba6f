use crate::error::{HookError, IoContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "hooks.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    #[serde(default = "default_site_dir")]
    pub site_dir: PathBuf,
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,
}

pub fn default_site_dir() -> PathBuf {
    PathBuf::from("site")
}

pub fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            site_dir: default_site_dir(),
            docs_dir: default_docs_dir(),
        }
    }
}

impl HookConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HookError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).io_context("reading config", path)?;
        toml::from_str(&content).map_err(|error| HookError::TomlParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })
    }

    pub fn discover(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);

        let config = if config_path.exists() {
            Self::load(&config_path)?
        } else {
            tracing::debug!(dir = %project_dir.display(), "no hooks.toml found, using defaults");
            Self::default()
        };

        Ok(config.resolve(project_dir))
    }

    pub fn with_site_dir(mut self, site_dir: impl Into<PathBuf>) -> Self {
        self.site_dir = site_dir.into();
        self
    }

    fn resolve(mut self, project_dir: &Path) -> Self {
        if self.site_dir.is_relative() {
            self.site_dir = project_dir.join(&self.site_dir);
        }
        if self.docs_dir.is_relative() {
            self.docs_dir = project_dir.join(&self.docs_dir);
        }
        self
    }
}
