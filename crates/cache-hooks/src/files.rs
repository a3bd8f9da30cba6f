use crate::error::{HookError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFiles {
    paths: Vec<PathBuf>,
}

impl SourceFiles {
    pub fn collect(docs_dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();

        if !docs_dir.exists() {
            return Ok(Self { paths });
        }

        if !docs_dir.is_dir() {
            return Err(HookError::InvalidPath {
                path: docs_dir.to_path_buf(),
            });
        }

        for entry in WalkDir::new(docs_dir) {
            let entry = entry.map_err(|error| HookError::WalkDir {
                path: docs_dir.to_path_buf(),
                message: error.to_string(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path
                .strip_prefix(docs_dir)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            paths.push(PathBuf::from(relative));
        }

        paths.sort();
        tracing::debug!(count = paths.len(), dir = %docs_dir.display(), "collected source files");

        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
