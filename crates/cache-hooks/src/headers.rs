use crate::error::{IoContext, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const HEADERS_FILE_NAME: &str = "_headers";
pub const NOJEKYLL_FILE_NAME: &str = ".nojekyll";

pub const HEADERS_POLICY: &str = "/*
  Cache-Control: no-cache, no-store, must-revalidate
  Pragma: no-cache
  Expires: 0

/*.html
  Cache-Control: no-cache, no-store, must-revalidate

/assets/*
  Cache-Control: public, max-age=31536000, immutable

/blog/*
  Cache-Control: no-cache, no-store, must-revalidate
";

pub fn write_headers(site_dir: &Path) -> Result<PathBuf> {
    let path = site_dir.join(HEADERS_FILE_NAME);
    fs::write(&path, HEADERS_POLICY).io_context("writing", &path)?;
    tracing::debug!(path = %path.display(), "wrote headers policy");
    Ok(path)
}

pub fn touch_nojekyll(site_dir: &Path) -> Result<PathBuf> {
    let path = site_dir.join(NOJEKYLL_FILE_NAME);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .io_context("touching", &path)?;
    tracing::debug!(path = %path.display(), "touched marker file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_policy_sections() {
        let patterns: Vec<&str> = HEADERS_POLICY
            .lines()
            .filter(|line| line.starts_with('/'))
            .collect();
        assert_eq!(patterns, vec!["/*", "/*.html", "/assets/*", "/blog/*"]);
    }

    #[test]
    fn test_policy_header_lines_are_indented() {
        for line in HEADERS_POLICY.lines() {
            if line.is_empty() || line.starts_with('/') {
                continue;
            }
            assert!(line.starts_with("  "), "unindented header line: {line}");
            assert!(line.contains(": "), "malformed header line: {line}");
        }
    }

    #[test]
    fn test_policy_ends_with_single_newline() {
        assert!(HEADERS_POLICY.ends_with("must-revalidate\n"));
        assert!(!HEADERS_POLICY.ends_with("\n\n"));
    }

    #[test]
    fn test_write_headers() {
        let dir = TempDir::new().unwrap();
        let path = write_headers(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("_headers"));
        assert_eq!(fs::read_to_string(path).unwrap(), HEADERS_POLICY);
    }

    #[test]
    fn test_write_headers_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_headers"), "stale content that is longer").unwrap();

        write_headers(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("_headers")).unwrap();
        assert_eq!(content, HEADERS_POLICY);
    }

    #[test]
    fn test_touch_nojekyll_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = touch_nojekyll(dir.path()).unwrap();

        assert_eq!(path, dir.path().join(".nojekyll"));
        assert_eq!(fs::metadata(path).unwrap().len(), 0);
    }

    #[test]
    fn test_touch_nojekyll_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".nojekyll"), "keep").unwrap();

        touch_nojekyll(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join(".nojekyll")).unwrap();
        assert_eq!(content, "keep");
    }

    #[test]
    fn test_write_headers_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let error = write_headers(&missing).unwrap_err();
        assert!(error.to_string().contains("_headers"));
        assert!(!missing.exists());
    }
}
