//! Temporary directories holding JSON fixtures.
//!
//! # Examples
//!
//! ```
//! use helpful_merge_test_helpers::fs::TempWorkspace;
//! use serde_json::json;
//!
//! let workspace = TempWorkspace::new()?;
//! let path = workspace.write_json("target.json", &json!({"a": 1}))?;
//! assert_eq!(workspace.read_json(&path)?, json!({"a": 1}));
//! # Ok::<_, anyhow::Error>(())
//! ```

use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory removed when dropped.
#[derive(Debug)]
pub struct TempWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TempWorkspace {
    /// Creates an empty workspace.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be created or its path is not UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow::anyhow!("temporary path is not UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Root of the workspace.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path of `name` inside the workspace.
    #[must_use]
    pub fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Writes `value` as pretty JSON to `name` and returns its path.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    pub fn write_json(&self, name: &str, value: &serde_json::Value) -> Result<Utf8PathBuf> {
        let path = self.path(name);
        let text = serde_json::to_string_pretty(value)?;
        fs::write(&path, text).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Writes raw text to `name` and returns its path.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    pub fn write_text(&self, name: &str, text: &str) -> Result<Utf8PathBuf> {
        let path = self.path(name);
        fs::write(&path, text).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Reads and parses the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or is not valid JSON.
    pub fn read_json(&self, path: &Utf8Path) -> Result<serde_json::Value> {
        let text = fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        serde_json::from_str(&text).with_context(|| format!("parse {path}"))
    }
}
