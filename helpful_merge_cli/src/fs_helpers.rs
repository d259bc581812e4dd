//! Filesystem helpers shared across `helpful-merge` modules.

use std::io::Read;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use helpful_merge::Value;

use crate::error::CliError;

/// Opens a directory if it exists, returning `None` when the path is missing.
pub fn open_optional_dir(path: &Utf8Path) -> Result<Option<Dir>, CliError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(CliError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

/// Opens the directory containing `path`, treating a bare file name as
/// relative to the working directory.
pub fn open_parent_dir(path: &Utf8Path) -> Result<Dir, CliError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Dir::open_ambient_dir(parent, ambient_authority()).map_err(CliError::io(parent))
}

/// Reads a UTF-8 file in full.
pub fn read_text(path: &Utf8Path) -> Result<String, CliError> {
    let dir = open_parent_dir(path)?;
    let name = path.file_name().ok_or_else(|| CliError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let mut handle = dir.open(name).map_err(CliError::io(path))?;
    let mut buffer = String::new();
    handle
        .read_to_string(&mut buffer)
        .map_err(CliError::io(path))?;
    Ok(buffer)
}

/// Reads and parses a JSON document into a fresh value tree.
pub fn read_json(path: &Utf8Path) -> Result<Value, CliError> {
    let text = read_text(path)?;
    let json: serde_json::Value = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(%path, "loaded JSON document");
    Ok(Value::from(json))
}
