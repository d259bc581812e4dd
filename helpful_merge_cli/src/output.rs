//! Output writers for `helpful-merge`.

use std::io::Write;

use camino::Utf8Path;
use cap_std::fs_utf8::OpenOptions;
use helpful_merge::Value;

use crate::error::CliError;
use crate::fs_helpers::open_parent_dir;

/// Renders the merged tree as JSON text with a trailing newline.
pub fn render(value: &Value, is_compact: bool) -> Result<String, CliError> {
    let json = value.to_json();
    let mut text = if is_compact {
        serde_json::to_string(&json)
    } else {
        serde_json::to_string_pretty(&json)
    }
    .map_err(CliError::Render)?;
    text.push('\n');
    Ok(text)
}

/// Writes `content` to `path`, replacing any existing file.
pub fn write_file(path: &Utf8Path, content: &str) -> Result<(), CliError> {
    let dir = open_parent_dir(path)?;
    let name = path.file_name().ok_or_else(|| CliError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let mut file = dir
        .open_with(
            name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(CliError::io(path))?;
    file.write_all(content.as_bytes())
        .map_err(CliError::io(path))?;
    tracing::debug!(%path, "wrote merged document");
    Ok(())
}

/// Writes `content` to `out`.
pub fn write_to(mut out: impl Write, content: &str) -> Result<(), CliError> {
    out.write_all(content.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::io("<stdout>"))
}
