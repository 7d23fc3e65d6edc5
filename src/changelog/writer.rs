//! Write rendered changelogs to disk.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::ChangelogError;

/// Write rendered output to `path`, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<(), ChangelogError> {
    write_atomic(path, content)
}

/// Prepend a rendered section to the changelog file at `path`.
///
/// Creates the file if it does not exist. The result always ends with a
/// single newline.
pub fn prepend_changelog(path: &Path, section: &str) -> Result<(), ChangelogError> {
    let previous = if path.exists() {
        std::fs::read_to_string(path).map_err(ChangelogError::ReadFailed)?
    } else {
        String::new()
    };

    let combined = format!("{}\n\n{}", section, previous);
    let content = format!("{}\n", combined.trim_end());

    write_atomic(path, &content)?;
    info!(path = %path.display(), "Prepended release section to changelog");

    Ok(())
}

/// Write through a temp file in the same directory, then rename over `path`.
fn write_atomic(path: &Path, content: &str) -> Result<(), ChangelogError> {
    let write_failed = |source: std::io::Error| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_failed)?;
    file.write_all(content.as_bytes()).map_err(write_failed)?;
    file.persist(path).map_err(|e| write_failed(e.error))?;

    Ok(())
}
