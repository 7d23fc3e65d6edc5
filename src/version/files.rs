//! Rewrite `[project].version` in a TOML config file.

use std::path::Path;

use crate::config::parse_toml;
use crate::error::ConfigError;

/// Set `[project].version`, creating the `[project]` table if needed.
///
/// Editing goes through `toml_edit`, so comments and key order in the rest
/// of the file are preserved.
pub fn update_project_version(path: &Path, new_version: &str) -> Result<(), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut doc = parse_toml(path, &content)?;

    if doc.get("project").is_none() {
        doc["project"] = toml_edit::table();
    }
    if !doc["project"].is_table_like() {
        return Err(ConfigError::UpdateFailed {
            path: path.to_path_buf(),
            reason: "[project] is not a table".into(),
        });
    }
    doc["project"]["version"] = toml_edit::value(new_version);

    std::fs::write(path, doc.to_string()).map_err(|e| ConfigError::UpdateFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to write: {}", e),
    })
}

/// Returns true if the config file is TOML and can carry the version.
pub fn is_toml_config(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}
