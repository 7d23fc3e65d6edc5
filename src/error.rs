//! Error types for convlog modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("No merge base between '{branch}' and '{base}': {source}")]
    NoMergeBase {
        branch: String,
        base: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),
}

/// Errors from changelog operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize grouped commits: {0}")]
    SerializationFailed(#[source] serde_json::Error),
}

/// Errors from loading the semantic branch configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid branch pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to update version in {path}: {reason}")]
    UpdateFailed { path: PathBuf, reason: String },
}

/// Errors from version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to parse version '{0}': expected MAJOR.MINOR.PATCH integers")]
    ParseFailed(String),

    #[error("Branch {0} does not match any rules")]
    NoMatchingRule(String),

    #[error(transparent)]
    Git(#[from] GitError),
}
