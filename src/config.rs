//! Project configuration read from `pyproject.toml`-style TOML files.
//!
//! Branch rules live under `[tool.semantic_branch]`; each key holds a list of
//! regular expressions that must match the whole branch name:
//!
//! ```toml
//! [project]
//! version = "1.4.2"
//!
//! [tool.semantic_branch]
//! major = ["release/major-.*"]
//! minor = ["feat/.*", "feature/.*"]
//! patch = ["fix/.*", "hotfix/.*"]
//! prerelease = ["develop"]
//! prerelease_ignore = ["docs/.*"]
//! release_ignore = ["chore/.*"]
//! ```

use std::path::{Path, PathBuf};

use regex::Regex;
use toml_edit::{DocumentMut, Item};
use tracing::debug;

use crate::error::ConfigError;

/// Version assumed when `[project].version` is missing.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Default configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "pyproject.toml";

/// Server used when `GITHUB_SERVER_URL` is unset.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Repository URL for commit and PR links, from GitHub Actions variables.
pub fn default_repo_url() -> String {
    repo_url_from(
        std::env::var("GITHUB_SERVER_URL").ok().as_deref(),
        std::env::var("GITHUB_REPOSITORY").ok().as_deref(),
    )
}

/// Join a server URL and an `owner/name` repository into a repository URL.
///
/// Returns just the server when the repository is empty.
pub fn repo_url_from(server: Option<&str>, repository: Option<&str>) -> String {
    let server = server.unwrap_or(DEFAULT_SERVER_URL).trim_end_matches('/');
    let repository = repository.unwrap_or("").trim_matches('/');

    if repository.is_empty() {
        server.to_string()
    } else {
        format!("{}/{}", server, repository)
    }
}

/// Regular expressions matched against the full branch name.
#[derive(Debug, Clone, Default)]
pub struct BranchRules {
    patterns: Vec<Regex>,
}

impl BranchRules {
    /// Compile patterns, anchoring each one to the whole branch name.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(&format!("^(?:{})$", p)).map_err(|e| ConfigError::InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns true if any pattern matches the whole branch name.
    pub fn matches(&self, branch: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(branch))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The `[tool.semantic_branch]` section.
#[derive(Debug, Clone, Default)]
pub struct SemanticBranchConfig {
    pub major: BranchRules,
    pub minor: BranchRules,
    pub patch: BranchRules,
    pub prerelease: BranchRules,
    pub prerelease_ignore: BranchRules,
    pub release_ignore: BranchRules,
}

/// A loaded configuration file.
#[derive(Debug)]
pub struct ProjectConfig {
    pub path: PathBuf,
    pub current_version: String,
    pub semantic_branch: SemanticBranchConfig,
}

/// Load the project version and branch rules from a TOML file.
pub fn load_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_toml(path, &content)?;

    let current_version = doc
        .get("project")
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_VERSION)
        .to_string();

    let section = doc.get("tool").and_then(|t| t.get("semantic_branch"));
    let rules = |key: &str| -> Result<BranchRules, ConfigError> {
        let patterns = section
            .and_then(|s| s.get(key))
            .map(string_list)
            .unwrap_or_default();
        BranchRules::from_patterns(patterns.as_slice())
    };

    let semantic_branch = SemanticBranchConfig {
        major: rules("major")?,
        minor: rules("minor")?,
        patch: rules("patch")?,
        prerelease: rules("prerelease")?,
        prerelease_ignore: rules("prerelease_ignore")?,
        release_ignore: rules("release_ignore")?,
    };

    debug!(path = %path.display(), %current_version, "Loaded semantic branch config");

    Ok(ProjectConfig {
        path: path.to_path_buf(),
        current_version,
        semantic_branch,
    })
}

pub(crate) fn parse_toml(path: &Path, content: &str) -> Result<DocumentMut, ConfigError> {
    content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// String entries of a TOML array. Non-string entries are ignored.
fn string_list(item: &Item) -> Vec<String> {
    item.as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
