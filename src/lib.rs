//! convlog - Conventional commit changelogs and branch-driven version bumps for CI.
//!
//! # Overview
//!
//! convlog reads commits with git2, groups them by conventional commit type
//! and scope, and renders the result as a Markdown changelog section. In the
//! release flow the body of a single squash commit is first split back into
//! the commits that were squashed. A separate `version` command computes the
//! next semantic version from branch-name rules in `pyproject.toml`.

pub mod changelog;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod version;

// Re-export commonly used types
pub use commit::{CommitRecord, GroupedEntry, Grouping, group_commits, segment_squash_body};
pub use config::{BranchRules, ProjectConfig, SemanticBranchConfig};
pub use error::{ChangelogError, ConfigError, GitError, VersionError};
pub use git::SquashCommit;
pub use version::{BumpType, NextVersion};
