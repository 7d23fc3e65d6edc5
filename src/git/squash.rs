//! Read the latest squash commit for the release changelog flow.

use git2::Repository;
use serde::Serialize;
use tracing::debug;

use crate::commit::{CommitRecord, segment_squash_body};
use crate::error::GitError;

use super::commits::SHORT_SHA_LEN;

/// The squash commit at HEAD and the sub-commits recovered from its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquashCommit {
    pub short_sha: String,
    pub full_sha: String,
    pub subject: String,
    pub commits: Vec<CommitRecord>,
}

impl SquashCommit {
    /// Build from raw commit metadata, segmenting the body.
    pub fn from_parts(full_sha: &str, subject: &str, body: &str) -> Self {
        Self {
            short_sha: full_sha.get(..SHORT_SHA_LEN).unwrap_or(full_sha).to_string(),
            full_sha: full_sha.to_string(),
            subject: subject.trim().to_string(),
            commits: segment_squash_body(body),
        }
    }
}

/// Read HEAD as a squash commit.
pub fn fetch_squash_commit(repo: &Repository) -> Result<SquashCommit, GitError> {
    let head = repo
        .head()
        .map_err(|e| GitError::ReferenceNotFound("HEAD".to_string(), e))?;
    let commit = head.peel_to_commit().map_err(GitError::ParseCommit)?;

    let squash = SquashCommit::from_parts(
        &commit.id().to_string(),
        commit.summary().unwrap_or(""),
        commit.body().unwrap_or(""),
    );

    debug!(
        sha = %squash.short_sha,
        sub_commits = squash.commits.len(),
        "Segmented squash commit"
    );

    Ok(squash)
}
