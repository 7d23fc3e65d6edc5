//! Commit fetching for the PR changelog flow.

use git2::{Commit, Repository};
use tracing::debug;

use crate::commit::record::is_wip;
use crate::commit::CommitRecord;
use crate::error::GitError;

use super::range::PrRange;

/// Length of abbreviated commit hashes in rendered links.
pub const SHORT_SHA_LEN: usize = 7;

/// Build a record from a git2 commit, with short and full hashes.
///
/// Returns `None` for commits whose subject is empty.
pub fn record_from_commit(commit: &Commit) -> Option<CommitRecord> {
    let full = commit.id().to_string();
    let short = full.get(..SHORT_SHA_LEN).unwrap_or(&full).to_string();

    let subject = commit.summary().unwrap_or("").trim();
    if subject.is_empty() {
        return None;
    }
    let body = commit.body().unwrap_or("").trim();

    Some(CommitRecord::new(subject, body).with_sha(short, full))
}

/// Fetch the commits a PR adds, newest first, dropping `wip:` commits.
pub fn fetch_pr_commits(
    repo: &Repository,
    range: &PrRange,
) -> Result<Vec<CommitRecord>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;

    revwalk.push(range.head).map_err(GitError::RevwalkError)?;
    revwalk.hide(range.merge_base).map_err(GitError::RevwalkError)?;

    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;

        let Some(record) = record_from_commit(&commit) else {
            debug!(%oid, "Skipping commit with empty subject");
            continue;
        };
        if is_wip(&record.subject) {
            debug!(%oid, subject = %record.subject, "Skipping wip commit");
            continue;
        }
        commits.push(record);
    }

    Ok(commits)
}

/// Count the commits reachable from HEAD.
pub fn count_commits(repo: &Repository) -> Result<usize, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push_head().map_err(GitError::RevwalkError)?;

    let mut count = 0;
    for oid_result in revwalk {
        oid_result.map_err(GitError::RevwalkError)?;
        count += 1;
    }

    Ok(count)
}
