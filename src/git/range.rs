//! Pull request range resolution.

use git2::{Oid, Repository};
use tracing::debug;

use crate::error::GitError;

/// Default branch the PR is compared against.
pub const DEFAULT_BASE_REF: &str = "origin/main";

/// Commits between the merge base of a PR branch and HEAD.
#[derive(Debug, Clone)]
pub struct PrRange {
    pub merge_base: Oid,
    pub head: Oid,
}

/// Resolve the range of commits a PR branch adds on top of `base`.
///
/// The lower bound is the merge base of `branch` and `base`; the upper
/// bound is HEAD, which is the checked-out PR branch in CI.
pub fn resolve_pr_range(
    repo: &Repository,
    branch: &str,
    base: &str,
) -> Result<PrRange, GitError> {
    let branch_oid = resolve_reference(repo, branch)?;
    let base_oid = resolve_reference(repo, base)?;
    let head = resolve_reference(repo, "HEAD")?;

    let merge_base = repo
        .merge_base(branch_oid, base_oid)
        .map_err(|source| GitError::NoMergeBase {
            branch: branch.to_string(),
            base: base.to_string(),
            source,
        })?;

    debug!(%merge_base, %head, branch, base, "Resolved PR range");

    Ok(PrRange { merge_base, head })
}

/// Resolve a reference (tag, branch, commit hash) to a commit OID.
pub fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    // Try as a direct OID first
    if let Ok(oid) = Oid::from_str(reference) {
        if repo.find_commit(oid).is_ok() {
            return Ok(oid);
        }
    }

    match repo.revparse_single(reference) {
        Ok(obj) => Ok(obj.peel_to_commit().map_err(GitError::ParseCommit)?.id()),
        Err(e) => Err(GitError::ReferenceNotFound(reference.to_string(), e)),
    }
}
