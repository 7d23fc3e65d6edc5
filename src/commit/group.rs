//! Group classified commits by type, then by scope.

use indexmap::IndexMap;
use serde::Serialize;

use super::header::parse_header;
use super::record::{CommitRecord, GroupedEntry};

/// Scope used for commits without a `(scope)` in their header.
pub const NO_SCOPE: &str = "(no scope)";

/// Type used for commits that do not follow the conventional header grammar.
pub const OTHER_TYPE: &str = "other";

/// Entries of one type, keyed by scope in first-seen order.
pub type ScopeGroups = IndexMap<String, Vec<GroupedEntry>>;

/// Commits grouped by type then scope.
///
/// Both levels keep first-seen insertion order and each bucket keeps input
/// order, so the same input always yields the same structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grouping {
    types: IndexMap<String, ScopeGroups>,
}

impl Grouping {
    /// Append an entry to its `(type, scope)` bucket, creating it if needed.
    pub fn push(&mut self, commit_type: &str, entry: GroupedEntry) {
        self.types
            .entry(commit_type.to_string())
            .or_default()
            .entry(entry.scope.clone())
            .or_default()
            .push(entry);
    }

    /// Iterate over types and their scope groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScopeGroups)> {
        self.types.iter().map(|(ty, scopes)| (ty.as_str(), scopes))
    }

    /// Scope groups for one commit type.
    pub fn scopes(&self, commit_type: &str) -> Option<&ScopeGroups> {
        self.types.get(commit_type)
    }

    /// Entries of a single `(type, scope)` bucket.
    pub fn bucket(&self, commit_type: &str, scope: &str) -> Option<&[GroupedEntry]> {
        self.types
            .get(commit_type)
            .and_then(|scopes| scopes.get(scope))
            .map(Vec::as_slice)
    }

    /// Commit types in first-seen order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Total number of grouped entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.types
            .values()
            .flat_map(|scopes| scopes.values())
            .map(Vec::len)
            .sum()
    }
}

/// Classify commits by conventional header and group them by type and scope.
///
/// Subjects that do not parse land in `other` / `(no scope)` with the
/// subject as title.
pub fn group_commits(commits: &[CommitRecord]) -> Grouping {
    let mut grouping = Grouping::default();

    for commit in commits {
        let (commit_type, scope, title) = match parse_header(&commit.subject) {
            Some(header) => (
                header.commit_type,
                header.scope.unwrap_or(NO_SCOPE),
                header.description,
            ),
            None => (OTHER_TYPE, NO_SCOPE, commit.subject.trim()),
        };

        grouping.push(
            commit_type,
            GroupedEntry {
                title: title.to_string(),
                scope: scope.to_string(),
                body: commit.body.clone(),
                short_sha: commit.short_sha.clone(),
                full_sha: commit.full_sha.clone(),
            },
        );
    }

    grouping
}
