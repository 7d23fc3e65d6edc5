//! Commit records flowing between the git readers, the grouper and the renderer.

use serde::{Deserialize, Serialize};

/// One logical commit, either read from history or cut out of a squash body.
///
/// The subject is always a single trimmed line. Identifiers are only known
/// for commits read one by one from history; sub-commits recovered from a
/// squash body carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub subject: String,
    pub body: String,
    pub short_sha: Option<String>,
    pub full_sha: Option<String>,
}

impl CommitRecord {
    /// Create a record without commit identifiers.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            short_sha: None,
            full_sha: None,
        }
    }

    /// Attach the short and full commit hashes.
    pub fn with_sha(mut self, short_sha: impl Into<String>, full_sha: impl Into<String>) -> Self {
        self.short_sha = Some(short_sha.into());
        self.full_sha = Some(full_sha.into());
        self
    }

    /// Append a line to the body, newline-joined.
    pub(crate) fn push_body_line(&mut self, line: &str) {
        if !self.body.is_empty() {
            self.body.push('\n');
        }
        self.body.push_str(line);
    }
}

/// A commit after classification, stored under its `(type, scope)` bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedEntry {
    pub title: String,
    pub scope: String,
    pub body: String,
    pub short_sha: Option<String>,
    pub full_sha: Option<String>,
}

/// Returns true for work-in-progress subjects (`wip:` in any case).
pub fn is_wip(line: &str) -> bool {
    line.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("wip:"))
}
