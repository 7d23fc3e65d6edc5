//! Split a squash commit body back into the commits that were squashed.
//!
//! GitHub-style squash bodies list each original commit as `* subject`,
//! optionally followed by `- detail` bullets or free-form continuation lines.
//! Conventional headers without a leading `*` also open a new sub-commit.

use tracing::debug;

use super::header::is_header_marker;
use super::record::{CommitRecord, is_wip};

/// Segment a squash commit body into ordered sub-commit records.
///
/// Lines are trimmed and blank lines skipped. `wip:` lines are always dropped,
/// including `* wip:` markers and `- wip:` details. A dropped `wip:` marker
/// still closes the open sub-commit, so the lines under it are discarded
/// until the next marker. Text before the first recognizable sub-commit is discarded. Never fails:
/// unusual bodies just produce fewer or coarser records.
pub fn segment_squash_body(body: &str) -> Vec<CommitRecord> {
    let mut commits = Vec::new();
    let mut current: Option<CommitRecord> = None;

    for line in body.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if line.starts_with('*') || is_header_marker(line) || is_wip(line) {
            let subject = line.trim_start_matches('*').trim_start();
            if subject.is_empty() {
                continue;
            }
            if let Some(done) = current.take() {
                commits.push(done);
            }
            if is_wip(subject) {
                debug!(line, "Dropping wip sub-commit");
            } else {
                current = Some(CommitRecord::new(subject, ""));
            }
            continue;
        }

        match current.as_mut() {
            Some(record) => match line.strip_prefix('-').map(str::trim_start) {
                Some(detail) if is_wip(detail) => {}
                Some(detail) => record.push_body_line(detail),
                None => record.push_body_line(line),
            },
            None => debug!(line, "Dropping squash body line before first sub-commit"),
        }
    }

    if let Some(done) = current {
        commits.push(done);
    }

    commits
}
