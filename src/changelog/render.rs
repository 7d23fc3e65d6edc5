//! Render grouped commits as a Markdown changelog section.

use std::fmt::Write as _;

use serde::Serialize;

use crate::commit::{GroupedEntry, Grouping, NO_SCOPE};
use crate::error::ChangelogError;
use crate::git::SquashCommit;
use crate::version::VERSION_UNRELEASED;

use super::format::{ordered_types, type_heading};

/// Everything around the grouped commits that shows up in the output.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    /// Text for the section heading.
    pub version: String,
    pub repo_url: &'a str,
    /// Present in release mode only.
    pub squash: Option<&'a SquashCommit>,
    pub is_unreleased: bool,
    pub pr_number: Option<u64>,
    /// Release date, shown next to released versions.
    pub date: Option<String>,
}

/// Returns true if the version string marks unreleased changes.
pub fn is_unreleased(version: Option<&str>) -> bool {
    version.is_some_and(|v| v.eq_ignore_ascii_case(VERSION_UNRELEASED))
}

/// Heading text for a PR preview.
pub fn pr_preview_title(branch: &str, version: &str) -> String {
    format!("Changelog preview for {} ({})", branch, version)
}

/// Render the changelog section as Markdown.
pub fn render_markdown(ctx: &RenderContext<'_>, grouping: &Grouping) -> String {
    let mut out = String::new();

    match (&ctx.date, ctx.is_unreleased) {
        (Some(date), false) => {
            let _ = writeln!(out, "## [{}] - {}\n", ctx.version, date);
        }
        _ => {
            let _ = writeln!(out, "## {}\n", ctx.version);
        }
    }

    if let Some(squash) = ctx.squash {
        let _ = writeln!(
            out,
            "Squash commit: {} ([{}]({}))",
            squash.subject,
            squash.short_sha,
            commit_url(ctx.repo_url, &squash.full_sha)
        );
        if let Some(pr) = ctx.pr_number {
            let _ = writeln!(out, "Pull request: [#{}]({}/pull/{})", pr, ctx.repo_url, pr);
        }
        out.push('\n');
    }

    if grouping.is_empty() {
        out.push_str("_No changes._\n");
        return out;
    }

    for commit_type in ordered_types(grouping) {
        let Some(scopes) = grouping.scopes(commit_type) else {
            continue;
        };
        let _ = writeln!(out, "### {}\n", type_heading(commit_type));

        if let Some(entries) = scopes.get(NO_SCOPE) {
            for entry in entries {
                push_entry(&mut out, ctx.repo_url, entry);
            }
            out.push('\n');
        }

        for (scope, entries) in scopes.iter().filter(|(scope, _)| *scope != NO_SCOPE) {
            let _ = writeln!(out, "#### {}\n", scope);
            for entry in entries {
                push_entry(&mut out, ctx.repo_url, entry);
            }
            out.push('\n');
        }
    }

    out
}

#[derive(Serialize)]
struct JsonChangelog<'a> {
    #[serde(flatten)]
    context: &'a RenderContext<'a>,
    commits: &'a Grouping,
}

/// Render the context and grouped commits as pretty-printed JSON.
pub fn render_json(ctx: &RenderContext<'_>, grouping: &Grouping) -> Result<String, ChangelogError> {
    serde_json::to_string_pretty(&JsonChangelog {
        context: ctx,
        commits: grouping,
    })
    .map_err(ChangelogError::SerializationFailed)
}

fn commit_url(repo_url: &str, full_sha: &str) -> String {
    format!("{}/commit/{}", repo_url, full_sha)
}

/// Remove one leading `- ` or `* ` bullet so body lines are not double-bulleted.
fn strip_bullet(line: &str) -> &str {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim_start)
        .unwrap_or(line)
}

fn push_entry(out: &mut String, repo_url: &str, entry: &GroupedEntry) {
    out.push_str("- ");
    out.push_str(&entry.title);
    if let (Some(short), Some(full)) = (&entry.short_sha, &entry.full_sha) {
        let _ = write!(out, " ([{}]({}))", short, commit_url(repo_url, full));
    }
    out.push('\n');

    for line in entry.body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let _ = writeln!(out, "  - {}", strip_bullet(line));
    }
}
