//! Section ordering and headings for conventional commit types.

use std::cmp::Reverse;

use crate::commit::{Grouping, OTHER_TYPE};

/// Known conventional commit types in rendering order, with their headings.
const KNOWN_TYPES: &[(&str, &str)] = &[
    ("feat", "Features"),
    ("fix", "Bug Fixes"),
    ("perf", "Performance"),
    ("refactor", "Refactoring"),
    ("docs", "Documentation"),
    ("style", "Style"),
    ("test", "Tests"),
    ("build", "Build"),
    ("ci", "Continuous Integration"),
    ("chore", "Chores"),
];

/// Heading shown for a commit type section.
///
/// Unknown types use the raw type name.
pub fn type_heading(commit_type: &str) -> &str {
    if commit_type == OTHER_TYPE {
        return "Other Changes";
    }
    KNOWN_TYPES
        .iter()
        .find(|(ty, _)| *ty == commit_type)
        .map(|(_, heading)| *heading)
        .unwrap_or(commit_type)
}

/// Position of a type in the rendered changelog.
///
/// Known types come first in conventional order, unknown types follow in
/// first-seen order, and `other` is always last.
fn type_rank(commit_type: &str) -> (u8, usize) {
    if commit_type == OTHER_TYPE {
        return (2, 0);
    }
    match KNOWN_TYPES.iter().position(|(ty, _)| *ty == commit_type) {
        Some(pos) => (0, pos),
        None => (1, 0),
    }
}

/// Commit types of a grouping in rendering order.
pub fn ordered_types(grouping: &Grouping) -> Vec<&str> {
    let mut types: Vec<&str> = grouping.types().collect();
    // Stable sort keeps first-seen order among unknown types.
    types.sort_by_key(|ty| type_rank(ty));
    types
}

/// Count entries per type, in rendering order, for summary output.
pub fn count_by_type(grouping: &Grouping) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = ordered_types(grouping)
        .into_iter()
        .map(|ty| {
            let count = grouping
                .scopes(ty)
                .map(|scopes| scopes.values().map(Vec::len).sum::<usize>())
                .unwrap_or(0);
            (ty, count)
        })
        .collect();
    counts.sort_by_key(|(_, count)| Reverse(*count));
    counts
}

/// Generate a one-line summary of grouped commits for the user.
pub fn generate_summary(grouping: &Grouping) -> String {
    let total = grouping.entry_count();
    if total == 0 {
        return "No commits to group.".to_string();
    }

    let details: Vec<String> = count_by_type(grouping)
        .iter()
        .map(|(ty, count)| format!("{}: {}", ty, count))
        .collect();

    let commit_word = if total == 1 { "commit" } else { "commits" };

    format!("Grouped {} {} ({})", total, commit_word, details.join(", "))
}
