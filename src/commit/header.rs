//! Conventional commit header grammar: `type(scope): description`.

use std::sync::LazyLock;

use regex::Regex;

/// Full header: type, optional non-empty scope, colon, description.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[^)]+)\))?:\s*(?P<desc>.+)$")
        .expect("conventional header pattern is valid")
});

/// Sub-commit marker inside a squash body. The scope may be empty, and the
/// colon must be followed by whitespace.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+(?:\([^)]*\))?:\s").expect("squash marker pattern is valid")
});

/// A parsed conventional commit header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalHeader<'a> {
    pub commit_type: &'a str,
    pub scope: Option<&'a str>,
    pub description: &'a str,
}

/// Parse a subject line as a conventional commit header.
///
/// Returns `None` when the line does not follow the grammar or when the
/// description is blank.
pub fn parse_header(subject: &str) -> Option<ConventionalHeader<'_>> {
    let caps = HEADER.captures(subject)?;

    let commit_type = caps.name("type")?.as_str();
    let scope = caps.name("scope").map(|m| m.as_str());
    let description = caps.name("desc")?.as_str().trim();

    if description.is_empty() {
        return None;
    }

    Some(ConventionalHeader {
        commit_type,
        scope,
        description,
    })
}

/// Returns true if a trimmed squash-body line opens a new sub-commit by
/// looking like a conventional header.
pub fn is_header_marker(line: &str) -> bool {
    MARKER.is_match(line)
}
