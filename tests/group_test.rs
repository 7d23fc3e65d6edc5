//! Integration tests for conventional commit grouping.

use convlog::commit::{CommitRecord, NO_SCOPE, OTHER_TYPE, group_commits, segment_squash_body};

fn records(subjects: &[&str]) -> Vec<CommitRecord> {
    subjects.iter().map(|s| CommitRecord::new(*s, "")).collect()
}

#[test]
fn test_all_common_types() {
    let subjects = [
        "feat: a", "fix: b", "docs: c", "style: d", "refactor: e", "perf: f", "test: g",
        "build: h", "ci: i", "chore: j",
    ];
    let grouping = group_commits(&records(&subjects));

    let types: Vec<_> = grouping.types().collect();
    assert_eq!(
        types,
        ["feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore"]
    );
    assert_eq!(grouping.entry_count(), subjects.len());
}

#[test]
fn test_various_scopes() {
    let cases = [
        ("feat(api): new endpoint", "api"),
        ("fix(ui): button alignment", "ui"),
        ("feat(auth/oauth): add provider", "auth/oauth"),
        ("fix(db layer): connection leak", "db layer"),
        ("feat: no scope", NO_SCOPE),
    ];

    for (subject, expected_scope) in cases {
        let grouping = group_commits(&[CommitRecord::new(subject, "")]);
        let (_, scopes) = grouping.iter().next().unwrap();
        assert_eq!(
            scopes.keys().next().map(String::as_str),
            Some(expected_scope),
            "Failed scope for: {}",
            subject
        );
    }
}

#[test]
fn test_non_conventional_subjects_go_to_other() {
    let subjects = [
        "Updated the README",
        "Merge branch 'feature' into main",
        "feat!: bang is not part of the grammar",
        "v1.0.0",
    ];
    let grouping = group_commits(&records(&subjects));

    assert_eq!(grouping.types().collect::<Vec<_>>(), [OTHER_TYPE]);
    let titles: Vec<_> = grouping
        .bucket(OTHER_TYPE, NO_SCOPE)
        .unwrap()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, subjects);
}

#[test]
fn test_non_ascii_types_are_conventional() {
    let grouping = group_commits(&records(&["añadir(ui): botón", "修正: 空指针"]));

    assert_eq!(grouping.types().collect::<Vec<_>>(), ["añadir", "修正"]);
    assert_eq!(grouping.bucket("añadir", "ui").unwrap()[0].title, "botón");
    assert_eq!(grouping.bucket("修正", NO_SCOPE).unwrap()[0].title, "空指针");
    assert!(grouping.scopes(OTHER_TYPE).is_none());
}

#[test]
fn test_case_of_type_is_preserved() {
    let grouping = group_commits(&records(&["Feat: title case", "feat: lower"]));
    assert!(grouping.bucket("Feat", NO_SCOPE).is_some());
    assert!(grouping.bucket("feat", NO_SCOPE).is_some());
}

#[test]
fn test_grouping_is_idempotent() {
    let input = vec![
        CommitRecord::new("feat(api): a", "x").with_sha("1111111", "1111111aaaa"),
        CommitRecord::new("random", ""),
        CommitRecord::new("fix: b", "y"),
        CommitRecord::new("feat(api): c", ""),
    ];

    let first = group_commits(&input);
    let second = group_commits(&input);

    assert_eq!(first, second);
    assert_eq!(
        first.types().collect::<Vec<_>>(),
        second.types().collect::<Vec<_>>()
    );
}

#[test]
fn test_segment_then_group() {
    let commits = segment_squash_body("* feat(x): add the thing\n- with detail\nfix: repair it");
    let grouping = group_commits(&commits);

    assert_eq!(grouping.types().count(), 2);
    assert_eq!(grouping.entry_count(), 2);

    let feat = grouping.bucket("feat", "x").unwrap();
    assert_eq!(feat.len(), 1);
    assert_eq!(feat[0].title, "add the thing");
    assert_eq!(feat[0].body, "with detail");

    let fix = grouping.bucket("fix", NO_SCOPE).unwrap();
    assert_eq!(fix.len(), 1);
    assert_eq!(fix[0].title, "repair it");
}
