//! Semver calculation from branch-name rules.

use semver::Version;
use tracing::debug;

use crate::config::SemanticBranchConfig;
use crate::error::VersionError;

/// Version reported when nothing should be released.
pub const VERSION_UNRELEASED: &str = "UNRELEASED";

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

/// Outcome of a version calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersion {
    pub version: String,
    pub deploy: bool,
}

impl NextVersion {
    fn unreleased() -> Self {
        Self {
            version: VERSION_UNRELEASED.to_string(),
            deploy: false,
        }
    }
}

/// Determine the bump type for a branch.
///
/// Rules are checked minor first, then major, then patch. Returns `None`
/// when no rule matches.
pub fn determine_bump_type(branch: &str, cfg: &SemanticBranchConfig) -> Option<BumpType> {
    if cfg.minor.matches(branch) {
        Some(BumpType::Minor)
    } else if cfg.major.matches(branch) {
        Some(BumpType::Major)
    } else if cfg.patch.matches(branch) {
        Some(BumpType::Patch)
    } else {
        None
    }
}

/// Apply a bump to a version, dropping any pre-release or build metadata.
pub fn apply_bump_to_version(version: &Version, bump: Option<BumpType>) -> Version {
    match bump {
        Some(BumpType::Major) => Version::new(version.major + 1, 0, 0),
        Some(BumpType::Minor) => Version::new(version.major, version.minor + 1, 0),
        Some(BumpType::Patch) => Version::new(version.major, version.minor, version.patch + 1),
        None => Version::new(version.major, version.minor, version.patch),
    }
}

/// Parse a `MAJOR.MINOR.PATCH` version made of three integers.
///
/// Leading zeros are accepted (`1.02.3` is `1.2.3`); pre-release and build
/// suffixes are rejected.
pub fn parse_current_version(current: &str) -> Result<Version, VersionError> {
    let parse_failed = || VersionError::ParseFailed(current.to_string());

    let parts = current
        .trim()
        .split('.')
        .map(|part| part.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| parse_failed())?;

    match parts[..] {
        [major, minor, patch] => Ok(Version::new(major, minor, patch)),
        _ => Err(parse_failed()),
    }
}

/// Bump `current` according to the branch rules.
pub fn bump(
    branch: &str,
    cfg: &SemanticBranchConfig,
    current: &str,
) -> Result<Version, VersionError> {
    let version = parse_current_version(current)?;
    let bump_type = determine_bump_type(branch, cfg);

    debug!(branch, ?bump_type, %version, "Determined bump type");

    Ok(apply_bump_to_version(&version, bump_type))
}

/// Calculate the next version and whether it should be deployed.
///
/// - Branches on the ignore list for the current mode are `UNRELEASED`.
/// - Prereleases on a `prerelease` branch get a `.devN` suffix, where `N`
///   comes from `commit_count` (only called in that case).
/// - Releases always deploy the bumped version.
/// - Prereleases on any other branch are an error.
pub fn calc_next_version<F>(
    cfg: &SemanticBranchConfig,
    branch: &str,
    prerelease: bool,
    current: &str,
    commit_count: F,
) -> Result<NextVersion, VersionError>
where
    F: FnOnce() -> Result<usize, VersionError>,
{
    let ignored = if prerelease {
        cfg.prerelease_ignore.matches(branch)
    } else {
        cfg.release_ignore.matches(branch)
    };
    if ignored {
        debug!(branch, prerelease, "Branch is ignored");
        return Ok(NextVersion::unreleased());
    }

    let next = bump(branch, cfg, current)?;

    if !prerelease {
        return Ok(NextVersion {
            version: next.to_string(),
            deploy: true,
        });
    }

    if cfg.prerelease.matches(branch) {
        let count = commit_count()?;
        return Ok(NextVersion {
            version: format!("{}.dev{}", next, count),
            deploy: true,
        });
    }

    Err(VersionError::NoMatchingRule(branch.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BranchRules;

    fn rules(patterns: &[&str]) -> BranchRules {
        BranchRules::from_patterns(patterns).unwrap()
    }

    fn config() -> SemanticBranchConfig {
        SemanticBranchConfig {
            major: rules(&["breaking/.*"]),
            minor: rules(&["feat/.*"]),
            patch: rules(&["fix/.*"]),
            prerelease: rules(&["develop", "feat/.*"]),
            prerelease_ignore: rules(&["docs/.*"]),
            release_ignore: rules(&["chore/.*"]),
        }
    }

    fn no_count() -> Result<usize, VersionError> {
        panic!("commit count should not be needed")
    }

    #[test]
    fn test_minor_bump() {
        let next = bump("feat/login", &config(), "1.2.3").unwrap();
        assert_eq!(next, Version::new(1, 3, 0));
    }

    #[test]
    fn test_major_bump() {
        let next = bump("breaking/api", &config(), "1.2.3").unwrap();
        assert_eq!(next, Version::new(2, 0, 0));
    }

    #[test]
    fn test_patch_bump() {
        let next = bump("fix/typo", &config(), "1.2.3").unwrap();
        assert_eq!(next, Version::new(1, 2, 4));
    }

    #[test]
    fn test_no_rule_keeps_version() {
        let next = bump("random", &config(), "1.2.3").unwrap();
        assert_eq!(next, Version::new(1, 2, 3));
    }

    #[test]
    fn test_minor_checked_before_major() {
        let mut cfg = config();
        cfg.major = rules(&["feat/.*"]);
        assert_eq!(determine_bump_type("feat/x", &cfg), Some(BumpType::Minor));
    }

    #[test]
    fn test_invalid_current_version() {
        for current in ["1.2", "1.2.3.4", "1.2.x", "", "1.2.3-rc.1", "1.2.3+build"] {
            let err = bump("feat/x", &config(), current).unwrap_err();
            assert!(
                matches!(err, VersionError::ParseFailed(ref v) if v == current),
                "expected parse failure for {:?}",
                current
            );
        }
    }

    #[test]
    fn test_leading_zeros_in_current_version() {
        assert_eq!(parse_current_version("1.02.3").unwrap(), Version::new(1, 2, 3));
        let next = bump("fix/x", &config(), "01.02.003").unwrap();
        assert_eq!(next, Version::new(1, 2, 4));
    }

    #[test]
    fn test_release_deploys_bumped_version() {
        let next = calc_next_version(&config(), "fix/x", false, "0.4.1", no_count).unwrap();
        assert_eq!(next.version, "0.4.2");
        assert!(next.deploy);
    }

    #[test]
    fn test_release_ignore() {
        let next = calc_next_version(&config(), "chore/deps", false, "0.4.1", no_count).unwrap();
        assert_eq!(next.version, VERSION_UNRELEASED);
        assert!(!next.deploy);
    }

    #[test]
    fn test_prerelease_ignore_only_applies_to_prereleases() {
        let cfg = config();
        let pre = calc_next_version(&cfg, "docs/readme", true, "1.0.0", no_count).unwrap();
        assert!(!pre.deploy);

        let release = calc_next_version(&cfg, "docs/readme", false, "1.0.0", no_count).unwrap();
        assert_eq!(release.version, "1.0.0");
        assert!(release.deploy);
    }

    #[test]
    fn test_prerelease_dev_suffix() {
        let next = calc_next_version(&config(), "feat/x", true, "1.2.3", || Ok(57)).unwrap();
        assert_eq!(next.version, "1.3.0.dev57");
        assert!(next.deploy);
    }

    #[test]
    fn test_prerelease_without_rule_fails() {
        let err = calc_next_version(&config(), "fix/x", true, "1.2.3", no_count).unwrap_err();
        assert!(matches!(err, VersionError::NoMatchingRule(b) if b == "fix/x"));
    }
}
