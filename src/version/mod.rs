//! Branch-driven semantic version bumping.

pub mod bump;
pub mod files;

pub use bump::{
    BumpType, NextVersion, VERSION_UNRELEASED, apply_bump_to_version, bump, calc_next_version,
    determine_bump_type, parse_current_version,
};
pub use files::{is_toml_config, update_project_version};
