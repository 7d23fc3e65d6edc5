//! Git history access using git2-rs.

pub mod commits;
pub mod range;
pub mod squash;

pub use commits::{count_commits, fetch_pr_commits, record_from_commit};
pub use range::{DEFAULT_BASE_REF, PrRange, resolve_pr_range, resolve_reference};
pub use squash::{SquashCommit, fetch_squash_commit};
