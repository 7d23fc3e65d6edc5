//! Conventional commit classification and squash-body segmentation.

pub mod group;
pub mod header;
pub mod record;
pub mod segment;

pub use group::{Grouping, NO_SCOPE, OTHER_TYPE, group_commits};
pub use header::{ConventionalHeader, parse_header};
pub use record::{CommitRecord, GroupedEntry};
pub use segment::segment_squash_body;
