//! Changelog rendering and writing.

pub mod format;
pub mod render;
pub mod writer;

pub use format::{generate_summary, ordered_types, type_heading};
pub use render::{RenderContext, is_unreleased, pr_preview_title, render_json, render_markdown};
pub use writer::{prepend_changelog, write_output};
