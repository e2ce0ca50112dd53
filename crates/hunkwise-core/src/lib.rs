//! `hunkwise-core` computes line edits between two texts, groups them into hunks and lets a
//! caller choose which edits to keep.
//!
//! ## Layers
//!
//! - [`source::EditSource`]: the line-diff backend (computes, serializes and applies edits).
//!   [`source::LineDiff`] is the default implementation built on `similar`.
//! - [`group::group_edits`]: partitions an edit list into groups of adjacent edits.
//! - [`selection::Selection`]: the kept subset of edit indices.
//! - [`session::DiffSession`]: ties the three together and produces unified diffs and modified
//!   text filtered by the selection.
//! - [`shared::SharedDiffSession`]: the same operations behind a lock, for sharing a session
//!   between threads.
//!
//! Rendering unified diffs as markup lives in `hunkwise-markup`.
pub mod edit;
pub mod error;
pub mod group;
pub mod selection;
pub mod session;
pub mod shared;
pub mod source;

pub use edit::Edit;
pub use edit::Point;
pub use edit::Span;
pub use edit::apply_edits;
pub use error::DiffError;
pub use error::Result;
pub use group::EditGroup;
pub use group::group_edits;
pub use selection::Selection;
pub use session::DiffSession;
pub use session::EditSet;
pub use shared::SharedDiffSession;
pub use source::EditSource;
pub use source::LineDiff;
pub use source::LineDiffOptions;
