//! Error types for edit application and index lookups.

use thiserror::Error;

/// Errors produced by [`DiffSession`](crate::session::DiffSession) outputs and by
/// [`apply_edits`](crate::edit::apply_edits).
///
/// Keep/skip operations never return these; they report invalid indices through a `bool`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiffError {
    /// An edit index outside `0..len` was passed to a single-edit accessor.
    #[error("edit index {index} out of range (session has {len} edits)")]
    EditIndex { index: usize, len: usize },

    /// A group index outside `0..len` was passed to a group accessor.
    #[error("group index {index} out of range (session has {len} groups)")]
    GroupIndex { index: usize, len: usize },

    /// Two edits claim overlapping parts of the source text.
    #[error("edit starting at byte {start} overlaps a previous edit ending at byte {previous_end}")]
    Overlap { start: usize, previous_end: usize },

    /// An edit span does not lie within the source text (or splits a UTF-8 character).
    #[error("edit span {start}..{end} does not fit a source of {len} bytes")]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}

pub type Result<T, E = DiffError> = std::result::Result<T, E>;
