//! `hunkwise` reviews the difference between two versions of a text one hunk at a time.
//!
//! A [`DiffSession`] computes the line edits between a source and a changed text, groups
//! adjacent edits, and tracks which ones are kept. Any subset can be turned back into unified
//! diff text or applied to the source. With the default `markup` feature, [`markup`] renders
//! that text as tagged markup (HTML, Pango, ...) or as styled `ratatui` text.
//!
//! ```
//! use hunkwise::DiffSession;
//!
//! let mut session = DiffSession::new("notes.txt", "a\nb\nc\n", "a\nB\nc\n");
//! assert_eq!(session.total_edits(), 1);
//! assert_eq!(session.modified_kept().unwrap(), "a\nb\nc\n");
//!
//! session.keep_group(0);
//! assert_eq!(session.modified_kept().unwrap(), "a\nB\nc\n");
//! ```
//!
//! ## Features
//!
//! - `markup` (default): re-exports `hunkwise-markup` as [`markup`].
//! - `serde`: `Serialize`/`Deserialize` for the markup tag configuration.

pub use hunkwise_core::*;

#[cfg(feature = "markup")]
pub use hunkwise_markup as markup;
