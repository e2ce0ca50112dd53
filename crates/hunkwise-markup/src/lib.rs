//! Markup rendering for unified diffs.
//!
//! The input is plain unified-diff text, from `hunkwise-core` or anywhere else. Lines are
//! classified by their leading marker, consecutive removal/addition runs are paired line by
//! line, and each pair is diffed by character so the changed part of a line can be
//! highlighted on its own.
//!
//! ## Two outputs
//!
//! - [`render::MarkupRenderer`]: tag strings (HTML, Pango, bracket markup...) configured through
//!   [`render::RenderBuilder`] or one of the [`presets`].
//! - [`styled::render_styled`]: `ratatui` [`Text`](ratatui::text::Text) with [`styled::DiffStyles`].
pub mod batch;
pub mod escape;
pub mod line;
pub mod presets;
pub mod render;
pub mod styled;
pub mod tags;

pub use render::MarkupRenderer;
pub use render::RenderBuilder;
pub use styled::DiffStyles;
pub use styled::StyledDiff;
pub use styled::render_styled;
pub use tags::AddRemTags;
pub use tags::MarkupTag;
pub use tags::RenderConfig;
