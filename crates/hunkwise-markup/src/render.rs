use std::borrow::Cow;

use crate::batch::mark_lines;
use crate::batch::pair_segments;
use crate::escape::escape_markup;
use crate::line::Emphasis;
use crate::line::LineKind;
use crate::line::Segment;
use crate::tags::MarkupTag;
use crate::tags::RenderConfig;

/// Fluent construction of a [`MarkupRenderer`]. Every tag defaults to empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderBuilder {
    config: RenderConfig,
}

impl RenderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the whole rendered diff.
    pub fn file(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.config.file = MarkupTag::new(open, close);
        self
    }

    /// Wraps context lines and the two header lines.
    pub fn normal(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.config.normal = MarkupTag::new(open, close);
        self
    }

    /// Wraps `@`, `\` and `#` lines.
    pub fn comment(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.config.comment = MarkupTag::new(open, close);
        self
    }

    pub fn line_added(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.config.line.add = MarkupTag::new(open, close);
        self
    }

    pub fn line_removed(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.config.line.rem = MarkupTag::new(open, close);
        self
    }

    pub fn text_added(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.config.text.add = MarkupTag::new(open, close);
        self
    }

    pub fn text_removed(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.config.text.rem = MarkupTag::new(open, close);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn build(self) -> MarkupRenderer {
        MarkupRenderer {
            config: self.config,
        }
    }
}

/// Renders unified diff text as tag-wrapped markup.
///
/// The renderer only sees text, so it works on any unified diff, not just ones produced by a
/// `DiffSession`. Its configuration is fixed once built; use [`to_builder`](Self::to_builder)
/// to derive a variant.
///
/// ```
/// use hunkwise_markup::MarkupRenderer;
///
/// let renderer = MarkupRenderer::builder()
///     .text_removed("[-", "-]")
///     .text_added("{+", "+}")
///     .build();
/// let markup = renderer.render_diff("--- a/x\n+++ b/x\n@@ -1 +1 @@\n-foo\n+far\n");
/// assert!(markup.contains("-f[-oo-]\n"));
/// assert!(markup.contains("+f{+ar+}\n"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkupRenderer {
    config: RenderConfig,
}

impl From<RenderConfig> for MarkupRenderer {
    fn from(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl MarkupRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> RenderBuilder {
        RenderBuilder::new()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// An independent builder seeded with this renderer's tags.
    pub fn to_builder(&self) -> RenderBuilder {
        RenderBuilder {
            config: self.config.clone(),
        }
    }

    /// Character-diffs a single pair of lines.
    ///
    /// Returns `(old, new)` markup without markers or line tags: deleted runs of `old` are
    /// wrapped in the text-removed tag, inserted runs of `new` in the text-added tag.
    pub fn render_line(&self, old: &str, new: &str) -> (String, String) {
        let (removed, added) = pair_segments(old, new);
        let mut old_out = String::new();
        let mut new_out = String::new();
        self.write_segments(&mut old_out, &removed, true);
        self.write_segments(&mut new_out, &added, true);
        (old_out, new_out)
    }

    /// Renders a whole unified diff.
    ///
    /// Every non-blank line is wrapped in exactly one line tag and followed by a newline; the
    /// result is wrapped once in the file tag.
    pub fn render_diff(&self, unified: &str) -> String {
        let mut out = String::with_capacity(unified.len() * 2);
        out.push_str(&self.config.file.open);
        for line in mark_lines(unified) {
            let tag = match line.kind {
                LineKind::Blank => continue,
                LineKind::Added => &self.config.line.add,
                LineKind::Removed => &self.config.line.rem,
                LineKind::Comment => &self.config.comment,
                LineKind::Header | LineKind::Context => &self.config.normal,
            };
            out.push_str(&tag.open);
            if let Some(marker) = line.marker {
                out.push(marker);
            }
            self.write_segments(&mut out, &line.segments, line.kind != LineKind::Header);
            out.push_str(&tag.close);
            out.push('\n');
        }
        out.push_str(&self.config.file.close);
        out
    }

    fn write_segments(&self, out: &mut String, segments: &[Segment], escape: bool) {
        for segment in segments {
            let text = if escape {
                escape_markup(&segment.text)
            } else {
                Cow::Borrowed(segment.text.as_str())
            };
            match segment.emphasis {
                None => out.push_str(&text),
                Some(Emphasis::Added) => self.config.text.add.wrap(out, &text),
                Some(Emphasis::Removed) => self.config.text.rem.wrap(out, &text),
            }
        }
    }
}
