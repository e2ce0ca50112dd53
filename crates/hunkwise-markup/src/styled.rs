//! Rendering to styled `ratatui` text instead of markup strings.
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use unicode_width::UnicodeWidthStr;

use crate::batch::mark_lines;
use crate::line::Emphasis;
use crate::line::LineKind;
use crate::line::MarkedLine;

/// Styles for [`render_styled`], one per markup tag of a
/// [`RenderConfig`](crate::tags::RenderConfig). There is no file-level style.
///
/// `text_added`/`text_removed` are patched on top of the line style.
#[derive(Clone, Debug)]
pub struct DiffStyles {
    pub normal: Style,
    pub comment: Style,
    pub line_added: Style,
    pub line_removed: Style,
    pub text_added: Style,
    pub text_removed: Style,
}

impl Default for DiffStyles {
    fn default() -> Self {
        Self {
            normal: Style::default(),
            comment: Style::default().dark_gray().italic(),
            line_added: Style::default().green(),
            line_removed: Style::default().red(),
            text_added: Style::default().add_modifier(Modifier::REVERSED),
            text_removed: Style::default().add_modifier(Modifier::REVERSED | Modifier::CROSSED_OUT),
        }
    }
}

/// A rendered diff plus the widest line, for sizing a viewport.
#[derive(Clone, Debug, Default)]
pub struct StyledDiff {
    pub text: Text<'static>,
    pub max_content_width: u16,
}

/// Renders unified diff text with the same line batching and character pairing as
/// [`MarkupRenderer`](crate::render::MarkupRenderer). Blank lines are dropped and tabs are
/// expanded to four spaces.
pub fn render_styled(unified: &str, styles: &DiffStyles) -> StyledDiff {
    let mut out = StyledDiff::default();
    let mut lines: Vec<Line<'static>> = Vec::new();
    for marked in mark_lines(unified) {
        let Some(line) = styled_line(marked, styles) else {
            continue;
        };
        let width: usize = line
            .spans
            .iter()
            .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
            .sum();
        out.max_content_width = out
            .max_content_width
            .max(width.min(u16::MAX as usize) as u16);
        lines.push(line);
    }
    out.text = Text::from(lines);
    out
}

fn styled_line(marked: MarkedLine, styles: &DiffStyles) -> Option<Line<'static>> {
    let line_style = match marked.kind {
        LineKind::Blank => return None,
        LineKind::Added => styles.line_added,
        LineKind::Removed => styles.line_removed,
        LineKind::Comment => styles.comment,
        LineKind::Header | LineKind::Context => styles.normal,
    };

    let mut spans: Vec<Span<'static>> = Vec::with_capacity(marked.segments.len() + 1);
    if let Some(marker) = marked.marker {
        spans.push(Span::styled(marker.to_string(), line_style));
    }
    for segment in marked.segments {
        let style = match segment.emphasis {
            None => line_style,
            Some(Emphasis::Added) => line_style.patch(styles.text_added),
            Some(Emphasis::Removed) => line_style.patch(styles.text_removed),
        };
        let text = if segment.text.contains('\t') {
            segment.text.replace('\t', "    ")
        } else {
            segment.text
        };
        spans.push(Span::styled(text, style));
    }
    Some(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn renders_one_line_per_diff_line() {
        let diff = "--- a/x\n+++ b/x\n@@ -1 +1 @@\n-foo\n+far\n";
        let styled = render_styled(diff, &DiffStyles::default());
        let lines: Vec<String> = styled.text.lines.iter().map(plain).collect();
        assert_eq!(
            lines,
            vec!["--- a/x", "+++ b/x", "@@ -1 +1 @@", "-foo", "+far"]
        );
        assert_eq!(styled.max_content_width, 11);
    }

    #[test]
    fn paired_characters_are_patched() {
        let diff = "--- a/x\n+++ b/x\n@@ -1 +1 @@\n-foo\n+far\n";
        let styles = DiffStyles::default();
        let styled = render_styled(diff, &styles);

        let removed = &styled.text.lines[3];
        assert_eq!(removed.spans.len(), 3);
        assert_eq!(removed.spans[2].content, "oo");
        let (unchanged, struck) = (removed.spans[1].style, removed.spans[2].style);
        assert_eq!(struck.fg, Some(Color::Red));
        assert!(struck.add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!unchanged.add_modifier.contains(Modifier::REVERSED));

        let added = &styled.text.lines[4];
        assert_eq!(added.spans[2].content, "ar");
        let inserted = added.spans[2].style;
        assert_eq!(inserted.fg, Some(Color::Green));
        assert!(inserted.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn expands_tabs_and_measures_wide_chars() {
        let diff = "--- a/x\n+++ b/x\n \tindent\n 你好\n";
        let styled = render_styled(diff, &DiffStyles::default());
        assert_eq!(plain(&styled.text.lines[2]), "     indent");
        assert_eq!(styled.max_content_width, 11);
        assert_eq!(plain(&styled.text.lines[3]), " 你好");
    }
}
