use similar::Algorithm;
use similar::DiffTag;
use similar::TextDiff;
use similar::TextDiffConfig;
use std::time::Duration;

use crate::edit::Edit;
use crate::edit::Point;
use crate::edit::Span;
use crate::edit::apply_edits;
use crate::error::Result;

/// The line-diff backend used by a [`DiffSession`](crate::session::DiffSession).
///
/// An implementation computes the raw edit list, serializes edit subsets as unified diff text
/// and applies edit subsets to the source. [`LineDiff`] is the default, built on `similar`.
pub trait EditSource {
    /// Computes the ordered edit list that turns `source` into `changed`.
    ///
    /// Edits must be returned in ascending source order; sessions rely on the index of an edit
    /// staying stable.
    fn compute(&self, path_hint: &str, source: &str, changed: &str) -> Vec<Edit>;

    /// Serializes `edits` (a subset of a computed edit list) as a unified diff.
    ///
    /// An empty subset yields an empty string.
    fn unified(
        &self,
        old_path: &str,
        new_path: &str,
        source: &str,
        edits: &[&Edit],
    ) -> Result<String>;

    /// Applies `edits` to `source`.
    fn apply(&self, source: &str, edits: &[&Edit]) -> Result<String> {
        apply_edits(source, edits.iter().copied())
    }
}

/// Options for [`LineDiff`].
#[derive(Clone, Debug)]
pub struct LineDiffOptions {
    pub algorithm: Algorithm,
    /// Unchanged lines shown around each hunk in unified output.
    pub context_radius: usize,
    /// Emit `\ No newline at end of file` markers.
    pub missing_newline_hint: bool,
    /// Upper bound for a single diff computation; `similar` falls back to a coarser diff when
    /// it runs out of time.
    pub timeout: Option<Duration>,
}

impl Default for LineDiffOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Myers,
            context_radius: 3,
            missing_newline_hint: true,
            timeout: None,
        }
    }
}

/// Line-granular [`EditSource`] backed by `similar`.
///
/// A run of removed lines directly followed by a run of added lines becomes a single
/// replacement edit; pure removals and pure additions become one edit each.
#[derive(Clone, Debug, Default)]
pub struct LineDiff {
    options: LineDiffOptions,
}

impl LineDiff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LineDiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LineDiffOptions {
        &self.options
    }

    fn config(&self) -> TextDiffConfig {
        let mut config = TextDiff::configure();
        config.algorithm(self.options.algorithm);
        if let Some(timeout) = self.options.timeout {
            config.timeout(timeout);
        }
        config
    }
}

impl EditSource for LineDiff {
    fn compute(&self, path_hint: &str, source: &str, changed: &str) -> Vec<Edit> {
        let diff = self.config().diff_lines(source, changed);
        let new_lines = diff.new_slices();
        let starts = line_starts(diff.old_slices());

        let mut edits: Vec<Edit> = Vec::new();
        let mut prev_tag = DiffTag::Equal;
        // old-side line reached so far; an insert's own old index can lag behind it
        let mut cursor = 0usize;
        for op in diff.ops() {
            let (tag, old, new) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => {}
                DiffTag::Insert if prev_tag == DiffTag::Delete => {
                    // removal run followed by an addition run: one replacement
                    if let Some(last) = edits.last_mut() {
                        last.new_text.push_str(&new_lines[new].concat());
                    }
                }
                DiffTag::Insert => {
                    let at = Point::new(cursor, 0, starts[cursor]);
                    edits.push(Edit::new(Span::new(at, at), new_lines[new].concat()));
                }
                DiffTag::Delete if prev_tag == DiffTag::Insert => {
                    let end = old.end.max(cursor);
                    if let Some(last) = edits.last_mut() {
                        last.span.end = Point::new(end, 0, starts[end]);
                    }
                }
                DiffTag::Delete | DiffTag::Replace => {
                    let span = Span::new(
                        Point::new(old.start, 0, starts[old.start]),
                        Point::new(old.end, 0, starts[old.end]),
                    );
                    edits.push(Edit::new(span, new_lines[new].concat()));
                }
            }
            if tag != DiffTag::Insert {
                cursor = cursor.max(old.end);
            }
            prev_tag = tag;
        }

        log::debug!("computed {} edits for {path_hint}", edits.len());
        edits
    }

    fn unified(
        &self,
        old_path: &str,
        new_path: &str,
        source: &str,
        edits: &[&Edit],
    ) -> Result<String> {
        if edits.is_empty() {
            return Ok(String::new());
        }
        let target = self.apply(source, edits)?;
        let diff = self.config().diff_lines(source, target.as_str());
        let unified = diff
            .unified_diff()
            .context_radius(self.options.context_radius)
            .missing_newline_hint(self.options.missing_newline_hint)
            .header(old_path, new_path)
            .to_string();
        Ok(unified)
    }
}

/// Byte offset of every line start, plus the total length as a final entry.
fn line_starts(lines: &[&str]) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::with_capacity(lines.len() + 1);
    let mut offset = 0usize;
    out.push(offset);
    for line in lines {
        offset += line.len();
        out.push(offset);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_is_one_edit() {
        let edits = LineDiff::new().compute("abc.txt", "a\nb\nc\n", "a\nX\nc\n");
        assert_eq!(edits.len(), 1);
        let edit = &edits[0];
        assert_eq!(edit.span.start, Point::new(1, 0, 2));
        assert_eq!(edit.span.end, Point::new(2, 0, 4));
        assert_eq!(edit.new_text, "X\n");
    }

    #[test]
    fn deletion_and_insertion() {
        let edits = LineDiff::new().compute("t", "a\nb\nc\n", "a\nc\nd\n");
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0].new_text, "");
        assert_eq!(edits[0].span.start.offset, 2);
        assert_eq!(edits[0].span.end.offset, 4);
        assert!(edits[1].span.is_empty());
        assert_eq!(edits[1].span.start.offset, 6);
        assert_eq!(edits[1].new_text, "d\n");
    }

    #[test]
    fn identical_inputs_have_no_edits() {
        let differ = LineDiff::new();
        let edits = differ.compute("same", "nope", "nope");
        assert!(edits.is_empty());
        assert_eq!(differ.unified("a/x", "b/x", "nope", &[]).unwrap(), "");
    }

    #[test]
    fn unified_matches_direct_diff() {
        let source = "one\ntwo\nthree\nfour\n";
        let changed = "one\n2\nthree\nfour\nfive\n";
        let differ = LineDiff::new();
        let edits = differ.compute("n.txt", source, changed);
        let all: Vec<&Edit> = edits.iter().collect();
        let got = differ.unified("a/n.txt", "b/n.txt", source, &all).unwrap();
        let want = TextDiff::from_lines(source, changed)
            .unified_diff()
            .context_radius(3)
            .header("a/n.txt", "b/n.txt")
            .to_string();
        assert_eq!(got, want);
    }

    #[test]
    fn apply_all_edits_yields_changed() {
        let source = "fn main() {\n    old();\n}\n";
        let changed = "fn main() {\n    new();\n    more();\n}\n";
        let differ = LineDiff::new();
        let edits = differ.compute("main.rs", source, changed);
        let all: Vec<&Edit> = edits.iter().collect();
        assert_eq!(differ.apply(source, &all).unwrap(), changed);
    }

    #[test]
    fn insertions_follow_the_preceding_context() {
        let source = "b\nc\na\nc\n\na\nb\n\na\n";
        let changed = "b\na\n\n\n\na\nc\n\nb\n";
        let differ = LineDiff::new();
        let edits = differ.compute("p", source, changed);
        for pair in edits.windows(2) {
            assert!(pair[0].span.end.offset <= pair[1].span.start.offset);
        }
        let starts = line_starts_of(source);
        for edit in &edits {
            assert_eq!(edit.span.start.offset, starts[edit.start_line()]);
        }
        let all: Vec<&Edit> = edits.iter().collect();
        assert_eq!(differ.apply(source, &all).unwrap(), changed);
    }

    fn line_starts_of(text: &str) -> Vec<usize> {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        line_starts(&lines)
    }
}
