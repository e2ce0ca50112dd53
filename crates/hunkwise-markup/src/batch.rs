//! Line batching and character-level pairing.
//!
//! Unified-diff body lines are fed through [`BatchState`] one at a time. A batch is a run of
//! removal lines optionally followed by addition lines; when it closes, removal `i` is paired
//! with addition `i` and the pair is diffed character by character. Extra lines on either side
//! stay unpaired and get no character highlighting.
use similar::DiffTag;
use similar::TextDiff;

use crate::line::Emphasis;
use crate::line::LineKind;
use crate::line::MarkedLine;
use crate::line::Segment;
use crate::line::split_marker;

/// Leading lines passed through untouched (`--- a/...`, `+++ b/...`).
pub const HEADER_LINES: usize = 2;

/// What a line means to the batching state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Removal,
    Addition,
    Other,
}

impl LineClass {
    pub fn of(line: &str) -> Self {
        match LineKind::of(line) {
            LineKind::Blank => LineClass::Blank,
            LineKind::Removed => LineClass::Removal,
            LineKind::Added => LineClass::Addition,
            _ => LineClass::Other,
        }
    }
}

/// An open run of removals and additions.
///
/// `start` is the line index of the first removal; the additions follow the removals
/// immediately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    pub start: usize,
    pub removals: Vec<String>,
    pub additions: Vec<String>,
}

impl Batch {
    fn open(start: usize, removal: &str) -> Self {
        Self {
            start,
            removals: vec![removal.to_string()],
            additions: Vec::new(),
        }
    }

    /// Number of removal/addition pairs that get character highlighting.
    pub fn pairs(&self) -> usize {
        self.removals.len().min(self.additions.len())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BatchState {
    #[default]
    Idle,
    Accumulating(Batch),
}

impl BatchState {
    /// Feeds line `index` with marker-less `content`. Returns a batch that has closed and
    /// must be flushed.
    pub fn advance(&mut self, index: usize, class: LineClass, content: &str) -> Option<Batch> {
        match (std::mem::take(self), class) {
            (BatchState::Idle, LineClass::Removal) => {
                *self = BatchState::Accumulating(Batch::open(index, content));
                None
            }
            // additions without a preceding removal stay plain
            (BatchState::Idle, _) => None,
            (BatchState::Accumulating(mut batch), LineClass::Removal) => {
                if batch.additions.is_empty() {
                    batch.removals.push(content.to_string());
                    *self = BatchState::Accumulating(batch);
                    None
                } else {
                    *self = BatchState::Accumulating(Batch::open(index, content));
                    Some(batch)
                }
            }
            (BatchState::Accumulating(mut batch), LineClass::Addition) => {
                batch.additions.push(content.to_string());
                *self = BatchState::Accumulating(batch);
                None
            }
            (BatchState::Accumulating(batch), LineClass::Blank | LineClass::Other) => Some(batch),
        }
    }

    /// Closes the state at end of input.
    pub fn finish(&mut self) -> Option<Batch> {
        match std::mem::take(self) {
            BatchState::Idle => None,
            BatchState::Accumulating(batch) => Some(batch),
        }
    }
}

/// Splits unified diff text into marked lines, with character-level emphasis on paired
/// removal/addition lines.
pub fn mark_lines(unified: &str) -> Vec<MarkedLine> {
    let mut lines: Vec<MarkedLine> = Vec::new();
    let mut state = BatchState::Idle;

    for (idx, raw) in unified.split('\n').enumerate() {
        if idx < HEADER_LINES {
            lines.push(MarkedLine::header(raw));
            continue;
        }
        lines.push(MarkedLine::plain(raw));
        let content = split_marker(raw).map_or("", |(_, rest)| rest);
        if let Some(batch) = state.advance(idx, LineClass::of(raw), content) {
            flush(&mut lines, &batch);
        }
    }
    if let Some(batch) = state.finish() {
        flush(&mut lines, &batch);
    }
    lines
}

fn flush(lines: &mut [MarkedLine], batch: &Batch) {
    let pairs = batch.pairs();
    log::trace!(
        "batch at line {}: {} removals, {} additions, {pairs} paired",
        batch.start,
        batch.removals.len(),
        batch.additions.len()
    );
    for k in 0..pairs {
        let (removed, added) = pair_segments(&batch.removals[k], &batch.additions[k]);
        if let Some(line) = lines.get_mut(batch.start + k) {
            *line = MarkedLine::removed(removed);
        }
        if let Some(line) = lines.get_mut(batch.start + batch.removals.len() + k) {
            *line = MarkedLine::added(added);
        }
    }
}

/// Diffs `old` against `new` by character.
///
/// Returns the segments for the old line (deleted runs emphasized as removed) and for the new
/// line (inserted runs emphasized as added). Unchanged runs appear on both sides.
pub fn pair_segments(old: &str, new: &str) -> (Vec<Segment>, Vec<Segment>) {
    let diff = TextDiff::from_chars(old, new);
    let old_starts = char_start_indices(old);
    let new_starts = char_start_indices(new);

    let mut removed: Vec<Segment> = Vec::new();
    let mut added: Vec<Segment> = Vec::new();
    for op in diff.ops() {
        let (tag, o, n) = op.as_tag_tuple();
        let old_text = &old[old_starts[o.start]..old_starts[o.end]];
        let new_text = &new[new_starts[n.start]..new_starts[n.end]];
        match tag {
            DiffTag::Equal => {
                push_segment(&mut removed, old_text, None);
                push_segment(&mut added, new_text, None);
            }
            DiffTag::Delete => push_segment(&mut removed, old_text, Some(Emphasis::Removed)),
            DiffTag::Insert => push_segment(&mut added, new_text, Some(Emphasis::Added)),
            DiffTag::Replace => {
                push_segment(&mut removed, old_text, Some(Emphasis::Removed));
                push_segment(&mut added, new_text, Some(Emphasis::Added));
            }
        }
    }
    (removed, added)
}

fn push_segment(out: &mut Vec<Segment>, text: &str, emphasis: Option<Emphasis>) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.emphasis == emphasis => last.text.push_str(text),
        _ => out.push(Segment {
            text: text.to_string(),
            emphasis,
        }),
    }
}

fn char_start_indices(s: &str) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::with_capacity(s.len() + 1);
    for (idx, _) in s.char_indices() {
        out.push(idx);
    }
    out.push(s.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(state: &mut BatchState, index: usize, line: &str) -> Option<Batch> {
        let content = split_marker(line).map_or("", |(_, rest)| rest);
        state.advance(index, LineClass::of(line), content)
    }

    #[test]
    fn removal_opens_batch() {
        let mut state = BatchState::Idle;
        assert_eq!(feed(&mut state, 3, "-a"), None);
        assert_eq!(
            state,
            BatchState::Accumulating(Batch {
                start: 3,
                removals: vec!["a".into()],
                additions: vec![],
            })
        );
    }

    #[test]
    fn idle_ignores_additions_and_context() {
        let mut state = BatchState::Idle;
        assert_eq!(feed(&mut state, 2, "+a"), None);
        assert_eq!(feed(&mut state, 3, " b"), None);
        assert_eq!(feed(&mut state, 4, ""), None);
        assert_eq!(state, BatchState::Idle);
    }

    #[test]
    fn removals_then_additions_accumulate() {
        let mut state = BatchState::Idle;
        feed(&mut state, 2, "-a");
        feed(&mut state, 3, "-b");
        feed(&mut state, 4, "+c");
        let closed = feed(&mut state, 5, " d").unwrap();
        assert_eq!(closed.start, 2);
        assert_eq!(closed.removals, vec!["a", "b"]);
        assert_eq!(closed.additions, vec!["c"]);
        assert_eq!(closed.pairs(), 1);
        assert_eq!(state, BatchState::Idle);
    }

    #[test]
    fn removal_after_additions_starts_new_batch() {
        let mut state = BatchState::Idle;
        feed(&mut state, 2, "-a");
        feed(&mut state, 3, "+b");
        let closed = feed(&mut state, 4, "-c").unwrap();
        assert_eq!(closed.removals, vec!["a"]);
        assert_eq!(closed.additions, vec!["b"]);
        let open = state.finish().unwrap();
        assert_eq!(open.start, 4);
        assert_eq!(open.removals, vec!["c"]);
    }

    #[test]
    fn blank_line_flushes() {
        let mut state = BatchState::Idle;
        feed(&mut state, 2, "-a");
        assert!(feed(&mut state, 3, "").is_some());
        assert_eq!(state.finish(), None);
    }

    #[test]
    fn no_newline_marker_closes_batch() {
        let mut state = BatchState::Idle;
        feed(&mut state, 3, "-gone");
        let closed = feed(&mut state, 4, "\\ No newline at end of file").unwrap();
        assert_eq!(closed.pairs(), 0);
        assert_eq!(feed(&mut state, 5, "+new"), None);
        assert_eq!(state, BatchState::Idle);
    }

    #[test]
    fn extra_additions_stay_plain() {
        let lines = mark_lines("--- a/x\n+++ b/x\n@@ -1 +1,2 @@\n-foo\n+far\n+extra\n");
        assert_eq!(
            lines[4].segments,
            vec![
                Segment::plain("f"),
                Segment::emphasized("ar", Emphasis::Added)
            ]
        );
        assert_eq!(lines[5], MarkedLine::plain("+extra"));
    }

    #[test]
    fn pairs_differing_characters() {
        let (removed, added) = pair_segments("foo", "far");
        assert_eq!(
            removed,
            vec![
                Segment::plain("f"),
                Segment::emphasized("oo", Emphasis::Removed)
            ]
        );
        assert_eq!(
            added,
            vec![
                Segment::plain("f"),
                Segment::emphasized("ar", Emphasis::Added)
            ]
        );
    }

    #[test]
    fn identical_lines_have_no_emphasis() {
        let (removed, added) = pair_segments("same", "same");
        assert_eq!(removed, vec![Segment::plain("same")]);
        assert_eq!(added, vec![Segment::plain("same")]);
    }

    #[test]
    fn mark_lines_pairs_by_position() {
        let diff = "--- a/x\n+++ b/x\n@@ -1,3 +1,2 @@\n-one\n-two\n-three\n+one!\n+two!\n";
        let lines = mark_lines(diff);
        assert_eq!(lines[0].kind, LineKind::Header);
        assert_eq!(lines[1].kind, LineKind::Header);
        assert_eq!(lines[2].kind, LineKind::Comment);

        let emphasized = |line: &MarkedLine| line.segments.iter().any(|s| s.emphasis.is_some());
        assert!(emphasized(&lines[6]));
        assert!(emphasized(&lines[7]));
        // "three" has no partner
        assert_eq!(lines[5], MarkedLine::plain("-three"));
        assert_eq!(lines[3].raw(), "-one");
        assert_eq!(lines[6].raw(), "+one!");
        assert_eq!(lines[8].kind, LineKind::Blank);
    }
}
