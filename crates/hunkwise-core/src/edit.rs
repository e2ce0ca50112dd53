use crate::error::DiffError;
use crate::error::Result;

/// A position in the source text.
///
/// `line` and `column` are 0-based; `offset` is the byte offset into the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// A half-open region of the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Point,
    pub end: Point,
}

impl Span {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns `true` for an insertion point (no source text covered).
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

/// One atomic change: replace `span` of the source with `new_text`.
///
/// A deletion has an empty `new_text`, an insertion has an empty span.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edit {
    pub span: Span,
    pub new_text: String,
}

impl Edit {
    pub fn new(span: Span, new_text: impl Into<String>) -> Self {
        Self {
            span,
            new_text: new_text.into(),
        }
    }

    pub fn start_line(&self) -> usize {
        self.span.start.line
    }

    /// The line the edit's span ends on. Grouping is decided by this value alone.
    pub fn end_line(&self) -> usize {
        self.span.end.line
    }
}

/// Applies `edits` to `source` and returns the resulting text.
///
/// Edits may be passed in any order; they are applied in span order. Overlapping spans and
/// spans outside of `source` are rejected instead of producing a corrupted result.
pub fn apply_edits<'a>(source: &str, edits: impl IntoIterator<Item = &'a Edit>) -> Result<String> {
    let mut sorted: Vec<&Edit> = edits.into_iter().collect();
    sorted.sort_by_key(|e| (e.span.start.offset, e.span.end.offset));

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for edit in sorted {
        let start = edit.span.start.offset;
        let end = edit.span.end.offset;
        if start > end
            || end > source.len()
            || !source.is_char_boundary(start)
            || !source.is_char_boundary(end)
        {
            return Err(DiffError::SpanOutOfBounds {
                start,
                end,
                len: source.len(),
            });
        }
        if start < cursor {
            return Err(DiffError::Overlap {
                start,
                previous_end: cursor,
            });
        }
        out.push_str(&source[cursor..start]);
        out.push_str(&edit.new_text);
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(start: usize, end: usize, text: &str) -> Edit {
        Edit::new(
            Span::new(Point::new(0, start, start), Point::new(0, end, end)),
            text,
        )
    }

    #[test]
    fn applies_in_span_order() {
        let edits = [edit(4, 5, "Y"), edit(0, 1, "X")];
        assert_eq!(apply_edits("a\nb\nc", &edits).unwrap(), "X\nb\nY");
    }

    #[test]
    fn no_edits_returns_source() {
        assert_eq!(apply_edits("abc", std::iter::empty()).unwrap(), "abc");
    }

    #[test]
    fn insertion_at_end() {
        let edits = [edit(3, 3, "d")];
        assert_eq!(apply_edits("abc", &edits).unwrap(), "abcd");
    }

    #[test]
    fn rejects_overlap() {
        let edits = [edit(0, 3, "x"), edit(2, 4, "y")];
        assert_eq!(
            apply_edits("abcdef", &edits),
            Err(DiffError::Overlap {
                start: 2,
                previous_end: 3
            })
        );
    }

    #[test]
    fn rejects_span_past_end() {
        let edits = [edit(2, 9, "")];
        assert_eq!(
            apply_edits("abc", &edits),
            Err(DiffError::SpanOutOfBounds {
                start: 2,
                end: 9,
                len: 3
            })
        );
    }

    #[test]
    fn rejects_split_character() {
        let edits = [edit(1, 2, "")];
        assert!(matches!(
            apply_edits("é", &edits),
            Err(DiffError::SpanOutOfBounds { .. })
        ));
    }
}
