/// How a unified-diff line is decorated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// One of the two leading `---`/`+++` lines; passed through verbatim.
    Header,
    Added,
    Removed,
    /// `@@` hunk headers, `\ No newline` markers and `#` comments.
    Comment,
    Context,
    Blank,
}

impl LineKind {
    /// Classifies a body line by its leading marker.
    pub fn of(line: &str) -> Self {
        match line.as_bytes().first().copied() {
            None => LineKind::Blank,
            Some(b'+') => LineKind::Added,
            Some(b'-') => LineKind::Removed,
            Some(b'@' | b'\\' | b'#') => LineKind::Comment,
            Some(_) => LineKind::Context,
        }
    }
}

/// Character-level emphasis inside a paired removal/addition line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Added,
    Removed,
}

/// A run of raw (unescaped) line content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasis: Option<Emphasis>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: None,
        }
    }

    pub fn emphasized(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis: Some(emphasis),
        }
    }
}

/// A classified unified-diff line split into its marker and content segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkedLine {
    pub kind: LineKind,
    pub marker: Option<char>,
    pub segments: Vec<Segment>,
}

impl MarkedLine {
    pub fn header(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::blank();
        }
        Self {
            kind: LineKind::Header,
            marker: None,
            segments: vec![Segment::plain(raw)],
        }
    }

    pub fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            marker: None,
            segments: Vec::new(),
        }
    }

    /// A body line with a single unemphasized segment.
    pub fn plain(raw: &str) -> Self {
        let Some((marker, content)) = split_marker(raw) else {
            return Self::blank();
        };
        let segments = if content.is_empty() {
            Vec::new()
        } else {
            vec![Segment::plain(content)]
        };
        Self {
            kind: LineKind::of(raw),
            marker: Some(marker),
            segments,
        }
    }

    pub fn removed(segments: Vec<Segment>) -> Self {
        Self {
            kind: LineKind::Removed,
            marker: Some('-'),
            segments,
        }
    }

    pub fn added(segments: Vec<Segment>) -> Self {
        Self {
            kind: LineKind::Added,
            marker: Some('+'),
            segments,
        }
    }

    /// The line as it appeared in the input.
    pub fn raw(&self) -> String {
        let mut out = String::new();
        if let Some(marker) = self.marker {
            out.push(marker);
        }
        for segment in &self.segments {
            out.push_str(&segment.text);
        }
        out
    }
}

/// Splits a line into its marker character and the remaining content.
pub fn split_marker(line: &str) -> Option<(char, &str)> {
    let marker = line.chars().next()?;
    Some((marker, &line[marker.len_utf8()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_marker() {
        assert_eq!(LineKind::of("+added"), LineKind::Added);
        assert_eq!(LineKind::of("-removed"), LineKind::Removed);
        assert_eq!(LineKind::of("@@ -1 +1 @@"), LineKind::Comment);
        assert_eq!(
            LineKind::of("\\ No newline at end of file"),
            LineKind::Comment
        );
        assert_eq!(LineKind::of("# note"), LineKind::Comment);
        assert_eq!(LineKind::of(" context"), LineKind::Context);
        assert_eq!(LineKind::of("diff --git a/x b/x"), LineKind::Context);
        assert_eq!(LineKind::of(""), LineKind::Blank);
    }

    #[test]
    fn plain_line_keeps_raw_text() {
        let line = MarkedLine::plain("-old <b>");
        assert_eq!(line.kind, LineKind::Removed);
        assert_eq!(line.marker, Some('-'));
        assert_eq!(line.segments, vec![Segment::plain("old <b>")]);
        assert_eq!(line.raw(), "-old <b>");
    }

    #[test]
    fn headers_are_not_classified_by_marker() {
        let line = MarkedLine::header("--- a/file.txt");
        assert_eq!(line.kind, LineKind::Header);
        assert_eq!(line.marker, None);
        assert_eq!(line.raw(), "--- a/file.txt");
    }

    #[test]
    fn marker_split_is_utf8_safe() {
        assert_eq!(split_marker("éa"), Some(('é', "a")));
        assert_eq!(split_marker(""), None);
    }
}
