/// An open/close string pair wrapped around a span of output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MarkupTag {
    pub open: String,
    pub close: String,
}

impl MarkupTag {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn wrap(&self, out: &mut String, text: &str) {
        out.push_str(&self.open);
        out.push_str(text);
        out.push_str(&self.close);
    }
}

/// Tags for added and removed content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AddRemTags {
    pub add: MarkupTag,
    pub rem: MarkupTag,
}

/// Every tag used by a [`MarkupRenderer`](crate::render::MarkupRenderer).
///
/// - `file` wraps the whole output once.
/// - `normal`, `comment`, `line.add`, `line.rem` wrap whole lines; each line gets exactly one.
/// - `text.add`, `text.rem` wrap the changed characters inside paired lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderConfig {
    pub file: MarkupTag,
    pub normal: MarkupTag,
    pub comment: MarkupTag,
    pub line: AddRemTags,
    pub text: AddRemTags,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let json = r#"{ "line": { "add": { "open": "<ins>", "close": "</ins>" } } }"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.line.add, MarkupTag::new("<ins>", "</ins>"));
        assert_eq!(config.line.rem, MarkupTag::default());
        assert_eq!(config.file, MarkupTag::default());
    }
}
