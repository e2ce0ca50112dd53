use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `'` and `"` the way HTML text escaping does.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_markup(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '\'', '"']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_markup("let x = 1;"), Cow::Borrowed(_)));
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_markup(r#"if a < b && c > "d" { 'e' }"#),
            "if a &lt; b &amp;&amp; c &gt; &#34;d&#34; { &#39;e&#39; }"
        );
    }
}
