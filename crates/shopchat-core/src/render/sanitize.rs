//! Markup escaping for untrusted text.

/// Convert the five HTML-significant characters to their inert entities.
///
/// The result can be inserted into markup without altering structure or
/// executing script. Not idempotent -- escaping twice changes the text, so
/// callers escape exactly once.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five() {
        assert_eq!(
            escape(r#"<a href="x" onclick='y'>&"#),
            "&lt;a href=&quot;x&quot; onclick=&#39;y&#39;&gt;&amp;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("hello, order ORD-2024-001!"), "hello, order ORD-2024-001!");
    }

    #[test]
    fn test_no_live_angle_brackets_or_ampersands() {
        let hostile = "<script>alert('x & y')</script>";
        let escaped = escape(hostile);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        // Every remaining & starts an entity we produced.
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#39;"),
                "stray ampersand in {escaped:?}"
            );
        }
    }

    #[test]
    fn test_not_idempotent() {
        let once = escape("&");
        let twice = escape(&once);
        assert_eq!(once, "&amp;");
        assert_eq!(twice, "&amp;amp;");
    }
}
