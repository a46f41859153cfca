//! Markdown-lite formatter for bot message bodies.
//!
//! Pure text-to-markup transform. The transformation order is fixed (bold,
//! line breaks, links, bullets) to avoid double-escaping or injection
//! through generated markup. This function does NOT sanitize: callers must
//! escape raw content exactly once before formatting whenever it is not
//! already a trusted literal.

use regex::Regex;

use std::borrow::Cow;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));

// Only http(s) URLs become anchors; other schemes stay plain text.
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").expect("link pattern is valid")
});

/// Transform markdown-lite text into an HTML fragment.
///
/// Applied in order:
/// 1. `**x**` -> `<strong>x</strong>`
/// 2. newline -> `<br>`
/// 3. `[label](url)` -> anchor opening in a new context that cannot reach
///    its opener (`target="_blank" rel="noopener noreferrer"`)
/// 4. `• text` at line start -> `<li>text</li>`
///
/// Deterministic and side-effect free. Not guaranteed idempotent for inputs
/// that still contain literal markers after one pass.
pub fn format(text: &str) -> String {
    let bolded = BOLD.replace_all(text, "<strong>$1</strong>");
    let broken: Cow<'_, str> = if bolded.contains('\n') {
        Cow::Owned(bolded.replace('\n', "<br>"))
    } else {
        bolded
    };
    let linked = LINK.replace_all(
        &broken,
        r#"<a href="$2" target="_blank" rel="noopener noreferrer">$1</a>"#,
    );

    // Line boundaries are <br> markers after step 2.
    linked
        .split("<br>")
        .map(|line| match line.strip_prefix("\u{2022} ") {
            Some(rest) => format!("<li>{rest}</li>"),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(format("**hi** there"), "<strong>hi</strong> there");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(format("a\nb"), "a<br>b");
    }

    #[test]
    fn test_links_open_detached() {
        assert_eq!(
            format("[track it](https://example.com/t?id=1)"),
            r#"<a href="https://example.com/t?id=1" target="_blank" rel="noopener noreferrer">track it</a>"#
        );
    }

    #[test]
    fn test_non_http_scheme_stays_text() {
        let input = "[boom](javascript:alert(1))";
        assert_eq!(format(input), input);
    }

    #[test]
    fn test_bullets_at_line_start() {
        assert_eq!(
            format("Options:\n\u{2022} Track\n\u{2022} Return"),
            "Options:<br><li>Track</li><br><li>Return</li>"
        );
    }

    #[test]
    fn test_bullet_mid_line_untouched() {
        assert_eq!(format("a \u{2022} b"), "a \u{2022} b");
    }

    #[test]
    fn test_combined_transforms() {
        let out = format("**Status:** shipped\n\u{2022} [details](http://x.io/a)");
        assert_eq!(
            out,
            "<strong>Status:</strong> shipped<br><li><a href=\"http://x.io/a\" target=\"_blank\" rel=\"noopener noreferrer\">details</a></li>"
        );
    }

    #[test]
    fn test_idempotent_without_literal_markers() {
        // Inputs free of **, [](…), and bullet markers render stably.
        for input in ["plain text", "line\nbreaks\nonly", "a * b * c"] {
            let once = format(input);
            assert_eq!(format(&once), once);
        }
    }

    #[test]
    fn test_formats_escaped_content() {
        // The controller escapes first; markers survive entity escaping.
        let escaped = crate::render::sanitize::escape("**bold** & <danger>");
        assert_eq!(
            format(&escaped),
            "<strong>bold</strong> &amp; &lt;danger&gt;"
        );
    }
}
