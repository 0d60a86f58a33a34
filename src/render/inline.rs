//! Inline formatting for text segments: `code`, **bold**, *italic*, line breaks.

use std::sync::LazyLock;

use crossterm::style::{Attribute, ContentStyle, StyledContent};
use regex::Regex;

use super::{ACCENT, StyledLine};

static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`([^`]+)`|\*\*([^*]+)\*\*|\*([^*]+)\*").expect("inline regex is valid")
});

/// A run of text with its inline markup resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline<'a> {
    Plain(&'a str),
    Code(&'a str),
    Bold(&'a str),
    Italic(&'a str),
}

/// Split `text` into inline runs. Unmatched markers stay in the plain text.
pub fn tokenize(text: &str) -> Vec<Inline<'_>> {
    let mut runs = Vec::new();
    let mut last = 0;
    for caps in INLINE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            runs.push(Inline::Plain(&text[last..whole.start()]));
        }
        let run = if let Some(m) = caps.get(1) {
            Inline::Code(m.as_str())
        } else if let Some(m) = caps.get(2) {
            Inline::Bold(m.as_str())
        } else if let Some(m) = caps.get(3) {
            Inline::Italic(m.as_str())
        } else {
            Inline::Plain(whole.as_str())
        };
        runs.push(run);
        last = whole.end();
    }
    if last < text.len() {
        runs.push(Inline::Plain(&text[last..]));
    }
    runs
}

fn escape_with_breaks(s: &str) -> String {
    html_escape::encode_text(s).replace('\n', "<br>")
}

/// Format a text segment as a webview paragraph.
pub fn to_html(text: &str) -> String {
    let mut html = String::from("<p>");
    for run in tokenize(text) {
        match run {
            Inline::Plain(s) => html.push_str(&escape_with_breaks(s)),
            Inline::Code(s) => {
                html.push_str("<code class=\"inline-code\">");
                html.push_str(&html_escape::encode_text(s));
                html.push_str("</code>");
            }
            Inline::Bold(s) => {
                html.push_str("<strong>");
                html.push_str(&escape_with_breaks(s));
                html.push_str("</strong>");
            }
            Inline::Italic(s) => {
                html.push_str("<em>");
                html.push_str(&escape_with_breaks(s));
                html.push_str("</em>");
            }
        }
    }
    html.push_str("</p>");
    html
}

/// Style one display line for the terminal.
pub fn to_terminal(line: &str) -> StyledLine {
    tokenize(line)
        .into_iter()
        .map(|run| {
            let mut style = ContentStyle::new();
            let text = match run {
                Inline::Plain(s) => s,
                Inline::Code(s) => {
                    style.foreground_color = Some(ACCENT);
                    s
                }
                Inline::Bold(s) => {
                    style.attributes.set(Attribute::Bold);
                    s
                }
                Inline::Italic(s) => {
                    style.attributes.set(Attribute::Italic);
                    s
                }
            };
            StyledContent::new(style, text.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_plain() {
        assert_eq!(tokenize("hello"), vec![Inline::Plain("hello")]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn tokenize_mixed_markup() {
        assert_eq!(
            tokenize("Use `println!` for **bold** and *soft* output"),
            vec![
                Inline::Plain("Use "),
                Inline::Code("println!"),
                Inline::Plain(" for "),
                Inline::Bold("bold"),
                Inline::Plain(" and "),
                Inline::Italic("soft"),
                Inline::Plain(" output"),
            ]
        );
    }

    #[test]
    fn tokenize_code_hides_emphasis() {
        assert_eq!(tokenize("`**x**`"), vec![Inline::Code("**x**")]);
    }

    #[test]
    fn tokenize_unmatched_marker_is_plain() {
        assert_eq!(tokenize("2 * 3 = 6"), vec![Inline::Plain("2 * 3 = 6")]);
    }

    #[test]
    fn html_escapes_and_breaks_lines() {
        assert_eq!(
            to_html("a <b> & `x<y`\n**done**"),
            "<p>a &lt;b&gt; &amp; <code class=\"inline-code\">x&lt;y</code><br><strong>done</strong></p>"
        );
    }

    #[test]
    fn terminal_styles_runs() {
        let line = to_terminal("see `cfg` *now*");
        assert_eq!(line.len(), 4);
        assert_eq!(line[1].content(), "cfg");
        assert_eq!(line[1].style().foreground_color, Some(ACCENT));
        assert!(line[3].style().attributes.has(Attribute::Italic));
    }
}
