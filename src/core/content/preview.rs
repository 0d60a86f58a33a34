//! One-line plain-text preview of a message, for conversation lists.

use std::sync::LazyLock;

use regex::Regex;

/// Default preview length in characters.
pub const DEFAULT_PREVIEW_LEN: usize = 50;

const ELLIPSIS: &str = "...";

/// (pattern, replacement) pairs, applied in order.
static MARKUP: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?s)```.*?```", "[code]"),
        (r"`[^`]+`", "[code]"),
        (r"\*\*([^*]+)\*\*", "${1}"),
        (r"\*([^*]+)\*", "${1}"),
        (r"\[([^\]]+)\]\([^)]+\)", "${1}"),
        (r"#+\s", ""),
        (r"\n", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("preview pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Strip markdown from `content` and cut it to at most `max_len` characters.
///
/// Code (fenced or inline) becomes `[code]`. Truncated previews end in `...`.
pub fn preview(content: &str, max_len: usize) -> String {
    let mut plain = content.to_string();
    for (re, replacement) in MARKUP.iter() {
        plain = re.replace_all(&plain, *replacement).into_owned();
    }
    let plain = plain.trim();

    if plain.chars().count() <= max_len {
        return plain.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut out: String = plain.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
