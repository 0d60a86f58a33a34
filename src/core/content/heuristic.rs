//! "Does this unfenced text look like code?" predicate.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

use super::patterns::Family;

/// Texts shorter than this (in characters) are never code.
const MIN_CODE_LEN: usize = 10;

/// Minimum combined score for a text to count as code.
const CODE_SCORE_THRESHOLD: usize = 2;

/// Whole-text shapes of ordinary chat. A match overrides any pattern score.
static CONVERSATIONAL: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)^(hi|hello|hey|thanks|ok|yes|no|sure|okay|please|sorry|thank you|bye|goodbye)[\s!?.]*$",
        r"(?i)^(what|how|why|when|where|who|can|could|would|should|is|are|do|does|did|have|has|had)[^{};=<>]*\?$",
        r"(?i)^(I|you|we|they|he|she|it)\s+(am|is|are|was|were|will|would|can|could|should|have|has|had)\s+[^{};=<>]*$",
        r"^[\w\s,.'!?-]{1,50}$",
    ])
    .expect("conversational patterns are valid")
});

static INDENTED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s{2,}").expect("valid regex"));
static BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[{}]").expect("valid regex"));
static TRAILING_SEMICOLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*(\n|$)").expect("valid regex"));
static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));
static COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[=!<>]=|&&|\|\|").expect("valid regex"));

/// Decide whether `text`, which carries no fence markers, is likely source code.
pub fn looks_like_code(text: &str) -> bool {
    if text.chars().count() < MIN_CODE_LEN {
        return false;
    }
    if is_conversational(text.trim()) {
        return false;
    }
    let score = code_score(text);
    log::trace!("code score {} for {} bytes", score, text.len());
    score >= CODE_SCORE_THRESHOLD
}

/// True when the trimmed text has the shape of a chat line: greeting, question or short sentence.
pub fn is_conversational(trimmed: &str) -> bool {
    CONVERSATIONAL.is_match(trimmed)
}

/// Pattern matches across every family plus the structural bonuses.
///
/// A pattern listed in two families counts twice.
pub fn code_score(text: &str) -> usize {
    let lexical: usize = Family::ALL.iter().map(|f| f.count(text)).sum();
    lexical + structural_bonus(text)
}

fn structural_bonus(text: &str) -> usize {
    let multiline = text.contains('\n');
    let mut bonus = 0;
    if INDENTED_LINE.is_match(text) {
        bonus += 3;
    }
    if multiline && BRACE.is_match(text) {
        bonus += 2;
    }
    if TRAILING_SEMICOLON.is_match(text) {
        bonus += 1;
    }
    if COMPARISON.is_match(text) {
        bonus += 1;
    }
    if multiline && PAREN_GROUP.is_match(text) {
        bonus += 1;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_not_code() {
        assert!(!looks_like_code("hi"));
        assert!(!looks_like_code("x=1;"));
    }

    #[test]
    fn thanks_is_not_code() {
        assert!(!looks_like_code("thanks!"));
        assert!(!looks_like_code("thank you!"));
    }

    #[test]
    fn questions_are_not_code() {
        assert!(!looks_like_code("is this a bug?"));
        // The operator bonus alone stays under the threshold.
        assert_eq!(code_score("Can you check why x == 1 fails?"), 1);
        assert!(!looks_like_code("Can you check why x == 1 fails?"));
    }

    #[test]
    fn long_prose_is_not_code() {
        let text = "Could you please grab the report from the shared drive and select the latest version for me";
        assert!(!looks_like_code(text));
        let text = "Did you see the new design? I think the header looks great but the footer needs work.";
        assert!(!looks_like_code(text));
    }

    #[test]
    fn short_plain_sentence_is_conversational() {
        assert!(is_conversational("hello world, how are you doing today my friend"));
        assert!(!is_conversational("let total = a + b;"));
    }

    #[test]
    fn indented_function_is_code() {
        assert!(looks_like_code("function foo() {\n  return 1;\n}"));
        assert!(looks_like_code("def foo(x):\n    return x + 1"));
    }

    #[test]
    fn single_statement_is_code() {
        assert!(looks_like_code("let total = a + b;"));
        assert!(looks_like_code("SELECT * FROM users WHERE id = 1;"));
    }

    #[test]
    fn score_below_threshold_is_not_code() {
        // Only the trailing-semicolon bonus applies.
        let text = "x = 1;\ny = 2;";
        assert_eq!(code_score(text), 1);
        assert!(!looks_like_code(text));
    }

    #[test]
    fn structural_bonus_counts_each_signal_once() {
        // indentation 3 + braces 2 + semicolon 1 + operator 1 + parens 1
        let text = "if (a == b) {\n  go();\n}";
        assert_eq!(structural_bonus(text), 8);
        assert_eq!(structural_bonus("plain words"), 0);
    }
}
