//! Language detection by regex-pattern scoring.

use std::fmt;

use super::patterns::Family;

/// Literal markers that push a JS-looking snippet over to TypeScript.
const TYPESCRIPT_MARKERS: &[&str] = &[": string", ": number", "interface "];
const TYPESCRIPT_BONUS: usize = 3;

/// Canonical language tag produced by [`detect`].
///
/// `Text` is the inconclusive result; every other variant is a detection candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Tsx,
    Python,
    Java,
    Cpp,
    Go,
    Rust,
    Sql,
    Css,
    Html,
    Json,
    Bash,
    Yaml,
    Text,
}

impl Language {
    /// Detection candidates in declaration order. Ties go to the earlier entry.
    pub const CANDIDATES: [Language; 14] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Tsx,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Go,
        Language::Rust,
        Language::Sql,
        Language::Css,
        Language::Html,
        Language::Json,
        Language::Bash,
        Language::Yaml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Sql => "sql",
            Language::Css => "css",
            Language::Html => "html",
            Language::Json => "json",
            Language::Bash => "bash",
            Language::Yaml => "yaml",
            Language::Text => "text",
        }
    }

    /// Pattern families whose match counts add up to this candidate's score.
    /// JS-derived candidates share the JS/TS family; TSX adds the React set.
    pub fn families(self) -> &'static [Family] {
        match self {
            Language::JavaScript | Language::TypeScript => &[Family::JsTs],
            Language::Tsx => &[Family::JsTs, Family::React],
            Language::Python => &[Family::Python],
            Language::Java => &[Family::JavaKotlin],
            Language::Cpp => &[Family::CCpp],
            Language::Go => &[Family::Go],
            Language::Rust => &[Family::Rust],
            Language::Sql => &[Family::Sql],
            Language::Css => &[Family::Css],
            Language::Html => &[Family::Html],
            Language::Json => &[Family::Json],
            Language::Bash => &[Family::Shell],
            Language::Yaml => &[Family::Yaml],
            Language::Text => &[],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score every candidate against `code`, in declaration order.
pub fn score_all(code: &str) -> Vec<(Language, usize)> {
    Language::CANDIDATES
        .into_iter()
        .map(|lang| {
            let mut score: usize = lang.families().iter().map(|f| f.count(code)).sum();
            if lang == Language::TypeScript {
                score += typescript_bonus(code);
            }
            (lang, score)
        })
        .collect()
}

fn typescript_bonus(code: &str) -> usize {
    if TYPESCRIPT_MARKERS.iter().any(|m| code.contains(m)) {
        TYPESCRIPT_BONUS
    } else {
        0
    }
}

/// Name the language of a code span. Returns [`Language::Text`] when nothing matched.
pub fn detect(code: &str) -> Language {
    let mut best = (Language::Text, 0);
    for (lang, score) in score_all(code) {
        if score > best.1 {
            best = (lang, score);
        }
    }
    log::trace!("detected {} (score {})", best.0, best.1);
    best.0
}
