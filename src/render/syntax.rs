//! Syntax highlighting for code segments using syntect.

use std::sync::OnceLock;

use crossterm::style::{Attribute, Color, ContentStyle, StyledContent};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::{ACCENT_SECONDARY, StyledLine};
use crate::core::config::DEFAULT_THEME;

/// Convert syntect Color to a terminal colour. Alpha 0 => None (colourless).
fn translate_colour(c: syntect::highlighting::Color) -> Option<Color> {
    let syntect::highlighting::Color { r, g, b, a } = c;
    (a > 0).then_some(Color::Rgb { r, g, b })
}

/// Convert syntect Style to a crossterm ContentStyle (colours plus bold/italic/underline).
fn translate_style(s: syntect::highlighting::Style) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(translate_colour(s.foreground).unwrap_or(ACCENT_SECONDARY));
    style.background_color = translate_colour(s.background);
    for (flag, attribute) in [
        (FontStyle::BOLD, Attribute::Bold),
        (FontStyle::ITALIC, Attribute::Italic),
        (FontStyle::UNDERLINE, Attribute::Underlined),
    ] {
        if s.font_style.contains(flag) {
            style.attributes.set(attribute);
        }
    }
    style
}

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Map a canonical language tag to the syntect extension that selects its grammar.
///
/// The bundled grammars have no TypeScript, so TS and TSX use the JavaScript one.
fn lang_to_extension(lang: &str) -> Option<&'static str> {
    let ext = match lang {
        "rust" => "rs",
        "python" => "py",
        "javascript" | "typescript" | "tsx" => "js",
        "go" => "go",
        "ruby" => "rb",
        "bash" => "sh",
        "sql" => "sql",
        "json" => "json",
        "yaml" => "yaml",
        "markdown" => "md",
        "html" => "html",
        "css" => "css",
        "c" => "c",
        "cpp" => "cpp",
        "java" => "java",
        "csharp" => "cs",
        _ => return None,
    };
    Some(ext)
}

/// Grammar for a language tag. "text" and unknown tags get None (plain rendering).
pub fn syntax_for(lang: &str) -> Option<&'static SyntaxReference> {
    let lang = lang.trim().to_lowercase();
    if lang.is_empty() || lang == "text" {
        return None;
    }
    let ps = syntax_set();
    match lang_to_extension(&lang) {
        Some(ext) => ps.find_syntax_by_extension(ext),
        // Passthrough fence tags such as "php" may still name a bundled grammar.
        None => ps.find_syntax_by_token(&lang),
    }
}

/// Theme by name, falling back to the default theme and then to any bundled theme.
pub fn theme(name: &str) -> Option<&'static Theme> {
    let ts = theme_set();
    ts.themes.get(name).or_else(|| {
        log::debug!("unknown theme '{}', using {}", name, DEFAULT_THEME);
        ts.themes
            .get(DEFAULT_THEME)
            .or_else(|| ts.themes.values().next())
    })
}

/// Names of the bundled themes.
pub fn theme_names() -> Vec<&'static str> {
    theme_set().themes.keys().map(String::as_str).collect()
}

fn plain_lines(code: &str) -> Vec<StyledLine> {
    let style = ContentStyle {
        foreground_color: Some(ACCENT_SECONDARY),
        ..ContentStyle::new()
    };
    code.lines()
        .map(|line| vec![StyledContent::new(style, line.to_string())])
        .collect()
}

/// Highlight a code block for the terminal, one styled line per source line.
pub fn highlight_terminal(lang: &str, code: &str, theme_name: &str) -> Vec<StyledLine> {
    let (Some(syntax), Some(theme)) = (syntax_for(lang), theme(theme_name)) else {
        return plain_lines(code);
    };
    let ps = syntax_set();
    let mut h = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();
    for line in LinesWithEndings::from(code) {
        let ranges = match h.highlight_line(line, ps) {
            Ok(ranges) => ranges,
            Err(e) => {
                log::debug!("highlighting {} failed: {}", lang, e);
                return plain_lines(code);
            }
        };
        let styled: StyledLine = ranges
            .into_iter()
            .filter_map(|(style, text)| {
                let text = text.trim_end_matches(['\n', '\r']);
                (!text.is_empty()).then(|| StyledContent::new(translate_style(style), text.to_string()))
            })
            .collect();
        lines.push(styled);
    }
    lines
}

/// Highlight a code block as HTML. None when the language has no grammar or highlighting fails.
pub fn highlight_html(lang: &str, code: &str, theme_name: &str) -> Option<String> {
    let syntax = syntax_for(lang)?;
    let theme = theme(theme_name)?;
    match syntect::html::highlighted_html_for_string(code, syntax_set(), syntax, theme) {
        Ok(html) => Some(html),
        Err(e) => {
            log::debug!("HTML highlighting {} failed: {}", lang, e);
            None
        }
    }
}
