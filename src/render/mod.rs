//! Renderers that consume parsed segments: terminal output and webview HTML.

pub mod html;
pub mod inline;
pub mod syntax;
pub mod terminal;

use crossterm::style::{Color, StyledContent};

use crate::core::config::Config;

pub use html::render_html;
pub use terminal::{render_terminal, write_lines};

/// Accent green (#98FB98), used for headers and inline code.
pub const ACCENT: Color = Color::Rgb {
    r: 152,
    g: 251,
    b: 152,
};

/// Soft cyan (#7EC8E3), default colour for unhighlighted code.
pub const ACCENT_SECONDARY: Color = Color::Rgb {
    r: 126,
    g: 200,
    b: 227,
};

/// One display line made of styled runs.
pub type StyledLine = Vec<StyledContent<String>>;

/// Theme and width used by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub theme: String,
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            theme: config.theme.clone(),
            width: config.wrap_width,
        }
    }
}
