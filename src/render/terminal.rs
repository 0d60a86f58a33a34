//! Terminal rendering: wrapped, inline-styled text and highlighted code blocks.

use std::io::{self, Write};

use crossterm::style::{Attribute, ContentStyle, StyledContent};

use super::{ACCENT, RenderOptions, StyledLine, inline, syntax};
use crate::core::content::Segment;

/// Render segments to styled terminal lines.
pub fn render_terminal(segments: &[Segment], opts: &RenderOptions) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        match segment {
            Segment::Text { content } => {
                for line in wrap_message(content, opts.width) {
                    lines.push(inline::to_terminal(&line));
                }
            }
            Segment::Code { language, code } => {
                lines.push(code_header(language));
                lines.extend(syntax::highlight_terminal(language, code, &opts.theme));
            }
        }
    }
    lines
}

fn code_header(language: &str) -> StyledLine {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(ACCENT);
    style.attributes.set(Attribute::Bold);
    vec![StyledContent::new(style, format!("── {} ──", language))]
}

/// Split a message on its own newlines, then wrap each line to `width` columns.
/// Width 0 disables wrapping.
fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    msg.split('\n')
        .flat_map(|line| {
            if line.is_empty() || width == 0 {
                vec![line.to_string()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// Write styled lines (ANSI escapes included) to `out`.
pub fn write_lines<W: Write>(out: &mut W, lines: &[StyledLine]) -> io::Result<()> {
    for line in lines {
        for span in line {
            write!(out, "{}", span)?;
        }
        writeln!(out)?;
    }
    out.flush()
}
