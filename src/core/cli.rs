//! CLI commands: parse, detect, check, preview, render, config.
//!
//! Each command writes plain text (or JSON/HTML) to the given writer.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::app;
use crate::core::config::{self, Config};
use crate::core::content;
use crate::core::paths;
use crate::render::{self, RenderOptions, syntax};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Read the message from a file, the argument itself, or stdin (`None` or `-`).
pub fn read_input(message: Option<&str>, file: Option<&Path>) -> Result<String, InputError> {
    if let Some(path) = file {
        log::debug!("reading message from {}", path.display());
        return fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_path_buf(),
            source,
        });
    }
    match message {
        Some(m) if m != "-" => Ok(m.to_string()),
        _ => {
            log::debug!("reading message from stdin");
            io::read_to_string(io::stdin()).map_err(InputError::Stdin)
        }
    }
}

/// Run the `parse` command: segments as JSON.
pub fn run_parse<W: Write>(out: &mut W, text: &str, pretty: bool) -> CmdResult {
    let segments = content::parse(text);
    let json = if pretty {
        serde_json::to_string_pretty(&segments)?
    } else {
        serde_json::to_string(&segments)?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Run the `detect` command: best language, or every candidate score.
pub fn run_detect<W: Write>(out: &mut W, text: &str, scores: bool) -> CmdResult {
    if scores {
        for (lang, score) in content::score_all(text) {
            writeln!(out, "{}\t{}", lang, score)?;
        }
    }
    writeln!(out, "{}", content::detect(text))?;
    Ok(())
}

/// Run the `check` command: `code` or `text`, optionally with the heuristic score.
pub fn run_check<W: Write>(out: &mut W, text: &str, score: bool) -> CmdResult {
    let verdict = if content::looks_like_code(text) {
        "code"
    } else {
        "text"
    };
    if score {
        writeln!(out, "{}\t{}", verdict, content::code_score(text))?;
    } else {
        writeln!(out, "{}", verdict)?;
    }
    Ok(())
}

/// Run the `preview` command.
pub fn run_preview<W: Write>(out: &mut W, text: &str, max_len: usize) -> CmdResult {
    writeln!(out, "{}", content::preview(text, max_len))?;
    Ok(())
}

/// Run `render` for the terminal.
pub fn run_render_terminal<W: Write>(out: &mut W, text: &str, opts: &RenderOptions) -> CmdResult {
    let lines = render::render_terminal(&content::parse(text), opts);
    render::write_lines(out, &lines)?;
    Ok(())
}

/// Run `render` as webview HTML.
pub fn run_render_html<W: Write>(out: &mut W, text: &str, opts: &RenderOptions) -> CmdResult {
    writeln!(out, "{}", render::render_html(&content::parse(text), opts))?;
    Ok(())
}

/// Run the `config` command: display paths and effective settings.
pub fn run_config<W: Write>(out: &mut W) -> CmdResult {
    let config_file = paths::config_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    let config = config::load()?;
    write_config(out, &config_file, &config)
}

fn write_config<W: Write>(out: &mut W, config_file: &str, config: &Config) -> CmdResult {
    let theme_note = if syntax::theme_names().iter().any(|name| *name == config.theme) {
        ""
    } else {
        " (unknown, using default)"
    };
    writeln!(out, "Version:        {} {}", app::NAME, app::VERSION)?;
    writeln!(out, "Config file:    {}", config_file)?;
    writeln!(out, "Theme:          {}{}", config.theme, theme_note)?;
    writeln!(out, "Wrap width:     {}", config.wrap_width)?;
    writeln!(out, "Preview length: {}", config.preview_length)?;
    writeln!(out, "Aliases:        {}", content::aliases().len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUST_SAMPLE: &str = "fn main() {\n    let x = 5;\n    println!(\"{}\", x);\n}";

    fn output<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> CmdResult,
    {
        let mut out = Vec::new();
        f(&mut out).expect("command succeeds");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn read_input_prefers_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("msg.txt");
        fs::write(&path, "from file").expect("write");
        let text = read_input(Some("ignored"), Some(path.as_path())).expect("read");
        assert_eq!(text, "from file");
        assert_eq!(read_input(Some("inline"), None).expect("read"), "inline");
    }

    #[test]
    fn read_input_missing_file_names_path() {
        let err = read_input(None, Some(Path::new("/nonexistent/msg.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/msg.txt"));
    }

    #[test]
    fn parse_outputs_tagged_json() {
        let s = output(|o| run_parse(o, "hi\n```js\nx\n```", false));
        assert_eq!(
            s,
            "[{\"kind\":\"text\",\"content\":\"hi\"},{\"kind\":\"code\",\"language\":\"javascript\",\"code\":\"x\\n\"}]\n"
        );
    }

    #[test]
    fn detect_prints_language_tag() {
        let s = output(|o| run_detect(o, RUST_SAMPLE, false));
        assert_eq!(s, "rust\n");
    }

    #[test]
    fn detect_scores_lists_candidates_then_winner() {
        let s = output(|o| run_detect(o, "hello", true));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "javascript\t0");
        assert_eq!(lines[14], "text");
    }

    #[test]
    fn check_reports_verdict() {
        assert_eq!(output(|o| run_check(o, "thanks, see you tomorrow", false)), "text\n");
        assert_eq!(output(|o| run_check(o, RUST_SAMPLE, false)), "code\n");
        assert_eq!(output(|o| run_check(o, "hello there", true)), "text\t0\n");
    }

    #[test]
    fn preview_truncates() {
        let s = output(|o| run_preview(o, "abcdefghij", 8));
        assert_eq!(s, "abcde...\n");
    }

    #[test]
    fn render_html_wraps_text() {
        let s = output(|o| run_render_html(o, "plain words here", &RenderOptions::default()));
        assert_eq!(
            s,
            "<div class=\"message-content\"><p>plain words here</p></div>\n"
        );
    }

    #[test]
    fn config_lists_effective_settings() {
        let s = output(|o| write_config(o, "/tmp/x/config.json", &Config::default()));
        assert!(s.contains("Config file:    /tmp/x/config.json"));
        assert!(s.contains("Theme:          base16-ocean.dark\n"));
        assert!(s.contains("Wrap width:     100"));
        assert!(s.contains("Preview length: 50"));
    }

    #[test]
    fn config_flags_unknown_theme() {
        let config = Config {
            theme: "no-such-theme".to_string(),
            ..Config::default()
        };
        let s = output(|o| write_config(o, "-", &config));
        assert!(s.contains("no-such-theme (unknown, using default)"));
    }
}
