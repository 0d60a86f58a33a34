//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  chitshare-content parse \"see:\\n```py\\nprint(1)\\n```\"   Print segments as JSON
  chitshare-content detect --file snippet.txt          Guess the language of a file
  chitshare-content detect --scores -                  Show every candidate score (stdin)
  chitshare-content check \"thanks!\"                    Is this message code or text?
  chitshare-content render --format html -f msg.md     Webview markup for a message
  chitshare-content preview --max-len 40 -f msg.md     One-line chat list preview
  chitshare-content config                             Show config paths and values
  chitshare-content completions bash                   Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Split chat messages into text and code, and guess code languages",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Where the message comes from: an argument, a file, or stdin.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Message text (omit or use '-' to read stdin)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "message")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a message into text and code segments (JSON output)
    Parse {
        #[command(flatten)]
        input: InputArgs,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Guess the programming language of a code snippet
    Detect {
        #[command(flatten)]
        input: InputArgs,
        /// Print the score of every candidate language
        #[arg(long)]
        scores: bool,
    },
    /// Decide whether an unfenced message looks like code
    Check {
        #[command(flatten)]
        input: InputArgs,
        /// Also print the heuristic score
        #[arg(long)]
        score: bool,
    },
    /// Print a one-line plain-text preview of a message
    Preview {
        #[command(flatten)]
        input: InputArgs,
        /// Maximum preview length in characters
        #[arg(long, value_name = "N")]
        max_len: Option<usize>,
    },
    /// Render a message for the terminal or as webview HTML
    Render {
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Terminal)]
        format: Format,
        /// Wrap width for text in terminal output (0 disables wrapping)
        #[arg(long, value_name = "COLUMNS")]
        width: Option<usize>,
        /// syntect theme for code blocks
        #[arg(long, value_name = "NAME")]
        theme: Option<String>,
    },
    /// Show config file path and effective settings
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Terminal,
    Html,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn log_level_from_flags() {
        let args = Args::parse_from(["chitshare-content", "-vv", "config"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["chitshare-content", "config", "-q"]);
        assert_eq!(args.log_level(), "error");
        let args = Args::parse_from(["chitshare-content", "config"]);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn message_and_file_conflict() {
        let result = Args::try_parse_from(["chitshare-content", "parse", "hi", "--file", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn render_defaults_to_terminal() {
        let args = Args::parse_from(["chitshare-content", "render", "hello"]);
        match args.command {
            Commands::Render { format, width, .. } => {
                assert_eq!(format, Format::Terminal);
                assert_eq!(width, None);
            }
            _ => panic!("expected render"),
        }
    }
}
