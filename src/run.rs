//! Application run modes: logger init and subcommand dispatch.

use std::io::{self, Write};

use chitshare_content::core::cli as commands;
use chitshare_content::core::{app, config};
use chitshare_content::render::RenderOptions;
use clap::CommandFactory;

use crate::cli::{Args, Commands, Format, InputArgs, generate};

/// Initialize env_logger. Logs go to stderr so stdout stays machine-readable.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));
    logger.target(env_logger::Target::Stderr);
    let _ = logger.try_init();
}

fn read(input: &InputArgs) -> Result<String, commands::InputError> {
    commands::read_input(input.message.as_deref(), input.file.as_deref())
}

/// Run the selected subcommand, writing its output to stdout.
pub fn dispatch(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Commands::Parse { input, pretty } => commands::run_parse(&mut out, &read(&input)?, pretty),
        Commands::Detect { input, scores } => commands::run_detect(&mut out, &read(&input)?, scores),
        Commands::Check { input, score } => commands::run_check(&mut out, &read(&input)?, score),
        Commands::Preview { input, max_len } => {
            let text = read(&input)?;
            let max_len = match max_len {
                Some(n) => n,
                None => config::load()?.preview_length,
            };
            commands::run_preview(&mut out, &text, max_len)
        }
        Commands::Render {
            input,
            format,
            width,
            theme,
        } => {
            let text = read(&input)?;
            let mut opts = RenderOptions::from(&config::load()?);
            if let Some(width) = width {
                opts.width = width;
            }
            if let Some(theme) = theme {
                opts.theme = theme;
            }
            log::debug!("rendering as {:?} with theme {}", format, opts.theme);
            match format {
                Format::Terminal => commands::run_render_terminal(&mut out, &text, &opts),
                Format::Html => commands::run_render_html(&mut out, &text, &opts),
            }
        }
        Commands::Config => commands::run_config(&mut out),
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            generate(shell, &mut cmd, app::NAME, &mut out);
            out.flush()?;
            Ok(())
        }
    }
}
