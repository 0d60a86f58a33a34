//! # chitshare-content
//!
//! Command-line front end for chitshare message content: parse messages into
//! text and code segments, detect snippet languages, and render messages for
//! the terminal or the webview.

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = run::dispatch(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
