//! # Hayek - LinkedIn Growth Consultant CLI
//!
//! Entry point for the Hayek application: an interactive chat with a
//! LinkedIn-growth consulting persona backed by the Gemini API.
//!
//! ## Modes
//! - Single prompt with `-p` or `--prompt`
//! - Interactive terminal UI (default)
//! - `config` / `completions` subcommands

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();

    // Initialize logging (warn level by default; use -v/-vv for more)
    run::init_logger(&args);

    // Credential and endpoint resolved once, up front; exchanges never read
    // the environment.
    let config = core::config::load();

    if let Some(command) = &args.command {
        return run::run_command(command, &config);
    }

    if args.prompt.is_some() {
        return run::run_single_prompt(&args, &config).await;
    }

    run::launch_tui(config).await
}
