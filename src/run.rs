//! Application run modes: logger init, subcommands, single prompt, TUI launch.

use std::io;
use std::sync::Arc;

use clap::CommandFactory;

use crate::cli::{Args, Commands};
use crate::core;
use crate::core::config::Config;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting
/// the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.prompt.is_none() && args.command.is_none() {
        let log_path = core::paths::cache_dir().map(|d| d.join(format!("{}.log", core::app::NAME)));
        if let Some(path) = log_path
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run a subcommand (config, completions).
pub fn run_command(command: &Commands, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Config => {
            println!("{} {}", core::app::NAME, core::app::VERSION);
            println!("endpoint: {}", config.base_url);
            println!("model:    {}", config.model_id);
            println!(
                "api key:  {}",
                if config.has_api_key {
                    "set (GEMINI_API_KEY)"
                } else {
                    "NOT SET - export GEMINI_API_KEY to start consulting"
                }
            );
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(*shell, &mut cmd, core::app::NAME, &mut io::stdout());
        }
    }
    Ok(())
}

/// Run single prompt mode: one consultation exchange, reply to stdout.
pub async fn run_single_prompt(
    args: &Args,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt_arg = args.prompt.as_ref().expect("prompt is some");
    let message = if prompt_arg == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        prompt_arg.clone()
    };
    let message = message.trim();
    if message.is_empty() {
        eprintln!("Error: {}", core::persona::EMPTY_INPUT_NOTICE);
        std::process::exit(1);
    }
    if !config.has_api_key {
        eprintln!("Error: GEMINI_API_KEY is not set. Get a key at {}", core::persona::API_KEY_URL);
        std::process::exit(1);
    }

    let model = args.model.as_deref().unwrap_or(&config.model_id);
    let assembled = core::prompt::assemble(&[], message);
    let raw = core::llm::complete(config, model, &assembled, None).await?;
    println!("{}", core::format::normalize(&raw));
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
