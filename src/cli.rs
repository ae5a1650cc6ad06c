//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

const AFTER_HELP: &str = "\
EXAMPLES:
  hayek                             Launch interactive TUI
  hayek -p \"improve my headline\"    Single consultation, print to stdout
  hayek -p -                        Read the message from stdin
  hayek -m gemini-2.5-pro -p \"...\"  Override the model for one exchange
  hayek config                      Show endpoint, model, and API key status
  hayek completions bash            Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "LinkedIn growth consulting chat in your terminal, powered by Gemini",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single message then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Ask Hayek one question and print the reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override model for single prompt mode
    #[arg(short = 'm', long, help = "Model ID (e.g. gemini-2.5-flash)")]
    pub model: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show endpoint, model, and API key status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
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
    use clap::Parser;

    use super::Args;

    #[test]
    fn log_level_default_is_warn() {
        let args = Args::parse_from(["hayek"]);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn log_level_verbose_steps() {
        assert_eq!(Args::parse_from(["hayek", "-v"]).log_level(), "info");
        assert_eq!(Args::parse_from(["hayek", "-vv"]).log_level(), "debug");
    }

    #[test]
    fn log_level_quiet_wins() {
        assert_eq!(Args::parse_from(["hayek", "-q", "-v"]).log_level(), "error");
    }

    #[test]
    fn prompt_flag_parses() {
        let args = Args::parse_from(["hayek", "-p", "hello"]);
        assert_eq!(args.prompt.as_deref(), Some("hello"));
    }
}
