//! Command-line arguments for the `mailvet` binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mailvet",
    version,
    about = "Grade email addresses: syntax, disposable/free/role/spam-trap tables, MX and SMTP checks."
)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true, env = "MAILVET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip DNS and SMTP checks; domains are assumed to exist.
    #[arg(long, global = true)]
    pub offline: bool,

    /// SMTP reachability timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub smtp_timeout: Option<u64>,

    /// Probe mail servers with a random recipient to detect catch-all domains.
    #[arg(long, global = true)]
    pub catch_all_probe: bool,

    /// Maximum number of addresses validated at once.
    #[arg(long, global = true, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a single address and print the result as JSON.
    Check(CheckArgs),
    /// Validate a list of addresses and print a batch report as JSON.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The address to validate.
    pub email: String,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one address per line (or CSV rows). Reads stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the report to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Do not draw a progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "mailvet",
            "batch",
            "--input",
            "list.txt",
            "--offline",
            "--max-concurrency",
            "8",
        ]);
        assert!(cli.offline);
        assert_eq!(cli.max_concurrency, Some(8));
        match cli.command {
            Command::Batch(args) => {
                assert_eq!(args.input, Some(PathBuf::from("list.txt")));
                assert!(!args.no_progress);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn check_takes_one_address() {
        let cli = Cli::parse_from(["mailvet", "check", "jo@radio.fm", "--pretty"]);
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.email, "jo@radio.fm");
                assert!(args.pretty);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
