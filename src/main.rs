mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{BatchArgs, CheckArgs, Cli, Command};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mailvet_core::{
    input, AppError, BatchSummary, ConfigBuilder, EmailValidator, Reputation, Result,
};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOG_TARGETS: &[&str] = &[
    "mailvet",
    "mailvet_core",
    "config",
    "validate_task",
    "batch_task",
    "dns_task",
    "smtp_task",
];

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let default_directives = std::iter::once("warn".to_string())
        .chain(LOG_TARGETS.iter().map(|t| format!("{}={}", t, level)))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

async fn run_check(validator: &EmailValidator, args: &CheckArgs) -> Result<()> {
    let result = validator.validate(args.email.trim()).await;
    write_json(&result, args.pretty, None)
}

async fn run_batch(validator: &EmailValidator, args: &BatchArgs) -> Result<()> {
    let emails = input::read_address_list(args.input.as_deref())?;
    if emails.is_empty() {
        return Err(AppError::InvalidInput(
            "No addresses found in input (expected one address per line)".to_string(),
        ));
    }
    tracing::info!("Loaded {} address(es)", emails.len());

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::with_draw_target(Some(emails.len() as u64), ProgressDrawTarget::stderr());
        let style = ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    };

    let report = validator
        .validate_batch_with(&emails, |result| {
            progress.set_message(result.email.clone());
            progress.inc(1);
        })
        .await;
    progress.finish_and_clear();
    log_summary(&report.summary);

    write_json(&report, args.pretty, args.output.as_deref())
}

fn log_summary(summary: &BatchSummary) {
    let breakdown = &summary.reputation_breakdown;
    let tiers = Reputation::ALL
        .iter()
        .map(|tier| format!("{} {}", tier.as_str(), breakdown.get(*tier)))
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(
        "Checked {} address(es): {} valid, {} invalid ({})",
        breakdown.total(),
        summary.valid,
        summary.invalid,
        tiers
    );
}

async fn run(cli: Cli) -> Result<()> {
    let mut builder = ConfigBuilder::new().load_file(cli.config.as_deref())?;
    // Flags only switch things on; absent flags leave file values alone.
    if cli.catch_all_probe {
        builder = builder.enable_catch_all_probe(true);
    }
    if cli.offline {
        builder = builder.offline(true);
    }
    if let Some(secs) = cli.smtp_timeout {
        builder = builder.smtp_timeout(Duration::from_secs(secs));
    }
    if let Some(n) = cli.max_concurrency {
        builder = builder.max_concurrency(n);
    }
    let config = builder.build()?;

    let validator = EmailValidator::new(&config).await?;

    match &cli.command {
        Command::Check(args) => run_check(&validator, args).await,
        Command::Batch(args) => run_batch(&validator, args).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
