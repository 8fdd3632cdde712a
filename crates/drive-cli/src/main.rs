//! Drive Reconcile CLI
//!
//! Compares a local backup tree against Google Drive and reports, or
//! repairs, the differences.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            reconcile,
            full_listing,
        } => commands::run_check(&reconcile, full_listing).await,
        Commands::Sync { reconcile } => commands::run_sync(&reconcile).await,
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `--verbose` raises the
/// default level from warn to debug.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(verbose)));

    let fmt_layer = fmt::layer().with_target(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
}

/// The filter directive used when `RUST_LOG` is not set.
fn default_log_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
