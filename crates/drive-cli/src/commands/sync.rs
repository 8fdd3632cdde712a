//! Sync command implementation

use colored::Colorize;

use drive_diff::{DiffOptions, Entry};

use crate::cli::ReconcileArgs;
use crate::commands::check::{connect, list_local, print_report};
use crate::error::Result;

/// Run the sync command
///
/// Diffs the trees without directory subsumption (each missing file must
/// be visible individually to be downloaded), prints the report, then
/// downloads every remote-only file into the local root.
pub async fn run_sync(args: &ReconcileArgs) -> Result<()> {
    let (local, exclusions) = list_local(args)?;
    let client = connect(&args.credentials)?;
    let remote = client.fetch_all_entries().await?;

    let result = drive_diff::diff(&local, &remote, &exclusions, DiffOptions {
        summarize: false,
    });
    print_report(&result);

    let missing: Vec<Entry> = result.remote_only_files().cloned().collect();
    if missing.is_empty() {
        println!("{} No files to download.", "OK".green().bold());
        return Ok(());
    }

    println!(
        "{} Downloading {} file(s) into {}...",
        "=>".blue().bold(),
        missing.len(),
        args.root.display()
    );

    let summary = client.download_files(&missing, &args.root).await?;

    if summary.failed > 0 {
        println!(
            "{} Downloaded {}, failed {} (see log for details).",
            "WARN".yellow().bold(),
            summary.downloaded,
            summary.failed
        );
    } else {
        println!(
            "{} Downloaded {} file(s).",
            "OK".green().bold(),
            summary.downloaded
        );
    }

    Ok(())
}
