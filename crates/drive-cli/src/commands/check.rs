//! Check command implementation

use std::path::Path;

use colored::Colorize;

use drive_api::{DriveClient, load_credentials};
use drive_diff::{DiffOptions, Entry, TreeDiff, render};
use drive_fs::{list_tree, load_exclusions};

use crate::cli::ReconcileArgs;
use crate::error::Result;

/// Run the check command
///
/// Lists both trees, diffs them, and prints the report. The local root is
/// validated before anything touches the network, so a disconnected
/// backup volume fails fast.
pub async fn run_check(args: &ReconcileArgs, full_listing: bool) -> Result<()> {
    let (local, exclusions) = list_local(args)?;
    let client = connect(&args.credentials)?;
    let remote = client.fetch_all_entries().await?;

    let options = DiffOptions {
        summarize: !full_listing,
    };
    let result = drive_diff::diff(&local, &remote, &exclusions, options);

    print_report(&result);
    Ok(())
}

/// Walk the local root and load the exclusion list, if one is configured.
pub fn list_local(args: &ReconcileArgs) -> Result<(Vec<Entry>, Vec<String>)> {
    let local = list_tree(&args.root, &args.folders)?;
    let exclusions = match &args.exclusions {
        Some(path) => load_exclusions(path)?,
        None => Vec::new(),
    };
    Ok((local, exclusions))
}

/// Build a Drive client from the configured credentials file.
pub fn connect(credentials_path: &Path) -> Result<DriveClient> {
    let credentials = load_credentials(credentials_path)?;
    Ok(DriveClient::new(&credentials)?)
}

/// Print a diff report with a status accent line.
pub fn print_report(result: &TreeDiff) {
    if result.is_synced() {
        println!("{} {}", "OK".green().bold(), render(result));
    } else {
        println!(
            "{} {} local-only, {} remote-only",
            "DIFF".yellow().bold(),
            result.local_only.len(),
            result.remote_only.len()
        );
        print!("{}", render(result));
    }
}
