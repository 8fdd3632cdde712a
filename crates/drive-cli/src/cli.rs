//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Drive Reconcile - Compare a local backup tree against Google Drive
#[derive(Parser, Debug)]
#[command(name = "dsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Compare the trees and report the differences
    ///
    /// Prints "Synced!" when both trees match, otherwise one section per
    /// side listing the paths missing from it. By default the contents of
    /// a missing directory collapse into a single line for the directory.
    Check {
        #[command(flatten)]
        reconcile: ReconcileArgs,

        /// List every differing path, including files inside missing
        /// directories
        #[arg(long)]
        full_listing: bool,
    },

    /// Compare the trees, then download files missing locally
    ///
    /// Always reports the full listing, since each missing file is
    /// downloaded individually. Per-file download failures are logged and
    /// do not abort the batch.
    Sync {
        #[command(flatten)]
        reconcile: ReconcileArgs,
    },
}

/// Arguments shared by every reconciling command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReconcileArgs {
    /// Local root containing the synced folders
    #[arg(short, long)]
    pub root: PathBuf,

    /// Named subfolder under the root to reconcile (repeatable)
    #[arg(short, long = "folder", default_value = "Documents")]
    pub folders: Vec<String>,

    /// Credentials JSON file holding the Drive access token
    #[arg(short, long, env = "DSYNC_CREDENTIALS", default_value = "credentials.json")]
    pub credentials: PathBuf,

    /// YAML file listing intentionally unsynced path prefixes
    #[arg(short, long)]
    pub exclusions: Option<PathBuf>,
}
