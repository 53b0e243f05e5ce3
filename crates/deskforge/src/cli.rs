//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Deskforge - Desktop utilities suite
#[derive(Parser, Debug)]
#[command(name = "deskforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to an update configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage root for downloads and logs (default: the platform data directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version(VersionArgs),

    /// Check the release feed for a newer version
    Check(CheckArgs),

    /// Check for and download the newest installer
    Download(DownloadArgs),

    /// Delete stale installers and old log files
    Cleanup(CleanupArgs),
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Include prereleases in the scan
    #[arg(long)]
    pub prerelease: bool,

    /// Look for per-user installers instead of per-machine ones
    #[arg(long)]
    pub per_user: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Download command
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Include prereleases in the scan
    #[arg(long)]
    pub prerelease: bool,

    /// Look for per-user installers instead of per-machine ones
    #[arg(long)]
    pub per_user: bool,
}

// Cleanup command
#[derive(Args, Debug)]
pub struct CleanupArgs {}
