//! CLI argument parsing with clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Composekit - compose-tool lifecycle manager
#[derive(Parser, Debug)]
#[command(name = "composekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the private storage root
    #[arg(long, global = true)]
    pub storage_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the compose checks and show the reconciled status
    Check(CheckArgs),

    /// Download and install a compose release
    Install(InstallArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Treat this as the first check after activation
    /// (suppresses the PATH-setup advisory)
    #[arg(long)]
    pub first_run: bool,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Install the most recent release without prompting
    #[arg(long)]
    pub latest: bool,

    /// Include prerelease versions in the selection
    #[arg(long)]
    pub prerelease: bool,
}
