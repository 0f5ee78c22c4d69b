//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CRMScript Fetcher - Materialize a fetched tenant payload as a local
/// folder/file tree
#[derive(Parser, Debug)]
#[command(name = "crmfetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Materialize a fetched JSON payload under a target directory
    ///
    /// Replaces any prior materialization of the same tree. The existing
    /// output is kept as a backup under <target>/temp until the fresh tree
    /// is in place.
    Materialize {
        /// Path to the fetched JSON payload
        #[arg(short, long)]
        input: PathBuf,

        /// Target directory for the materialized tree (overrides the
        /// config file's local_directory)
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Tenant config file (TOML) with local_directory and per-category
        /// fetch toggles
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
