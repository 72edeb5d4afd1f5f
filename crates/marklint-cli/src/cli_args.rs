use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "marklint",
    version,
    about = "Sensitivity-marker consistency validation for service contracts"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Validate contract descriptor files
    Check {
        /// Descriptor JSON files or directories to scan for them
        paths: Vec<PathBuf>,
        /// Path to a marklint.json config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
