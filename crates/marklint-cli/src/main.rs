//! marklint CLI — sensitivity-marker consistency validation for service contracts.
//!
//! This binary provides the `marklint` command. See `marklint --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod loader;
mod output;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check { paths, config } => commands::check::run(paths, config, cli.json),
    };

    std::process::exit(exit_code);
}
