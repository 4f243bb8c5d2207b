// file: src/main.rs
// version: 1.0.0
// guid: 18b4f6d2-a93e-4c57-90af-c6e21d08b3e7

//! procvol - Main entry point

use clap::Parser;
use procvol::{
    cli::args::{Cli, Commands},
    cli::commands::{kill_command, volumes_command},
    logging::logger,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Kill { id, name } => kill_command(id, name),
        Commands::Volumes => volumes_command(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
