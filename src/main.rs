//! Main entry point for the hudiff CLI

use clap::error::ErrorKind;
use clap::Parser;
use hudiff::cli::Cli;
use hudiff::commands::execute_command;

fn main() {
    // Argument errors exit with 1, input errors with 2 (see below); help and
    // version requests are not errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            std::process::exit(0);
        }
        Err(e) => {
            eprint!("{}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging, at debug level if requested
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // Execute the command
    if let Err(e) = execute_command(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
}
