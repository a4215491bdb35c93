//! Main entry point for the fspath CLI.
//!
//! This is the command-line interface for the fspath library.
//! It provides commands for working with paths:
//! - `inspect`: Show how a path decomposes and resolves
//! - `ls` / `find`: List and search directories
//! - `touch`, `mkdir`, `rm`, `mv`, `cp`, `ln`: Filesystem operations
//! - `dirs`: Show standard directory locations

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = fspath::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        no_tilde: cli.no_tilde,
        no_hidden: cli.no_hidden,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Find(cmd) => cmd.execute(&global),
        cli::Command::Touch(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Rm(cmd) => cmd.execute(&global),
        cli::Command::Mv(cmd) => cmd.execute(&global),
        cli::Command::Cp(cmd) => cmd.execute(&global),
        cli::Command::Ln(cmd) => cmd.execute(&global),
        cli::Command::Dirs(cmd) => cmd.execute(&global),
        cli::Command::Exists(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
