//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including provider configuration and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use fspath::{FileManager, OsProvider, Path};
use serde::Serialize;
use std::io::{self, Write};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Do not expand a leading `~` when standardizing.
    pub no_tilde: bool,

    /// Skip entries whose names start with a dot when listing directories.
    pub no_hidden: bool,
}

/// Output format shared by commands that print paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line
    Text,
    /// JSON document
    Json,
}

/// Build the file manager configured by the global options.
pub fn manager(global: &GlobalOptions) -> FileManager<OsProvider> {
    log::debug!(
        "provider options: tilde expansion {}, hidden entries {}",
        !global.no_tilde,
        !global.no_hidden
    );
    FileManager::new(
        OsProvider::new()
            .with_tilde_expansion(!global.no_tilde)
            .with_hidden_entries(!global.no_hidden),
    )
}

/// Print paths to stdout, one per line or as a JSON array.
pub fn print_paths(paths: &[Path], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for path in paths {
                writeln!(handle, "{path}")?;
            }
            Ok(())
        }
        OutputFormat::Json => print_json(paths),
    }
}

/// Print a value to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
