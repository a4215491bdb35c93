//! List command implementation.
//!
//! This module implements the `ls` command, which prints the entries of a
//! directory, optionally including every descendant.

use crate::error::CliError;
use crate::utils::{manager, print_paths, GlobalOptions, OutputFormat};
use clap::Args;
use fspath::Path;

/// List the entries of a directory.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to list
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: Path,

    /// Include every descendant, each directory before its contents
    #[arg(long, short)]
    pub recursive: bool,

    /// Sort entries by path instead of listing order
    #[arg(long)]
    pub sort: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "FSPATH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl ListCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manager = manager(global);

        if !manager.is_directory(&self.path) {
            return Err(CliError::SemanticFailure(format!(
                "not a directory: {}",
                self.path
            )));
        }

        let mut entries = if self.recursive {
            manager.children_recursive(&self.path)
        } else {
            manager.children(&self.path)
        };

        if self.sort {
            entries.sort();
        }

        print_paths(&entries, self.format)
    }
}
