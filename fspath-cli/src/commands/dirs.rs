//! Dirs command implementation.
//!
//! This module implements the `dirs` command, which prints the platform
//! locations of a standard directory such as `cache` or `fonts`.

use crate::error::CliError;
use crate::utils::{manager, print_paths, GlobalOptions, OutputFormat};
use clap::Args;
use fspath::{DirectoryKind, DirectoryScope};

/// Show the locations of a standard directory.
#[derive(Args)]
pub struct DirsCommand {
    /// Directory kind (home, cache, config, data, local-data, desktop,
    /// documents, downloads, pictures, music, videos, public, templates,
    /// fonts, executables, applications)
    #[arg(value_name = "KIND")]
    pub kind: DirectoryKind,

    /// Show machine-wide locations instead of the current user's
    #[arg(long)]
    pub system: bool,

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

impl DirsCommand {
    /// Execute the dirs command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let scope = if self.system {
            DirectoryScope::System
        } else {
            DirectoryScope::User
        };

        let found = manager(global).standard_directories(self.kind, scope);
        if found.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "no {} directory for this platform and scope",
                self.kind
            )));
        }

        print_paths(&found, self.format)
    }
}
