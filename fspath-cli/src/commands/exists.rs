//! Command to assert that a path exists.

use crate::error::CliError;
use crate::utils::{manager, GlobalOptions};
use clap::Args;
use fspath::Path;

/// Exit successfully only if a path exists.
#[derive(Args)]
pub struct ExistsCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: Path,

    /// Also require the path to be a directory
    #[arg(long)]
    pub directory: bool,

    /// Invert the assertion (fail if the path exists)
    #[arg(long)]
    pub not: bool,
}

impl ExistsCommand {
    /// Execute the exists command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manager = manager(global);
        let found = if self.directory {
            manager.is_directory(&self.path)
        } else {
            manager.exists(&self.path)
        };

        if found != self.not {
            return Ok(());
        }

        let what = if self.directory { "directory" } else { "path" };
        let msg = if self.not {
            format!("Assertion failed: {what} exists at {}", self.path)
        } else {
            format!("Assertion failed: no {what} at {}", self.path)
        };
        Err(CliError::SemanticFailure(msg))
    }
}
