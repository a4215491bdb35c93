//! Touch command implementation.

use crate::error::CliError;
use crate::utils::{manager, GlobalOptions};
use clap::Args;
use fspath::Path;

/// Create empty files.
#[derive(Args)]
pub struct TouchCommand {
    /// Files to create; existing files are truncated
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<Path>,
}

impl TouchCommand {
    /// Execute the touch command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manager = manager(global);
        for path in &self.paths {
            manager.create_file(path)?;
        }
        Ok(())
    }
}
