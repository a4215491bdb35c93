//! Mkdir command implementation.

use crate::error::CliError;
use crate::utils::{manager, GlobalOptions};
use clap::Args;
use fspath::Path;

/// Create directories and their parents.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directories to create
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<Path>,
}

impl MkdirCommand {
    /// Execute the mkdir command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manager = manager(global);
        for path in &self.paths {
            manager.create_directory(path)?;
        }
        Ok(())
    }
}
