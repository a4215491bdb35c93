//! Copy command implementation.

use crate::error::CliError;
use crate::utils::{manager, GlobalOptions};
use clap::Args;
use fspath::Path;

/// Copy a file, or a directory recursively. The destination must not exist.
#[derive(Args)]
pub struct CopyCommand {
    /// Item to copy
    #[arg(value_name = "SOURCE")]
    pub source: Path,

    /// Location of the copy
    #[arg(value_name = "DEST")]
    pub dest: Path,
}

impl CopyCommand {
    /// Execute the cp command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        manager(global).copy_file(&self.source, &self.dest)?;
        Ok(())
    }
}
