//! Move command implementation.

use crate::error::CliError;
use crate::utils::{manager, GlobalOptions};
use clap::Args;
use fspath::Path;

/// Move a file or directory. The destination must not exist.
#[derive(Args)]
pub struct MoveCommand {
    /// Item to move
    #[arg(value_name = "SOURCE")]
    pub source: Path,

    /// New location
    #[arg(value_name = "DEST")]
    pub dest: Path,
}

impl MoveCommand {
    /// Execute the mv command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        manager(global).move_file(&self.source, &self.dest)?;
        Ok(())
    }
}
