//! Remove command implementation.
//!
//! Directories are removed with everything below them. Symlinks are
//! removed themselves, never their targets.

use crate::error::CliError;
use crate::utils::{manager, GlobalOptions};
use clap::Args;
use fspath::Path;

/// Remove files, symlinks or directory trees.
#[derive(Args)]
pub struct RemoveCommand {
    /// Items to remove
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<Path>,

    /// Ignore paths that do not exist
    #[arg(long, short)]
    pub force: bool,
}

impl RemoveCommand {
    /// Execute the rm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manager = manager(global);
        for path in &self.paths {
            if self.force && !manager.exists(path) && !manager.is_symlink(path) {
                log::debug!("skipping missing {path}");
                continue;
            }
            manager.delete_file(path)?;
        }
        Ok(())
    }
}
