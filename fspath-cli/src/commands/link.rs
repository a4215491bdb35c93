//! Link command implementation.
//!
//! When DEST is an existing directory and SOURCE is not, the link is created
//! inside DEST under SOURCE's file name. The created link's location is
//! printed unless `--quiet` is given.

use crate::error::CliError;
use crate::utils::{manager, GlobalOptions};
use clap::Args;
use fspath::Path;

/// Create a symbolic link pointing to SOURCE.
#[derive(Args)]
pub struct LinkCommand {
    /// Path the link points to, stored as written
    #[arg(value_name = "SOURCE")]
    pub source: Path,

    /// Link location, or an existing directory to create it in
    #[arg(value_name = "DEST")]
    pub dest: Path,
}

impl LinkCommand {
    /// Execute the ln command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let link = manager(global).symlink_to(&self.source, &self.dest)?;
        if !global.quiet {
            println!("{link}");
        }
        Ok(())
    }
}
