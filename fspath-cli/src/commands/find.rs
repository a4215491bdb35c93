//! Find command implementation.
//!
//! This module implements the `find` command, a front end for
//! `find_paths`. Matching entries are printed and not searched further;
//! non-matching directories are searched until the depth runs out.

use crate::error::CliError;
use crate::utils::{manager, print_paths, GlobalOptions, OutputFormat};
use clap::Args;
use fspath::{Path, SearchDepth};

/// Search a directory tree.
#[derive(Args)]
pub struct FindCommand {
    /// Directory to search from
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: Path,

    /// Levels to descend below ROOT's direct children (negative or omitted: unlimited)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub depth: Option<isize>,

    /// Match entries with exactly this file name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Match entries with this extension (without the dot)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

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

impl FindCommand {
    /// Execute the find command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(ext) = &self.ext {
            if ext.starts_with('.') {
                return Err(CliError::InvalidArguments(format!(
                    "--ext takes the extension without its dot, got {ext}"
                )));
            }
        }

        let depth = self.depth.map_or(SearchDepth::Unlimited, SearchDepth::from);
        log::debug!("searching {} with depth {depth:?}", self.root);

        let found = manager(global).find_paths(&self.root, depth, |path| self.matches(path));
        print_paths(&found, self.format)
    }

    /// Whether `path` satisfies every given filter. No filters match everything.
    fn matches(&self, path: &Path) -> bool {
        let name_ok = self.name.as_deref().map_or(true, |name| path.file_name() == name);
        let ext_ok = self.ext.as_deref().map_or(true, |ext| path.extension() == ext);
        name_ok && ext_ok
    }
}
