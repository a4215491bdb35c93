//! Inspect command implementation.
//!
//! This module implements the `inspect` command, which shows every derived
//! form of a path: its components, parent, extension, and standardized,
//! absolute and resolved forms, along with what exists on disk.

use crate::error::CliError;
use crate::utils::{manager, print_json, GlobalOptions, OutputFormat};
use clap::Args;
use fspath::{FileManager, FileSystemProvider, Path};
use serde::Serialize;
use std::io::{self, Write};

/// Show how a path decomposes and resolves.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: Path,

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

/// Everything `inspect` reports about a path.
#[derive(Debug, Serialize)]
pub struct PathReport {
    raw: Path,
    components: Vec<Path>,
    parent: Path,
    file_name: String,
    extension: String,
    standardized: Path,
    absolute: Path,
    resolved: Path,
    exists: bool,
    is_directory: bool,
    is_symlink: bool,
}

impl PathReport {
    /// Gather the report for `path` through `manager`.
    pub fn new<P: FileSystemProvider>(
        manager: &FileManager<P>,
        path: &Path,
    ) -> Result<Self, CliError> {
        Ok(Self {
            raw: path.clone(),
            components: path.components(),
            parent: path.parent(),
            file_name: path.file_name().to_string(),
            extension: path.extension().to_string(),
            standardized: manager.standardized(path),
            absolute: manager.absolute(path)?,
            resolved: manager.resolved(path),
            exists: manager.exists(path),
            is_directory: manager.is_directory(path),
            is_symlink: manager.is_symlink(path),
        })
    }

    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        let components: Vec<&str> = self.components.iter().map(Path::as_str).collect();
        writeln!(out, "raw:          {}", self.raw)?;
        writeln!(out, "components:   {}", components.join(" | "))?;
        writeln!(out, "parent:       {}", self.parent)?;
        writeln!(out, "file name:    {}", self.file_name)?;
        writeln!(out, "extension:    {}", self.extension)?;
        writeln!(out, "standardized: {}", self.standardized)?;
        writeln!(out, "absolute:     {}", self.absolute)?;
        writeln!(out, "resolved:     {}", self.resolved)?;
        writeln!(out, "exists:       {}", self.exists)?;
        writeln!(out, "directory:    {}", self.is_directory)?;
        writeln!(out, "symlink:      {}", self.is_symlink)
    }
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let report = PathReport::new(&manager(global), &self.path)?;

        match self.format {
            OutputFormat::Text => {
                let stdout = io::stdout();
                report.write_text(&mut stdout.lock())?;
                Ok(())
            }
            OutputFormat::Json => print_json(&report),
        }
    }
}
