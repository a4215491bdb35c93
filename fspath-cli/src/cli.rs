//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, CopyCommand, DirsCommand, ExistsCommand, FindCommand, InspectCommand,
    LinkCommand, ListCommand, MkdirCommand, MoveCommand, RemoveCommand, TouchCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting and manipulating filesystem paths.
#[derive(Parser)]
#[command(name = "fspath")]
#[command(version, about = "Inspect and manipulate filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Do not expand a leading ~ when standardizing paths
    #[arg(long, global = true, env = "FSPATH_NO_TILDE")]
    pub no_tilde: bool,

    /// Skip dot-files when listing directories
    #[arg(long, global = true, env = "FSPATH_NO_HIDDEN")]
    pub no_hidden: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show how a path decomposes and resolves
    Inspect(InspectCommand),

    /// List the entries of a directory
    Ls(ListCommand),

    /// Search a directory tree
    Find(FindCommand),

    /// Create empty files
    Touch(TouchCommand),

    /// Create directories and their parents
    Mkdir(MkdirCommand),

    /// Remove files, symlinks or directory trees
    Rm(RemoveCommand),

    /// Move a file or directory
    Mv(MoveCommand),

    /// Copy a file or directory
    Cp(CopyCommand),

    /// Create a symbolic link
    Ln(LinkCommand),

    /// Show the locations of a standard directory
    Dirs(DirsCommand),

    /// Exit successfully only if a path exists
    Exists(ExistsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
