//! Library exports for fspath-cli.
//!
//! This module exports the CLI structure so the command definitions can be
//! inspected and tested outside the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
