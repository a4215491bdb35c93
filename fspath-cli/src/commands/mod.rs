//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `inspect`: Show how a path decomposes and resolves
//! - `ls`: List the entries of a directory
//! - `find`: Search a directory tree by name or extension
//! - `touch`: Create empty files
//! - `mkdir`: Create directories
//! - `rm`: Remove files, symlinks and directory trees
//! - `mv`: Move an item without overwriting
//! - `cp`: Copy an item without overwriting
//! - `ln`: Create a symbolic link
//! - `dirs`: Show standard directory locations
//! - `exists`: Assert that a path exists
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod copy;
pub mod dirs;
pub mod exists;
pub mod find;
pub mod inspect;
pub mod link;
pub mod list;
pub mod mkdir;
pub mod move_item;
pub mod remove;
pub mod touch;

pub use completions::CompletionsCommand;
pub use copy::CopyCommand;
pub use dirs::DirsCommand;
pub use exists::ExistsCommand;
pub use find::FindCommand;
pub use inspect::InspectCommand;
pub use link::LinkCommand;
pub use list::ListCommand;
pub use mkdir::MkdirCommand;
pub use move_item::MoveCommand;
pub use remove::RemoveCommand;
pub use touch::TouchCommand;
