//! Build script for fspath-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! The command structure is declared here rather than imported, since build
//! scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("fspath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and manipulate filesystem paths")
        .long_about(
            "Command-line tool for inspecting, searching and manipulating filesystem paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-tilde")
                .long("no-tilde")
                .help("Do not expand a leading ~ when standardizing paths")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("FSPATH_NO_TILDE"),
        )
        .arg(
            Arg::new("no-hidden")
                .long("no-hidden")
                .help("Skip dot-files when listing directories")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("FSPATH_NO_HIDDEN"),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Show how a path decomposes and resolves")
                .long_about("Print the components, parent, extension and the standardized, absolute and resolved forms of a path"),
            Command::new("ls")
                .about("List the entries of a directory")
                .long_about("List a directory, or with --recursive every descendant with each directory before its contents"),
            Command::new("find")
                .about("Search a directory tree")
                .long_about("Find entries by name or extension. Matching directories are not searched further"),
            Command::new("touch").about("Create empty files"),
            Command::new("mkdir").about("Create directories and their parents"),
            Command::new("rm")
                .about("Remove files, symlinks or directory trees")
                .long_about("Remove items. Symlinks are removed themselves, never their targets"),
            Command::new("mv")
                .about("Move a file or directory")
                .long_about("Move an item. Fails if the destination already exists"),
            Command::new("cp")
                .about("Copy a file or directory")
                .long_about("Copy an item, recursively for directories. Fails if the destination already exists"),
            Command::new("ln")
                .about("Create a symbolic link")
                .long_about("Create a symlink. When the destination is a directory the link takes the source's file name"),
            Command::new("dirs")
                .about("Show the locations of a standard directory")
                .long_about("Print the user or system locations of a standard directory such as cache or fonts"),
            Command::new("exists")
                .about("Exit successfully only if a path exists")
                .long_about("Check for a path and exit with status 1 when the check fails"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("fspath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
