//! Integration tests for global options and their environment variables.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_no_hidden_flag() {
    let env = TestEnv::new();
    env.create_file(".hidden", "");
    env.create_file("shown", "");

    assert_eq!(env.lines(&["ls", "--sort"]), vec![".hidden", "shown"]);
    assert_eq!(env.lines(&["--no-hidden", "ls"]), vec!["shown"]);
}

#[test]
fn test_no_hidden_env() {
    let env = TestEnv::new();
    env.create_file(".hidden", "");
    env.create_file("shown", "");

    env.command()
        .env("FSPATH_NO_HIDDEN", "true")
        .arg("ls")
        .assert()
        .success()
        .stdout("shown\n");
}

#[cfg(unix)]
#[test]
fn test_tilde_expansion() {
    let env = TestEnv::new();
    let home = env.create_dir("home");

    env.command()
        .env("HOME", &home)
        .args(["inspect", "~/notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "standardized: {}/notes",
            home.display()
        )));

    env.command()
        .env("HOME", &home)
        .args(["--no-tilde", "inspect", "~/notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standardized: ~/notes"));
}

#[test]
fn test_global_flags_after_subcommand() {
    let env = TestEnv::new();
    env.create_file(".hidden", "");

    env.command()
        .args(["ls", "--no-hidden"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "mkdir", "made"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_quiet_hides_link_location() {
    let env = TestEnv::new();
    env.create_file("target.txt", "");

    env.command()
        .args(["--quiet", "ln", "target.txt", "alias"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fspath "));
}
