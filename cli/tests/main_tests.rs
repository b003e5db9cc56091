//! # Codepal CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Verifies the top-level behavior of the `codepal` binary: standard flags,
//! the interactive `chat` command driven through stdin, and `serve` startup
//! failures that exit before binding a port.
//!
mod common;

use common::codepal_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_main_help_flag() {
    codepal_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("chat"));
}

#[test]
fn test_main_version_flag() {
    codepal_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    codepal_cmd().assert().failure();
}

#[test]
fn test_chat_simple_math_over_stdin() {
    codepal_cmd()
        .args(["chat", "--simple", "--seed", "1"])
        .write_stdin("calculate 5 + 3\ndefinition of loop\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Codepal: Result: 8.0"))
        .stdout(predicate::str::contains("Codepal: **Loop**: "))
        .stdout(predicate::str::contains("Codepal: Goodbye!"));
}

#[test]
fn test_chat_full_bot_with_custom_name() {
    codepal_cmd()
        .args(["chat", "--name", "Rusty"])
        .write_stdin("Help with NameError\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat with Rusty!"))
        .stdout(predicate::str::contains("Rusty: **NameError Solution:**"));
}

#[test]
fn test_serve_with_missing_config_fails() {
    codepal_cmd()
        .args(["serve", "--config", "/path/that/does/not/exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_serve_with_unknown_variant_fails() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("codepal.toml");
    fs::write(&config_path, "variant = \"fancy\"\n").expect("Failed to write config");

    codepal_cmd()
        .args(["serve", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown chatbot variant 'fancy'"));
}
