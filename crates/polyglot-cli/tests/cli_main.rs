//! CLI tests for the polyglot command-line interface.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

/// Directory the workspace build drops compiled modules into.
///
/// The module cdylibs are produced by a workspace build, which is an
/// external step as far as the host is concerned; tests that need them
/// skip when they are absent.
fn built_module_dir() -> PathBuf {
    Path::new(env!("CARGO_BIN_EXE_polyglot"))
        .parent()
        .expect("binary has a parent dir")
        .to_path_buf()
}

fn built_module(stem: &str) -> PathBuf {
    let file_name = if cfg!(target_os = "windows") {
        format!("{}.dll", stem)
    } else if cfg!(target_os = "macos") {
        format!("lib{}.dylib", stem)
    } else {
        format!("lib{}.so", stem)
    };
    built_module_dir().join(file_name)
}

/// Test that the CLI binary exists and shows help.
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("greet"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("validate"));
}

/// Test that the CLI shows version information.
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("polyglot"));
}

/// An unregistered selector exits 1 with a diagnostic, without ever
/// touching the module directory.
#[test]
fn test_unknown_language_is_rejected_before_module_access() {
    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("greet")
        .arg("french")
        .arg("--module-dir")
        .arg("/nonexistent/module/dir");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown language"))
        .stderr(predicate::str::contains("french"))
        .stderr(predicate::str::contains("Known languages"));
}

/// The bare positional form behaves like the greet subcommand.
#[test]
fn test_bare_positional_unknown_language() {
    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("french");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown language"));
}

/// A registered selector whose module is missing exits 1 with a
/// module-not-found diagnostic.
#[test]
fn test_missing_module_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("greet")
        .arg("english")
        .arg("--module-dir")
        .arg(dir.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("module not found"));
}

/// Validate reports FAILED for a nonexistent module.
#[test]
fn test_validate_nonexistent_module() {
    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("validate").arg("/nonexistent/module.so");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Module Validation: FAILED"));
}

/// Validate reports FAILED for a file that is not a loadable library.
#[test]
fn test_validate_garbage_file() {
    let dir = tempfile::tempdir().unwrap();
    let ext = if cfg!(target_os = "windows") {
        "dll"
    } else if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    };
    let path = dir.path().join(format!("garbage.{}", ext));
    std::fs::write(&path, b"definitely not a shared object").unwrap();

    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("validate").arg(&path);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Module Validation: FAILED"));
}

/// List on an empty directory reports no modules and exits 0.
#[test]
fn test_list_empty_module_dir() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("list").arg("--module-dir").arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No modules found."));
}

/// End-to-end: load the english module and print its greeting.
#[test]
fn test_greet_english_end_to_end() {
    let module = built_module("eng_greeter");
    if !module.exists() {
        eprintln!("skipping: {} not built", module.display());
        return;
    }

    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("greet")
        .arg("english")
        .arg("--module-dir")
        .arg(built_module_dir());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello Universe"));
}

/// End-to-end: the default selector is english.
#[test]
fn test_greet_default_language_end_to_end() {
    let module = built_module("eng_greeter");
    if !module.exists() {
        eprintln!("skipping: {} not built", module.display());
        return;
    }

    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("--module-dir").arg(built_module_dir());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello Universe"));
}

/// End-to-end: the chinese module greets in chinese.
#[test]
fn test_greet_chinese_end_to_end() {
    let module = built_module("chi_greeter");
    if !module.exists() {
        eprintln!("skipping: {} not built", module.display());
        return;
    }

    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("chinese").arg("--module-dir").arg(built_module_dir());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("你好宇宙"));
}

/// End-to-end: validate passes for a built module.
#[test]
fn test_validate_built_module_end_to_end() {
    let module = built_module("swe_greeter");
    if !module.exists() {
        eprintln!("skipping: {} not built", module.display());
        return;
    }

    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.arg("validate").arg(&module);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Module Validation: PASSED"))
        .stdout(predicate::str::contains("swedish"));
}
