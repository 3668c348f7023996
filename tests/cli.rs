//! Tests for the hamlc binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn hamlc() -> Command {
    Command::cargo_bin("hamlc").unwrap()
}

#[test]
fn test_compiles_file_to_javascript() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.haml");
    fs::write(&path, "%p Hello\n").unwrap();

    hamlc()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("_$output += \"<p >\";"))
        .stdout(predicate::str::ends_with("return _$output;\n"));
}

#[test]
fn test_reads_standard_input() {
    hamlc()
        .write_stdin("= greeting\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("_$output += (greeting);"));
}

#[test]
fn test_tree_format() {
    hamlc()
        .args(["--format", "tree"])
        .write_stdin("%ul\n  %li one\n")
        .assert()
        .success()
        .stdout("◇   1 %ul\n  ◇   2 %li one\n");
}

#[test]
fn test_json_format() {
    hamlc()
        .args(["-f", "json"])
        .write_stdin("%a\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"%a\""))
        .stdout(predicate::str::contains("\"line_number\": 1"))
        .stdout(predicate::str::contains("source_line").not());
}

#[test]
fn test_config_file_and_doctypes() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("hamlc.toml");
    fs::write(&config, "[javascript]\noutput_variable = \"buf\"\n").unwrap();

    hamlc()
        .arg("--config")
        .arg(&config)
        .arg("--doctypes")
        .write_stdin("!!! 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("var buf = \"\";"))
        .stdout(predicate::str::contains("buf += \"<!DOCTYPE html>\";"));
}

#[test]
fn test_compile_error_exits_nonzero() {
    hamlc()
        .write_stdin("%a\n  %b\n   %c\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed indentation on line 3"));
}

#[test]
fn test_missing_file() {
    hamlc()
        .arg("does-not-exist.haml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading template"));
}
