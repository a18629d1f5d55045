//! Integration tests for the `loxlex` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the loxlex binary built for this test run
fn loxlex_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_loxlex"))
}

/// Run loxlex with an isolated config directory
fn loxlex(
    config_home: &Path,
    args: &[&str],
) -> Output {
    Command::new(loxlex_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("LOXLEX_LOG")
        .output()
        .unwrap()
}

/// Helper function to create a test file
fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_run_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "ok.lox", "var x = 3.14;\n");

    let output = loxlex(temp_dir.path(), &["run", file.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "VAR var null",
            "IDENTIFIER x null",
            "EQUAL = null",
            "NUMBER 3.14 3.14",
            "SEMICOLON ; null",
            "EOF  null",
        ]
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_run_file_with_errors_exits_65() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "bad.lox", "print 1;\nvar y = @;\n\"open");

    let output = loxlex(temp_dir.path(), &["run", file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(65));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // tokens are still printed
    assert!(stdout.contains("PRINT print null"));
    assert!(stdout.trim_end().ends_with("EOF  null"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[line 2] Error : Unexpected character: '@'"));
    assert!(stderr.contains("    2 | var y = @;"));
    assert!(stderr.contains("[line 3] Error : Unterminated string."));
}

#[test]
fn test_run_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.lox");

    let output = loxlex(temp_dir.path(), &["run", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(65));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to run"));
}

#[test]
fn test_eval_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = loxlex(temp_dir.path(), &["eval", "--format", "json", "a != \"b\""]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = value.as_array().unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1]["kind"], "BANG_EQUAL");
    assert_eq!(tokens[2]["literal"], "b");
    assert_eq!(tokens[3]["kind"], "EOF");
}

#[test]
fn test_eval_json_errors() {
    let temp_dir = TempDir::new().unwrap();

    let output = loxlex(temp_dir.path(), &["--format", "json", "eval", "#"]);

    assert_eq!(output.status.code(), Some(65));
    let errors: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(errors[0]["kind"], "UnexpectedCharacter");
    assert_eq!(errors[0]["line"], 1);
}

#[test]
fn test_config_selects_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("loxlex");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();

    let output = loxlex(temp_dir.path(), &["eval", "1"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["literal"], 1.0);

    // the flag wins over the config file
    let output = loxlex(temp_dir.path(), &["eval", "--format", "text", "1"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "NUMBER 1 1.0\nEOF  null\n");
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("loxlex");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "this is = = not toml").unwrap();

    let output = loxlex(temp_dir.path(), &["eval", "nil"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "NIL nil null\nEOF  null\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignoring user config"));
}

/// Run `loxlex repl` with `input` piped to stdin
fn loxlex_repl(
    config_home: &Path,
    args: &[&str],
    input: &str,
) -> Output {
    let mut child = Command::new(loxlex_bin())
        .args(args)
        .arg("repl")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("LOXLEX_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_repl_bad_line_does_not_end_session() {
    let temp_dir = TempDir::new().unwrap();

    let output = loxlex_repl(temp_dir.path(), &[], "@\nvar\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to Lox Repl"));
    assert!(stdout.contains("VAR var null"));
    assert_eq!(stdout.matches("EOF  null").count(), 2);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Error :").count(), 1);
    assert!(stderr.contains("[line 1] Error : Unexpected character: '@'"));
}

#[test]
fn test_repl_json_errors() {
    let temp_dir = TempDir::new().unwrap();

    let output = loxlex_repl(temp_dir.path(), &["--format", "json"], "@ x\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"IDENTIFIER\""));

    let errors: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(errors[0]["kind"], "UnexpectedCharacter");
    assert_eq!(errors[0]["line"], 1);
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    let output = loxlex(temp_dir.path(), &["version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("loxlex "));
}

#[test]
fn test_no_subcommand_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = loxlex(temp_dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
}
