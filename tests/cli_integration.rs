//! Integration tests that run the CLI binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn bin(config_dir: &Path) -> Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_chitshare", "-", "content"));
    let mut cmd = Command::new(bin);
    cmd.env("CHITSHARE_CONFIG_DIR", config_dir)
        .env_remove("CHITSHARE_THEME")
        .env_remove("CHITSHARE_WRAP_WIDTH")
        .env_remove("CHITSHARE_PREVIEW_LENGTH")
        .env_remove("RUST_LOG")
        // Run from the config dir so dotenv() won't load .env from project root
        .current_dir(config_dir);
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path()).arg("--help").output().expect("run binary");
    let stdout = stdout_of(&output);
    assert!(stdout.contains("chitshare-content"));
    assert!(stdout.contains("parse"));
    assert!(stdout.contains("EXAMPLES:"));
}

#[test]
fn cli_version_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path()).arg("--version").output().expect("run binary");
    assert!(stdout_of(&output).contains("chitshare-content"));
}

#[test]
fn parse_reads_stdin_and_prints_segments() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut cmd = bin(tmp.path());
    cmd.arg("parse");
    let output = run_with_stdin(cmd, "Look:\n```py\nprint(1)\n```\nthanks");
    let segments: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("valid JSON");
    assert_eq!(
        segments,
        serde_json::json!([
            {"kind": "text", "content": "Look:"},
            {"kind": "code", "language": "python", "code": "print(1)\n"},
            {"kind": "text", "content": "thanks"}
        ])
    );
}

#[test]
fn detect_reads_file() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = tmp.path().join("snippet.txt");
    std::fs::write(&path, "SELECT * FROM users WHERE id = 1;\n").expect("write snippet");
    let output = bin(tmp.path())
        .args(["detect", "--file"])
        .arg(&path)
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "sql\n");
}

#[test]
fn check_separates_code_from_chat() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["check", "def foo(x):\n    return x + 1\n"])
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "code\n");

    let output = bin(tmp.path())
        .args(["check", "sounds good, talk later"])
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "text\n");
}

#[test]
fn preview_uses_config_file_length() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    std::fs::write(tmp.path().join("config.json"), r#"{"preview_length": 8}"#)
        .expect("write config");
    let output = bin(tmp.path())
        .args(["preview", "abcdefghij"])
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "abcde...\n");

    let output = bin(tmp.path())
        .args(["preview", "--max-len", "20", "abcdefghij"])
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "abcdefghij\n");
}

#[test]
fn invalid_env_value_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .env("CHITSHARE_PREVIEW_LENGTH", "lots")
        .args(["preview", "hello"])
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Invalid value for CHITSHARE_PREVIEW_LENGTH"),
        "got: {}",
        stderr
    );
}

#[test]
fn missing_input_file_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["parse", "--file", "does-not-exist.txt"])
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read does-not-exist.txt"), "got: {}", stderr);
}

#[test]
fn render_html_outputs_code_block() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["render", "--format", "html", "```rs\nfn main() {}\n```"])
        .output()
        .expect("run binary");
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with(
        "<div class=\"code-block\" data-id=\"code-0\" data-lang=\"rust\" data-code=\"Zm4gbWFpbigpIHt9Cg==\">"
    ));
}

#[test]
fn completions_generate_script() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["completions", "bash"])
        .output()
        .expect("run binary");
    assert!(stdout_of(&output).contains("chitshare-content"));
}
