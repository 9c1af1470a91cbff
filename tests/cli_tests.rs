//! CLI integration tests

use std::process::Command;

fn mindscribe_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mindscribe"))
}

#[test]
fn help_output() {
    let output = mindscribe_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("journaling"));
    assert!(stdout.contains("session"));
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("config"));
}

#[test]
fn version_output() {
    let output = mindscribe_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mindscribe"));
}

#[test]
fn chat_prompt_from_seed() {
    let output = mindscribe_bin()
        .args(["chat", "hello", "there"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "hello there");
}

#[test]
fn diary_prompt_format() {
    let output = mindscribe_bin()
        .args(["diary", "--title", "Monday", "--body", "Long day."])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "[Diary]\nTitle: Monday\nLong day.");
}

#[test]
fn music_prompt_format() {
    let output = mindscribe_bin()
        .args(["music", "--genre", "jazz", "--bpm", "120", "--mood", "warm"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Music: jazz @ 120 BPM\nMood: warm");
}

#[test]
fn image_prompt_format() {
    let output = mindscribe_bin()
        .args(["image", "--subject", "cat", "--style", "cartoon"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Image: cat\nStyle: cartoon");
}

#[test]
fn invalid_mode_error() {
    let output = mindscribe_bin()
        .arg("sonnet")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value") || stderr.contains("possible values"),
        "Expected invalid mode error, got: {}",
        stderr
    );
}

#[test]
fn config_path_command() {
    let output = mindscribe_bin()
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mindscribe"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = mindscribe_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn heard_requires_simulate() {
    let output = mindscribe_bin()
        .args(["session", "--heard", "hello"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--simulate") || stderr.contains("required"),
        "Expected missing --simulate error, got: {}",
        stderr
    );
}

// Note: tests for a plain `session` run live in session_tests.rs and use
// the simulated adapters; an unsimulated run would reach for real audio
// hardware and hang.
