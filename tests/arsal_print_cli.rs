use std::process::{Command, Output};

fn arsal_print(args: &[&str]) -> Output {
    let path = env!("CARGO_BIN_EXE_arsal-print");
    Command::new(path)
        .args(args)
        .env_remove("ARSAL_PRINT_MODE")
        .output()
        .unwrap_or_else(|error| panic!("failed to run {path}: {error}"))
}

fn stderr_utf8(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

#[test]
fn prints_decorated_line_to_stderr() {
    let output = arsal_print(&["--level", "warning", "--tag", "Cli", "battery", "low"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "nothing goes to stdout by default");

    let stderr = stderr_utf8(&output);
    assert!(stderr.starts_with("[WNG] Cli | "), "stderr was {stderr:?}");
    assert!(stderr.contains(" | run:"), "stderr was {stderr:?}");
    assert!(stderr.ends_with(" - battery low\n"), "stderr was {stderr:?}");
}

#[test]
fn release_mode_drops_debug_lines() {
    let output = arsal_print(&["--mode", "release", "--level", "debug", "hidden"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn debug_mode_prints_debug_lines() {
    let output = arsal_print(&["--mode", "debug", "--level", "debug", "shown"]);
    assert!(output.status.success());
    assert!(stderr_utf8(&output).starts_with("[DBG] ARSAL | "));
}

#[test]
fn environment_mode_applies_without_flag() {
    let path = env!("CARGO_BIN_EXE_arsal-print");
    let output = Command::new(path)
        .args(["--level", "debug", "hidden"])
        .env("ARSAL_PRINT_MODE", "release")
        .output()
        .expect("run arsal-print");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn bare_stdout_line_has_no_decoration() {
    let output = arsal_print(&["--bare", "--stdout", "plain"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(!stdout.starts_with('['));
    assert!(stdout.ends_with(" - plain\n"));
}

#[test]
fn unknown_level_fails_with_message() {
    let output = arsal_print(&["--level", "loud", "x"]);
    assert!(!output.status.success());
    assert!(stderr_utf8(&output).contains("unknown print level: loud"));
}

#[test]
fn help_lists_usage() {
    let output = arsal_print(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("arsal-print"));
}
