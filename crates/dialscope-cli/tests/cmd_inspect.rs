//! Integration tests for `dialscope inspect`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `dialscope` binary.
fn dialscope_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("dialscope");
    path
}

#[test]
fn inspect_exit_0() {
    let out = Command::new(dialscope_bin())
        .args(["inspect"])
        .output()
        .expect("run dialscope inspect");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
}

#[test]
fn inspect_human_lists_counts() {
    let out = Command::new(dialscope_bin())
        .args(["inspect"])
        .output()
        .expect("run dialscope inspect");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("std codes:"), "stdout: {stdout}");
    assert!(stdout.contains("operator bands:"), "stdout: {stdout}");
    assert!(stdout.contains("circles:"), "stdout: {stdout}");
}

#[test]
fn inspect_json_counts_are_positive() {
    let out = Command::new(dialscope_bin())
        .args(["inspect", "--format", "json"])
        .output()
        .expect("run dialscope inspect");
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be one JSON object");
    assert_eq!(value["type"], "tables");
    assert!(value["stats"]["std_codes"].as_u64().expect("count") > 0);
    assert!(value["stats"]["operator_prefixes"].as_u64().expect("count") > 0);
}

#[test]
fn version_flag_prints_version() {
    let out = Command::new(dialscope_bin())
        .args(["--version"])
        .output()
        .expect("run dialscope --version");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("0.1.0"), "stdout: {stdout}");
}
