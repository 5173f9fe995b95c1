//! Integration tests for `dialscope ip`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

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

/// Writes a provider response body to a temp file and returns the handle.
fn response_file(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(body.as_bytes()).expect("write temp file");
    f
}

const SUCCESS_BODY: &str = r#"{
    "status": "success", "query": "8.8.8.8", "reverse": "dns.google",
    "country": "United States", "countryCode": "US", "regionName": "Virginia",
    "city": "Ashburn", "lat": 39.03, "lon": -77.5,
    "isp": "Google LLC", "as": "AS15169 Google LLC",
    "mobile": false, "proxy": false
}"#;

// ---------------------------------------------------------------------------
// ip: address validation and URL output
// ---------------------------------------------------------------------------

#[test]
fn ip_valid_address_prints_request_url() {
    let out = Command::new(dialscope_bin())
        .args(["ip", "8.8.8.8"])
        .output()
        .expect("run dialscope ip");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("http://ip-api.com/json/8.8.8.8?fields="),
        "stdout: {stdout}"
    );
}

#[test]
fn ip_self_lookup_sentinel_accepted() {
    let out = Command::new(dialscope_bin())
        .args(["ip", "me"])
        .output()
        .expect("run dialscope ip");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("http://ip-api.com/json/?fields="), "stdout: {stdout}");
}

#[test]
fn ip_ipv6_address_accepted() {
    let out = Command::new(dialscope_bin())
        .args(["ip", "2001:4860:4860::8888"])
        .output()
        .expect("run dialscope ip");
    assert!(out.status.success());
}

#[test]
fn ip_malformed_address_exit_1() {
    let out = Command::new(dialscope_bin())
        .args(["ip", "dns.google"])
        .output()
        .expect("run dialscope ip");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid IP address"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// ip: --response decoding
// ---------------------------------------------------------------------------

#[test]
fn ip_response_file_renders_report() {
    let f = response_file(SUCCESS_BODY);
    let out = Command::new(dialscope_bin())
        .args([
            "ip",
            "8.8.8.8",
            "--response",
            f.path().to_str().expect("path"),
        ])
        .output()
        .expect("run dialscope ip");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("location:   Ashburn"), "stdout: {stdout}");
    assert!(stdout.contains("asn:        AS15169"), "stdout: {stdout}");
}

#[test]
fn ip_response_from_stdin() {
    let mut child = Command::new(dialscope_bin())
        .args(["ip", "8.8.8.8", "--response", "-", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn dialscope ip");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(SUCCESS_BODY.as_bytes())
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be one JSON object");
    assert_eq!(value["result"]["query"], "8.8.8.8");
    assert_eq!(value["result"]["connection"], "broadband");
}

#[test]
fn ip_provider_fail_response_exit_1() {
    let f = response_file(r#"{"status":"fail","message":"private range","query":"10.0.0.1"}"#);
    let out = Command::new(dialscope_bin())
        .args([
            "ip",
            "10.0.0.1",
            "--response",
            f.path().to_str().expect("path"),
        ])
        .output()
        .expect("run dialscope ip");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("private range"), "stderr: {stderr}");
}

#[test]
fn ip_garbage_response_exit_2() {
    let f = response_file("definitely not json");
    let out = Command::new(dialscope_bin())
        .args([
            "ip",
            "8.8.8.8",
            "--response",
            f.path().to_str().expect("path"),
        ])
        .output()
        .expect("run dialscope ip");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn ip_missing_response_file_exit_2() {
    let out = Command::new(dialscope_bin())
        .args(["ip", "8.8.8.8", "--response", "/no/such/body.json"])
        .output()
        .expect("run dialscope ip");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn ip_oversized_response_exit_2() {
    let f = response_file(SUCCESS_BODY);
    let out = Command::new(dialscope_bin())
        .args([
            "ip",
            "8.8.8.8",
            "--response",
            f.path().to_str().expect("path"),
            "--max-file-size",
            "10",
        ])
        .output()
        .expect("run dialscope ip");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too large"), "stderr: {stderr}");
}
