//! Tests for the configuration-driven entry point.

use std::ffi::OsString;
use std::io::Cursor;

use crate::run;

fn args(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

#[test]
fn unusable_configuration_is_reported_on_stderr() {
    let mut output = Vec::new();
    let mut stderr = Vec::new();
    let _ = run(
        args(&["helm", "--max-line-bytes", "0"]),
        Cursor::new(b"hello\n".to_vec()),
        &mut output,
        &mut stderr,
    );

    let stderr = String::from_utf8(stderr).expect("utf8");
    assert!(
        stderr.contains("max_line_bytes must be greater than zero"),
        "{stderr}"
    );
    assert!(output.is_empty());
}

#[test]
fn command_line_settings_reach_the_session() {
    let mut output = Vec::new();
    let mut stderr = Vec::new();
    let _ = run(
        args(&["helm", "--max-line-bytes", "8"]),
        Cursor::new(b"hello -abcdef\nhello\n".to_vec()),
        &mut output,
        &mut stderr,
    );

    let output = String::from_utf8(output).expect("utf8");
    assert_eq!(
        output,
        "ERROR: line too long: 14 bytes exceeds the 8 byte limit\nHi there!\n"
    );
}
