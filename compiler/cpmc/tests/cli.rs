// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Tests of the `cpm` binary's streams and exit status.

use std::io::Write;
use std::process::{Command, Output};

fn cpm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cpm"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn unknown_flag_reports_on_stderr_only() {
    let out = cpm(&["segment", "--bogus", "main.c"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "stdout: {}", text(&out.stdout));

    let stderr = text(&out.stderr);
    assert!(stderr.starts_with("error: unknown flag '--bogus'\n"), "{stderr}");
    assert!(stderr.contains("Flags:\n"), "{stderr}");
    assert!(stderr.contains("  --nested-calls "), "{stderr}");
}

#[test]
fn help_goes_to_stdout() {
    let out = cpm(&["help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(text(&out.stdout).contains("Flags:\n"));
    assert!(out.stderr.is_empty());
}

#[test]
fn missing_argument_fails() {
    let out = cpm(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(text(&out.stderr).starts_with("error: no input file\n"));
}

#[test]
fn lex_error_exits_nonzero_after_partial_transcript() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"x;\n\"open").unwrap();
    let path = file.path().to_str().unwrap();

    let out = cpm(&[path]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        text(&out.stdout),
        format!("'{path}' length: 8 bytes\nEXPR:\n  Name @ 0..1 (x)\n")
    );
    assert!(text(&out.stderr).starts_with("error: unterminated string literal\n"));
}
