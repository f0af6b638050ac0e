// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end driver tests: source in, transcript out.
//!
//! Most cases go through `run_source` with an in-memory buffer; the
//! `run_file` cases cover loading from disk.

use std::io::Write;

use cpm_lexer::SourceBuffer;
use cpmc::{run_file, run_source, Command, DriverConfig, DriverError, LoadError};
use pretty_assertions::assert_eq;

fn transcript(config: &DriverConfig, source: &str) -> String {
    let mut out = Vec::new();
    run_source(config, "test.c", &SourceBuffer::new(source), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn segment(source: &str) -> String {
    transcript(&DriverConfig::default(), source)
}

fn lex(source: &str) -> String {
    transcript(&DriverConfig::new(Command::Lex), source)
}

// === segment ===

#[test]
fn segment_call_then_statement() {
    let out = segment("foo(1, \"a\")\nreturn;\n");
    assert_eq!(
        out,
        "'test.c' length: 20 bytes\n\
         EXPR:\n\
         \x20 Name @ 0..3 (foo)\n\
         \x20 LeftParen @ 3..4 (()\n\
         \x20 Int @ 4..5 (1)\n\
         \x20 Comma @ 5..6 (,)\n\
         \x20 String @ 7..10 (\"a\") = a\n\
         \x20 RightParen @ 10..11 ())\n\
         EXPR:\n\
         \x20 Return @ 12..18 (return)\n\
         EXPR:\n\
         \x20 Semicolon @ 18..19 (;)\n"
    );
}

#[test]
fn segment_suppresses_newline_expressions() {
    let out = segment("\n\n1\n");
    assert_eq!(
        out,
        "'test.c' length: 4 bytes\nEXPR:\n  Int @ 2..3 (1)\n"
    );
}

#[test]
fn segment_empty_source() {
    assert_eq!(segment(""), "'test.c' length: 0 bytes\n");
}

#[test]
fn segment_drops_token_after_name() {
    let out = segment("int x;");
    assert_eq!(
        out,
        "'test.c' length: 6 bytes\nEXPR:\n  Name @ 0..3 (int)\nEXPR:\n  Semicolon @ 5..6 (;)\n"
    );
}

#[test]
fn segment_options_change_grouping() {
    let mut config = DriverConfig::default();
    assert!(config.apply_flag("--nested-calls"));
    assert!(config.apply_flag("--keep-lookahead"));

    let out = transcript(&config, "f(g(1)) x;");
    assert_eq!(
        out,
        "'test.c' length: 10 bytes\n\
         EXPR:\n\
         \x20 Name @ 0..1 (f)\n\
         \x20 LeftParen @ 1..2 (()\n\
         \x20 Name @ 2..3 (g)\n\
         \x20 LeftParen @ 3..4 (()\n\
         \x20 Int @ 4..5 (1)\n\
         \x20 RightParen @ 5..6 ())\n\
         \x20 RightParen @ 6..7 ())\n\
         EXPR:\n\
         \x20 Name @ 8..9 (x)\n\
         EXPR:\n\
         \x20 Semicolon @ 9..10 (;)\n"
    );
}

#[test]
fn directives_and_comments_are_expressions() {
    let out = segment("#include <x.h>\n// hi\n");
    assert_eq!(
        out,
        "'test.c' length: 21 bytes\n\
         EXPR:\n\
         \x20 Preprocessor @ 0..14 (#include <x.h>)\n\
         EXPR:\n\
         \x20 LineComment @ 15..20 (// hi)\n"
    );
}

// === lex ===

#[test]
fn lex_prints_every_token_then_eof() {
    let out = lex("a==b\n");
    assert_eq!(
        out,
        "'test.c' length: 5 bytes\n\
         Tokens:\n\
         \x20 Name @ 0..1 (a)\n\
         \x20 EqualEqual @ 1..3 (==)\n\
         \x20 Name @ 3..4 (b)\n\
         \x20 Newline @ 4..5 (\\n)\n\
         EOF\n"
    );
}

#[test]
fn lex_extended_symbols() {
    let mut config = DriverConfig::new(Command::Lex);
    assert!(config.apply_flag("--extended-symbols"));
    let out = transcript(&config, "a<=b");
    assert!(out.contains("  LessEqual @ 1..3 (<=)\n"), "{out}");

    let out = lex("a<=b");
    assert!(out.contains("  Unknown @ 1..2 (<)\n"), "{out}");
}

#[test]
fn lex_stops_at_interior_nul() {
    let buf = SourceBuffer::from_bytes(b"a\0b");
    let mut out = Vec::new();
    run_source(&DriverConfig::new(Command::Lex), "nul.c", &buf, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "'nul.c' length: 3 bytes\nTokens:\n  Name @ 0..1 (a)\nEOF\n"
    );
}

// === errors ===

#[test]
fn lex_error_keeps_earlier_output() {
    let mut out = Vec::new();
    let buf = SourceBuffer::new("x;\n\"oops");
    let err = run_source(&DriverConfig::default(), "bad.c", &buf, &mut out).unwrap_err();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "'bad.c' length: 8 bytes\nEXPR:\n  Name @ 0..1 (x)\n"
    );
    let DriverError::Lex(diagnostic) = err else {
        panic!("expected a lex error, got {err:?}");
    };
    assert_eq!((diagnostic.line, diagnostic.column), (2, 1));
    assert!(diagnostic
        .to_string()
        .starts_with("error: unterminated string literal\n --> bad.c:2:1\n"));
}

#[test]
fn unterminated_block_comment_only_with_flag() {
    let source = SourceBuffer::new("/* open");

    let mut out = Vec::new();
    run_source(&DriverConfig::new(Command::Lex), "a.c", &source, &mut out).unwrap();

    let mut config = DriverConfig::new(Command::Lex);
    assert!(config.apply_flag("--block-comments"));
    let err = run_source(&config, "a.c", &source, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, DriverError::Lex(_)));
}

// === run_file ===

#[test]
fn run_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"f()").unwrap();
    let path = file.path().to_str().unwrap();

    let mut out = Vec::new();
    run_file(&DriverConfig::default(), path, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "'{path}' length: 3 bytes\nEXPR:\n  Name @ 0..1 (f)\n  LeftParen @ 1..2 (()\n  RightParen @ 2..3 ())\n"
        )
    );
}

#[test]
fn run_file_missing_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.c");
    let path = path.to_str().unwrap();

    let mut out = Vec::new();
    let err = run_file(&DriverConfig::default(), path, &mut out).unwrap_err();
    assert!(matches!(err, DriverError::Load(LoadError::NotFound { .. })));
    assert_eq!(err.to_string(), format!("cannot find file '{path}'"));
    assert!(out.is_empty());
}
