//! Plain-text transcript output.
//!
//! ```text
//! 'main.c' length: 10 bytes
//! EXPR:
//!   Name @ 0..3 (foo)
//!   LeftParen @ 3..4 (()
//!   RightParen @ 4..5 ())
//! ```

use std::io::{self, Write};

use cpm_ir::{Expression, Token, TokenKind};

/// First line of every transcript.
pub fn write_header(out: &mut impl Write, path: &str, len: u32) -> io::Result<()> {
    writeln!(out, "'{path}' length: {len} bytes")
}

/// One indented line per token: kind, span and source text.
///
/// String literals get their extracted value appended after `=`.
pub fn write_token(out: &mut impl Write, token: &Token, source: &[u8]) -> io::Result<()> {
    let text = escape(token.text(source));
    write!(out, "  {:?} @ {} ({text})", token.kind, token.span)?;
    if let (TokenKind::String, Some(value)) = (token.kind, token.value()) {
        write!(out, " = {}", escape(value.as_bytes()))?;
    }
    writeln!(out)
}

/// An `EXPR:` line followed by each of the expression's tokens.
pub fn write_expression(
    out: &mut impl Write,
    expr: &Expression,
    source: &[u8],
) -> io::Result<()> {
    writeln!(out, "EXPR:")?;
    for token in expr.tokens() {
        write_token(out, token, source)?;
    }
    Ok(())
}

/// Lossy UTF-8 with control characters escaped, so every token stays on
/// one line.
fn escape(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}
