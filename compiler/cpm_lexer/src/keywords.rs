//! Keyword resolution.
//!
//! The reserved words are `struct`, `return`, `if` and `else`. Every other
//! alphanumeric spelling is a plain name. The lookup uses the spelling's
//! length as a first-pass filter before comparing bytes.

use cpm_ir::TokenKind;

/// Look up a reserved keyword by spelling.
///
/// Returns `None` for anything that should be classified as a name.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            b"if" => Some(TokenKind::If),
            _ => None,
        },
        4 => match text {
            b"else" => Some(TokenKind::Else),
            _ => None,
        },
        6 => match text {
            b"struct" => Some(TokenKind::Struct),
            b"return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
