//! Scanner for C+- source text.
//!
//! Turns an immutable byte buffer into a stream of classified [`Token`]s.
//! The scanner is a single-pass state machine over a sentinel-terminated
//! [`SourceBuffer`]: one call to [`Scanner::next_token`] produces exactly
//! one token and only ever moves the read position forward.
//!
//! Space and tab are skipped silently; every other byte ends up inside some
//! token's span. Bytes the grammar does not know become
//! [`TokenKind::Unknown`] tokens rather than errors. The only hard failures
//! are literals that run off the end of the buffer ([`LexError`]).
//!
//! [`Token`]: cpm_ir::Token
//! [`TokenKind::Unknown`]: cpm_ir::TokenKind::Unknown

mod cursor;
mod keywords;
mod lex_error;
mod options;
mod scanner;
mod source_buffer;

pub use cursor::Cursor;
pub use lex_error::LexError;
pub use options::ScanOptions;
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;

use cpm_ir::Token;

/// Scan a whole buffer into a token vector.
///
/// The returned vector always ends with the `Eof` token.
pub fn tokenize(source: &SourceBuffer, options: ScanOptions) -> Result<Vec<Token>, LexError> {
    Scanner::with_options(source.cursor(), options).collect()
}
