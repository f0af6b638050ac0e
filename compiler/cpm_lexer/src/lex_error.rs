//! Lexer error types.
//!
//! The scanner tolerates any byte it does not recognise. The errors here
//! are the cases where continuing would mean reading past the end of the
//! buffer: a literal opened but never closed.

use cpm_ir::Span;

/// A literal that runs to end of input without its closing delimiter.
///
/// The span covers the opening delimiter through the end of the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// Missing closing `"` for string literal.
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    /// Missing closing `*/` for block comment.
    #[error("unterminated block comment")]
    UnterminatedBlockComment { span: Span },
}

impl LexError {
    /// Where the literal starts, through the end of input.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span } | LexError::UnterminatedBlockComment { span } => {
                *span
            }
        }
    }

    /// Actionable suggestion for fixing the error.
    pub fn help(&self) -> &'static str {
        match self {
            LexError::UnterminatedString { .. } => {
                "add a closing `\"`; a backslash does not escape the quote"
            }
            LexError::UnterminatedBlockComment { .. } => "add a closing `*/`",
        }
    }
}
