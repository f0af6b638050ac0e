//! Segmentation units: statement-sized runs of tokens.

use super::{Span, Token, TokenKind};
use std::fmt;

/// An ordered, non-empty run of tokens grouped by the segmenter.
///
/// Owns independent copies of its tokens. Neighbouring tokens are related
/// by position: `tokens()[i - 1]` and `tokens()[i + 1]`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expression {
    /// Invariant: never empty.
    tokens: Vec<Token>,
}

impl Expression {
    /// Start an expression with its first token.
    pub fn new(first: Token) -> Self {
        Expression {
            tokens: vec![first],
        }
    }

    /// Append a token at the end.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn first(&self) -> &Token {
        &self.tokens[0]
    }

    pub fn last(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Span from the first token's start to the last token's end.
    pub fn span(&self) -> Span {
        self.first().span.merge(self.last().span)
    }

    /// Whether the expression is shown to consumers.
    ///
    /// Expressions led by a newline keep their slot in the sequence but are
    /// not reported.
    pub fn is_reportable(&self) -> bool {
        self.first().kind != TokenKind::Newline
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}
