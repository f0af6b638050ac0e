//! Streaming segmenter over a token stream.

use cpm_ir::{Expression, Token, TokenKind};
use cpm_lexer::{LexError, Scanner};
use tracing::{debug, trace};

use crate::SegmentOptions;

/// Groups scanner output into expressions, one per call.
///
/// Each call to [`next_expression`](Self::next_expression) consumes exactly
/// the tokens of one expression (plus, after a name, one lookahead token)
/// and hands back a completed, owned [`Expression`].
pub struct Segmenter<'a> {
    scanner: Scanner<'a>,
    options: SegmentOptions,
    /// Lookahead token held back under `keep_lookahead`.
    pending: Option<Token>,
    done: bool,
}

impl<'a> Segmenter<'a> {
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self::with_options(scanner, SegmentOptions::default())
    }

    pub fn with_options(scanner: Scanner<'a>, options: SegmentOptions) -> Self {
        Self {
            scanner,
            options,
            pending: None,
            done: false,
        }
    }

    /// Produce the next expression, or `None` at end of input.
    ///
    /// After end of input or an error, every later call returns `Ok(None)`.
    pub fn next_expression(&mut self) -> Result<Option<Expression>, LexError> {
        if self.done {
            return Ok(None);
        }
        let result = self.segment_one();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result
    }

    fn segment_one(&mut self) -> Result<Option<Expression>, LexError> {
        let token = match self.pending.take() {
            Some(token) => token,
            None => self.scanner.next_token()?,
        };
        let expr = match token.kind {
            TokenKind::Eof => return Ok(None),
            TokenKind::Name => self.name_or_call(token)?,
            _ => Expression::new(token),
        };
        trace!(
            span = %expr.span(),
            tokens = expr.len(),
            reportable = expr.is_reportable(),
            "expression"
        );
        Ok(Some(expr))
    }

    /// A name, grown into `name(...)` when the next token is `(`.
    ///
    /// The token after the name is always consumed. Unless it opens a call
    /// it is dropped, or held for the next expression under
    /// `keep_lookahead`.
    fn name_or_call(&mut self, name: Token) -> Result<Expression, LexError> {
        let mut expr = Expression::new(name);
        let next = self.scanner.next_token()?;
        if next.kind != TokenKind::LeftParen {
            if self.options.keep_lookahead {
                self.pending = Some(next);
            } else {
                trace!(kind = %next.kind, span = %next.span, "dropping token after name");
            }
            return Ok(expr);
        }

        expr.push(next);
        let mut depth = 1u32;
        loop {
            let token = self.scanner.next_token()?;
            match token.kind {
                TokenKind::Eof => {
                    debug!(span = %expr.span(), "call group reached end of input");
                    return Ok(expr);
                }
                TokenKind::LeftParen if self.options.track_paren_depth => depth += 1,
                TokenKind::RightParen => {
                    depth = if self.options.track_paren_depth {
                        depth - 1
                    } else {
                        0
                    };
                    if depth == 0 {
                        expr.push(token);
                        return Ok(expr);
                    }
                }
                _ => {}
            }
            expr.push(token);
        }
    }
}

impl Iterator for Segmenter<'_> {
    type Item = Result<Expression, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_expression().transpose()
    }
}
