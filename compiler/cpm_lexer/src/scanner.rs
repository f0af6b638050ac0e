//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Main dispatch looks at the current byte without consuming it. Each arm
//! calls a focused method that advances the cursor and builds the token.
//! Two-byte operators are resolved by peeking one byte ahead and always
//! taking the longest match. The sentinel byte (`0x00`) dispatches to
//! `eof()`, which never advances, so a finished scanner keeps returning
//! `Eof`.

use cpm_ir::{Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::{LexError, ScanOptions};

/// Single-pass scanner over a [`Cursor`].
///
/// The read position only moves forward. Scanning the same buffer again
/// means constructing a new scanner from a fresh cursor.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    options: ScanOptions,
    /// Set once `Eof` or an error has been yielded through `Iterator`.
    done: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner for the base grammar.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_options(cursor, ScanOptions::default())
    }

    pub fn with_options(cursor: Cursor<'a>, options: ScanOptions) -> Self {
        Self {
            cursor,
            options,
            done: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns a `TokenKind::Eof` token once the source is exhausted (or an
    /// interior NUL byte is reached); subsequent calls keep returning it.
    /// Fails only for a literal whose closing delimiter is missing, after
    /// which the scanner is positioned at end of input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        let token = match self.cursor.current() {
            0 => self.eof(start),
            b'\n' => self.single(start, TokenKind::Newline),
            b'#' => self.rest_of_line(start, TokenKind::Preprocessor),
            b'/' => self.slash(start)?,
            b'"' => self.string(start)?,
            b'{' => self.single(start, TokenKind::LeftBrace),
            b'}' => self.single(start, TokenKind::RightBrace),
            b'[' => self.single(start, TokenKind::LeftBracket),
            b']' => self.single(start, TokenKind::RightBracket),
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b'*' => self.single(start, TokenKind::Star),
            b';' => self.single(start, TokenKind::Semicolon),
            b',' => self.single(start, TokenKind::Comma),
            b'=' => self.equal(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'<' if self.options.extended_symbols => {
                self.with_equal(start, TokenKind::Less, TokenKind::LessEqual)
            }
            b'>' if self.options.extended_symbols => {
                self.with_equal(start, TokenKind::Greater, TokenKind::GreaterEqual)
            }
            b'.' if self.options.extended_symbols => self.single(start, TokenKind::Dot),
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            _ => self.single(start, TokenKind::Unknown),
        };
        trace!(kind = ?token.kind, span = %token.span, "token");
        Ok(token)
    }

    // ─── EOF ────────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> Token {
        if self.cursor.is_eof() {
            Token::new(TokenKind::Eof, Span::point(start))
        } else {
            // Interior NUL: covered by the token but never consumed.
            Token::new(TokenKind::Eof, Span::with_len(start, 1))
        }
    }

    // ─── Line-Oriented Tokens ───────────────────────────────────────

    /// Everything up to (not including) the next newline or NUL.
    fn rest_of_line(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.eat_until_line_end();
        Token::new(kind, self.span_from(start))
    }

    fn slash(&mut self, start: u32) -> Result<Token, LexError> {
        match self.cursor.peek() {
            b'/' => Ok(self.rest_of_line(start, TokenKind::LineComment)),
            b'*' if self.options.block_comments => self.block_comment(start),
            _ => Ok(self.single(start, TokenKind::Unknown)),
        }
    }

    fn block_comment(&mut self, start: u32) -> Result<Token, LexError> {
        self.cursor.advance_n(2); // consume "/*"
        if self.cursor.eat_past(b"*/") {
            Ok(Token::new(TokenKind::BlockComment, self.span_from(start)))
        } else {
            let err = LexError::UnterminatedBlockComment {
                span: self.span_from(start),
            };
            debug!(span = %err.span(), "unterminated block comment");
            Err(err)
        }
    }

    // ─── String Literals ────────────────────────────────────────────

    /// `"..."` with no escape handling: the first `"` after the opening
    /// quote closes the literal, even if preceded by a backslash.
    fn string(&mut self, start: u32) -> Result<Token, LexError> {
        self.cursor.advance(); // consume opening '"'
        let content_start = self.cursor.pos();
        if !self.cursor.eat_until(b'"') {
            let err = LexError::UnterminatedString {
                span: self.span_from(start),
            };
            debug!(span = %err.span(), "unterminated string literal");
            return Err(err);
        }
        let content = self.cursor.slice_from(content_start);
        let value = String::from_utf8_lossy(content).into_owned();
        self.cursor.advance(); // consume closing '"'
        Ok(Token::string(self.span_from(start), value))
    }

    // ─── Identifiers & Keywords ─────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric());
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Name);
        Token::new(kind, self.span_from(start))
    }

    // ─── Numbers ────────────────────────────────────────────────────

    /// Digits, optionally followed by one `.` and more (possibly zero) digits.
    fn number(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        let kind = if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Token::new(kind, self.span_from(start))
    }

    // ─── Operators ──────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind, self.span_from(start))
    }

    /// Two-byte token: advance two bytes and emit the given kind.
    fn double(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance_n(2);
        Token::new(kind, self.span_from(start))
    }

    fn equal(&mut self, start: u32) -> Token {
        if self.cursor.peek() == b'=' {
            self.double(start, TokenKind::EqualEqual)
        } else {
            self.single(start, TokenKind::Equal)
        }
    }

    fn plus(&mut self, start: u32) -> Token {
        match self.cursor.peek() {
            b'+' => self.double(start, TokenKind::PlusPlus),
            b'-' => self.double(start, TokenKind::PlusMinus),
            _ => self.single(start, TokenKind::Plus),
        }
    }

    fn minus(&mut self, start: u32) -> Token {
        match self.cursor.peek() {
            b'>' => self.double(start, TokenKind::Arrow),
            b'-' => self.double(start, TokenKind::MinusMinus),
            _ => self.single(start, TokenKind::Minus),
        }
    }

    /// `<`/`<=` and `>`/`>=`.
    fn with_equal(&mut self, start: u32, bare: TokenKind, with_eq: TokenKind) -> Token {
        if self.cursor.peek() == b'=' {
            self.double(start, with_eq)
        } else {
            self.single(start, bare)
        }
    }

    #[inline]
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    /// Yields every token up to and including `Eof`, or up to the first
    /// error, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        self.done = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}
