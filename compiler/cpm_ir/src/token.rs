//! Token types produced by the scanner.

use super::Span;
use std::fmt;

/// Token kind, with semantic range layout.
///
/// Every value fits in a single `u8`. Families occupy contiguous ranges
/// with gaps left for future kinds:
///
/// | Range   | Family                 |
/// |---------|------------------------|
/// | 0-15    | Keywords & structure   |
/// | 32-47   | Literals               |
/// | 64-127  | Symbols                |
/// | 254-255 | Sentinels              |
///
/// The ranges are a naming convention, not a runtime behavior: the scanner
/// never consults them. [`TokenKind::family`] derives from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Keywords & structure (0-15) ===
    Name = 0,
    Struct = 1,
    Return = 2,
    If = 3,
    Else = 4,
    Newline = 5,
    /// `#...` up to (not including) the end of the line.
    Preprocessor = 6,
    /// `//...` up to (not including) the end of the line.
    LineComment = 7,
    /// `/* ... */`, only produced with block comments enabled.
    BlockComment = 8,

    // === Literals (32-47) ===
    /// Family marker; the scanner never produces it.
    Literal = 32,
    Float = 33,
    Int = 34,
    String = 35,

    // === Symbols (64-127) ===
    LeftParen = 64,
    RightParen = 65,
    LeftBracket = 66,
    RightBracket = 67,
    LeftBrace = 68,
    RightBrace = 69,
    Semicolon = 70,
    Star = 71,
    Less = 72,
    Greater = 73,
    Equal = 74,
    EqualEqual = 75,
    LessEqual = 76,
    GreaterEqual = 77,
    Comma = 78,
    Dot = 79,
    Arrow = 80,
    Plus = 81,
    Minus = 82,
    PlusPlus = 83,
    MinusMinus = 84,
    PlusMinus = 85,

    // === Sentinels (254-255) ===
    Unknown = 254,
    Eof = 255,
}

/// The disjoint families [`TokenKind`] values fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenFamily {
    /// Names, keywords, newlines, directive lines and comments.
    Keyword,
    Literal,
    Symbol,
    /// `Unknown` and `Eof`.
    Sentinel,
}

impl TokenKind {
    /// Family this kind belongs to, derived from its discriminant range.
    pub const fn family(self) -> TokenFamily {
        match self as u8 {
            0..=15 => TokenFamily::Keyword,
            32..=47 => TokenFamily::Literal,
            64..=127 => TokenFamily::Symbol,
            _ => TokenFamily::Sentinel,
        }
    }

    /// Fixed source spelling, if this kind always has the same text.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Struct => Some("struct"),
            Self::Return => Some("return"),
            Self::If => Some("if"),
            Self::Else => Some("else"),
            Self::Newline => Some("\n"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Semicolon => Some(";"),
            Self::Star => Some("*"),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),
            Self::Equal => Some("="),
            Self::EqualEqual => Some("=="),
            Self::LessEqual => Some("<="),
            Self::GreaterEqual => Some(">="),
            Self::Comma => Some(","),
            Self::Dot => Some("."),
            Self::Arrow => Some("->"),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::PlusPlus => Some("++"),
            Self::MinusMinus => Some("--"),
            Self::PlusMinus => Some("+-"),
            Self::Name
            | Self::Preprocessor
            | Self::LineComment
            | Self::BlockComment
            | Self::Literal
            | Self::Float
            | Self::Int
            | Self::String
            | Self::Unknown
            | Self::Eof => None,
        }
    }

    /// Human-readable name, used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Struct => "struct",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::Newline => "newline",
            Self::Preprocessor => "preprocessor directive",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::Literal => "literal",
            Self::Float => "float literal",
            Self::Int => "integer literal",
            Self::String => "string literal",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Semicolon => ";",
            Self::Star => "*",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::EqualEqual => "==",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Arrow => "->",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::PlusMinus => "+-",
            Self::Unknown => "unknown",
            Self::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexical unit with its span in the source.
///
/// `value` is only populated for string literals: it holds the content
/// between the quotes, copied out of the buffer. All other kinds are fully
/// described by their span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    value: Option<String>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            span,
            value: None,
        }
    }

    /// Create a string-literal token owning its unquoted content.
    pub fn string(span: Span, value: String) -> Self {
        Token {
            kind: TokenKind::String,
            span,
            value: Some(value),
        }
    }

    /// Extracted payload (string literals only).
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Source bytes covered by this token.
    ///
    /// Returns an empty slice if the span does not fit `source`, which only
    /// happens when the token came from a different buffer.
    pub fn text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)?;
        if let Some(value) = &self.value {
            write!(f, " {value:?}")?;
        }
        Ok(())
    }
}
