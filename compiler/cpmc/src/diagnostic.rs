//! Rendering of lex errors as source-annotated diagnostics.
//!
//! ```text
//! error: unterminated string literal
//!  --> main.c:2:7
//!   |
//! 2 | print("hello
//!   |       ^^^^^^
//!   = help: add a closing `"`; a backslash does not escape the quote
//! ```

use std::fmt;

use cpm_ir::Span;
use cpm_lexer::LexError;

/// Byte offset of every line start, for offset to line/column lookup.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// `starts[0] == 0`; `starts[n]` is the byte after the n-th `\n`.
    starts: Vec<u32>,
}

impl LineIndex {
    pub fn build(source: &[u8]) -> Self {
        let mut starts = vec![0u32];
        starts.extend(
            memchr::memchr_iter(b'\n', source).filter_map(|pos| u32::try_from(pos + 1).ok()),
        );
        LineIndex { starts }
    }

    /// 0-based index of the line containing `offset`.
    pub fn line_of(&self, offset: u32) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        }
    }

    /// Byte range of line `line`, without its `\n`.
    pub fn line_range(&self, line: usize, source: &[u8]) -> std::ops::Range<usize> {
        let start = self.starts.get(line).map_or(source.len(), |&s| s as usize);
        let end = self
            .starts
            .get(line + 1)
            .map_or(source.len(), |&next| (next as usize).saturating_sub(1));
        start.min(source.len())..end.max(start).min(source.len())
    }

    /// 1-based (line, column). Columns count characters, not bytes.
    pub fn line_col(&self, offset: u32, source: &[u8]) -> (usize, usize) {
        let line = self.line_of(offset);
        let range = self.line_range(line, source);
        let upto = (offset as usize).clamp(range.start, range.end);
        let col = char_width(&source[range.start..upto]);
        (line + 1, col + 1)
    }
}

fn char_width(bytes: &[u8]) -> usize {
    String::from_utf8_lossy(bytes).chars().count()
}

/// A rendered-ready error report tied to one source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub path: String,
    /// 1-based.
    pub line: usize,
    /// 1-based, in characters.
    pub column: usize,
    /// The offending line, lossily decoded.
    pub source_line: String,
    /// Caret count under `source_line`, at least 1.
    pub underline: usize,
    pub help: Option<&'static str>,
}

impl Diagnostic {
    pub fn from_lex_error(path: &str, source: &[u8], error: &LexError) -> Self {
        let mut diagnostic = Self::at_span(path, source, error.span(), error.to_string());
        diagnostic.help = Some(error.help());
        diagnostic
    }

    /// Point at `span`, clipping the underline to the first line it touches.
    pub fn at_span(path: &str, source: &[u8], span: Span, message: String) -> Self {
        let index = LineIndex::build(source);
        let (line, column) = index.line_col(span.start, source);
        let range = index.line_range(line - 1, source);

        let start = (span.start as usize).clamp(range.start, range.end);
        let end = (span.end as usize).clamp(start, range.end);
        let underline = char_width(&source[start..end]).max(1);

        Diagnostic {
            message,
            path: path.to_owned(),
            line,
            column,
            source_line: String::from_utf8_lossy(&source[range]).into_owned(),
            underline,
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gutter = self.line.to_string().len();
        let pad = "";
        writeln!(f, "error: {}", self.message)?;
        writeln!(f, "{pad:gutter$}--> {}:{}:{}", self.path, self.line, self.column)?;
        writeln!(f, "{pad:gutter$} |")?;
        writeln!(f, "{} | {}", self.line, self.source_line)?;
        write!(
            f,
            "{pad:gutter$} | {pad:indent$}{carets}",
            indent = self.column - 1,
            carets = "^".repeat(self.underline)
        )?;
        if let Some(help) = self.help {
            write!(f, "\n{pad:gutter$} = help: {help}")?;
        }
        Ok(())
    }
}
