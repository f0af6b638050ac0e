//! C+- front-end driver.
//!
//! Ties the phases together for the `cpm` binary: load a file into a
//! [`SourceBuffer`], run the scanner (and optionally the segmenter) over it,
//! and print a plain-text transcript. Lex errors come back as a rendered
//! [`Diagnostic`].
//!
//! The binary is a thin wrapper around [`run_file`]; everything else here is
//! usable (and tested) without touching the filesystem through
//! [`run_source`].

mod config;
mod diagnostic;
mod load;
mod render;

pub use config::{Command, DriverConfig};
pub use diagnostic::{Diagnostic, LineIndex};
pub use load::{read_source, LoadError};
pub use render::{write_expression, write_header, write_token};

use std::io::{self, Write};
use std::sync::Once;

use cpm_lexer::{LexError, Scanner, SourceBuffer};
use cpm_segment::Segmenter;
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set. The filter comes from `RUST_LOG`
/// and output is an indented span tree on stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        }
    });
}

/// Anything that stops a driver run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The source failed to scan; carries the rendered report.
    #[error("{0}")]
    Lex(Box<Diagnostic>),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Load `path` and run the configured command, writing the transcript to
/// `out`.
pub fn run_file(
    config: &DriverConfig,
    path: &str,
    out: &mut impl Write,
) -> Result<(), DriverError> {
    let source = read_source(path)?;
    run_source(config, path, &source, out)
}

/// Run the configured command over an already loaded buffer.
///
/// `path` is only used for the header and for diagnostics. Output written
/// before a lex error stays written.
pub fn run_source(
    config: &DriverConfig,
    path: &str,
    source: &SourceBuffer,
    out: &mut impl Write,
) -> Result<(), DriverError> {
    let _span = tracing::debug_span!("run", path, command = ?config.command).entered();

    write_header(out, path, source.len())?;
    if let Some(offset) = source.interior_nul() {
        debug!(offset, "NUL byte ends the scan early");
    }

    let scanner = Scanner::with_options(source.cursor(), config.scan);
    let result = match config.command {
        Command::Lex => lex(scanner, source.as_bytes(), out),
        Command::Segment => {
            let segmenter = Segmenter::with_options(scanner, config.segment);
            segment(segmenter, source.as_bytes(), out)
        }
    };
    out.flush()?;

    result.map_err(|err| match err {
        Failure::Lex(error) => {
            debug!(%error, span = %error.span(), "scan failed");
            let diagnostic = Diagnostic::from_lex_error(path, source.as_bytes(), &error);
            DriverError::Lex(Box::new(diagnostic))
        }
        Failure::Output(error) => DriverError::Output(error),
    })
}

/// Internal failure before the lex error is turned into a diagnostic.
enum Failure {
    Lex(LexError),
    Output(io::Error),
}

impl From<LexError> for Failure {
    fn from(error: LexError) -> Self {
        Failure::Lex(error)
    }
}

impl From<io::Error> for Failure {
    fn from(error: io::Error) -> Self {
        Failure::Output(error)
    }
}

fn lex(scanner: Scanner<'_>, source: &[u8], out: &mut impl Write) -> Result<(), Failure> {
    writeln!(out, "Tokens:")?;
    for token in scanner {
        let token = token?;
        if token.is_eof() {
            break;
        }
        write_token(out, &token, source)?;
    }
    writeln!(out, "EOF")?;
    Ok(())
}

fn segment(segmenter: Segmenter<'_>, source: &[u8], out: &mut impl Write) -> Result<(), Failure> {
    let mut count = 0usize;
    for expr in segmenter {
        let expr = expr?;
        if expr.is_reportable() {
            write_expression(out, &expr, source)?;
            count += 1;
        }
    }
    debug!(count, "expressions printed");
    Ok(())
}
