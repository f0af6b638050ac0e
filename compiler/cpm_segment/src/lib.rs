//! Expression segmentation for C+-.
//!
//! Pulls tokens from a [`Scanner`] one at a time and groups them into
//! [`Expression`]s: one per token, except that a name immediately followed
//! by `(` swallows everything through the next `)` as a call head.
//!
//! This is a greedy heuristic standing in for a real parser. It never
//! rejects input; the only errors are the scanner's own [`LexError`]s.

mod options;
mod segmenter;

pub use options::SegmentOptions;
pub use segmenter::Segmenter;

use cpm_ir::Expression;
use cpm_lexer::{LexError, Scanner};

/// Segment everything the scanner produces, in order.
///
/// Newline-led expressions are included; filter on
/// [`Expression::is_reportable`] to get the ones meant for display.
pub fn segment(scanner: Scanner<'_>) -> Result<Vec<Expression>, LexError> {
    Segmenter::new(scanner).collect()
}
