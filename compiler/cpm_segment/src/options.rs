//! Segmenter configuration.

/// Optional corrections to the base grouping heuristic.
///
/// The default reproduces the heuristic as-is, including its two known
/// quirks; each flag fixes one of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Close a call group on the `)` matching its `(` rather than on the
    /// first `)` seen.
    pub track_paren_depth: bool,
    /// Keep the token fetched after a name when it is not `(`, and start
    /// the next expression with it instead of discarding it.
    pub keep_lookahead: bool,
}
