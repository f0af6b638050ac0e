//! Scanner configuration.

/// Optional scanner extensions.
///
/// The default recognises exactly the base grammar. Each flag opts into
/// a token kind the base grammar reserves but never produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Scan `<`, `<=`, `>`, `>=` and a standalone `.` as symbols instead of
    /// unknown bytes.
    pub extended_symbols: bool,
    /// Scan `/* ... */` as a single block-comment token.
    pub block_comments: bool,
}

impl ScanOptions {
    /// Every extension enabled.
    pub fn all() -> Self {
        ScanOptions {
            extended_symbols: true,
            block_comments: true,
        }
    }
}
