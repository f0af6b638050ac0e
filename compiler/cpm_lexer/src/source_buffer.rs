//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner can look at "the current byte" and one byte of lookahead
//! without a bounds check at every step. The allocation is rounded up to
//! the next 64-byte boundary, which also leaves zero padding for `peek()`
//! near the end of the buffer.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the source: the sentinel plus lookahead slack.
const TAIL_PADDING: usize = 4;

/// Owned copy of the source bytes followed by a zero sentinel.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Offset of the first NUL byte inside the source content, if any.
    interior_nul: Option<u32>,
}

impl SourceBuffer {
    /// Create a buffer from UTF-8 source text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer from raw bytes.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`;
    /// spans cannot address anything beyond that.
    pub fn from_bytes(source: &[u8]) -> Self {
        let source_len = source.len().min(u32::MAX as usize);
        let source = &source[..source_len];

        let padded_len = (source_len + TAIL_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        let interior_nul = memchr::memchr(0, source).and_then(|pos| u32::try_from(pos).ok());

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            interior_nul,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Offset of the first NUL byte in the source content.
    ///
    /// The scanner treats a NUL byte as end of input, so anything after
    /// this offset is never tokenized.
    pub fn interior_nul(&self) -> Option<u32> {
        self.interior_nul
    }
}

#[cfg(test)]
mod tests;
