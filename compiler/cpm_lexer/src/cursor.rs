//! Forward-only cursor over a sentinel-terminated buffer.
//!
//! End of input is `pos >= source_len`; the byte there is the `0x00`
//! sentinel. A `0x00` at `pos < source_len` is an interior NUL, which the
//! scanner also treats as the end of input but which still has a real
//! position inside the source.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`]; restarting a scan is a matter of taking a new
/// cursor from the buffer.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and at least one more zero byte follows it.
/// This is guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 1 < buf.len(),
            "sentinel and lookahead slack must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position up to the sentinel: the padding
    /// guarantees a readable zero byte after it.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once the cursor has reached the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source bytes in `start..end`.
    fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Unread source content (excludes sentinel and padding).
    fn remaining(&self) -> &'a [u8] {
        let end = self.source_len as usize;
        self.buf.get(self.pos as usize..end).unwrap_or_default()
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel ends the loop. All
    /// ASCII classification predicates satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past spaces and tabs.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    /// Advance to the next `\n` or NUL byte, or to the end of input.
    ///
    /// The terminator itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining().len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_end(&mut self) {
        match memchr::memchr2(b'\n', 0, self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance to the next occurrence of `byte` within the source.
    ///
    /// Returns `false` and leaves the cursor at end of input if `byte` does
    /// not occur again. Interior NUL bytes are skipped over.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining().len() <= source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> bool {
        if let Some(offset) = memchr::memchr(byte, self.remaining()) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Advance past the next occurrence of `needle` within the source.
    ///
    /// Returns `false` and leaves the cursor at end of input if `needle`
    /// does not occur again.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining().len() <= source_len which fits in u32"
    )]
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        if let Some(offset) = memchr::memmem::find(self.remaining(), needle) {
            self.pos += (offset + needle.len()) as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}
