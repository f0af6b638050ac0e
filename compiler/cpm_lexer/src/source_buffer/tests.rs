use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.interior_nul(), None);
    assert_eq!(buf.buf[0], 0, "sentinel at index 0");
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("int x;");
    assert_eq!(buf.len(), 6);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"int x;");
    assert_eq!(buf.buf[6], 0, "sentinel after source bytes");
}

#[test]
fn from_bytes_keeps_non_utf8() {
    let buf = SourceBuffer::from_bytes(&[b'a', 0xFF, b'b']);
    assert_eq!(buf.as_bytes(), &[b'a', 0xFF, b'b']);
}

// === Padding ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 59, 60, 61, 63, 64, 65, 127, 128, 1000] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.buf.len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {len}",
            buf.buf.len(),
        );
        assert!(
            buf.buf.len() >= len + TAIL_PADDING,
            "not enough tail padding for source length {len}"
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.buf[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

// === Interior NUL ===

#[test]
fn interior_nul_reports_first_offset() {
    let buf = SourceBuffer::from_bytes(b"ab\0cd\0");
    assert_eq!(buf.interior_nul(), Some(2));
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("x");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'x');
    assert!(!cursor.is_eof());
}
