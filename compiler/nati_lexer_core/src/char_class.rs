//! Byte classes driving the scanner's dispatch.
//!
//! Classification is ASCII-only. Every non-ASCII byte, and the `0x00`
//! sentinel, falls outside all three classes, so the sentinel always
//! terminates a word and never counts as whitespace.

/// Bytes that may start an identifier or keyword: ASCII letters, `#`, `_`.
#[inline]
pub const fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'#' || byte == b'_'
}

/// Bytes that may continue an identifier: ASCII letters, digits, `_`.
///
/// `#` is a start byte only.
#[inline]
pub const fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// C-locale whitespace: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Wider than [`u8::is_ascii_whitespace`], which excludes vertical tab.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
