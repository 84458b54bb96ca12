//! Forward-only cursor over a sentinel-terminated buffer.
//!
//! The cursor advances one byte at a time and has no way to move backwards.
//! EOF is the sentinel (`0x00`) at a position at or past the source length;
//! a null byte before that point is an interior null, not EOF.

/// Forward-only cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor) or
/// [`SourceBuffer::cursor_at()`](crate::SourceBuffer::cursor_at).
///
/// # Invariant
///
/// `buf.as_bytes()[source_len] == 0x00` and `pos <= source_len`. Guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction and by the scanner
/// never advancing while the current byte is the sentinel.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding). The
    /// sentinel and padding are NUL characters, so the whole buffer is text.
    buf: &'a str,
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a str, source_len: u32, pos: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            buf.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        debug_assert!(pos <= source_len, "cursor {pos} starts past the sentinel");
        Self {
            buf,
            pos,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize]
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(!self.is_eof(), "advanced past the sentinel");
        self.pos += 1;
    }

    /// `true` when the current byte is the sentinel.
    ///
    /// Interior null bytes (`pos < source_len`) are not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Full character starting at the current position, `None` at EOF.
    ///
    /// Only meaningful when the cursor sits on a character boundary, which
    /// holds for the lexer since it only ever steps over ASCII bytes.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.slice(self.pos, self.source_len).chars().next()
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Panics
    ///
    /// If `start..end` reaches past the source content, is reversed, or
    /// splits a UTF-8 character.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        &self.buf[start as usize..end as usize]
    }

    /// Source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
