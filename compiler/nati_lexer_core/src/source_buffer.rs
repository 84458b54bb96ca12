//! Sentinel-terminated source buffer.
//!
//! The buffer owns a copy of the source followed by a `0x00` sentinel, so the
//! scanner always has a defined "current byte" even at end of input and never
//! needs an explicit bounds check. The total size is rounded up to the next
//! 64-byte boundary; the padding is zero as well.
//!
//! # Encoding Issues
//!
//! Construction records the conditions the lexer reports as errors:
//! - a UTF-8 byte-order mark at the start of the source
//! - interior null bytes, which would otherwise look like the sentinel
//! - a source too long for `u32` offsets, cut short at the last character
//!   that fits

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
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
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`. NUL is a valid
    /// one-byte character, so the padded buffer is still a `str`.
    buf: String,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the source.
    pub pos: u32,
    /// Byte length of the offending sequence.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at the start of the source.
    Utf8Bom,
    /// Null byte (U+0000) inside the source content.
    InteriorNull,
    /// The source was longer than a `u32` offset can address. Recorded with
    /// zero length at the cut point, where the sentinel now sits.
    SourceTooLarge,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated at the last char
    /// boundary that fits and carry an [`EncodingIssueKind::SourceTooLarge`]
    /// issue at the cut; the sentinel still follows the last retained byte.
    pub fn new(source: &str) -> Self {
        Self::with_max_len(source, u32::MAX)
    }

    fn with_max_len(source: &str, max_len: u32) -> Self {
        let mut end = source.len().min(max_len as usize);
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        let kept = &source[..end];
        let source_len = u32::try_from(end).unwrap_or(max_len);

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (kept.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(kept);
        buf.extend(std::iter::repeat_n('\0', padded_len - kept.len()));

        let mut encoding_issues = Vec::new();
        detect_bom(kept.as_bytes(), &mut encoding_issues);
        detect_interior_nulls(kept.as_bytes(), &mut encoding_issues);
        if kept.len() < source.len() {
            encoding_issues.push(EncodingIssue {
                kind: EncodingIssueKind::SourceTooLarge,
                pos: source_len,
                len: 0,
            });
        }

        Self {
            buf,
            source_len,
            encoding_issues,
        }
    }

    /// Source bytes without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_bytes()[..self.source_len as usize]
    }

    /// Full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Source text without the sentinel.
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Cursor positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        self.cursor_at(0)
    }

    /// Cursor positioned at `pos`, clamped to the sentinel.
    ///
    /// Lets an owner that cannot hold a borrowing [`Cursor`] across calls
    /// store a plain offset and resume from it.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, pos.min(self.source_len))
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }

    /// The encoding issue starting at `pos`, if any.
    ///
    /// A [`SourceTooLarge`](EncodingIssueKind::SourceTooLarge) issue sits at
    /// [`len()`](Self::len), past every other issue.
    pub fn encoding_issue_at(&self, pos: u32) -> Option<EncodingIssue> {
        self.encoding_issues
            .iter()
            .find(|issue| issue.pos == pos)
            .copied()
    }
}

impl Default for SourceBuffer {
    fn default() -> Self {
        SourceBuffer::new("")
    }
}

fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

/// Record every null byte within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for absolute in memchr::memchr_iter(0, source) {
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
    }
}
