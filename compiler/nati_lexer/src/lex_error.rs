//! Lexer and token-expectation errors.
//!
//! Both carry the span the parser needs for a position-annotated diagnostic.
//! Rendering those diagnostics is the parser's job; the `Display` impls here
//! are one-line summaries.

use nati_ir::{Span, TokenTag};
use nati_lexer_core::{EncodingIssue, EncodingIssueKind};

/// A lexical error: the scanner met input that starts no token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// The offending character (full UTF-8 width).
    pub span: Span,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character with no scanning rule (digits, punctuation, non-ASCII).
    #[error("unrecognized character {ch:?}")]
    UnrecognizedChar { ch: char },
    /// A null byte inside the source, distinct from the end-of-input sentinel.
    #[error("null byte in source")]
    InvalidNullByte,
    /// A UTF-8 byte-order mark at the start of the source.
    #[error("byte order mark at start of source")]
    Utf8Bom,
    /// The source is longer than `u32::MAX` bytes; the span is the empty
    /// point where scanning had to stop.
    #[error("source exceeds the 4 GiB limit")]
    SourceTooLarge,
}

impl LexError {
    #[inline]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    /// Unrecognized character `ch` starting at byte `pos`.
    pub fn unrecognized_char(ch: char, pos: u32) -> Self {
        #[allow(clippy::cast_possible_truncation, reason = "len_utf8 is at most 4")]
        let width = ch.len_utf8() as u32;
        LexError::new(
            LexErrorKind::UnrecognizedChar { ch },
            Span::new(pos, pos + width),
        )
    }
}

impl From<EncodingIssue> for LexError {
    fn from(issue: EncodingIssue) -> Self {
        let kind = match issue.kind {
            EncodingIssueKind::Utf8Bom => LexErrorKind::Utf8Bom,
            EncodingIssueKind::InteriorNull => LexErrorKind::InvalidNullByte,
            EncodingIssueKind::SourceTooLarge => LexErrorKind::SourceTooLarge,
        };
        LexError::new(kind, Span::new(issue.pos, issue.pos + issue.len))
    }
}

/// The current token is not of the kind the caller required.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("expected {expected}, found {found} at {span}")]
pub struct ExpectTokenError {
    pub expected: TokenTag,
    pub found: TokenTag,
    /// Span of the token that was found.
    pub span: Span,
}
