//! Low-level scanning primitives for the nati lexer.
//!
//! - [`SourceBuffer`]: owned copy of the source with a `0x00` sentinel
//! - [`Cursor`]: forward-only byte position into that buffer
//! - byte classification predicates shared by every scanning state
//!
//! The state machine that turns bytes into tokens lives in `nati_lexer`.

mod char_class;
mod cursor;
mod source_buffer;

pub use char_class::{is_ident_continue, is_ident_start, is_whitespace};
pub use cursor::Cursor;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
