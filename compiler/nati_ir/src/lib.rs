//! Nati IR - shared lexical types
//!
//! This crate contains the data carried between the lexer and its consumers:
//! - Spans for source locations
//! - Keywords and the classifier interface that resolves them
//! - Tokens and `TokenList` for lexer output
//!
//! It holds no scanning logic. The sentinel buffer and cursor live in
//! `nati_lexer_core`; the state machine lives in `nati_lexer`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod keyword;
mod span;
mod token;

pub use keyword::{Keyword, KeywordClassifier, KeywordTable, ReservedWords};
pub use span::Span;
pub use token::{Identifier, Token, TokenKind, TokenList, TokenTag};
