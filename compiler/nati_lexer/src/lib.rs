//! Lexer for nati.
//!
//! Turns source text into identifier, keyword, and end-of-file tokens.
//!
//! # Architecture
//!
//! ```text
//! &str → SourceBuffer (sentinel) → Lexer::next_token → Token
//!                                        │
//!                                        └─ KeywordClassifier (word → keyword?)
//! ```
//!
//! The buffer and cursor come from `nati_lexer_core`; token and keyword types
//! from `nati_ir`. A parser usually drives a [`Lexer`] directly, pulling one
//! token at a time. [`lex`] runs a lexer to completion for callers that want
//! the whole stream.

mod lex_error;
mod lexer;

pub use lex_error::{ExpectTokenError, LexError, LexErrorKind};
pub use lexer::Lexer;

use std::sync::Once;

use nati_ir::{KeywordClassifier, ReservedWords, TokenKind, TokenList};

/// Lex `source` with the standard reserved words.
///
/// The returned list ends with exactly one `Eof` token. Scanning stops at
/// the first lexical error.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    lex_with(source, ReservedWords)
}

/// Lex `source` with a caller-supplied keyword classifier.
pub fn lex_with<K: KeywordClassifier>(
    source: &str,
    classifier: K,
) -> Result<TokenList, LexError> {
    let mut lexer = Lexer::with_classifier(classifier);
    lexer.set_source(source);

    let mut tokens = TokenList::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token.clone());
        if done {
            return Ok(tokens);
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set;
/// enable with `RUST_LOG=nati_lexer=debug` or `RUST_LOG=nati_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the embedding
            // program; keep that one.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
