//! Pull-based lexer state machine.
//!
//! The caller owns a [`Lexer`], loads a source with
//! [`set_source`](Lexer::set_source), then pulls one token per
//! [`next_token`](Lexer::next_token) call.
//!
//! # Scanning
//!
//! Each call starts in [`LexerState::Init`] and looks at one byte per
//! iteration:
//!
//! | State               | Byte                 | Action                       |
//! |---------------------|----------------------|------------------------------|
//! | Init                | letter, `#`, `_`     | start word, advance          |
//! | Init                | whitespace           | advance                      |
//! | Init                | sentinel             | emit `Eof`, stay put         |
//! | Init                | sentinel at the cut  | `LexError`, stay put         |
//! | Init                | anything else        | `LexError`, stay put         |
//! | IdentifierOrKeyword | alnum, `_`           | advance                      |
//! | IdentifierOrKeyword | anything else        | classify word, stay put      |
//!
//! The cut is where a source too long for `u32` offsets was truncated; the
//! lexer reports it instead of a clean `Eof`.
//!
//! "Stay put" is the one-byte lookahead rule: the byte that ends a word is
//! re-examined by the next call. Every iteration either advances or ends
//! the call, so scanning always terminates at the sentinel.

use nati_ir::{
    Identifier, KeywordClassifier, ReservedWords, Span, Token, TokenKind, TokenTag,
};
use nati_lexer_core::{
    is_ident_continue, is_ident_start, is_whitespace, Cursor, EncodingIssue, SourceBuffer,
};
use tracing::{debug, trace};

use crate::{ExpectTokenError, LexError};

/// Scanning state within a single `next_token` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LexerState {
    /// Expecting the start of a new token.
    Init,
    /// Mid-word. `start` is the byte offset of the word's first character;
    /// the accumulated text is `start..cursor`.
    IdentifierOrKeyword { start: u32 },
}

/// A scanning session over one source buffer.
///
/// Holds the buffer, the cursor offset, and the most recently finished
/// token. The keyword classifier is injected at construction and fixed for
/// the lexer's lifetime.
#[derive(Clone, Debug)]
pub struct Lexer<K = ReservedWords> {
    buf: SourceBuffer,
    /// Cursor offset into `buf`. Only ever moves forward within a source.
    pos: u32,
    token: Token,
    classifier: K,
}

impl Lexer {
    /// Lexer using the standard reserved words, with an empty source.
    pub fn new() -> Self {
        Lexer::with_classifier(ReservedWords)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

impl<K: KeywordClassifier> Lexer<K> {
    /// Lexer using `classifier` for keyword lookup, with an empty source.
    pub fn with_classifier(classifier: K) -> Self {
        Lexer {
            buf: SourceBuffer::default(),
            pos: 0,
            token: Token::none(),
            classifier,
        }
    }

    /// Load `source`, discarding any previous buffer and scan position.
    ///
    /// The text is copied with a sentinel appended. The current token is
    /// reset to `None` until the next [`next_token`](Self::next_token).
    pub fn set_source(&mut self, source: &str) {
        self.buf = SourceBuffer::new(source);
        self.pos = 0;
        self.token = Token::none();
        debug!(
            len = self.buf.len(),
            encoding_issues = self.buf.encoding_issues().len(),
            "source loaded"
        );
    }

    /// Scan the next token and make it the current token.
    ///
    /// At end of input this keeps returning `Eof` without moving. On error
    /// the cursor stays on the offending character and the current token is
    /// left as `None`, so a repeated call reports the same error.
    pub fn next_token(&mut self) -> Result<&Token, LexError> {
        self.token = Token::none();
        let mut state = LexerState::Init;
        let mut cursor = self.buf.cursor_at(self.pos);

        let scanned = loop {
            let byte = cursor.current();
            match state {
                LexerState::Init => {
                    if is_ident_start(byte) {
                        state = LexerState::IdentifierOrKeyword { start: cursor.pos() };
                        cursor.advance();
                    } else if is_whitespace(byte) {
                        cursor.advance();
                    } else if cursor.is_eof() {
                        break match self.buf.encoding_issue_at(cursor.pos()) {
                            Some(issue) => Err(LexError::from(issue)),
                            None => Ok(Token::new(TokenKind::Eof, Span::point(cursor.pos()))),
                        };
                    } else {
                        break Err(self.error_at(&cursor));
                    }
                }
                LexerState::IdentifierOrKeyword { start } => {
                    if is_ident_continue(byte) {
                        cursor.advance();
                    } else {
                        let text = cursor.slice_from(start);
                        let kind = match self.classifier.classify(text) {
                            Some(keyword) => TokenKind::Keyword(keyword),
                            None => TokenKind::Ident(Identifier::new(text)),
                        };
                        break Ok(Token::new(kind, Span::new(start, cursor.pos())));
                    }
                }
            }
        };
        self.pos = cursor.pos();

        match scanned {
            Ok(token) => {
                trace!(?token, "token");
                self.token = token;
                Ok(&self.token)
            }
            Err(err) => {
                debug!(%err, "lexical error");
                Err(err)
            }
        }
    }

    /// Error for the unscannable character under `cursor`.
    fn error_at(&self, cursor: &Cursor<'_>) -> LexError {
        let pos = cursor.pos();
        if let Some(issue) = self.buf.encoding_issue_at(pos) {
            return LexError::from(issue);
        }
        let ch = cursor
            .current_char()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::unrecognized_char(ch, pos)
    }

    /// The most recently finished token, or the `None` token before the
    /// first successful [`next_token`](Self::next_token).
    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// `true` when the current token is of kind `tag`.
    #[inline]
    pub fn is_token(&self, tag: TokenTag) -> bool {
        self.token.tag() == tag
    }

    /// Require the current token to be of kind `tag`.
    pub fn expect_token(&self, tag: TokenTag) -> Result<(), ExpectTokenError> {
        if self.is_token(tag) {
            Ok(())
        } else {
            Err(ExpectTokenError {
                expected: tag,
                found: self.token.tag(),
                span: self.token.span,
            })
        }
    }

    /// The keyword classifier this lexer was built with.
    #[inline]
    pub fn classifier(&self) -> &K {
        &self.classifier
    }

    /// Byte offset of the cursor in the current source.
    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// The loaded source text, without the sentinel.
    pub fn source(&self) -> &str {
        self.buf.as_str()
    }

    /// Encoding issues recorded when the current source was loaded.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        self.buf.encoding_issues()
    }
}
