//! Token types produced by the nati lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with its [`Span`]. Payloads (the
//! identifier text, the keyword code) live inside the matching `TokenKind`
//! variant, so they can only be read when the discriminant agrees.

use std::fmt;
use std::ops::Index;

use super::{Keyword, Span};

/// Owned text of an identifier as it appeared in the source.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier(Box<str>);

impl Identifier {
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Identifier(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Token kinds.
///
/// `None` is the reset state the lexer holds while a token is in flight or
/// after a lexical error. It is never handed out as a finished token.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    #[default]
    None,
    Ident(Identifier),
    Keyword(Keyword),
    Eof,
}

impl TokenKind {
    /// The payload-free discriminant of this kind.
    #[inline]
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::None => TokenTag::None,
            TokenKind::Ident(_) => TokenTag::Identifier,
            TokenKind::Keyword(_) => TokenTag::Keyword,
            TokenKind::Eof => TokenTag::Eof,
        }
    }
}

/// Discriminant of a [`TokenKind`], used for `is_token`/`expect_token`
/// checks and in error values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenTag {
    None = 0,
    Identifier = 1,
    Keyword = 2,
    Eof = 3,
}

impl TokenTag {
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::None => "nothing",
            TokenTag::Identifier => "identifier",
            TokenTag::Keyword => "keyword",
            TokenTag::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its span in the source.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The reset token: kind `None`, dummy span.
    #[inline]
    pub fn none() -> Self {
        Token::default()
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    /// `true` for every kind except the `None` reset state.
    #[inline]
    pub fn is_finished(&self) -> bool {
        !matches!(self.kind, TokenKind::None)
    }

    /// The identifier payload, if this is an identifier token.
    pub fn ident(&self) -> Option<&Identifier> {
        match &self.kind {
            TokenKind::Ident(ident) => Some(ident),
            _ => None,
        }
    }

    /// The keyword payload, if this is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Tokens of a whole source, in scan order.
///
/// A list built by the lexer always ends with exactly one `Eof` token.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Discriminants of every token, in order.
    pub fn tags(&self) -> Vec<TokenTag> {
        self.tokens.iter().map(Token::tag).collect()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
