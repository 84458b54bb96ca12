//! Reserved words and keyword classification.
//!
//! The lexer never decides on its own whether a word is reserved. Once a word
//! is fully delimited it hands the text to a [`KeywordClassifier`], which is a
//! total function over a fixed keyword set chosen at construction time.
//!
//! Two classifiers are provided:
//! - [`ReservedWords`]: the standard set, resolved by a length-bucketed `match`
//! - [`KeywordTable`]: an arbitrary caller-chosen set backed by a hash map

use std::fmt;

use rustc_hash::FxHashMap;

/// A reserved-word code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    As,
    Break,
    Class,
    Const,
    Continue,
    Else,
    Enum,
    False,
    Fn,
    For,
    If,
    Import,
    In,
    Let,
    Loop,
    Match,
    Mut,
    Return,
    SelfLower, // self
    Struct,
    True,
    Type,
    Use,
    While,
}

impl Keyword {
    /// Every keyword in the standard set, in declaration order.
    pub const ALL: [Keyword; 24] = [
        Keyword::As,
        Keyword::Break,
        Keyword::Class,
        Keyword::Const,
        Keyword::Continue,
        Keyword::Else,
        Keyword::Enum,
        Keyword::False,
        Keyword::Fn,
        Keyword::For,
        Keyword::If,
        Keyword::Import,
        Keyword::In,
        Keyword::Let,
        Keyword::Loop,
        Keyword::Match,
        Keyword::Mut,
        Keyword::Return,
        Keyword::SelfLower,
        Keyword::Struct,
        Keyword::True,
        Keyword::Type,
        Keyword::Use,
        Keyword::While,
    ];

    /// Source spelling of the keyword in the standard set.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::As => "as",
            Keyword::Break => "break",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::False => "false",
            Keyword::Fn => "fn",
            Keyword::For => "for",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::Let => "let",
            Keyword::Loop => "loop",
            Keyword::Match => "match",
            Keyword::Mut => "mut",
            Keyword::Return => "return",
            Keyword::SelfLower => "self",
            Keyword::Struct => "struct",
            Keyword::True => "true",
            Keyword::Type => "type",
            Keyword::Use => "use",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a delimited word to a keyword code, or `None` for a plain identifier.
///
/// Implementations must be pure: the same text always classifies the same
/// way for the lifetime of the classifier.
pub trait KeywordClassifier {
    fn classify(&self, text: &str) -> Option<Keyword>;
}

impl<K: KeywordClassifier + ?Sized> KeywordClassifier for &K {
    #[inline]
    fn classify(&self, text: &str) -> Option<Keyword> {
        (**self).classify(text)
    }
}

/// The standard reserved-word set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservedWords;

impl KeywordClassifier for ReservedWords {
    #[inline]
    fn classify(&self, text: &str) -> Option<Keyword> {
        lookup(text)
    }
}

/// Look up a reserved word by text.
///
/// Uses the word length as a first-pass filter (keywords range from 2-8
/// chars), then matches against the keywords of that length.
#[inline]
fn lookup(text: &str) -> Option<Keyword> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // All keywords are 2-8 chars and start with a lowercase ASCII letter.
    if !(2..=8).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(Keyword::As),
            "fn" => Some(Keyword::Fn),
            "if" => Some(Keyword::If),
            "in" => Some(Keyword::In),
            _ => None,
        },
        3 => match text {
            "for" => Some(Keyword::For),
            "let" => Some(Keyword::Let),
            "mut" => Some(Keyword::Mut),
            "use" => Some(Keyword::Use),
            _ => None,
        },
        4 => match text {
            "else" => Some(Keyword::Else),
            "enum" => Some(Keyword::Enum),
            "loop" => Some(Keyword::Loop),
            "self" => Some(Keyword::SelfLower),
            "true" => Some(Keyword::True),
            "type" => Some(Keyword::Type),
            _ => None,
        },
        5 => match text {
            "break" => Some(Keyword::Break),
            "class" => Some(Keyword::Class),
            "const" => Some(Keyword::Const),
            "false" => Some(Keyword::False),
            "match" => Some(Keyword::Match),
            "while" => Some(Keyword::While),
            _ => None,
        },
        6 => match text {
            "import" => Some(Keyword::Import),
            "return" => Some(Keyword::Return),
            "struct" => Some(Keyword::Struct),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Keyword::Continue),
            _ => None,
        },
        _ => None,
    }
}

/// A keyword set fixed at construction from `(spelling, code)` pairs.
///
/// Lets an embedding parser reserve a subset of the standard words, or spell
/// them differently, without touching the lexer. Later entries for the same
/// spelling replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    words: FxHashMap<Box<str>, Keyword>,
}

impl KeywordTable {
    /// A table mapping each spelling in `entries` to its keyword. A repeated
    /// spelling keeps the last entry.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, Keyword)>) -> Self {
        entries.into_iter().collect()
    }

    /// A table holding the standard set, spelled as [`Keyword::as_str`].
    pub fn standard() -> Self {
        Self::new(Keyword::ALL.iter().map(|&kw| (kw.as_str(), kw)))
    }

    /// Number of distinct spellings in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Keyword)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, Keyword)>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|(text, kw)| (Box::from(text), kw))
            .collect();
        KeywordTable { words }
    }
}

impl KeywordClassifier for KeywordTable {
    #[inline]
    fn classify(&self, text: &str) -> Option<Keyword> {
        self.words.get(text).copied()
    }
}
