//! Public-API tests for `nati_lexer`: whole-stream lexing and the
//! word-stream property over generated sources.

use nati_ir::{
    Identifier, Keyword, KeywordClassifier, KeywordTable, ReservedWords, TokenKind, TokenTag,
};
use nati_lexer::{lex, lex_with, LexErrorKind, Lexer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Token kinds of a successfully lexed source.
fn kinds(source: &str) -> Vec<TokenKind> {
    match lex(source) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("unexpected lexical error in {source:?}: {err}"),
    }
}

fn id(text: &str) -> TokenKind {
    TokenKind::Ident(Identifier::new(text))
}

#[test]
fn lexes_a_declaration() {
    nati_lexer::init_tracing();
    assert_eq!(
        kinds("let mut #count\n\tconst _limit"),
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Keyword(Keyword::Mut),
            id("#count"),
            TokenKind::Keyword(Keyword::Const),
            id("_limit"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn list_ends_with_single_eof() {
    let Ok(tokens) = lex("a b c   ") else {
        panic!("expected tokens");
    };
    let eofs = tokens.iter().filter(|t| t.tag() == TokenTag::Eof).count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.tags().last(), Some(&TokenTag::Eof));
}

#[test]
fn spans_slice_back_to_source() {
    let source = "  struct Point_2d  ";
    let Ok(tokens) = lex(source) else {
        panic!("expected tokens");
    };
    let texts: Vec<&str> = tokens.iter().map(|t| &source[t.span.to_range()]).collect();
    assert_eq!(texts, vec!["struct", "Point_2d", ""]);
}

#[test]
fn empty_and_blank_sources() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \t\n"), vec![TokenKind::Eof]);
}

#[test]
fn lex_stops_at_first_error() {
    let Err(err) = lex("ok then = nope") else {
        panic!("expected a lexical error");
    };
    assert_eq!(err.kind, LexErrorKind::UnrecognizedChar { ch: '=' });
    assert_eq!(err.span.start, 8);
}

#[test]
fn lex_with_custom_table() {
    let table = KeywordTable::new([("when", Keyword::If)]);
    let Ok(tokens) = lex_with("when if", &table) else {
        panic!("expected tokens");
    };
    assert_eq!(tokens[0].keyword(), Some(Keyword::If));
    assert_eq!(tokens[1].ident().map(Identifier::as_str), Some("if"));
}

#[test]
fn parser_style_driving() {
    // A consumer pulls tokens and checks shapes as it goes.
    let mut lexer = Lexer::new();
    lexer.set_source("import #std");

    assert!(lexer.next_token().is_ok());
    assert_eq!(lexer.expect_token(TokenTag::Keyword), Ok(()));
    assert!(lexer.next_token().is_ok());
    assert_eq!(lexer.expect_token(TokenTag::Identifier), Ok(()));
    assert!(lexer.next_token().is_ok());
    assert!(lexer.is_token(TokenTag::Eof));

    let Err(err) = lexer.expect_token(TokenTag::Identifier) else {
        panic!("expected a mismatch at end of input");
    };
    assert_eq!(err.found, TokenTag::Eof);
    assert_eq!(err.span.start, 11);
}

// === Word-stream property ===

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z#_][A-Za-z0-9_]{0,8}",
        prop::sample::select(Keyword::ALL.to_vec()).prop_map(|kw| kw.as_str().to_owned()),
    ]
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t\n\r\x0B\x0C]{1,3}"
}

fn source_of_words() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        "[ \t\n]{0,2}",
        prop::collection::vec((word(), separator()), 0..12),
    )
        .prop_map(|(lead, pieces)| {
            let mut source = lead;
            let mut words = Vec::with_capacity(pieces.len());
            for (w, sep) in pieces {
                source.push_str(&w);
                source.push_str(&sep);
                words.push(w);
            }
            (words, source)
        })
}

proptest! {
    #[test]
    fn yields_words_in_order_then_eof((words, source) in source_of_words()) {
        let expected: Vec<TokenKind> = words
            .iter()
            .map(|w| match ReservedWords.classify(w) {
                Some(kw) => TokenKind::Keyword(kw),
                None => TokenKind::Ident(Identifier::new(w.as_str())),
            })
            .chain(std::iter::once(TokenKind::Eof))
            .collect();

        let tokens = lex(&source);
        prop_assert!(tokens.is_ok(), "lexical error in {:?}", source);
        if let Ok(tokens) = tokens {
            let got: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn eof_repeats_without_moving((_, source) in source_of_words(), extra in 1usize..5) {
        let mut lexer = Lexer::new();
        lexer.set_source(&source);
        loop {
            match lexer.next_token() {
                Ok(token) if token.tag() == TokenTag::Eof => break,
                Ok(_) => {}
                Err(err) => return Err(TestCaseError::fail(format!("{err}"))),
            }
        }
        let end = lexer.position();
        for _ in 0..extra {
            prop_assert!(lexer.next_token().is_ok());
            prop_assert!(lexer.is_token(TokenTag::Eof));
            prop_assert_eq!(lexer.position(), end);
        }
    }

    #[test]
    fn words_never_contain_their_delimiter(
        w in "[A-Za-z_][A-Za-z0-9_]{0,6}",
        delim in prop::sample::select(vec![' ', '\t', '\n', '@', '.', '(', '-']),
    ) {
        let source = format!("{w}{delim}");
        let mut lexer = Lexer::new();
        lexer.set_source(&source);
        prop_assert!(lexer.next_token().is_ok());
        let len = u32::try_from(w.len()).unwrap_or(u32::MAX);
        prop_assert_eq!(lexer.token().span.end, len);
        prop_assert_eq!(lexer.position(), len);
    }
}
