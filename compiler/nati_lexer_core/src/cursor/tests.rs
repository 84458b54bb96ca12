use crate::SourceBuffer;

// === Basic navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.cursor().current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), cursor.source_len());
}

#[test]
fn copies_are_independent() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    let saved = cursor;
    cursor.advance();
    assert_eq!(saved.pos(), 0);
    assert_eq!(cursor.pos(), 1);
}

// === EOF vs interior null ===

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn trailing_null_is_not_eof() {
    let buf = SourceBuffer::new("\0");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    assert_eq!(cursor.current_char(), Some('\0'));
}

// === Characters and slicing ===

#[test]
fn current_char_decodes_multibyte() {
    let buf = SourceBuffer::new("\u{E9}x");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), 0xC3);
    assert_eq!(cursor.current_char(), Some('\u{E9}'));
}

#[test]
fn current_char_at_eof_is_none() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.cursor().current_char(), None);
}

#[test]
fn slice_extracts_range() {
    let buf = SourceBuffer::new("let x");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 3), "let");
    assert_eq!(cursor.slice(4, 5), "x");
    assert_eq!(cursor.slice(2, 2), "");
}

#[test]
fn slice_from_ends_at_cursor() {
    let buf = SourceBuffer::new("#foo bar");
    let mut cursor = buf.cursor();
    for _ in 0..4 {
        cursor.advance();
    }
    assert_eq!(cursor.slice_from(0), "#foo");
    assert_eq!(cursor.current(), b' ');
}

#[test]
fn slice_outlives_cursor() {
    let buf = SourceBuffer::new("word");
    let text = {
        let mut cursor = buf.cursor();
        cursor.advance();
        cursor.advance();
        cursor.slice_from(0)
    };
    assert_eq!(text, "wo");
}

#[test]
#[should_panic(expected = "is not a char boundary")]
fn slice_inside_a_character_is_rejected() {
    let buf = SourceBuffer::new("\u{E9}");
    let _ = buf.cursor().slice(0, 1);
}

#[test]
#[should_panic(expected = "exceeds source length")]
fn slice_into_the_sentinel_is_rejected() {
    let buf = SourceBuffer::new("ab");
    let _ = buf.cursor().slice(0, 3);
}
