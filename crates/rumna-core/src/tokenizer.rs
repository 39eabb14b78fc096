//! Lossless splitting of mixed-script text into Arabic runs, word runs,
//! single punctuation characters and whitespace runs.

use serde::Serialize;

use crate::unicode::{is_arabic, is_word_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Maximal run of U+0600..U+06FF, marks included.
    Arabic,
    /// Maximal run of non-Arabic letters, digits and underscore.
    Word,
    /// One non-word, non-whitespace character.
    Punct,
    /// Maximal run of whitespace.
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

fn classify(c: char) -> TokenKind {
    if is_arabic(c) {
        TokenKind::Arabic
    } else if is_word_char(c) {
        TokenKind::Word
    } else if c.is_whitespace() {
        TokenKind::Space
    } else {
        TokenKind::Punct
    }
}

/// Split `text` into tokens. Concatenating the token texts in order yields
/// `text` exactly, and no token is empty.
///
/// Arabic and Latin letters adjacent without a separator ("abcبيت") land in
/// separate tokens even though both are word characters.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some((start, c)) = iter.next() {
        let kind = classify(c);
        let mut end = start + c.len_utf8();
        if kind != TokenKind::Punct {
            while let Some(&(i, next)) = iter.peek() {
                if classify(next) != kind {
                    break;
                }
                end = i + next.len_utf8();
                iter.next();
            }
        }
        tokens.push(Token {
            text: &text[start..end],
            kind,
        });
    }

    tokens
}
