//! Character-level Unicode classification for Arabic-script text.

/// Check the full Arabic block (U+0600..U+06FF). This is the only script
/// test the engine performs: letters, harakat, Arabic-Indic digits and
/// Arabic punctuation (، ؛ ؟) all count.
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Arabic combining marks (Mn) inside the Arabic block: Quranic annotation
/// signs, harakat and tanwin, superscript alef, and the small high marks.
pub fn is_arabic_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0610}'..='\u{061A}'
            | '\u{064B}'..='\u{065F}'
            | '\u{0670}'
            | '\u{06D6}'..='\u{06DC}'
            | '\u{06DF}'..='\u{06E4}'
            | '\u{06E7}'..='\u{06E8}'
            | '\u{06EA}'..='\u{06ED}'
    )
}

/// Word characters for tokenization: letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn contains_arabic(s: &str) -> bool {
    s.chars().any(is_arabic)
}

/// Remove Arabic combining marks, leaving the consonantal skeleton.
///
/// "اللّٰه" and "الله" share the skeleton "الله".
pub fn strip_marks(s: &str) -> String {
    s.chars().filter(|&c| !is_arabic_mark(c)).collect()
}
