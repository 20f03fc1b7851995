/// Split text into maximal runs of ASCII letters and apostrophes.
///
/// Everything else (digits, punctuation, whitespace, non-Latin scripts)
/// separates words. Empty pieces are dropped; order is preserved.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|piece| !piece.is_empty())
}

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}
