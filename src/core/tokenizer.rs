//! Whitespace tokenization.
//!
//! BLEU operates on pre-normalized text, so the only preprocessing is
//! splitting on Unicode whitespace. Casing and punctuation are left untouched.
//!
//! Whitespace is the Unicode `White_Space` property. The ASCII information
//! separators `U+001C` to `U+001F` are not in that set and therefore stay
//! inside tokens, so `"a\x1cb c d"` has three tokens. Callers that need
//! those characters to split must replace them before scoring.

/// Splits `text` on runs of whitespace, dropping leading and trailing blanks.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
