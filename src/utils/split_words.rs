use crate::constants::WORD_SEPARATORS;

/// Splits a name into words on runs of spaces, hyphens, and ampersands.
///
/// Empty fragments produced by leading, trailing, or repeated separators are
/// dropped. Original casing is kept.
pub fn split_words(name: &str) -> Vec<&str> {
    name.split(WORD_SEPARATORS)
        .filter(|word| !word.is_empty())
        .collect()
}
