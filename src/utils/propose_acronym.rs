use crate::types::Acronym;
use crate::utils::split_words;
use unicode_normalization::char::is_combining_mark;

/// Whether the word is already an all-uppercase run of 2+ Latin letters.
///
/// Combining marks are skipped, so a decomposed `"ÉCOLE"` still counts.
fn looks_like_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| !is_combining_mark(*c)).collect();

    letters.len() >= 2 && letters.iter().all(char::is_ascii_uppercase)
}

/// Proposes an acronym from the first letters of the words of `name`.
///
/// Returns `None` when there are fewer than `min_word_count` words, or when a word
/// already looks like an acronym. Words contribute their first character that is
/// not a combining mark. An empty result is `None`. No uniqueness check is made against existing
/// acronyms.
pub fn propose_acronym(name: &str, min_word_count: usize) -> Option<Acronym> {
    let words = split_words(name);

    if words.len() < min_word_count {
        return None;
    }

    if words.iter().any(|word| looks_like_acronym(word)) {
        return None;
    }

    let acronym: Acronym = words
        .iter()
        .filter(|word| **word != "&")
        .filter_map(|word| word.chars().find(|c| !is_combining_mark(*c)))
        .flat_map(char::to_uppercase)
        .collect();

    if acronym.is_empty() {
        return None;
    }

    Some(acronym)
}
