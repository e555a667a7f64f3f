use crate::constants::{LEGAL_SUFFIXES, NOISE_WORDS};
use crate::types::{LanguageCodeRef, LegalSuffix, NoiseWord};
use crate::utils::normalize_nfd;
use log::trace;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static LANGUAGE_TABLES: LazyLock<LanguageTables> = LazyLock::new(LanguageTables::new);

/// Read-only per-language lookup tables, built once per process.
///
/// Unknown language codes resolve to an empty suffix list and an empty noise-word
/// set rather than an error.
pub struct LanguageTables {
    legal_suffixes: HashMap<&'static LanguageCodeRef, &'static [LegalSuffix]>,
    legal_suffix_patterns: HashMap<&'static LanguageCodeRef, Vec<(LegalSuffix, Regex)>>,
    noise_words: HashMap<&'static LanguageCodeRef, HashSet<NoiseWord>>,
}

impl LanguageTables {
    fn new() -> Self {
        let legal_suffixes = LEGAL_SUFFIXES.iter().copied().collect();

        let legal_suffix_patterns = LEGAL_SUFFIXES
            .iter()
            .map(|(lang, suffixes)| {
                let patterns = suffixes
                    .iter()
                    .map(|suffix| (*suffix, trailing_word_regex(suffix)))
                    .collect();

                (*lang, patterns)
            })
            .collect();

        let noise_words = NOISE_WORDS
            .iter()
            .map(|(lang, words)| (*lang, words.iter().copied().collect()))
            .collect();

        Self {
            legal_suffixes,
            legal_suffix_patterns,
            noise_words,
        }
    }

    /// The process-wide instance.
    pub fn global() -> &'static LanguageTables {
        &LANGUAGE_TABLES
    }

    /// Legal suffixes for `lang`, in match priority order.
    pub fn legal_suffixes(&self, lang: &LanguageCodeRef) -> &'static [LegalSuffix] {
        let suffixes = self.legal_suffixes.get(lang).copied().unwrap_or_default();
        trace!("{} legal suffixes for language {:?}", suffixes.len(), lang);

        suffixes
    }

    /// Legal suffixes for `lang` paired with their compiled trailing-word matchers,
    /// in match priority order.
    pub fn legal_suffix_patterns(&self, lang: &LanguageCodeRef) -> &[(LegalSuffix, Regex)] {
        self.legal_suffix_patterns
            .get(lang)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `word` is a noise word in `lang`, compared case-insensitively.
    pub fn is_noise_word(&self, lang: &LanguageCodeRef, word: &str) -> bool {
        self.noise_words
            .get(lang)
            .is_some_and(|noise_words| noise_words.contains(word.to_lowercase().as_str()))
    }

    /// Language codes that have at least a suffix table.
    pub fn supported_languages(&self) -> Vec<&'static LanguageCodeRef> {
        // Keep the declaration order of the tables rather than hash order
        LEGAL_SUFFIXES.iter().map(|(lang, _)| *lang).collect()
    }
}

/// Case-insensitive `\b<suffix>$`: the suffix as the last whole word.
///
/// The suffix is decomposed like the names it is matched against, so Hangul
/// suffixes compare jamo to jamo.
fn trailing_word_regex(suffix: &str) -> Regex {
    let suffix = normalize_nfd(&suffix.to_lowercase());

    Regex::new(&format!(r"(?i)\b{}$", regex::escape(&suffix)))
        .expect("valid legal suffix regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_order_is_preserved() {
        assert_eq!(
            LanguageTables::global().legal_suffixes("de"),
            &["gmbh", "ag", "kg", "ug"]
        );
    }

    #[test]
    fn test_patterns_match_whole_trailing_words() {
        let patterns = LanguageTables::global().legal_suffix_patterns("es");
        let (suffix, regex) = &patterns[0];

        assert_eq!(*suffix, "sa");
        assert!(regex.is_match("grupo unidas sa"));
        assert!(regex.is_match("Grupo Unidas SA"));
        assert!(!regex.is_match("mesa"));
        assert!(!regex.is_match("sa grupo"));
    }

    #[test]
    fn test_unknown_language_is_empty() {
        let tables = LanguageTables::global();

        assert!(tables.legal_suffixes("xx").is_empty());
        assert!(tables.legal_suffix_patterns("xx").is_empty());
        assert!(!tables.is_noise_word("xx", "the"));
    }

    #[test]
    fn test_noise_words_are_case_insensitive() {
        let tables = LanguageTables::global();

        assert!(tables.is_noise_word("en", "The"));
        assert!(tables.is_noise_word("fr", "LES"));
        assert!(!tables.is_noise_word("en", "Company"));
        assert!(!tables.is_noise_word("zh", "的"));
    }

    #[test]
    fn test_supported_languages() {
        let languages = LanguageTables::global().supported_languages();

        assert_eq!(languages.len(), 12);
        assert_eq!(languages[0], "en");
        assert!(languages.contains(&"ko"));
    }
}
