use crate::models::LanguageTables;
use crate::types::LanguageCodeRef;
use crate::utils::split_words;

/// Drops the noise words of `lang` and rejoins the remaining words with single
/// spaces.
///
/// Word order and casing are preserved. A name made only of noise words yields an
/// empty string.
pub fn filter_noise_words(name: &str, lang: &LanguageCodeRef) -> String {
    let tables = LanguageTables::global();

    split_words(name)
        .into_iter()
        .filter(|word| !tables.is_noise_word(lang, word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_noise_words_case_insensitively() {
        assert_eq!(
            filter_noise_words("The Bank of America", "en"),
            "Bank America"
        );
        assert_eq!(
            filter_noise_words("Grupo de Industrias Unidas", "es"),
            "Grupo Industrias Unidas"
        );
    }

    #[test]
    fn test_hyphens_and_ampersands_become_spaces() {
        assert_eq!(
            filter_noise_words("Hewlett-Packard Company", "en"),
            "Hewlett Packard Company"
        );
        assert_eq!(filter_noise_words("Procter & Gamble", "en"), "Procter Gamble");
    }

    #[test]
    fn test_order_is_preserved() {
        assert_eq!(
            filter_noise_words("Zeta and Alpha of Mu the Beta", "en"),
            "Zeta Alpha Mu Beta"
        );
    }

    #[test]
    fn test_all_noise_yields_empty() {
        assert_eq!(filter_noise_words("The Of And", "en"), "");
    }

    #[test]
    fn test_unknown_language_keeps_everything() {
        assert_eq!(filter_noise_words("The Bank of America", "xx"), "The Bank of America");
    }
}
