mod config;
pub use config::DEFAULT_ABBREVIATOR_CONFIG;
mod constants;
pub use constants::{DEFAULT_LANGUAGE, DEFAULT_MIN_ACRONYM_WORD_COUNT};
pub mod models;
pub use models::{
    Abbreviator, AbbreviatorConfig, Error, LanguageTables, TitleAbbreviator, TitleRule,
    TitleRuleTier,
};
pub mod types;
pub use types::{Acronym, JobTitle, LanguageCode, LanguageCodeRef, OrganizationName};
pub mod utils;
pub use utils::{
    extract_existing_acronym, filter_noise_words, normalize_nfd, normalize_punctuation,
    normalize_text, propose_acronym, remove_legal_suffix, split_words,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Abbreviates an organization name using English tables, proposing an acronym
/// when the name has none.
///
/// ```
/// assert_eq!(
///     org_abbrev::abbreviate("International Business Machines Corporation"),
///     "International Business Machines (IBM)"
/// );
/// ```
pub fn abbreviate(name: &str) -> OrganizationName {
    abbreviate_with_custom_config(name, &DEFAULT_ABBREVIATOR_CONFIG)
}

/// Abbreviates an organization name with explicit language and acronym options.
///
/// ```
/// use org_abbrev::{abbreviate_with_custom_config, AbbreviatorConfig};
///
/// let config = AbbreviatorConfig::for_language("de");
/// assert_eq!(
///     abbreviate_with_custom_config("Bayerische Motoren Werke AG", &config),
///     "Bayerische Motoren Werke (BMW)"
/// );
/// ```
pub fn abbreviate_with_custom_config(name: &str, config: &AbbreviatorConfig) -> OrganizationName {
    Abbreviator::new(*config).abbreviate(name)
}

/// Abbreviates a job title with the rules of `lang`, falling back to English
/// rules for languages without any.
///
/// ```
/// assert_eq!(org_abbrev::abbreviate_title("Chief Financial Officer", "en"), "CFO");
/// ```
pub fn abbreviate_title(title: &str, lang: &LanguageCodeRef) -> JobTitle {
    TitleAbbreviator::global().abbreviate(title, lang)
}

/// Language codes with built-in legal suffix and noise-word tables.
pub fn supported_languages() -> Vec<&'static LanguageCodeRef> {
    LanguageTables::global().supported_languages()
}
