use crate::config::DEFAULT_ABBREVIATOR_CONFIG;
use crate::types::LanguageCodeRef;

/// Options for a single abbreviation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbbreviatorConfig<'a> {
    /// Selects the legal-suffix and noise-word tables. Unknown codes disable both.
    pub lang: &'a LanguageCodeRef,
    /// Synthesize an acronym when the input did not already carry one.
    pub propose_acronym: bool,
    /// Fewest words a name must have before an acronym is proposed.
    pub min_acronym_word_count: usize,
}

impl<'a> AbbreviatorConfig<'a> {
    /// Default options with the given language.
    pub fn for_language(lang: &'a LanguageCodeRef) -> Self {
        Self {
            lang,
            ..DEFAULT_ABBREVIATOR_CONFIG
        }
    }

    pub fn with_propose_acronym(self, propose_acronym: bool) -> Self {
        Self {
            propose_acronym,
            ..self
        }
    }
}

impl Default for AbbreviatorConfig<'_> {
    fn default() -> Self {
        DEFAULT_ABBREVIATOR_CONFIG
    }
}
