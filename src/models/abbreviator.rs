use crate::models::AbbreviatorConfig;
use crate::types::{Acronym, OrganizationName};
use crate::utils::{
    extract_existing_acronym, filter_noise_words, normalize_text, propose_acronym,
    remove_legal_suffix,
};
use log::debug;

/// Runs the organization-name abbreviation pipeline with a fixed configuration.
///
/// Stages, in order: trailing acronym extraction on the raw input, NFD and
/// punctuation normalization, legal suffix removal, noise-word filtering, and
/// acronym proposal. The result is `"<name> (<ACRONYM>)"` when an acronym was
/// found or proposed, otherwise just the name.
#[derive(Debug, Clone, Copy)]
pub struct Abbreviator<'a> {
    config: AbbreviatorConfig<'a>,
}

impl<'a> Abbreviator<'a> {
    pub fn new(config: AbbreviatorConfig<'a>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AbbreviatorConfig<'a> {
        &self.config
    }

    pub fn abbreviate(&self, name: &str) -> OrganizationName {
        if name.is_empty() {
            return OrganizationName::new();
        }

        let lang = self.config.lang;

        let (name, existing_acronym) = extract_existing_acronym(name);

        let name = normalize_text(name);
        debug!("Normalized: {:?}", name);

        let name = remove_legal_suffix(&name, lang);
        let name = filter_noise_words(&name, lang);
        debug!("Filtered: {:?}", name);

        let acronym: Option<Acronym> = match existing_acronym {
            Some(acronym) => Some(acronym),
            None if self.config.propose_acronym => {
                propose_acronym(&name, self.config.min_acronym_word_count)
            }
            None => None,
        };

        let name = name.replace('&', "").split_whitespace().collect::<Vec<_>>().join(" ");

        match acronym {
            Some(acronym) => format!("{} ({})", name, acronym),
            None => name,
        }
    }
}

impl Default for Abbreviator<'_> {
    fn default() -> Self {
        Self::new(AbbreviatorConfig::default())
    }
}
