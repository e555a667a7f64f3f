use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_MIN_ACRONYM_WORD_COUNT};
use crate::models::AbbreviatorConfig;

pub const DEFAULT_ABBREVIATOR_CONFIG: AbbreviatorConfig<'static> = AbbreviatorConfig {
    lang: DEFAULT_LANGUAGE,
    propose_acronym: true,
    min_acronym_word_count: DEFAULT_MIN_ACRONYM_WORD_COUNT,
};
