pub mod abbreviator;
pub use abbreviator::Abbreviator;

pub mod abbreviator_config;
pub use abbreviator_config::AbbreviatorConfig;

pub mod accent_folded_text;
pub use accent_folded_text::{fold_accents, AccentFoldedText};

pub mod error;
pub use error::Error;

pub mod language_tables;
pub use language_tables::LanguageTables;

pub mod title_abbreviator;
pub use title_abbreviator::TitleAbbreviator;

pub mod title_rule;
pub use title_rule::{TitleReplacement, TitleRule, TitleRuleTier};
