pub mod extract_existing_acronym;
pub mod filter_noise_words;
pub mod normalize_text;
pub mod propose_acronym;
pub mod remove_legal_suffix;
pub mod split_words;

pub use extract_existing_acronym::extract_existing_acronym;
pub use filter_noise_words::filter_noise_words;
pub use normalize_text::{normalize_nfd, normalize_punctuation, normalize_text};
pub use propose_acronym::propose_acronym;
pub use remove_legal_suffix::remove_legal_suffix;
pub use split_words::split_words;
