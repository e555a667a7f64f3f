pub mod abbreviation_case;
pub use abbreviation_case::{AbbreviationCase, AbbreviationMismatch};
