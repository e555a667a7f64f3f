// Types listed here are either shared across multiple files and/or exposed via the library.

/// A short language code such as `"en"` or `"fr"`, used to select the suffix and
/// noise-word tables.
pub type LanguageCode = String;

/// Borrowed view of a `LanguageCode`.
pub type LanguageCodeRef = str;

/// The working value threaded through the abbreviation pipeline.
pub type OrganizationName = String;

/// An uppercase initialism, either found in the input or derived from it.
pub type Acronym = String;

/// A job title, as consumed by the `TitleAbbreviator`.
pub type JobTitle = String;

/// A single legal-entity suffix token (e.g. `"gmbh"`).
pub type LegalSuffix = &'static str;

/// A single noise-word token (e.g. `"the"`).
pub type NoiseWord = &'static str;
