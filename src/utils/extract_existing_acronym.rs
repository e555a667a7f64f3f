use crate::types::Acronym;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static TRAILING_ACRONYM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(([A-Z]{2,6})\)\s*$").expect("valid trailing acronym regex")
});

static FIRST_LATIN_LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("valid latin letter regex"));

/// Detects a trailing parenthesized acronym such as `"Foo Bar (FB)"`.
///
/// The acronym must be 2 to 6 uppercase Latin letters and its first letter must
/// match the first Latin letter of the whole input (uppercased). When both hold,
/// returns the input with the parenthetical removed and trimmed, along with the
/// acronym. Otherwise the input is returned untouched with `None`.
///
/// Runs on raw input: normalization would disturb the case-sensitive match.
pub fn extract_existing_acronym(name: &str) -> (&str, Option<Acronym>) {
    let Some(captures) = TRAILING_ACRONYM_REGEX.captures(name) else {
        return (name, None);
    };

    // Both capture groups are guaranteed by a successful match
    let (Some(whole), Some(acronym)) = (captures.get(0), captures.get(1)) else {
        return (name, None);
    };
    let acronym = acronym.as_str();

    let first_latin_letter = FIRST_LATIN_LETTER_REGEX
        .find(name)
        .and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase());

    if first_latin_letter != acronym.chars().next() {
        debug!(
            "Ignoring trailing acronym {:?}; it does not start like {:?}",
            acronym, name
        );
        return (name, None);
    }

    debug!("Extracted existing acronym {:?}", acronym);

    (name[..whole.start()].trim(), Some(acronym.to_string()))
}
