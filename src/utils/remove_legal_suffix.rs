use crate::models::LanguageTables;
use crate::types::LanguageCodeRef;
use crate::utils::normalize_punctuation;
use log::debug;

/// Removes the first matching legal suffix for `lang` from the end of `name`.
///
/// Suffixes are tried in table order against a lowercased, punctuation-normalized
/// copy; the first one that ends the copy as a whole word is removed from the
/// original-case `name` and no further suffixes are tried. A suffix only matches
/// as a trailing word, so `"Mesa"` keeps its `"sa"`.
pub fn remove_legal_suffix(name: &str, lang: &LanguageCodeRef) -> String {
    let normalized = normalize_punctuation(name).to_lowercase();

    for (suffix, regex) in LanguageTables::global().legal_suffix_patterns(lang) {
        if regex.is_match(&normalized) {
            debug!("Removing legal suffix {:?} from {:?}", suffix, name);

            return regex.replace(name, "").trim().to_string();
        }
    }

    name.to_string()
}
