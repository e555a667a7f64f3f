use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static PUNCTUATION_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s&-]+").expect("valid punctuation regex"));

static WHITESPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Canonical decomposition (NFD) only. Combining marks are kept.
pub fn normalize_nfd(text: &str) -> String {
    text.nfd().collect()
}

/// Replaces punctuation runs and underscores with single spaces and collapses
/// whitespace.
///
/// Letters (including combining marks), digits, whitespace, `&` and `-`
/// survive. No case folding happens here.
pub fn normalize_punctuation(name: &str) -> String {
    let name = PUNCTUATION_RUN_REGEX.replace_all(name, " ");
    let name = name.replace('_', " ");
    let name = WHITESPACE_RUN_REGEX.replace_all(&name, " ");

    name.trim().to_string()
}

/// Full text normalization stage: NFD followed by punctuation cleanup.
pub fn normalize_text(name: &str) -> String {
    normalize_punctuation(&normalize_nfd(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            normalize_punctuation("Hewlett-Packard Company, Inc."),
            "Hewlett-Packard Company Inc"
        );
        assert_eq!(normalize_punctuation("S.A."), "S A");
    }

    #[test]
    fn test_keeps_ampersand_and_hyphen() {
        assert_eq!(normalize_punctuation("AT&T - Mobility"), "AT&T - Mobility");
    }

    #[test]
    fn test_underscores_become_spaces() {
        assert_eq!(normalize_punctuation("foo_bar__baz"), "foo bar baz");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(normalize_punctuation("  Acme \t\n  Tools  "), "Acme Tools");
        assert_eq!(normalize_punctuation("!!!"), "");
    }

    #[test]
    fn test_nfd_keeps_combining_marks() {
        let normalized = normalize_text("Société Générale");
        assert_eq!(normalized, "Socie\u{301}te\u{301} Ge\u{301}ne\u{301}rale");
        assert_eq!(normalized.chars().count(), "Société Générale".chars().count() + 4);
    }

    #[test]
    fn test_non_latin_scripts_survive() {
        assert_eq!(normalize_text("ООО «Газпром»"), "ООО Газпром");
        assert_eq!(normalize_text("株式会社トヨタ自動車"), "株式会社トヨタ自動車");
    }
}
