use crate::constants::{DEFAULT_LANGUAGE, TITLE_RULES};
use crate::models::{AccentFoldedText, TitleRule};
use crate::types::{JobTitle, LanguageCodeRef};
use log::{debug, trace};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static TITLE_ABBREVIATOR: LazyLock<TitleAbbreviator> = LazyLock::new(TitleAbbreviator::new);

static REPEATED_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Shortens job titles ("Senior Vice President of Operations" to "SVP Operations")
/// with per-language rewrite rules.
///
/// Languages without rules fall back to the English rules.
pub struct TitleAbbreviator {
    rules_by_lang: HashMap<&'static LanguageCodeRef, Vec<TitleRule>>,
}

impl TitleAbbreviator {
    fn new() -> Self {
        let mut rules_by_lang: HashMap<&'static LanguageCodeRef, Vec<TitleRule>> = HashMap::new();

        for (lang, tier, pattern, replacement) in TITLE_RULES {
            let rule =
                TitleRule::new(*tier, pattern, *replacement).expect("valid title rule pattern");
            rules_by_lang.entry(*lang).or_default().push(rule);
        }

        // Stable, so declaration order holds within a tier
        for rules in rules_by_lang.values_mut() {
            rules.sort_by_key(|rule| rule.tier);
        }

        Self { rules_by_lang }
    }

    /// The process-wide instance.
    pub fn global() -> &'static TitleAbbreviator {
        &TITLE_ABBREVIATOR
    }

    pub fn rules(&self, lang: &LanguageCodeRef) -> &[TitleRule] {
        self.rules_by_lang
            .get(lang)
            .or_else(|| self.rules_by_lang.get(DEFAULT_LANGUAGE))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn abbreviate(&self, title: &str, lang: &LanguageCodeRef) -> JobTitle {
        let mut title = title.trim().to_string();

        for rule in self.rules(lang) {
            title = apply_rule(rule, &title);
        }

        debug!("Abbreviated title: {:?}", title);

        REPEATED_WHITESPACE_REGEX
            .replace_all(&title, " ")
            .trim()
            .to_string()
    }
}

/// Rewrites every match of `rule` in `title`, matching accent-insensitively while
/// leaving unmatched text exactly as it was.
fn apply_rule(rule: &TitleRule, title: &str) -> JobTitle {
    let folded = AccentFoldedText::new(title);
    let mut result = JobTitle::with_capacity(title.len());
    let mut last_end = 0;

    for m in rule.regex().find_iter(folded.as_str()) {
        let range = folded.source_range(m.range());

        // Two matches inside one decomposed source char
        if range.start < last_end {
            continue;
        }

        let matched = &title[range.clone()];
        trace!("Rule {:?} matched {:?}", rule.regex().as_str(), matched);

        result.push_str(&title[last_end..range.start]);
        result.push_str(&rule.replacement_for(matched));
        last_end = range.end;
    }

    result.push_str(&title[last_end..]);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbreviate(title: &str, lang: &str) -> String {
        TitleAbbreviator::global().abbreviate(title, lang)
    }

    #[test]
    fn test_english_strong_rules() {
        assert_eq!(abbreviate("Chief Financial Officer", "en"), "CFO");
        assert_eq!(abbreviate("Chief Information Security Officer", "en"), "CISO");
        assert_eq!(abbreviate("Executive Vice President", "en"), "EVP");
        assert_eq!(abbreviate("Managing Director", "en"), "MD");
    }

    #[test]
    fn test_tiers_combine() {
        assert_eq!(
            abbreviate("Senior Vice President of Operations", "en"),
            "SVP Operations"
        );
        assert_eq!(abbreviate("Director of Marketing", "en"), "Dir Marketing");
        assert_eq!(
            abbreviate("Senior Software Engineer", "en"),
            "Sr Software Eng"
        );
    }

    #[test]
    fn test_whole_word_rules_do_not_touch_substrings() {
        assert_eq!(abbreviate("Directorate Liaison", "en"), "Directorate Liaison");
        assert_eq!(abbreviate("Theory Lead", "en"), "Theory Lead");
    }

    #[test]
    fn test_accent_insensitive_matching() {
        assert_eq!(abbreviate("Directeur Général", "fr"), "DG");
        assert_eq!(abbreviate("Geschäftsführerin", "de"), "GF");
        assert_eq!(abbreviate("DIRECTEUR GENERAL", "it"), "DG");
    }

    #[test]
    fn test_unmatched_text_keeps_accents() {
        assert_eq!(
            abbreviate("Directeur Général Délégué", "fr"),
            "DG Délégué"
        );
    }

    #[test]
    fn test_non_latin_rules() {
        assert_eq!(abbreviate("генеральный директор", "ru"), "ген. дир.");
        assert_eq!(abbreviate("总经理", "zh"), "GM");
        assert_eq!(abbreviate("代表取締役社長", "ja"), "社長");
        assert_eq!(abbreviate("대표이사", "ko"), "대표");
        assert_eq!(abbreviate("מנהל כללי", "he"), "מנכ\"ל");
        assert_eq!(abbreviate("المدير العام", "ar"), "م.ع.");
    }

    #[test]
    fn test_unknown_language_uses_english_rules() {
        assert_eq!(abbreviate("Vice President", "xx"), "VP");
    }

    #[test]
    fn test_rules_for_known_language_do_not_fall_back() {
        assert_eq!(abbreviate("Vice President", "fr"), "Vice President");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(abbreviate("", "en"), "");
        assert_eq!(abbreviate("   ", "en"), "");
    }
}
