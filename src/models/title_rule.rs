use crate::models::fold_accents;
use crate::types::JobTitle;
use regex::Regex;

/// Rules run tier by tier: all strong rules, then medium, then weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TitleRuleTier {
    Strong,
    Medium,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleReplacement {
    /// Replace the match with fixed text.
    Literal(&'static str),
    /// `"Chief <words> Officer"` becomes `C` + initials of `<words>` + `O`.
    ChiefOfficer,
}

/// A compiled, case- and accent-insensitive title rewrite.
#[derive(Debug)]
pub struct TitleRule {
    pub tier: TitleRuleTier,
    regex: Regex,
    replacement: TitleReplacement,
}

impl TitleRule {
    /// Compiles `pattern` after folding its accents, so it matches accent-folded
    /// titles.
    pub fn new(
        tier: TitleRuleTier,
        pattern: &str,
        replacement: TitleReplacement,
    ) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("(?i){}", fold_accents(pattern)))?;

        Ok(Self {
            tier,
            regex,
            replacement,
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The text a match is rewritten to.
    pub fn replacement_for(&self, matched: &str) -> JobTitle {
        match self.replacement {
            TitleReplacement::Literal(text) => text.to_string(),
            TitleReplacement::ChiefOfficer => {
                chief_officer_acronym(matched).unwrap_or_else(|| matched.to_string())
            }
        }
    }
}

fn chief_officer_acronym(matched: &str) -> Option<JobTitle> {
    let words: Vec<&str> = matched.split_whitespace().collect();

    let [first, middle @ .., last] = words.as_slice() else {
        return None;
    };

    if middle.is_empty()
        || !first.eq_ignore_ascii_case("chief")
        || !last.eq_ignore_ascii_case("officer")
    {
        return None;
    }

    let initials: String = middle
        .iter()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    Some(format!("C{}O", initials))
}
