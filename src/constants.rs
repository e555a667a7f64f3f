use crate::models::TitleReplacement::{self, ChiefOfficer, Literal};
use crate::models::TitleRuleTier::{self, Medium, Strong, Weak};
use crate::types::LanguageCodeRef;

/// Fallback language used when a caller does not provide one.
pub const DEFAULT_LANGUAGE: &LanguageCodeRef = "en";

/// Legal-entity suffixes, per language, in match priority order.
///
/// Only the first suffix found at the end of a name is removed.
pub const LEGAL_SUFFIXES: &[(&LanguageCodeRef, &[&str])] = &[
    (
        "en",
        &[
            "inc",
            "llc",
            "corp",
            "ltd",
            "llp",
            "plc",
            "corporation",
            "limited",
            "company",
        ],
    ),
    ("fr", &["sa", "sarl", "sas"]),
    ("es", &["sa", "sl", "sau", "slne"]),
    ("pt", &["lda", "ltda", "sa", "me"]),
    ("de", &["gmbh", "ag", "kg", "ug"]),
    ("it", &["srl", "spa", "snc", "sas"]),
    ("ru", &["ооо", "зао", "оао", "ao"]),
    ("zh", &["有限公司", "集团", "公司"]),
    ("ja", &["株式会社", "有限会社"]),
    ("ko", &["유한회사", "주식회사"]),
    ("he", &["בעמ", "חברה בעמ"]),
    ("ar", &["شذمم", "ش.م.م", "مؤسسة", "شركة"]),
];

/// Articles and conjunctions dropped from organization names, per language.
pub const NOISE_WORDS: &[(&LanguageCodeRef, &[&str])] = &[
    ("en", &["the", "of", "and"]),
    ("fr", &["le", "la", "les", "de", "et"]),
    ("es", &["el", "la", "los", "de", "y"]),
    ("pt", &["o", "a", "os", "as", "de", "e"]),
    ("de", &["der", "die", "das", "und", "von"]),
    ("it", &["il", "la", "lo", "gli", "dei", "e"]),
    ("ru", &["и", "из", "в"]),
    ("zh", &[]),
    ("ja", &[]),
    ("ko", &[]),
    ("he", &["של", "ו"]),
    ("ar", &["و", "من", "ال"]),
];

/// Acronyms are only proposed for names with at least this many words.
pub const DEFAULT_MIN_ACRONYM_WORD_COUNT: usize = 3;

/// Characters that separate words once a name has been normalized.
pub const WORD_SEPARATORS: &[char] = &[' ', '-', '&'];

/// Job title rewrite rules: `(language, tier, pattern, replacement)`.
///
/// Patterns are regexes matched case-insensitively against the accent-folded
/// title. Within a tier, rules apply in declaration order.
pub const TITLE_RULES: &[(
    &LanguageCodeRef,
    TitleRuleTier,
    &str,
    TitleReplacement,
)] = &[
    ("en", Strong, r"chief (\w+) (\w+) officer", ChiefOfficer),
    ("en", Strong, r"chief (\w+) officer", ChiefOfficer),
    ("en", Strong, "executive vice president", Literal("EVP")),
    ("en", Strong, "senior vice president", Literal("SVP")),
    ("en", Strong, "vice president", Literal("VP")),
    ("en", Strong, "president", Literal("Pres")),
    ("en", Strong, "managing director", Literal("MD")),
    ("en", Strong, "board chair", Literal("Chair")),
    ("en", Strong, "member of the board", Literal("Board Member")),
    ("en", Strong, "general counsel", Literal("GC")),
    ("en", Strong, "chief counsel", Literal("CC")),
    ("en", Strong, "chief legal officer", Literal("CLO")),
    ("en", Medium, r"\bSenior\b", Literal("Sr")),
    ("en", Medium, r"\bJunior\b", Literal("Jr")),
    ("en", Medium, r"\bAssistant\b", Literal("Asst")),
    ("en", Medium, r"\bAssociate\b", Literal("Assoc")),
    ("en", Medium, r"\bManager\b", Literal("Mgr")),
    ("en", Medium, r"\bDirector\b", Literal("Dir")),
    ("en", Medium, r"\bAdministrator\b", Literal("Admin")),
    ("en", Medium, r"\bCoordinator\b", Literal("Coord")),
    ("en", Medium, r"\bEngineer\b", Literal("Eng")),
    ("en", Medium, r"\bConsultant\b", Literal("Cons")),
    ("en", Weak, r"\b(of|the|for)\b", Literal("")),
    ("fr", Strong, "directeur[ao]? general[e]?", Literal("DG")),
    ("es", Strong, "directeur[ao]? general[e]?", Literal("DG")),
    ("it", Strong, "directeur[ao]? general[e]?", Literal("DG")),
    ("pt", Strong, "directeur[ao]? general[e]?", Literal("DG")),
    ("de", Strong, "geschäftsführer(in)?", Literal("GF")),
    ("ru", Strong, "генеральный директор", Literal("ген. дир.")),
    ("zh", Strong, "总经理", Literal("GM")),
    ("ja", Strong, "代表取締役社長", Literal("社長")),
    ("ko", Strong, "대표이사", Literal("대표")),
    ("he", Strong, "מנהל כללי", Literal("מנכ\"ל")),
    ("ar", Strong, "المدير العام", Literal("م.ع.")),
];
