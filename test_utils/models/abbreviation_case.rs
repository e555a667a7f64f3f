/// One row of an abbreviation fixture table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationCase {
    pub name: String,
    pub lang: String,
    pub propose_acronym: bool,
    pub expected: String,
}

/// A fixture row whose actual output differed from the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationMismatch {
    pub case: AbbreviationCase,
    pub actual: String,
}
