use org_abbrev::{abbreviate_with_custom_config, AbbreviatorConfig};
use test_utils::constants::ABBREVIATION_CASES_CSV_PATH;
use test_utils::load_abbreviation_cases_from_file;
use test_utils::find_mismatches;
use unicode_normalization::UnicodeNormalization;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_cases_from_file() {
        let cases = load_abbreviation_cases_from_file(ABBREVIATION_CASES_CSV_PATH)
            .expect("Failed to load abbreviation cases from CSV");

        assert!(!cases.is_empty(), "No abbreviation cases were loaded");

        let mismatches = find_mismatches(&cases, |case| {
            let config = AbbreviatorConfig::for_language(&case.lang)
                .with_propose_acronym(case.propose_acronym);

            // Fixtures are stored composed; output is decomposed
            abbreviate_with_custom_config(&case.name, &config)
                .nfc()
                .collect()
        });

        assert!(
            mismatches.is_empty(),
            "{} of {} cases did not match: {:?}",
            mismatches.len(),
            cases.len(),
            mismatches
        );
    }
}
