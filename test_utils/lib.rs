pub mod constants;
pub mod models;

use csv::ReaderBuilder;
use models::{AbbreviationCase, AbbreviationMismatch};
use std::error::Error;

/// Utility to load abbreviation cases from a CSV file with the header
/// `name,lang,propose_acronym,expected`.
pub fn load_abbreviation_cases_from_file(
    file_path: &str,
) -> Result<Vec<AbbreviationCase>, Box<dyn Error>> {
    let mut cases = Vec::new();
    let mut reader = ReaderBuilder::new().from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() != 4 {
            eprintln!("Skipping invalid row: {:?}", record);
            continue;
        }

        let propose_acronym = match &record[2] {
            "true" => true,
            "false" => false,
            other => return Err(format!("Invalid propose_acronym value: {:?}", other).into()),
        };

        cases.push(AbbreviationCase {
            name: record[0].to_string(),
            lang: record[1].to_string(),
            propose_acronym,
            expected: record[3].to_string(),
        });
    }

    Ok(cases)
}

/// Runs every case through `abbreviate` and collects the ones whose output does
/// not match.
pub fn find_mismatches<F>(cases: &[AbbreviationCase], abbreviate: F) -> Vec<AbbreviationMismatch>
where
    F: Fn(&AbbreviationCase) -> String,
{
    cases
        .iter()
        .filter_map(|case| {
            let actual = abbreviate(case);

            if actual == case.expected {
                None
            } else {
                eprintln!(
                    "Mismatch for {:?} ({}): expected {:?}, got {:?}",
                    case.name, case.lang, case.expected, actual
                );
                Some(AbbreviationMismatch {
                    case: case.clone(),
                    actual,
                })
            }
        })
        .collect()
}
