pub const ABBREVIATION_CASES_CSV_PATH: &str = "tests/test_files/abbreviation_cases.csv";
