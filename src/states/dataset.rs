use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::types::StateRecord;

/// The bundled 50-state dataset, embedded at compile time.
const DEFAULT_DATASET: &str = include_str!("../../data/states.csv");

/// Parse the bundled dataset.
pub fn default_states() -> Result<Vec<StateRecord>> {
    parse_states(DEFAULT_DATASET.as_bytes()).context("Failed to parse bundled state dataset")
}

/// Load state records from a CSV file with a header row.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - A row cannot be parsed into a `StateRecord`
/// - Two rows share the same state name
pub fn load_states(path: &Path) -> Result<Vec<StateRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open state dataset at {}", path.display()))?;

    parse_states(file).with_context(|| format!("Invalid state dataset in {}", path.display()))
}

/// Parse state records from any CSV source. A header-only source yields an empty list.
pub fn parse_states<R: Read>(reader: R) -> Result<Vec<StateRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut states = Vec::new();
    let mut seen = HashSet::new();

    for (i, row) in rdr.deserialize::<StateRecord>().enumerate() {
        // Header is line 1, so the first record sits on line 2
        let state = row.with_context(|| format!("Failed to parse state record on line {}", i + 2))?;
        if !seen.insert(state.name.clone()) {
            bail!("Duplicate state name: {}", state.name);
        }
        states.push(state);
    }

    tracing::debug!(count = states.len(), "parsed state records");
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "name,conservativeness,beauty,cost,average_temp,property_taxes,property_appreciation,population_per_square_mile,crime_rate,education,is_coastal";

    #[test]
    fn test_default_dataset_has_fifty_states() {
        let states = default_states().unwrap();
        assert_eq!(states.len(), 50);
        assert_eq!(states[0].name, "Alabama");
        assert_eq!(states[49].name, "Wyoming");
    }

    #[test]
    fn test_default_dataset_ranks_within_range() {
        for state in default_states().unwrap() {
            for value in [
                state.conservativeness,
                state.beauty,
                state.cost,
                state.property_taxes,
                state.crime_rate,
                state.education,
            ] {
                assert!((1.0..=50.0).contains(&value), "{} out of range", state.name);
            }
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let csv = format!("{}\n Ohio , 23, 44, 9, 51, 39, 6.6, 288, 32, 28, false\n", HEADER);
        let states = parse_states(csv.as_bytes()).unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].name, "Ohio");
        assert_eq!(states[0].population_per_square_mile, 288.0);
        assert!(!states[0].is_coastal);
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        let states = parse_states(format!("{}\n", HEADER).as_bytes()).unwrap();
        assert!(states.is_empty());
    }

    #[test]
    fn test_parse_rejects_duplicate_names() {
        let csv = format!(
            "{}\nOhio,23,44,9,51,39,6.6,288,32,28,false\nOhio,1,1,1,1,1,1,1,1,1,true\n",
            HEADER
        );
        let err = parse_states(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Duplicate state name: Ohio"));
    }

    #[test]
    fn test_parse_reports_bad_line() {
        let csv = format!("{}\nOhio,lots,44,9,51,39,6.6,288,32,28,false\n", HEADER);
        let err = parse_states(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_states_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "Maine,34,10,28,42,36,6.4,44,50,20,true").unwrap();

        let states = load_states(file.path()).unwrap();
        assert_eq!(states.len(), 1);
        assert!(states[0].is_coastal);
    }

    #[test]
    fn test_load_states_missing_file() {
        let err = load_states(Path::new("/nonexistent/states.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open state dataset"));
    }
}
