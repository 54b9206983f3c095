use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Column names of the launch table
// ---------------------------------------------------------------------------

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version";

const REQUIRED_COLUMNS: [&str; 4] = [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN];

/// A row that parsed as CSV but violates the record invariants.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("payload mass {0} is not a non-negative number")]
    InvalidPayload(f64),

    #[error("class {0} is neither 0 nor 1")]
    InvalidClass(f64),
}

/// Raw CSV row, selected by header name. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct LaunchRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
}

impl TryFrom<LaunchRow> for LaunchRecord {
    type Error = RecordError;

    fn try_from(row: LaunchRow) -> Result<Self, Self::Error> {
        if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
            return Err(RecordError::InvalidPayload(row.payload_mass_kg));
        }
        let outcome = Outcome::from_class(row.class).ok_or(RecordError::InvalidClass(row.class))?;
        Ok(LaunchRecord {
            site: row.site,
            payload_mass_kg: row.payload_mass_kg,
            outcome,
            booster_version: row.booster_version,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch table from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening launch data {}", path.display()))?;
    parse_csv(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse the launch table from any CSV source with a header row.
pub fn parse_csv<R: Read>(source: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("CSV missing '{column}' column");
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result.context("reading CSV record")?;
        // 1-based line in the file, header included.
        let line = raw.position().map_or(0, |p| p.line());
        let row: LaunchRow = raw
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV line {line}"))?;
        let record = LaunchRecord::try_from(row).with_context(|| format!("CSV line {line}"))?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SAMPLE_CSV;

    #[test]
    fn parses_required_columns_and_ignores_the_rest() {
        let ds = parse_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 10);

        let first = &ds.records[0];
        assert_eq!(first.site, "CCAFS LC-40");
        assert_eq!(first.payload_mass_kg, 0.0);
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_version, "F9 v1.0 B0003");

        assert_eq!(ds.records[7].outcome, Outcome::Success);
        assert_eq!(ds.records[7].payload_mass_kg, 9600.0);
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version\n";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Launch Site,class,Booster Version\nCCAFS LC-40,1,F9 FT\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("Payload Mass (kg)"));
    }

    #[test]
    fn class_outside_zero_one_is_rejected() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version\nKSC LC-39A,100,2,F9 FT\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<RecordError>(),
            Some(&RecordError::InvalidClass(2.0))
        );
    }

    #[test]
    fn negative_payload_is_rejected() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version\nKSC LC-39A,-5,1,F9 FT\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<RecordError>(),
            Some(&RecordError::InvalidPayload(-5.0))
        );
    }

    #[test]
    fn non_numeric_payload_is_a_row_error() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version\nKSC LC-39A,heavy,1,F9 FT\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV line 2"));
    }

    #[test]
    fn row_errors_report_the_file_line() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version\n\
                   KSC LC-39A,100,1,F9 FT\n\
                   KSC LC-39A,200,3,F9 FT\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV line 3"), "{err:#}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_file(Path::new("does/not/exist/launches.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("opening launch data"));
    }
}
