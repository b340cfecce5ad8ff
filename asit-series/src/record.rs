//! Parsing of the processed thickness CSV into typed records.

use crate::season::{calendar_month_number, season_month_index, season_year_for};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Columns the thickness CSV must carry. Extra columns (the processed file
/// also has `code` and `region`) are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["season_year", "month", "season_month", "thickness", "year"];

/// Errors that can occur when parsing the thickness time series.
#[derive(Error, Debug)]
pub enum SeriesError {
    /// CSV-level failure: malformed row, wrong field type, etc.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// The document has no data rows at all.
    #[error("No thickness records in input")]
    Empty,
}

/// One monthly mean-thickness observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessRecord {
    /// Season year: the calendar year the freeze season started in.
    pub season_year: i32,
    /// Full English month name, e.g. "October".
    pub month: String,
    /// Position of the month within the season (October = 0, April = 6).
    pub season_month: u32,
    /// Basin-wide mean sea-ice thickness in meters.
    pub thickness: f64,
    /// Calendar year of the observation.
    pub year: i32,
}

/// Summary of a parsed series, used for logging and captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSummary {
    pub records: usize,
    pub first_season_year: i32,
    pub last_season_year: i32,
}

/// Parse the thickness CSV text into typed records.
///
/// The parse is header-driven: column order does not matter, and columns
/// beyond [`REQUIRED_COLUMNS`] are ignored. Any malformed row fails the
/// whole parse so the caller can surface one clear error message.
pub fn parse_series(csv_text: &str) -> Result<Vec<ThicknessRecord>, SeriesError> {
    if csv_text.trim().is_empty() {
        return Err(SeriesError::Empty);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SeriesError::MissingColumn(column));
        }
    }

    let records = rdr
        .deserialize()
        .collect::<Result<Vec<ThicknessRecord>, _>>()?;

    if records.is_empty() {
        return Err(SeriesError::Empty);
    }
    Ok(records)
}

/// Compute a summary over parsed records. `None` for an empty slice.
pub fn summarize(records: &[ThicknessRecord]) -> Option<SeriesSummary> {
    let first_season_year = records.iter().map(|r| r.season_year).min()?;
    let last_season_year = records.iter().map(|r| r.season_year).max()?;
    Some(SeriesSummary {
        records: records.len(),
        first_season_year,
        last_season_year,
    })
}

/// Cross-check each record's season fields against its month name.
///
/// The chart renders whatever the CSV says; these warnings only flag rows
/// whose `season_month` or `season_year` disagree with the freeze-season
/// calendar, so data problems show up in the log instead of as a silently
/// misdrawn chart. Row numbers are 1-based data rows (header excluded).
pub fn consistency_warnings(records: &[ThicknessRecord]) -> Vec<String> {
    let mut warnings = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let row = i + 1;
        match season_month_index(&record.month) {
            None => {
                warnings.push(format!(
                    "row {row}: month {:?} is outside the October-April freeze season",
                    record.month
                ));
                continue;
            }
            Some(index) if index != record.season_month => {
                warnings.push(format!(
                    "row {row}: season_month {} does not match month {:?} (expected {index})",
                    record.season_month, record.month
                ));
            }
            Some(_) => {}
        }
        if let Some(month_number) = calendar_month_number(&record.month) {
            if season_year_for(record.year, month_number) != Some(record.season_year) {
                warnings.push(format!(
                    "row {row}: season_year {} inconsistent with year {} and month {:?}",
                    record.season_year, record.year, record.month
                ));
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
code,year,season_year,month,season_month,region,thickness
199110,1991,1991,October,0,Arctic,1.81
199111,1991,1991,November,1,Arctic,1.94
199201,1992,1991,January,3,Arctic,2.12
199204,1992,1991,April,6,Arctic,2.45
";

    #[test]
    fn test_parse_valid_csv() {
        let records = parse_series(SAMPLE_CSV).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].month, "October");
        assert_eq!(records[0].season_month, 0);
        assert_eq!(records[0].thickness, 1.81);
        assert_eq!(records[2].season_year, 1991);
        assert_eq!(records[2].year, 1992);
    }

    #[test]
    fn test_parse_ignores_extra_columns() {
        // `code` and `region` are present in SAMPLE_CSV but not in the model
        let records = parse_series(SAMPLE_CSV).unwrap();
        assert_eq!(records[3].month, "April");
    }

    #[test]
    fn test_parse_missing_column() {
        let csv = "year,month,thickness\n1991,October,1.81\n";
        let err = parse_series(csv).unwrap_err();
        assert!(matches!(err, SeriesError::MissingColumn("season_year")));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_series(""), Err(SeriesError::Empty)));
        assert!(matches!(parse_series("  \n "), Err(SeriesError::Empty)));
    }

    #[test]
    fn test_parse_headers_only() {
        let csv = "code,year,season_year,month,season_month,region,thickness\n";
        assert!(matches!(parse_series(csv), Err(SeriesError::Empty)));
    }

    #[test]
    fn test_parse_malformed_thickness() {
        let csv = "year,season_year,month,season_month,thickness\n\
                   1991,1991,October,0,not-a-number\n";
        assert!(matches!(parse_series(csv), Err(SeriesError::CsvParse(_))));
    }

    #[test]
    fn test_summarize() {
        let records = parse_series(SAMPLE_CSV).unwrap();
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.records, 4);
        assert_eq!(summary.first_season_year, 1991);
        assert_eq!(summary.last_season_year, 1991);
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_consistency_clean_data() {
        let records = parse_series(SAMPLE_CSV).unwrap();
        assert!(consistency_warnings(&records).is_empty());
    }

    #[test]
    fn test_consistency_flags_bad_rows() {
        let csv = "year,season_year,month,season_month,thickness\n\
                   1992,1992,January,3,2.1\n\
                   1991,1991,July,2,1.5\n";
        let records = parse_series(csv).unwrap();
        let warnings = consistency_warnings(&records);
        // Row 1: January 1992 belongs to season year 1991.
        // Row 2: July is out of season.
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("season_year 1992"));
        assert!(warnings[1].contains("July"));
    }
}
