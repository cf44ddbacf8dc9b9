use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::warn;

use crate::error::{Result, SynthError};

/// Column-named table of raw text cells.
///
/// Input games and synthesized quarters are both exchanged in this form; an
/// empty cell stands for a missing value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Fail on the first required column the table lacks.
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        for &column in required {
            if self.column_index(column).is_none() {
                return Err(SynthError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Cell text, `None` if the column or row does not exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Read a CSV table with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let columns = rdr.headers()?.iter().map(String::from).collect();

        let mut table = Table::new(columns);
        for record in rdr.records() {
            let record = record?;
            table.push_row(record.iter().map(String::from).collect());
        }
        Ok(table)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Write the table as CSV, header first.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)
    }
}

/// Normalize a raw cell into a non-negative integer count.
///
/// Missing cells and NaN count as zero. Values are rounded half-to-even and
/// negatives are clamped to zero.
///
/// # Arguments
/// * `raw` - Cell text, `None` when the column is absent
/// * `column` - Column name, for error reporting
/// * `row` - Row index, for error reporting
pub fn parse_count(raw: Option<&str>, column: &str, row: usize) -> Result<u32> {
    let text = match raw.map(str::trim) {
        None => return Ok(0),
        Some(t) if is_missing(t) => return Ok(0),
        Some(t) => t,
    };

    let invalid = || SynthError::InvalidNumber {
        column: column.to_string(),
        row,
        value: text.to_string(),
    };

    let value: f64 = text.parse().map_err(|_| invalid())?;
    if value.is_nan() {
        return Ok(0);
    }
    if !value.is_finite() {
        return Err(invalid());
    }

    let rounded = value.round_ties_even();
    if rounded < 0.0 {
        warn!(column, row, value, "negative count, treating as zero");
        return Ok(0);
    }
    if rounded > u32::MAX as f64 {
        return Err(invalid());
    }
    Ok(rounded as u32)
}

fn is_missing(text: &str) -> bool {
    matches!(text, "" | "nan" | "NaN" | "NA" | "null" | "None")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "season_id,game_id,fga_home\n22015,0021500001,40\n22015,0021500002,\n";

    #[test]
    fn test_read_csv() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["season_id", "game_id", "fga_home"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "game_id"), Some("0021500001"));
        assert_eq!(table.cell(1, "fga_home"), Some(""));
        assert_eq!(table.cell(0, "missing"), None);
    }

    #[test]
    fn test_write_csv() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), SAMPLE);
    }

    #[test]
    fn test_require_columns() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(table.require_columns(&["season_id", "game_id"]).is_ok());

        let err = table.require_columns(&["season_id", "wl_home"]).unwrap_err();
        assert!(err.is_schema_error());
        assert!(err.to_string().contains("wl_home"));
    }

    #[test]
    fn test_parse_count_missing_is_zero() {
        assert_eq!(parse_count(None, "fga_home", 0).unwrap(), 0);
        assert_eq!(parse_count(Some(""), "fga_home", 0).unwrap(), 0);
        assert_eq!(parse_count(Some("NaN"), "fga_home", 0).unwrap(), 0);
        assert_eq!(parse_count(Some(" nan "), "fga_home", 0).unwrap(), 0);
    }

    #[test]
    fn test_parse_count_rounds_half_to_even() {
        assert_eq!(parse_count(Some("40"), "c", 0).unwrap(), 40);
        assert_eq!(parse_count(Some("40.0"), "c", 0).unwrap(), 40);
        assert_eq!(parse_count(Some("2.5"), "c", 0).unwrap(), 2);
        assert_eq!(parse_count(Some("3.5"), "c", 0).unwrap(), 4);
        assert_eq!(parse_count(Some("7.6"), "c", 0).unwrap(), 8);
    }

    #[test]
    fn test_parse_count_negative_clamped() {
        assert_eq!(parse_count(Some("-3"), "c", 0).unwrap(), 0);
    }

    #[test]
    fn test_parse_count_rejects_text() {
        let err = parse_count(Some("forty"), "fga_home", 3).unwrap_err();
        match err {
            SynthError::InvalidNumber { column, row, value } => {
                assert_eq!(column, "fga_home");
                assert_eq!(row, 3);
                assert_eq!(value, "forty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
