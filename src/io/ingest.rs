//! Delimited-text ingest.
//!
//! The input format is deliberately loose: one row per line, values separated
//! by commas, no header. Parsing is lenient — empty or non-numeric fields
//! simply contribute no value to their row — so files with stray labels or
//! trailing commas still load. Shape problems (too few rows for the default
//! plot) are not detected here; they surface later in the pipeline.

use std::fs::File;
use std::path::Path;

use crate::domain::DataTable;
use crate::error::AppError;

/// Load the raw data table, preserving row order.
pub fn load_table(path: &Path) -> Result<DataTable, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open data file '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut table = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            AppError::new(2, format!("Failed to read data file '{}': {e}", path.display()))
        })?;
        table.push(parse_record(&record));
    }

    Ok(table)
}

fn parse_record(record: &csv::StringRecord) -> Vec<f64> {
    record
        .iter()
        .filter_map(|field| field.parse::<f64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("plotfit_ingest_{name}_{}", std::process::id()));
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_rows_in_order() {
        let path = write_temp("order", "1,2,3\n4.5,5.5,6.5\n");
        let table = load_table(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table, vec![vec![1.0, 2.0, 3.0], vec![4.5, 5.5, 6.5]]);
    }

    #[test]
    fn non_numeric_fields_contribute_nothing() {
        let path = write_temp("lenient", "1, x, 3,\n ,2e1, nan?\n");
        let table = load_table(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table[0], vec![1.0, 3.0]);
        assert_eq!(table[1], vec![20.0]);
    }

    #[test]
    fn ragged_rows_are_preserved() {
        let path = write_temp("ragged", "1,2,3,4\n5\n6,7\n");
        let table = load_table(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.len(), 3);
        assert_eq!(table[0].len(), 4);
        assert_eq!(table[1].len(), 1);
        assert_eq!(table[2].len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_table(Path::new("/nonexistent/plotfit.dat")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("/nonexistent/plotfit.dat"));
    }
}
