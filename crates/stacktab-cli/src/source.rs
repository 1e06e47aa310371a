use anyhow::{Context, Result};
use stacktab_core::{CellValue, Row};
use std::path::Path;

/// Columns consumed into `Row` fields rather than passed through.
const ITEM_FIELD: &str = "Item";
const TOTAL_FIELD: &str = "Total";

/// Columns discarded at read time. The transformer drops them again so
/// its contract also holds for rows built by hand.
const IGNORED_FIELDS: &[&str] = &["Missing", "Available"];

/// Rows parsed from a CSV file plus the number of malformed rows dropped.
#[derive(Debug)]
pub struct RowBatch {
    pub rows: Vec<Row>,
    pub dropped: usize,
}

/// Read a CSV report: first record is the header, quoting and CRLF are
/// handled by the reader, and any record whose field count differs from
/// the header is dropped and counted rather than failing the run.
pub fn read_rows(path: &Path) -> Result<RowBatch> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    let mut dropped = 0;

    for record in reader.records() {
        let record = record?;
        if record.len() != headers.len() {
            dropped += 1;
            continue;
        }

        let mut row = Row::default();
        for (name, raw) in headers.iter().zip(record.iter()) {
            match name {
                ITEM_FIELD => row.item = Some(raw.to_string()),
                TOTAL_FIELD => match CellValue::coerce(raw) {
                    CellValue::Number(n) => row.total = Some(n),
                    // A non-numeric total is out of contract; keep it
                    // visible as a pass-through column instead of
                    // dropping the data.
                    text => row.extras.push((name.to_string(), text)),
                },
                _ if IGNORED_FIELDS.contains(&name) => {}
                _ => row.extras.push((name.to_string(), CellValue::coerce(raw))),
            }
        }
        rows.push(row);
    }

    Ok(RowBatch { rows, dropped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write csv");
        file
    }

    #[test]
    fn parses_items_and_totals() -> Result<()> {
        let file = csv_file("Item,Total\nOak Planks,128\nStone,65\n");
        let batch = read_rows(file.path())?;

        assert_eq!(batch.dropped, 0);
        assert_eq!(batch.rows.len(), 2);
        assert_eq!(batch.rows[0].item.as_deref(), Some("Oak Planks"));
        assert_eq!(batch.rows[0].total, Some(128.0));
        Ok(())
    }

    #[test]
    fn mismatched_rows_are_dropped_and_counted() -> Result<()> {
        let file = csv_file("Item,Total,Missing,Available\nStone,65,0,65\nOak Planks,128,0\n");
        let batch = read_rows(file.path())?;

        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.dropped, 1);
        assert_eq!(batch.rows[0].item.as_deref(), Some("Stone"));
        Ok(())
    }

    #[test]
    fn missing_and_available_columns_are_ignored() -> Result<()> {
        let file = csv_file("Item,Total,Missing,Available,Note\nStone,65,0,65,smelt\n");
        let batch = read_rows(file.path())?;

        let row = &batch.rows[0];
        assert_eq!(
            row.extras,
            vec![("Note".to_string(), CellValue::Text("smelt".to_string()))]
        );
        Ok(())
    }

    #[test]
    fn quoted_cells_and_crlf_parse() -> Result<()> {
        let file = csv_file("\"Item\",\"Total\"\r\n\"Oak, Stripped\",\"64\"\r\n");
        let batch = read_rows(file.path())?;

        assert_eq!(batch.rows[0].item.as_deref(), Some("Oak, Stripped"));
        assert_eq!(batch.rows[0].total, Some(64.0));
        Ok(())
    }

    #[test]
    fn non_numeric_total_becomes_pass_through() -> Result<()> {
        let file = csv_file("Item,Total\nStone,lots\n");
        let batch = read_rows(file.path())?;

        let row = &batch.rows[0];
        assert_eq!(row.total, None);
        assert_eq!(
            row.extras,
            vec![("Total".to_string(), CellValue::Text("lots".to_string()))]
        );
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_rows(Path::new("/nonexistent/list.csv")).is_err());
    }
}
