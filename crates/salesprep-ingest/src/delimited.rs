//! CSV reading with per-column type inference.

use std::path::Path;

use csv::ReaderBuilder;

use salesprep_model::Table;

use crate::cell::type_text_column;
use crate::error::{IngestError, Result};
use crate::header::normalize_headers;

/// Read a CSV file into a table. The first record is the header row.
pub(crate) fn read_delimited(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|source| csv_error(path, source))?,
        None => {
            return Err(IngestError::EmptySheet {
                path: path.to_path_buf(),
            });
        }
    };
    let raw_headers: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            // Skip BOM if present
            if idx == 0 {
                value.trim_start_matches('\u{feff}').to_string()
            } else {
                value.to_string()
            }
        })
        .collect();

    let columns = normalize_headers(&raw_headers);
    let mut raw_rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| csv_error(path, source))?;
        raw_rows.push(record);
    }

    let mut rows = vec![Vec::with_capacity(columns.len()); raw_rows.len()];
    for idx in 0..columns.len() {
        let values: Vec<&str> = raw_rows
            .iter()
            .map(|record| record.get(idx).unwrap_or(""))
            .collect();
        for (row, cell) in rows.iter_mut().zip(type_text_column(&values)) {
            row.push(cell);
        }
    }
    Ok(Table::from_rows(columns, rows))
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = source.kind()
        && io.kind() == std::io::ErrorKind::NotFound
    {
        return IngestError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}
