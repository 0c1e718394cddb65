//! Workbook reading through `calamine`.

use std::path::Path;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};

use salesprep_model::{CellValue, Table};

use crate::cell::{number_cell, text_cell, unify_numeric_columns};
use crate::error::{IngestError, Result};
use crate::header::normalize_headers;

/// Read the first worksheet of a workbook into a table.
///
/// The first row of the sheet's used range is the header row. Integer
/// cells in numeric columns that also hold floats or blanks are widened.
pub(crate) fn read_workbook(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(name) = workbook.sheet_names().first() {
        tracing::debug!(path = %path.display(), sheet = %name, "reading first worksheet");
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    table_from_range(&range).ok_or_else(|| IngestError::EmptySheet {
        path: path.to_path_buf(),
    })
}

fn table_from_range(range: &Range<Data>) -> Option<Table> {
    let mut rows = range.rows();
    let header_row = rows.next()?;
    let raw_headers: Vec<String> = header_row
        .iter()
        .map(|cell| workbook_cell(cell).to_string())
        .collect();
    let mut table = Table::new(normalize_headers(&raw_headers));
    for row in rows {
        table.push_row(row.iter().map(workbook_cell).collect());
    }
    unify_numeric_columns(&mut table);
    Some(table)
}

/// Convert one workbook cell into a typed cell.
fn workbook_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => number_cell(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::String(value) => text_cell(value),
        Data::DateTime(_) | Data::DateTimeIso(_) => {
            let timestamp = cell
                .as_datetime()
                .or_else(|| cell.as_date().and_then(|date| date.and_hms_opt(0, 0, 0)));
            match timestamp {
                Some(timestamp) => CellValue::Timestamp(timestamp),
                None => CellValue::Text(cell.to_string()),
            }
        }
        Data::DurationIso(value) => CellValue::Text(value.clone()),
    }
}
