//! Cell value normalization into JSON-ready record values.

use salesprep_model::{CellValue, FieldValue, RecordSet, Table};

/// Output field holding comma-separated tags.
pub const TAGS_FIELD: &str = "tags";

/// Convert one cell into a record value.
///
/// - missing → `null`
/// - timestamp → `YYYY-MM-DD` (time of day dropped)
/// - integer → unchanged
/// - boolean → `1` or `0`
/// - float → unchanged, non-finite → `null`
/// - text → trimmed
/// - list → unchanged
pub fn normalize_cell(cell: CellValue) -> FieldValue {
    match cell {
        CellValue::Missing => FieldValue::Null,
        CellValue::Int(value) => FieldValue::Int(value),
        CellValue::Float(value) if value.is_finite() => FieldValue::Float(value),
        CellValue::Float(_) => FieldValue::Null,
        CellValue::Bool(value) => FieldValue::Int(i64::from(value)),
        CellValue::Timestamp(value) => FieldValue::Text(value.format("%Y-%m-%d").to_string()),
        CellValue::Text(value) => FieldValue::Text(value.trim().to_string()),
        CellValue::List(values) => FieldValue::List(values),
    }
}

/// Convert a cell of the [`TAGS_FIELD`] column into a list of tags.
///
/// Missing cells stay `null`. Any other cell is split on its textual form;
/// a list cell is kept element-wise with each element trimmed.
pub fn normalize_tags(cell: CellValue) -> FieldValue {
    match cell {
        CellValue::List(values) => FieldValue::List(
            values
                .into_iter()
                .map(|value| value.trim().to_string())
                .collect(),
        ),
        cell if cell.is_missing() => FieldValue::Null,
        cell => FieldValue::List(split_tags(&cell.to_string())),
    }
}

/// Split comma-separated tags, trimming each piece.
///
/// An empty or all-whitespace string has no tags. Empty pieces between
/// commas are kept as `""`.
pub fn split_tags(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split(',')
        .map(|piece| piece.trim().to_string())
        .collect()
}

/// Normalize every cell of a renamed table into a record set.
///
/// The record set keeps the table's columns and row order.
pub fn normalize_table(table: Table) -> RecordSet {
    let tags_index = table.column_index(TAGS_FIELD);
    let (columns, rows) = table.into_parts();
    let mut records = RecordSet::with_capacity(columns, rows.len());
    for row in rows {
        let values = row
            .into_iter()
            .enumerate()
            .map(|(idx, cell)| {
                if Some(idx) == tags_index {
                    normalize_tags(cell)
                } else {
                    normalize_cell(cell)
                }
            })
            .collect();
        records.push(values);
    }
    tracing::debug!(
        records = records.len(),
        fields = records.columns().len(),
        "normalized records"
    );
    records
}
