//! Cell and column typing rules shared by the workbook and CSV readers.
//!
//! Numeric types are decided per column, not per cell: a column of whole
//! numbers with a blank or fractional value in it is a float column.

use salesprep_model::{CellValue, Table};

/// String values that load as missing.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if `value` is one of the [`NA_VALUES`] spellings (exact match).
pub fn is_na_value(value: &str) -> bool {
    NA_VALUES.contains(&value)
}

/// Type a string cell from a workbook: NA spellings become missing, everything else stays text.
pub(crate) fn text_cell(value: &str) -> CellValue {
    if is_na_value(value) {
        CellValue::Missing
    } else {
        CellValue::Text(value.to_string())
    }
}

/// Type a numeric cell from a workbook.
///
/// Workbooks store every number as a double; a whole value that fits in
/// `i64` was an integer in the sheet.
pub(crate) fn number_cell(value: f64) -> CellValue {
    if value.is_nan() {
        return CellValue::Missing;
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return CellValue::Int(value as i64);
    }
    CellValue::Float(value)
}

/// Column type inferred from CSV text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

fn text_column_kind(values: &[&str]) -> TextColumnKind {
    let mut present = values.iter().filter(|value| !is_na_value(value)).map(|value| value.trim());
    let has_missing = values.iter().any(|value| is_na_value(value));

    if present.clone().all(|value| value.parse::<i64>().is_ok()) {
        return if has_missing {
            TextColumnKind::Float
        } else {
            TextColumnKind::Int
        };
    }
    if present.clone().all(|value| value.parse::<f64>().is_ok()) {
        return TextColumnKind::Float;
    }
    if present.all(|value| parse_bool(value).is_some()) {
        return TextColumnKind::Bool;
    }
    TextColumnKind::Text
}

/// Type one CSV column from its raw text, top to bottom.
///
/// - NA spellings are missing in every column.
/// - All integers → integer column; with any missing value → float column.
/// - All numbers → float column (NaN → missing).
/// - All `True`/`False` spellings → boolean column.
/// - Anything else → the whole column stays text, digits included.
///
/// Dates are not parsed from CSV text.
pub fn type_text_column(values: &[&str]) -> Vec<CellValue> {
    let kind = text_column_kind(values);
    values
        .iter()
        .map(|value| {
            if is_na_value(value) {
                return CellValue::Missing;
            }
            let trimmed = value.trim();
            let typed = match kind {
                TextColumnKind::Int => trimmed.parse().ok().map(CellValue::Int),
                TextColumnKind::Float => trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|float| !float.is_nan())
                    .map(CellValue::Float),
                TextColumnKind::Bool => parse_bool(trimmed).map(CellValue::Bool),
                TextColumnKind::Text => None,
            };
            match (kind, typed) {
                (TextColumnKind::Text, _) => CellValue::Text((*value).to_string()),
                (_, Some(cell)) => cell,
                (_, None) => CellValue::Missing,
            }
        })
        .collect()
}

/// Widen integer cells to floats in purely numeric columns that also hold a
/// float or a missing value.
///
/// Columns mixing numbers with text, booleans or dates are left as they are.
pub(crate) fn unify_numeric_columns(table: &mut Table) {
    for idx in 0..table.width() {
        let mut has_int = false;
        let mut needs_float = false;
        let mut numeric = true;
        for cell in table.column(idx) {
            match cell {
                CellValue::Int(_) => has_int = true,
                CellValue::Float(_) | CellValue::Missing => needs_float = true,
                _ => numeric = false,
            }
        }
        if numeric && has_int && needs_float {
            tracing::debug!(column = %table.columns()[idx], "integer column widened to float");
            table.update_column(idx, |cell| {
                if let CellValue::Int(value) = *cell {
                    *cell = CellValue::Float(value as f64);
                }
            });
        }
    }
}
