//! Integration tests for renaming a full sales header row.

use salesprep_map::{ColumnMapping, SALES_COLUMNS, rename_columns};
use salesprep_model::{CellValue, Table};

#[test]
fn full_sales_header_renames_exactly() {
    let columns: Vec<String> = SALES_COLUMNS
        .iter()
        .map(|(source, _)| (*source).to_string())
        .collect();
    let row: Vec<CellValue> = (0..columns.len() as i64).map(CellValue::Int).collect();
    let table = Table::from_rows(columns, vec![row.clone()]);

    let (renamed, report) = rename_columns(table, &ColumnMapping::sales());

    let expected: Vec<&str> = SALES_COLUMNS.iter().map(|(_, target)| *target).collect();
    assert_eq!(renamed.columns(), expected.as_slice());
    assert_eq!(renamed.rows()[0], row);
    assert!(report.is_exact());
}

#[test]
fn report_serializes_for_logging() {
    let table = Table::new(vec!["Region".into()]);
    let (_, report) = rename_columns(table, &ColumnMapping::new([("Tags", "tags")]));

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["passthrough"][0], "Region");
    assert_eq!(json["missing"][0], "Tags");
    assert_eq!(json["renamed"].as_array().map(Vec::len), Some(0));
}
