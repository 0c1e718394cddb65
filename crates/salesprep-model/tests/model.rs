//! Tests for salesprep-model types.

use chrono::NaiveDate;
use salesprep_model::{CellValue, FieldValue, RecordSet, Table};

#[test]
fn table_into_parts_preserves_order() {
    let table = Table::from_rows(
        vec!["Date".into(), "Tags".into()],
        vec![
            vec![
                CellValue::Timestamp(
                    NaiveDate::from_ymd_opt(2023, 5, 1)
                        .unwrap()
                        .and_hms_opt(0, 0, 0)
                        .unwrap(),
                ),
                CellValue::from("red, blue"),
            ],
            vec![CellValue::Missing, CellValue::Missing],
        ],
    );

    assert_eq!(table.column_index("Tags"), Some(1));
    assert_eq!(table.column_index("tags"), None);

    let (columns, rows) = table.into_parts();
    assert_eq!(columns, vec!["Date", "Tags"]);
    assert_eq!(rows.len(), 2);
    assert!(rows[1].iter().all(CellValue::is_missing));
}

#[test]
fn record_fields_follow_columns() {
    let mut records = RecordSet::with_capacity(vec!["a".into(), "b".into()], 1);
    records.push(vec![FieldValue::Int(1), FieldValue::Null]);

    let record = records.first().expect("record");
    let fields: Vec<(&str, &FieldValue)> = record.fields().collect();
    assert_eq!(
        fields,
        vec![("a", &FieldValue::Int(1)), ("b", &FieldValue::Null)]
    );
    assert!(record.get("b").is_some_and(FieldValue::is_null));
}

#[test]
fn non_finite_float_serializes_as_null() {
    let mut records = RecordSet::new(vec!["x".into()]);
    records.push(vec![FieldValue::Float(f64::INFINITY)]);
    let json = serde_json::to_string(&records).expect("serialize");
    assert_eq!(json, r#"[{"x":null}]"#);
}
