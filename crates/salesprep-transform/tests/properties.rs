//! Property tests for sampling and normalization.

use proptest::prelude::*;

use salesprep_model::{CellValue, FieldValue, Table};
use salesprep_transform::{normalize_table, sample_head, split_tags};

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Missing),
        any::<i64>().prop_map(CellValue::Int),
        (-1.0e9f64..1.0e9).prop_map(CellValue::Float),
        any::<bool>().prop_map(CellValue::Bool),
        "[ a-z,]{0,12}".prop_map(CellValue::Text),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (1usize..6, 0usize..40).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(cell_strategy(), width), height).prop_map(
            move |rows| {
                let mut columns: Vec<String> = (0..width).map(|idx| format!("c{idx}")).collect();
                columns[0] = "tags".to_string();
                Table::from_rows(columns, rows)
            },
        )
    })
}

proptest! {
    #[test]
    fn sample_keeps_min_of_cap_and_rows(table in table_strategy(), cap in 0usize..50) {
        let height = table.height();
        let sampled = sample_head(table.clone(), cap);
        prop_assert_eq!(sampled.height(), cap.min(height));
        prop_assert_eq!(sampled.columns(), table.columns());
        prop_assert_eq!(sampled.rows(), &table.rows()[..cap.min(height)]);
    }

    #[test]
    fn every_record_has_the_same_keys(table in table_strategy()) {
        let columns = table.columns().to_vec();
        let height = table.height();
        let records = normalize_table(table);

        prop_assert_eq!(records.len(), height);
        for record in records.iter() {
            let keys: Vec<&str> = record.fields().map(|(key, _)| key).collect();
            prop_assert_eq!(keys, columns.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }

    #[test]
    fn tags_are_null_or_trimmed_lists(table in table_strategy()) {
        let records = normalize_table(table);
        for record in records.iter() {
            match record.get("tags") {
                Some(FieldValue::Null) => {}
                Some(FieldValue::List(tags)) => {
                    for tag in tags {
                        prop_assert_eq!(tag.trim(), tag.as_str());
                    }
                }
                other => prop_assert!(false, "unexpected tags value: {:?}", other),
            }
        }
    }

    #[test]
    fn split_tags_pieces_are_trimmed(text in "[ a-z,]{0,30}") {
        for piece in split_tags(&text) {
            prop_assert!(!piece.contains(','));
            prop_assert_eq!(piece.trim(), piece.as_str());
        }
    }
}
