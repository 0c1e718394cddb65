//! Integration tests for source loading.

use std::fs;

use salesprep_ingest::{CellValue, IngestError, load_table};
use tempfile::TempDir;

#[test]
fn loads_csv_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.csv");
    fs::write(
        &path,
        "Transaction ID,Date,Tags,Quantity\n1001,2023-05-01,\"red, blue,green\",3\n1002,,,\n",
    )
    .unwrap();

    let table = load_table(&path).expect("load csv");

    assert_eq!(table.columns(), ["Transaction ID", "Date", "Tags", "Quantity"]);
    assert_eq!(table.shape(), (2, 4));
    assert_eq!(
        table.rows()[0][2],
        CellValue::Text("red, blue,green".to_string())
    );
    assert!(table.rows()[1][1..].iter().all(CellValue::is_missing));
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("truestate_assignment_dataset.csv.xlsx");

    let err = load_table(&path).unwrap_err();

    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("truestate_assignment_dataset.csv.xlsx"));
}

#[test]
fn directory_is_not_a_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.xlsx");
    fs::create_dir(&path).unwrap();

    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.txt");
    fs::write(&path, "A,B\n1,2\n").unwrap();

    let err = load_table(&path).unwrap_err();
    match err {
        IngestError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "txt"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn corrupt_workbook_is_a_workbook_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    fs::write(&path, b"this is not a zip archive").unwrap();

    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::Workbook { .. }), "{err:?}");
}

#[test]
fn header_only_csv_loads_with_no_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "A,,A\n").unwrap();

    let table = load_table(&path).expect("load csv");
    assert_eq!(table.columns(), ["A", "Unnamed: 1", "A.1"]);
    assert_eq!(table.height(), 0);
}

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_first_worksheet_of_real_workbook() {
    let table = load_table(&fixture("sales.xlsx")).expect("load xlsx");

    assert_eq!(
        table.columns(),
        [
            "Transaction ID",
            "Date",
            "Customer Name",
            "Age",
            "Tags",
            "Discount Percentage"
        ]
    );
    assert_eq!(table.shape(), (3, 6));

    let first = &table.rows()[0];
    assert_eq!(first[0], CellValue::Int(1001));
    match &first[1] {
        CellValue::Timestamp(date) => {
            assert_eq!(date.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-05-01 00:00:00");
        }
        other => panic!("expected a timestamp, got {other:?}"),
    }
    assert!(matches!(&first[2], CellValue::Text(name) if name.trim() == "Neha Khan"));
    assert_eq!(first[4], CellValue::Text("red, blue,green".into()));

    // Age has a blank cell and Discount Percentage a fraction: both load as floats.
    let ages: Vec<CellValue> = table.column(3).cloned().collect();
    assert_eq!(
        ages,
        vec![CellValue::Float(31.0), CellValue::Missing, CellValue::Float(40.0)]
    );
    let discounts: Vec<CellValue> = table.column(5).cloned().collect();
    assert_eq!(
        discounts,
        vec![
            CellValue::Float(10.0),
            CellValue::Float(12.5),
            CellValue::Float(5.0)
        ]
    );
    assert_eq!(table.rows()[2][4], CellValue::Missing);
}

#[test]
fn csv_integer_column_with_blank_loads_as_float() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.csv");
    fs::write(&path, "Age,Discount Percentage\n31,10\n,12.5\n").unwrap();

    let table = load_table(&path).expect("load csv");

    assert_eq!(
        table.rows()[0],
        vec![CellValue::Float(31.0), CellValue::Float(10.0)]
    );
    assert_eq!(
        table.rows()[1],
        vec![CellValue::Missing, CellValue::Float(12.5)]
    );
}
