//! Source format detection from the file extension.

use std::path::Path;

/// Reader used for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Spreadsheet workbook (`xlsx`, `xlsm`, `xlsb`, `xls`, `ods`).
    Workbook,
    /// Comma-separated text.
    Csv,
}

impl SourceFormat {
    /// Detect the format from the last extension, case-insensitively.
    ///
    /// `sales.csv.xlsx` is a workbook: only the final extension counts.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_last_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("truestate_assignment_dataset.csv.xlsx")),
            Some(SourceFormat::Workbook)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("data/Sales.CSV")),
            Some(SourceFormat::Csv)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("legacy.xls")),
            Some(SourceFormat::Workbook)
        );
    }

    #[test]
    fn rejects_unknown_or_missing_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(SourceFormat::from_path(Path::new("sales")), None);
    }
}
