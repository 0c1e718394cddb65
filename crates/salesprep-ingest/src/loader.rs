//! Source file loading entry point.

use std::path::Path;
use std::time::Instant;

use salesprep_model::Table;

use crate::delimited::read_delimited;
use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::workbook::read_workbook;

/// Load a source spreadsheet into a table.
///
/// The reader is chosen from the file extension. Only the first worksheet of a
/// workbook is read. Nothing is written.
pub fn load_table(path: &Path) -> Result<Table> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = SourceFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default(),
    })?;
    tracing::debug!(path = %path.display(), ?format, bytes = metadata.len(), "loading source");

    let start = Instant::now();
    let table = match format {
        SourceFormat::Workbook => read_workbook(path)?,
        SourceFormat::Csv => read_delimited(path)?,
    };
    tracing::info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "source loaded"
    );
    Ok(table)
}
