//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: Read the source spreadsheet into a table
//! 2. **Sample**: Keep the first [`SAMPLE_SIZE`] rows
//! 3. **Rename**: Apply the sales column mapping
//! 4. **Normalize**: Convert cells to JSON-ready values
//! 5. **Write**: Emit the indented JSON array
//!
//! A load failure stops the run before anything is written.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{info, info_span, warn};

use salesprep_ingest::{IngestError, load_table};
use salesprep_map::{ColumnMapping, MappingReport, rename_columns};
use salesprep_model::{RecordSet, Table};
use salesprep_output::{OutputError, write_records};
use salesprep_transform::{SAMPLE_SIZE, normalize_table, sample_head};

/// Source spreadsheet, relative to the working directory.
pub const SOURCE_PATH: &str = "truestate_assignment_dataset.csv.xlsx";

/// Output dataset, relative to the working directory.
pub const OUTPUT_PATH: &str = "src/data/sales.json";

/// Source rows shown in the console preview.
pub const PREVIEW_ROWS: usize = 5;

/// Fatal pipeline failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source could not be loaded; nothing was written.
    #[error(transparent)]
    Load(#[from] IngestError),
    /// The output could not be written.
    #[error(transparent)]
    Write(#[from] OutputError),
}

impl PipelineError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Load(_) => 1,
            Self::Write(_) => 2,
        }
    }
}

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPaths {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Default for ConversionPaths {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl ConversionPaths {
    /// The fixed paths resolved against `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            source: dir.join(SOURCE_PATH),
            output: dir.join(OUTPUT_PATH),
        }
    }
}

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Result of the load stage.
#[derive(Debug)]
pub struct LoadResult {
    pub table: Table,
    /// Leading source rows for the console preview.
    pub preview: Table,
}

/// Load the source spreadsheet.
pub fn load(source: &Path) -> Result<LoadResult, IngestError> {
    info!(path = %source.display(), "reading source");
    let table = load_table(source)?;
    let preview = table.head(PREVIEW_ROWS);
    Ok(LoadResult { table, preview })
}

// ============================================================================
// Stages 2-4: Sample, Rename, Normalize
// ============================================================================

/// Result of the transform stages.
#[derive(Debug)]
pub struct TransformResult {
    pub records: RecordSet,
    pub mapping: MappingReport,
}

/// Sample, rename and normalize a loaded table.
pub fn transform(table: Table, cap: usize, mapping: &ColumnMapping) -> TransformResult {
    let sampled = sample_head(table, cap);
    info!(sample_size = sampled.height(), "sampled records");

    let (renamed, report) = rename_columns(sampled, mapping);
    if !report.passthrough.is_empty() {
        warn!(columns = ?report.passthrough, "columns without a mapping kept under their source name");
    }
    if !report.missing.is_empty() {
        warn!(columns = ?report.missing, "expected source columns not found");
    }

    let records = normalize_table(renamed);
    TransformResult {
        records,
        mapping: report,
    }
}

// ============================================================================
// Stage 5: Write
// ============================================================================

/// Write records to the output path.
pub fn output(records: &RecordSet, path: &Path) -> Result<(), OutputError> {
    write_records(records, path)?;
    info!(path = %path.display(), records = records.len(), "output written");
    Ok(())
}

// ============================================================================
// Full run
// ============================================================================

/// Everything a finished run reports.
#[derive(Debug)]
pub struct ConversionResult {
    pub source: PathBuf,
    pub output: PathBuf,
    /// `(rows, columns)` of the full source table.
    pub source_shape: (usize, usize),
    pub source_columns: Vec<String>,
    pub preview: Table,
    pub mapping: MappingReport,
    pub records: RecordSet,
}

/// Run every stage once, in order.
pub fn run_conversion(paths: &ConversionPaths) -> Result<ConversionResult, PipelineError> {
    let start = Instant::now();

    let load_span = info_span!("load", path = %paths.source.display());
    let LoadResult { table, preview } = load_span.in_scope(|| load(&paths.source))?;
    let source_shape = table.shape();
    let source_columns = table.columns().to_vec();

    let transform_span = info_span!("transform");
    let TransformResult { records, mapping } = transform_span
        .in_scope(|| transform(table, SAMPLE_SIZE, &ColumnMapping::sales()));

    let write_span = info_span!("write", path = %paths.output.display());
    write_span.in_scope(|| output(&records, &paths.output))?;

    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(ConversionResult {
        source: paths.source.clone(),
        output: paths.output.clone(),
        source_shape,
        source_columns,
        preview,
        mapping,
        records,
    })
}
