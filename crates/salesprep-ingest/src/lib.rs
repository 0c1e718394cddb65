//! Sales spreadsheet ingestion.
//!
//! This crate loads a source spreadsheet into a [`Table`] of typed cells.
//!
//! # Features
//!
//! - **Workbooks**: `xlsx`, `xlsm`, `xlsb`, `xls` and `ods`; the first worksheet is read
//! - **CSV**: comma-separated text, typed column by column
//! - **Headers**: blank headers become `Unnamed: N`, repeated headers get `.1`, `.2` suffixes
//! - **Missing values**: empty cells, error cells and the usual NA spellings load as missing
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use salesprep_ingest::load_table;
//!
//! let table = load_table(Path::new("truestate_assignment_dataset.csv.xlsx"))?;
//! println!("{} rows, {} columns", table.height(), table.width());
//! ```

mod cell;
mod delimited;
mod error;
mod format;
mod header;
mod loader;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use format::SourceFormat;
pub use loader::load_table;

// === Cell and Header Rules ===
pub use cell::{NA_VALUES, is_na_value, type_text_column};
pub use header::normalize_headers;

pub use salesprep_model::{CellValue, Table};
