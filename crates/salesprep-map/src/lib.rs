#![deny(unsafe_code)]

//! Column renaming from spreadsheet headers to the sales record schema.

pub mod mapping;
pub mod rename;

pub use mapping::{ColumnMapping, ColumnRule, SALES_COLUMNS};
pub use rename::{MappingReport, RenamedColumn, rename_columns};
