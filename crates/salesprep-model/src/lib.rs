//! Data model shared by the sales dataset converter.
//!
//! - [`Table`] holds the source sheet as ordered columns and rows of raw
//!   [`CellValue`]s.
//! - [`RecordSet`] holds the converted output: one shared column list and one
//!   [`FieldValue`] vector per record, serialized as a JSON array of objects.

pub mod record;
pub mod table;

pub use record::{FieldValue, Record, RecordSet};
pub use table::{CellValue, Table};
