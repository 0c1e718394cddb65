//! JSON output for converted sales records.
//!
//! Records are written as one indented JSON array (two spaces, UTF-8,
//! non-ASCII kept verbatim, no trailing newline). The file is written next to
//! its target and renamed into place, so a failed write never leaves a
//! truncated output behind.

mod error;
mod json;

pub use error::{OutputError, Result};
pub use json::{ensure_parent_dir, render_records, write_records};
