//! Table transforms for the sales dataset.
//!
//! - [`sample_head`] keeps the leading rows of a table (deterministic, never random).
//! - [`normalize_table`] turns a renamed table into JSON-ready records.

pub mod normalize;
pub mod sample;

pub use normalize::{TAGS_FIELD, normalize_cell, normalize_table, normalize_tags, split_tags};
pub use sample::{SAMPLE_SIZE, sample_head};
