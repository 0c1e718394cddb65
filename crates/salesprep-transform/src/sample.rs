//! Row sampling.

use salesprep_model::Table;

/// Maximum number of rows kept for the front-end sample dataset.
pub const SAMPLE_SIZE: usize = 10_000;

/// Keep the first `min(cap, rows)` rows in source order. Columns are unchanged.
pub fn sample_head(mut table: Table, cap: usize) -> Table {
    let before = table.height();
    table.truncate(cap);
    tracing::debug!(before, after = table.height(), cap, "sampled leading rows");
    table
}
