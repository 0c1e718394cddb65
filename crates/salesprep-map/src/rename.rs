//! Table column renaming.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use salesprep_model::Table;

use crate::mapping::ColumnMapping;

/// A column whose name was changed by the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedColumn {
    pub source: String,
    pub target: String,
}

/// What a rename pass did to the table's columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport {
    /// Columns renamed by a mapping rule, in table order.
    pub renamed: Vec<RenamedColumn>,
    /// Columns with no rule, kept under their source name.
    pub passthrough: Vec<String>,
    /// Rule sources that no table column matched.
    pub missing: Vec<String>,
    /// Columns removed because their output name was already taken by an earlier column.
    pub dropped: Vec<RenamedColumn>,
}

impl MappingReport {
    /// True when every column was renamed and every rule matched.
    pub fn is_exact(&self) -> bool {
        self.passthrough.is_empty() && self.missing.is_empty() && self.dropped.is_empty()
    }
}

/// Rename table columns through `mapping`.
///
/// Unmapped columns keep their name. Column order and row order are kept. If
/// a renamed column collides with the name of an earlier column, the later
/// column is dropped so output names stay unique.
pub fn rename_columns(table: Table, mapping: &ColumnMapping) -> (Table, MappingReport) {
    let (columns, rows) = table.into_parts();
    let mut report = MappingReport::default();
    let mut names = Vec::with_capacity(columns.len());
    let mut keep = Vec::with_capacity(columns.len());
    let mut taken = BTreeSet::new();

    for column in &columns {
        let target = mapping.target_for(column);
        let name = target.unwrap_or(column.as_str()).to_string();
        if !taken.insert(name.clone()) {
            tracing::warn!(source = %column, field = %name, "duplicate output column dropped");
            report.dropped.push(RenamedColumn {
                source: column.clone(),
                target: name,
            });
            keep.push(false);
            continue;
        }
        match target {
            Some(target) => {
                tracing::debug!(source = %column, field = target, "column renamed");
                report.renamed.push(RenamedColumn {
                    source: column.clone(),
                    target: target.to_string(),
                });
            }
            None => report.passthrough.push(column.clone()),
        }
        names.push(name);
        keep.push(true);
    }

    for rule in mapping.rules() {
        if !columns.contains(&rule.source) {
            report.missing.push(rule.source.clone());
        }
    }

    let renamed = if report.dropped.is_empty() {
        Table::from_rows(names, rows)
    } else {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(keep.iter())
                    .filter_map(|(cell, kept)| kept.then_some(cell))
                    .collect()
            })
            .collect();
        Table::from_rows(names, rows)
    };
    (renamed, report)
}
