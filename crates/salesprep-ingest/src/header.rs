//! Header row normalization.

use std::collections::BTreeSet;

/// Turn raw header cells into unique column names.
///
/// - Header text is kept verbatim, surrounding whitespace included.
/// - An empty header at position `i` becomes `Unnamed: i`; an
///   all-whitespace header is kept as written.
/// - A repeated name gets the first free `.1`, `.2`, ... suffix.
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut columns = Vec::with_capacity(raw.len());
    for (idx, header) in raw.iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header.clone()
        };
        let mut name = base.clone();
        let mut suffix = 1usize;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        columns.push(name);
    }
    columns
}
