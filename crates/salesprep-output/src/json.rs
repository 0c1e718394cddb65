//! Pretty-printed JSON array output.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use salesprep_model::RecordSet;

use crate::error::{OutputError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Render records as the indented JSON array [`write_records`] writes.
pub fn render_records(records: &RecordSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Write records to `path` as an indented JSON array, creating parent directories.
///
/// An existing file at `path` is replaced only once the new content is fully
/// written.
pub fn write_records(records: &RecordSet, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let staging = staging_path(path);
    let result = write_json(records, &staging).and_then(|()| {
        fs::rename(&staging, path).map_err(|source| OutputError::Persist {
            path: path.to_path_buf(),
            source,
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result?;
    tracing::debug!(path = %path.display(), records = records.len(), "records written");
    Ok(())
}

fn write_json(records: &RecordSet, path: &Path) -> Result<()> {
    let json = render_records(records).map_err(|source| OutputError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// `sales.json` → `.sales.json.tmp` in the same directory.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("output")));
    name.push(".tmp");
    path.with_file_name(name)
}
