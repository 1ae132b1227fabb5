// src/file.rs
//
// Writers for "export current view to an operator-chosen file". The data is
// whatever is on screen; nothing here reaches into the engine.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::engine::types::BlockRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

const LEDGER_HEADERS: &[&str] = &["index", "timestamp", "hash", "previous_hash", "data_type"];

/// Write the displayed ledger rows to the configured path.
/// Returns the final path written to.
pub fn write_ledger_export(
    export: &ExportOptions,
    rows: &[BlockRecord],
) -> Result<PathBuf, ExportError> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = match export.format {
        ExportFormat::Csv => ledger_to_csv(rows, export.include_headers),
        ExportFormat::Json => {
            let mut s = serde_json::to_string_pretty(rows)?;
            s.push('\n');
            s
        }
    };

    fs::write(&path, contents)?;
    Ok(path)
}

/// Write the rendered log view verbatim.
pub fn write_log_export(path: &Path, text: &str) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(path.to_owned())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_owned()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn ledger_to_csv(rows: &[BlockRecord], include_headers: bool) -> String {
    let mut buf = String::new();
    if include_headers {
        write_row(&mut buf, LEDGER_HEADERS.iter().map(|s| s.to_string()));
    }
    for r in rows {
        write_row(
            &mut buf,
            [
                r.index.to_string(),
                r.timestamp.to_rfc3339(),
                r.hash.clone(),
                r.previous_hash.clone(),
                r.data_type.clone(),
            ]
            .into_iter(),
        );
    }
    buf
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row(buf: &mut String, row: impl Iterator<Item = String>) {
    let mut first = true;
    for cell in row {
        if !first {
            buf.push(',');
        } else {
            first = false;
        }
        if needs_quotes(&cell) {
            buf.push('"');
            buf.push_str(&cell.replace('"', "\"\""));
            buf.push('"');
        } else {
            buf.push_str(&cell);
        }
    }
    buf.push('\n');
}
