// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Operator inputs for the next session. The validated, immutable form is
/// built from these on Start (see `engine::types::ScrapeRequest`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrapeOptions {
    pub url: String,
    pub max_pages: u32,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    /// CSV only; JSON output is self-describing.
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        path.push(format!("{}.{}", self.out_path.file_stem, self.format.ext()));
        path
    }

    /// Parse operator text into dir + stem. Ignores a pasted extension; the
    /// format selector controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct OutputPath {
    dir: PathBuf,
    file_stem: String, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: DEFAULT_LEDGER_STEM.into(),
        }
    }
}
