// src/engine/types.rs
use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Operator input rejected before anything is dispatched to the engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("target URL is empty")]
    EmptyUrl,
    #[error("target URL is not valid: {0}")]
    BadUrl(String),
    #[error("max pages must be a positive number")]
    ZeroPages,
}

/// Parameters for one scraping session. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeRequest {
    url: Url,
    max_pages: u32,
}

impl ScrapeRequest {
    pub fn new(url: &str, max_pages: u32) -> Result<Self, ValidationError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        let url = Url::parse(trimmed).map_err(|e| ValidationError::BadUrl(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ValidationError::BadUrl(format!(
                    "unsupported scheme \"{other}\""
                )));
            }
        }
        if max_pages == 0 {
            return Err(ValidationError::ZeroPages);
        }
        Ok(Self { url, max_pages })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }
}

/// One line of the live log view. Stamped where the event originates.
#[derive(Clone, Debug)]
pub struct LogLine {
    pub when: DateTime<Local>,
    pub text: String,
}

impl LogLine {
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            when: Local::now(),
            text: text.into(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.when.format("%H:%M:%S"), self.text)
    }
}

/// Read-only projection of one ledger block, for display and export.
/// The shell renders these; it never computes or verifies the hashes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub index: u64,
    pub timestamp: DateTime<Utc>,
    pub hash: String,
    pub previous_hash: String,
    pub data_type: String,
}

/// Terminal result of a run that ended on its own terms (including a
/// cooperative cancellation).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pages_fetched: usize,
    pub blocks_appended: usize,
    pub fetch_errors: usize,
    pub cancelled: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} page(s), {} block(s), {} error(s)",
            self.pages_fetched, self.blocks_appended, self.fetch_errors
        )?;
        if self.cancelled {
            write!(f, ", cancelled")?;
        }
        Ok(())
    }
}
