//! In-memory record sources.

use crate::error::SourceError;
use crate::record::RawRecord;
use crate::source::RecordSource;
use std::cell::Cell;

/// Serves a fixed batch, truncated to the requested size.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RawRecord>,
    fetches: Cell<usize>,
}

impl StaticSource {
    #[must_use]
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            fetches: Cell::new(0),
        }
    }

    /// How many times [`RecordSource::fetch`] was called.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        format!("static source ({} records)", self.records.len())
    }

    fn fetch(&self, batch_size: usize) -> Result<Vec<RawRecord>, SourceError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.records.iter().take(batch_size).cloned().collect())
    }
}

/// Always reports the source as unavailable.
#[derive(Debug, Clone)]
pub struct FailingSource {
    pub reason: String,
}

impl FailingSource {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl RecordSource for FailingSource {
    fn describe(&self) -> String {
        "failing source".to_string()
    }

    fn fetch(&self, _batch_size: usize) -> Result<Vec<RawRecord>, SourceError> {
        Err(SourceError::Unavailable {
            url: "memory://failing".to_string(),
            reason: self.reason.clone(),
        })
    }
}
