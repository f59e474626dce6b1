//! Repository abstraction for scan records.
//!
//! The extractor and analyzer take no dependency on storage; this trait
//! exists so callers can persist scan results behind any store.

use tracing::debug;

use crate::error::{RentumError, Result};
use crate::models::scan::ScanRecord;

/// Storage interface for document scan records.
pub trait ScanRepository {
    /// Persist a record, assigning an id when it has none. Returns the
    /// stored record.
    fn create(&mut self, record: ScanRecord) -> Result<ScanRecord>;

    /// List stored records, optionally filtered to one user.
    fn list(&self, user_id: Option<&str>) -> Result<Vec<ScanRecord>>;

    /// Fetch a record by id.
    fn get(&self, id: &str) -> Result<ScanRecord>;
}

/// In-process scan repository backed by a Vec.
#[derive(Debug, Default)]
pub struct MemoryScanRepository {
    records: Vec<ScanRecord>,
}

impl MemoryScanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ScanRepository for MemoryScanRepository {
    fn create(&mut self, mut record: ScanRecord) -> Result<ScanRecord> {
        if record.id.is_empty() {
            record.id = (self.records.len() + 1).to_string();
        }
        debug!(id = %record.id, category = %record.category, "stored scan record");
        self.records.push(record.clone());
        Ok(record)
    }

    fn list(&self, user_id: Option<&str>) -> Result<Vec<ScanRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| match user_id {
                Some(user) => r.user_id.as_deref() == Some(user),
                None => true,
            })
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> Result<ScanRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RentumError::NotFound(id.to_string()))
    }
}
