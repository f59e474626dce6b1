//! Persisted envelope for a document scan result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::Extraction;
use crate::models::document::DocumentCategory;

/// A stored document scan: extraction output plus request metadata.
///
/// The `id` is assigned by the repository on create; records built with
/// [`ScanRecord::new`] start with an empty id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Repository-assigned identifier.
    #[serde(default)]
    pub id: String,

    /// Owner of the scan, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Document category the extraction ran under.
    pub category: DocumentCategory,

    /// Original file name.
    pub filename: String,

    /// Size of the scanned file in bytes.
    pub file_size: u64,

    /// Extraction output (fields and confidence scores).
    #[serde(flatten)]
    pub extraction: Extraction,

    /// When the scan was processed.
    pub created_at: DateTime<Utc>,
}

impl ScanRecord {
    /// Build an unsaved scan record stamped with the current time.
    pub fn new(
        category: DocumentCategory,
        filename: impl Into<String>,
        file_size: u64,
        user_id: Option<String>,
        extraction: Extraction,
    ) -> Self {
        Self {
            id: String::new(),
            user_id,
            category,
            filename: filename.into(),
            file_size,
            extraction,
            created_at: Utc::now(),
        }
    }
}
