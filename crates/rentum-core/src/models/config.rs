//! Configuration structures for extraction and analysis.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for the rentum pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RentumConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Review analysis configuration.
    pub analysis: AnalysisConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Base text-detection confidence, used when the recognition engine
    /// does not report its own (0.0 - 1.0).
    pub text_confidence: f32,

    /// Maximum characters kept in the passthrough excerpt for
    /// uncategorized documents.
    pub excerpt_limit: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            text_confidence: 0.9,
            excerpt_limit: 200,
        }
    }
}

/// Review analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of flags kept per list.
    pub flag_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { flag_limit: 5 }
    }
}

impl RentumConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
