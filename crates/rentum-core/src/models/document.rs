//! Document classification and extraction output types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a scanned document.
///
/// Selects which extraction pattern set applies. Unrecognized category
/// strings deserialize to [`DocumentCategory::Other`], which falls back to
/// a raw-text passthrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// Lease/rental agreement between tenant and landlord.
    RentalAgreement,
    /// Government-issued identity document.
    IdCard,
    /// Property ownership or listing document.
    PropertyDocument,
    /// Anything else: no field patterns are applied.
    #[default]
    #[serde(other)]
    Other,
}

impl DocumentCategory {
    /// Parse a category tag. Unknown tags map to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "rental_agreement" => Self::RentalAgreement,
            "id_card" => Self::IdCard,
            "property_document" => Self::PropertyDocument,
            _ => Self::Other,
        }
    }

    /// Snake-case tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RentalAgreement => "rental_agreement",
            Self::IdCard => "id_card",
            Self::PropertyDocument => "property_document",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted fields keyed by field name.
///
/// A missing key means the field was not found; empty-string values are
/// never stored.
pub type ExtractedFields = BTreeMap<String, String>;

/// Confidence estimates in [0, 1] keyed by field name, plus the literal
/// keys `overall`, `text_detection` and `data_extraction`.
///
/// These are heuristic display values derived from extraction density and
/// text length, not calibrated probabilities.
pub type ConfidenceScores = BTreeMap<String, f32>;
