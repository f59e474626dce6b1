//! Core library for the Rentum property-management platform.
//!
//! This crate provides:
//! - Regex-based field extraction from recognized document text
//!   (rental agreements, ID cards, property documents)
//! - Review analysis: weighted category scoring, flag detection,
//!   risk assessment and profile aggregation
//! - A repository abstraction for persisting document scan records

pub mod error;
pub mod extract;
pub mod models;
pub mod review;
pub mod store;

pub use error::{RentumError, Result};
pub use extract::{DocumentExtractor, Extraction};
pub use models::config::RentumConfig;
pub use models::document::{ConfidenceScores, DocumentCategory, ExtractedFields};
pub use models::review::{
    CategoryRatings, RatingCategory, ReviewAnalysis, ReviewRecord, ReviewSubmission, RiskTier,
    Trend, UserProfile,
};
pub use models::scan::ScanRecord;
pub use review::{aggregate_profile, ReviewAnalyzer};
pub use store::{MemoryScanRepository, ScanRepository};
