//! Structured field extraction from recognized document text.
//!
//! The extractor is a pure function of its input: no I/O, no shared
//! state, nothing retained between calls. Malformed or adversarial text
//! never fails extraction; the worst case is an empty field set.

mod confidence;
mod id_card;
mod normalize;
mod patterns;
mod property;
mod rental;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::document::{ConfidenceScores, DocumentCategory, ExtractedFields};

/// Result of a field extraction: named fields plus confidence scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Extracted fields keyed by field name.
    pub extracted_data: ExtractedFields,

    /// Per-field and overall confidence estimates.
    pub confidence_scores: ConfidenceScores,
}

impl Extraction {
    fn empty() -> Self {
        Self {
            extracted_data: ExtractedFields::new(),
            confidence_scores: confidence::scores("", &ExtractedFields::new(), 1, 0.0),
        }
    }

    /// Overall confidence, 0.0 when absent.
    pub fn overall_confidence(&self) -> f32 {
        self.confidence_scores.get("overall").copied().unwrap_or(0.0)
    }
}

/// Regex-driven document field extractor.
pub struct DocumentExtractor {
    /// Base text-detection confidence; callers that receive a real
    /// confidence from the recognition engine can feed it in here.
    text_confidence: f32,

    /// Excerpt cap for uncategorized documents.
    excerpt_limit: usize,
}

impl DocumentExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self {
            text_confidence: 0.9,
            excerpt_limit: 200,
        }
    }

    /// Set the base text-detection confidence.
    pub fn with_text_confidence(mut self, confidence: f32) -> Self {
        self.text_confidence = confidence;
        self
    }

    /// Set the passthrough excerpt cap.
    pub fn with_excerpt_limit(mut self, limit: usize) -> Self {
        self.excerpt_limit = limit;
        self
    }

    /// Extract structured fields from recognized text.
    ///
    /// Empty input returns an empty field set with zero confidence;
    /// unrecognized categories fall back to the `Other` passthrough.
    pub fn extract(&self, text: &str, category: DocumentCategory) -> Extraction {
        if text.trim().is_empty() {
            return Extraction::empty();
        }

        let extracted_data = match category {
            DocumentCategory::RentalAgreement => rental::extract(text),
            DocumentCategory::IdCard => id_card::extract(text),
            DocumentCategory::PropertyDocument => property::extract(text),
            DocumentCategory::Other => self.passthrough(text),
        };

        let confidence_scores = confidence::scores(
            text,
            &extracted_data,
            confidence::expected_fields(category),
            self.text_confidence,
        );

        debug!(
            category = %category,
            fields = extracted_data.len(),
            overall = confidence_scores.get("overall"),
            "extracted document fields"
        );

        Extraction {
            extracted_data,
            confidence_scores,
        }
    }

    /// Passthrough for uncategorized documents: a bounded excerpt plus
    /// word and character counts, no field patterns applied.
    fn passthrough(&self, text: &str) -> ExtractedFields {
        let mut fields = ExtractedFields::new();
        let excerpt: String = text.chars().take(self.excerpt_limit).collect();
        fields.insert("excerpt".to_string(), excerpt);
        fields.insert(
            "word_count".to_string(),
            text.split_whitespace().count().to_string(),
        );
        fields.insert(
            "character_count".to_string(),
            text.chars().count().to_string(),
        );
        fields
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_yields_empty_result_for_every_category() {
        let extractor = DocumentExtractor::new();
        for category in [
            DocumentCategory::RentalAgreement,
            DocumentCategory::IdCard,
            DocumentCategory::PropertyDocument,
            DocumentCategory::Other,
        ] {
            let result = extractor.extract("", category);
            assert!(result.extracted_data.is_empty());
            assert_eq!(result.overall_confidence(), 0.0);
        }
    }

    #[test]
    fn rental_agreement_extraction_end_to_end() {
        let extractor = DocumentExtractor::new();
        let result = extractor.extract(
            "Tenant: John Doe\nRent: $1500",
            DocumentCategory::RentalAgreement,
        );
        assert_eq!(
            result.extracted_data.get("tenant_name").map(String::as_str),
            Some("John Doe")
        );
        assert_eq!(
            result.extracted_data.get("monthly_rent").map(String::as_str),
            Some("1500")
        );
        assert!(result.overall_confidence() > 0.0);
        assert!(result.confidence_scores.contains_key("tenant_name"));
        assert!(result.confidence_scores.contains_key("text_detection"));
        assert!(result.confidence_scores.contains_key("data_extraction"));
    }

    #[test]
    fn other_category_returns_passthrough_shape() {
        let extractor = DocumentExtractor::new();
        let result = extractor.extract("three words here", DocumentCategory::Other);
        assert_eq!(
            result.extracted_data.get("excerpt").map(String::as_str),
            Some("three words here")
        );
        assert_eq!(
            result.extracted_data.get("word_count").map(String::as_str),
            Some("3")
        );
        assert_eq!(
            result
                .extracted_data
                .get("character_count")
                .map(String::as_str),
            Some("16")
        );
    }

    #[test]
    fn excerpt_is_bounded_on_char_boundaries() {
        let extractor = DocumentExtractor::new().with_excerpt_limit(4);
        let result = extractor.extract("żółćabc", DocumentCategory::Other);
        assert_eq!(
            result.extracted_data.get("excerpt").map(String::as_str),
            Some("żółć")
        );
    }

    #[test]
    fn extraction_is_pure() {
        let extractor = DocumentExtractor::new();
        let text = "Tenant: John Doe\nRent: $1500";
        let first = extractor.extract(text, DocumentCategory::RentalAgreement);
        let second = extractor.extract(text, DocumentCategory::RentalAgreement);
        assert_eq!(first, second);
    }

    #[test]
    fn engine_confidence_feeds_text_detection() {
        let extractor = DocumentExtractor::new().with_text_confidence(0.42);
        let result = extractor.extract("some text", DocumentCategory::Other);
        assert_eq!(result.confidence_scores.get("text_detection"), Some(&0.42));
    }
}
