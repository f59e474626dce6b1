//! Confidence estimation for extraction results.
//!
//! These scores are heuristic display values: `overall` blends how much
//! of the expected field set was populated with a length-based text
//! quality signal, and per-field values perturb that base with a stable
//! function of the field name. None of it is a calibrated probability.

use crate::models::document::{ConfidenceScores, DocumentCategory, ExtractedFields};

use super::{id_card, property, rental};

/// Cap applied to every confidence component.
const CONFIDENCE_CAP: f32 = 0.95;

/// Text length at which the quality signal saturates.
const TEXT_SATURATION_CHARS: usize = 1000;

/// Number of fields a fully-populated extraction would carry.
pub(crate) fn expected_fields(category: DocumentCategory) -> usize {
    match category {
        DocumentCategory::RentalAgreement => rental::EXPECTED_FIELDS,
        DocumentCategory::IdCard => id_card::EXPECTED_FIELDS,
        DocumentCategory::PropertyDocument => property::EXPECTED_FIELDS,
        // Passthrough always emits excerpt + word/character counts.
        DocumentCategory::Other => 3,
    }
}

/// Compute the confidence map for an extraction.
pub(crate) fn scores(
    text: &str,
    fields: &ExtractedFields,
    expected: usize,
    text_confidence: f32,
) -> ConfidenceScores {
    let mut confidence = ConfidenceScores::new();

    if text.is_empty() {
        confidence.insert("overall".to_string(), 0.0);
        confidence.insert("text_detection".to_string(), 0.0);
        confidence.insert("data_extraction".to_string(), 0.0);
        return confidence;
    }

    let chars = text.chars().count().min(TEXT_SATURATION_CHARS) as f32;
    let length_signal = 0.5 + 0.5 * chars / TEXT_SATURATION_CHARS as f32;
    let text_detection = text_confidence.clamp(0.0, CONFIDENCE_CAP);
    let text_quality = (text_detection * length_signal).min(CONFIDENCE_CAP);

    let data_extraction =
        (fields.len() as f32 / expected.max(1) as f32).min(CONFIDENCE_CAP);

    let overall = round2(0.6 * data_extraction + 0.4 * text_quality);

    confidence.insert("overall".to_string(), overall);
    confidence.insert("text_detection".to_string(), round2(text_detection));
    confidence.insert("data_extraction".to_string(), round2(data_extraction));

    for name in fields.keys() {
        confidence.insert(name.clone(), round2(field_confidence(name, overall)));
    }

    confidence
}

/// Perturb the base confidence per field name. Deterministic and
/// bounded; exists only so the UI can show differentiated values.
fn field_confidence(name: &str, base: f32) -> f32 {
    let jitter = (name.bytes().map(u32::from).sum::<u32>() % 10) as f32 / 100.0;
    (base + jitter).min(CONFIDENCE_CAP)
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields_with(names: &[&str]) -> ExtractedFields {
        names
            .iter()
            .map(|n| (n.to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn empty_text_zeroes_everything() {
        let scores = scores("", &ExtractedFields::new(), 7, 0.9);
        assert_eq!(scores.get("overall"), Some(&0.0));
        assert_eq!(scores.get("text_detection"), Some(&0.0));
        assert_eq!(scores.get("data_extraction"), Some(&0.0));
    }

    #[test]
    fn overall_grows_with_matched_fields() {
        let text = "some recognized text";
        let sparse = scores(text, &fields_with(&["a"]), 7, 0.9);
        let dense = scores(text, &fields_with(&["a", "b", "c", "d"]), 7, 0.9);
        assert!(dense["overall"] > sparse["overall"]);
    }

    #[test]
    fn overall_grows_with_text_length() {
        let fields = fields_with(&["a", "b"]);
        let short = scores("short", &fields, 7, 0.9);
        let long = scores(&"lorem ipsum ".repeat(60), &fields, 7, 0.9);
        assert!(long["overall"] > short["overall"]);
    }

    #[test]
    fn values_stay_bounded() {
        let fields = fields_with(&["a", "b", "c", "d", "e", "f", "g"]);
        let scores = scores(&"x".repeat(5000), &fields, 7, 1.0);
        for value in scores.values() {
            assert!((0.0..=0.95).contains(value));
        }
    }

    #[test]
    fn per_field_values_are_deterministic() {
        let fields = fields_with(&["tenant_name", "monthly_rent"]);
        let first = scores("tenant: x rent: 1", &fields, 7, 0.9);
        let second = scores("tenant: x rent: 1", &fields, 7, 0.9);
        assert_eq!(first, second);
    }
}
