//! Field extraction for property documents.

use crate::models::document::ExtractedFields;

use super::normalize::{normalize_amount, normalize_integer};
use super::patterns::{first_capture, AREA, BATHROOMS, BEDROOMS};

/// Fields a property document is expected to carry.
pub(crate) const EXPECTED_FIELDS: usize = 4;

/// Property type keyword groups; the first group with a hit wins.
const PROPERTY_TYPES: &[(&str, &[&str])] = &[
    ("apartment", &["apartment", "flat"]),
    ("house", &["house", "villa", "bungalow"]),
    ("commercial", &["commercial", "office", "shop"]),
];

/// Extract property-document fields from recognized text.
pub(crate) fn extract(text: &str) -> ExtractedFields {
    let text = text.to_lowercase();
    let mut fields = ExtractedFields::new();

    for (property_type, keywords) in PROPERTY_TYPES {
        if keywords.iter().any(|k| text.contains(k)) {
            fields.insert("property_type".to_string(), (*property_type).to_string());
            break;
        }
    }

    if let Some(area) = first_capture(&text, &AREA).as_deref().and_then(normalize_amount) {
        fields.insert("area".to_string(), area);
    }
    if let Some(bedrooms) = first_capture(&text, &BEDROOMS)
        .as_deref()
        .and_then(normalize_integer)
    {
        fields.insert("bedrooms".to_string(), bedrooms);
    }
    if let Some(bathrooms) = first_capture(&text, &BATHROOMS)
        .as_deref()
        .and_then(normalize_amount)
    {
        fields.insert("bathrooms".to_string(), bathrooms);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_listing_fields() {
        let text = "Spacious apartment, 1200 sq ft, 2 bedrooms, 1 bathroom";
        let fields = extract(text);
        assert_eq!(
            fields.get("property_type").map(String::as_str),
            Some("apartment")
        );
        assert_eq!(fields.get("area").map(String::as_str), Some("1200"));
        assert_eq!(fields.get("bedrooms").map(String::as_str), Some("2"));
        assert_eq!(fields.get("bathrooms").map(String::as_str), Some("1"));
    }

    #[test]
    fn first_keyword_group_wins() {
        // Both "flat" and "house" appear; the apartment group is checked
        // first.
        let fields = extract("2 bhk flat near the club house");
        assert_eq!(
            fields.get("property_type").map(String::as_str),
            Some("apartment")
        );
        assert_eq!(fields.get("bedrooms").map(String::as_str), Some("2"));
    }

    #[test]
    fn recognizes_commercial_space() {
        let fields = extract("Commercial office space, area: 3,400 sqft");
        assert_eq!(
            fields.get("property_type").map(String::as_str),
            Some("commercial")
        );
        assert_eq!(fields.get("area").map(String::as_str), Some("3400"));
    }

    #[test]
    fn fractional_bathrooms_are_kept() {
        let fields = extract("house with 2.5 bathrooms");
        assert_eq!(fields.get("bathrooms").map(String::as_str), Some("2.5"));
    }

    #[test]
    fn no_keywords_no_fields() {
        assert!(extract("totally unrelated text").is_empty());
    }
}
