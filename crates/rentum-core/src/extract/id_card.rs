//! Field extraction for identity documents.

use regex::Regex;

use crate::models::document::ExtractedFields;

use super::normalize::clean_person_name;
use super::patterns::{
    first_capture, DATE_OF_BIRTH, ID_AADHAAR, ID_ADDRESS, ID_DRIVING_LICENSE, ID_NAME,
    ID_NUMBER_GENERIC, ID_PAN, ID_PASSPORT,
};

/// Fields an ID card is expected to carry (id_type included).
pub(crate) const EXPECTED_FIELDS: usize = 5;

/// Identifier formats in trial order; the first match tags id_type.
fn id_formats() -> [(&'static Regex, &'static str); 4] {
    [
        (&ID_AADHAAR, "aadhaar"),
        (&ID_PAN, "pan"),
        (&ID_DRIVING_LICENSE, "driving_license"),
        (&ID_PASSPORT, "passport"),
    ]
}

/// Extract ID card fields from recognized text.
pub(crate) fn extract(text: &str) -> ExtractedFields {
    let text = text.to_lowercase();
    let mut fields = ExtractedFields::new();

    if let Some(name) = first_capture(&text, &ID_NAME).as_deref().and_then(clean_person_name) {
        fields.insert("name".to_string(), name);
    }

    let mut id_found = false;
    for (pattern, id_type) in id_formats() {
        if let Some(caps) = pattern.captures(&text) {
            if let Some(value) = caps.name("value") {
                let number: String = value.as_str().chars().filter(|c| !c.is_whitespace()).collect();
                fields.insert("id_number".to_string(), number.to_uppercase());
                fields.insert("id_type".to_string(), id_type.to_string());
                id_found = true;
                break;
            }
        }
    }
    // Labeled identifier of no recognized format: keep the number, skip
    // the type tag.
    if !id_found {
        if let Some(number) = first_capture(&text, &ID_NUMBER_GENERIC) {
            fields.insert("id_number".to_string(), number.to_uppercase());
        }
    }

    if let Some(dob) = first_capture(&text, &DATE_OF_BIRTH) {
        fields.insert("date_of_birth".to_string(), dob);
    }
    if let Some(address) = first_capture(&text, &ID_ADDRESS) {
        fields.insert("address".to_string(), address);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_aadhaar_numbers() {
        let fields = extract("Name: Ravi Kumar\n1234 5678 9012\nDOB: 01/01/1990");
        assert_eq!(fields.get("name").map(String::as_str), Some("Ravi Kumar"));
        assert_eq!(
            fields.get("id_number").map(String::as_str),
            Some("123456789012")
        );
        assert_eq!(fields.get("id_type").map(String::as_str), Some("aadhaar"));
        assert_eq!(
            fields.get("date_of_birth").map(String::as_str),
            Some("01/01/1990")
        );
    }

    #[test]
    fn tags_pan_numbers() {
        let fields = extract("Name: Demo User\nABCDE1234F");
        assert_eq!(fields.get("id_number").map(String::as_str), Some("ABCDE1234F"));
        assert_eq!(fields.get("id_type").map(String::as_str), Some("pan"));
    }

    #[test]
    fn tags_driving_license_numbers() {
        let fields = extract("DL9876543210123 issued by RTO");
        assert_eq!(
            fields.get("id_number").map(String::as_str),
            Some("DL9876543210123")
        );
        assert_eq!(
            fields.get("id_type").map(String::as_str),
            Some("driving_license")
        );
    }

    #[test]
    fn generic_labeled_id_has_no_type_tag() {
        let fields = extract("ID: X9-4417A\nName: Demo User");
        assert_eq!(fields.get("id_number").map(String::as_str), Some("X9-4417A"));
        assert_eq!(fields.get("id_type"), None);
    }

    #[test]
    fn extracts_address() {
        let fields = extract("Address: 456 Demo Avenue, Demo City\n");
        assert_eq!(
            fields.get("address").map(String::as_str),
            Some("456 demo avenue, demo city")
        );
    }
}
