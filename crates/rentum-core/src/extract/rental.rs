//! Field extraction for rental agreements.

use crate::models::document::ExtractedFields;

use super::normalize::{clean_person_name, normalize_amount};
use super::patterns::{
    find_dates, first_capture, LANDLORD_NAME, MONTHLY_RENT, PROPERTY_ADDRESS, SECURITY_DEPOSIT,
    TENANT_NAME,
};

/// Fields a rental agreement is expected to carry.
pub(crate) const EXPECTED_FIELDS: usize = 7;

/// Extract rental-agreement fields from recognized text.
pub(crate) fn extract(text: &str) -> ExtractedFields {
    let text = text.to_lowercase();
    let mut fields = ExtractedFields::new();

    if let Some(name) = first_capture(&text, &TENANT_NAME).as_deref().and_then(clean_person_name) {
        fields.insert("tenant_name".to_string(), name);
    }
    if let Some(name) = first_capture(&text, &LANDLORD_NAME).as_deref().and_then(clean_person_name) {
        fields.insert("landlord_name".to_string(), name);
    }
    if let Some(address) = first_capture(&text, &PROPERTY_ADDRESS) {
        fields.insert("property_address".to_string(), address);
    }
    if let Some(rent) = first_capture(&text, &MONTHLY_RENT).as_deref().and_then(normalize_amount) {
        fields.insert("monthly_rent".to_string(), rent);
    }
    if let Some(deposit) = first_capture(&text, &SECURITY_DEPOSIT)
        .as_deref()
        .and_then(normalize_amount)
    {
        fields.insert("security_deposit".to_string(), deposit);
    }

    // First two date-like substrings in document order are taken as the
    // lease term; a single date sets the start only.
    let mut dates = find_dates(&text).into_iter();
    if let Some(start) = dates.next() {
        fields.insert("lease_start_date".to_string(), start);
    }
    if let Some(end) = dates.next() {
        fields.insert("lease_end_date".to_string(), end);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_names_and_rent() {
        let text = "Tenant: John Doe\nLandlord: Jane Smith\nRent: $1500";
        let fields = extract(text);
        assert_eq!(fields.get("tenant_name").map(String::as_str), Some("John Doe"));
        assert_eq!(
            fields.get("landlord_name").map(String::as_str),
            Some("Jane Smith")
        );
        assert_eq!(fields.get("monthly_rent").map(String::as_str), Some("1500"));
    }

    #[test]
    fn strips_thousands_separators_from_amounts() {
        let fields = extract("Monthly rent: $1,500\nSecurity deposit: $3,000");
        assert_eq!(fields.get("monthly_rent").map(String::as_str), Some("1500"));
        assert_eq!(
            fields.get("security_deposit").map(String::as_str),
            Some("3000")
        );
    }

    #[test]
    fn honorific_only_name_is_absent() {
        let fields = extract("Tenant: Mr\nRent: $900");
        assert_eq!(fields.get("tenant_name"), None);
        assert_eq!(fields.get("monthly_rent").map(String::as_str), Some("900"));
    }

    #[test]
    fn first_two_dates_become_lease_term() {
        let text = "Lease start date: 01/01/2024, end date: 12/31/2024, signed 11/15/2023";
        let fields = extract(text);
        assert_eq!(
            fields.get("lease_start_date").map(String::as_str),
            Some("01/01/2024")
        );
        assert_eq!(
            fields.get("lease_end_date").map(String::as_str),
            Some("12/31/2024")
        );
    }

    #[test]
    fn single_date_sets_start_only() {
        let fields = extract("commencing 03/01/2024");
        assert_eq!(
            fields.get("lease_start_date").map(String::as_str),
            Some("03/01/2024")
        );
        assert_eq!(fields.get("lease_end_date"), None);
    }

    #[test]
    fn impossible_calendar_dates_are_kept_as_text() {
        let fields = extract("start date: 31/02/2024");
        assert_eq!(
            fields.get("lease_start_date").map(String::as_str),
            Some("31/02/2024")
        );
    }

    #[test]
    fn address_with_commas_is_kept_whole() {
        let fields = extract("Property address: 123 Demo Street, Demo City, DC 12345\n");
        assert_eq!(
            fields.get("property_address").map(String::as_str),
            Some("123 demo street, demo city, dc 12345")
        );
    }

    #[test]
    fn empty_text_yields_no_fields() {
        assert!(extract("").is_empty());
    }
}
