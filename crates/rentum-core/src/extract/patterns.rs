//! Regex pattern tables for document field extraction.
//!
//! Patterns are matched against lower-cased text, most specific first;
//! the first pattern that matches wins for its field. Every pattern
//! captures the field value in a `value` named group.

use lazy_static::lazy_static;
use regex::Regex;

fn patterns(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|s| Regex::new(s).expect("invalid extraction pattern"))
        .collect()
}

lazy_static! {
    // Rental agreement party names
    pub static ref TENANT_NAME: Vec<Regex> = patterns(&[
        r"tenant[:\s]+(?P<value>[a-z][a-z\s.]*?)(?:[\n,;]|$)",
        r"lessee[:\s]+(?P<value>[a-z][a-z\s.]*?)(?:[\n,;]|$)",
        r"renter[:\s]+(?P<value>[a-z][a-z\s.]*?)(?:[\n,;]|$)",
    ]);

    pub static ref LANDLORD_NAME: Vec<Regex> = patterns(&[
        r"landlord[:\s]+(?P<value>[a-z][a-z\s.]*?)(?:[\n,;]|$)",
        r"lessor[:\s]+(?P<value>[a-z][a-z\s.]*?)(?:[\n,;]|$)",
        r"owner[:\s]+(?P<value>[a-z][a-z\s.]*?)(?:[\n,;]|$)",
    ]);

    pub static ref PROPERTY_ADDRESS: Vec<Regex> = patterns(&[
        r"property\s+address[:\s]+(?P<value>[^\n;]+)",
        r"premises[:\s]+(?P<value>[^\n;]+)",
        r"(?:located\s+at|address)[:\s]+(?P<value>[^\n;]+)",
        r"property[:\s]+(?P<value>\d[^\n;]*)",
    ]);

    pub static ref MONTHLY_RENT: Vec<Regex> = patterns(&[
        r"monthly\s+rent[:\s]*\$?\s?(?P<value>\d+(?:,\d{3})*(?:\.\d{2})?)",
        r"rent[:\s]*\$?\s?(?P<value>\d+(?:,\d{3})*(?:\.\d{2})?)",
        r"\$(?P<value>\d+(?:,\d{3})*(?:\.\d{2})?)\s*per\s*month",
    ]);

    pub static ref SECURITY_DEPOSIT: Vec<Regex> = patterns(&[
        r"security\s+deposit[:\s]*\$?\s?(?P<value>\d+(?:,\d{3})*(?:\.\d{2})?)",
        r"deposit[:\s]*\$?\s?(?P<value>\d+(?:,\d{3})*(?:\.\d{2})?)",
        r"bond[:\s]*\$?\s?(?P<value>\d+(?:,\d{3})*(?:\.\d{2})?)",
    ]);

    // Date-like substrings; no calendar validation is attempted.
    pub static ref DATE_DMY: Regex =
        Regex::new(r"\b\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}\b").unwrap();

    pub static ref DATE_YMD: Regex =
        Regex::new(r"\b\d{4}[/\-]\d{1,2}[/\-]\d{1,2}\b").unwrap();

    // ID card fields
    pub static ref ID_NAME: Vec<Regex> = patterns(&[
        r"name[:\s]+(?P<value>[a-z][a-z\s.]*?)(?:[\n,]|$)",
        r"(?:cardholder|holder)[:\s]+(?P<value>[a-z][a-z\s.]*?)(?:[\n,]|$)",
    ]);

    // Identifier formats, tried in order; the matching pattern tags the
    // derived id_type field.
    pub static ref ID_AADHAAR: Regex =
        Regex::new(r"\b(?P<value>\d{4}\s?\d{4}\s?\d{4})\b").unwrap();

    pub static ref ID_PAN: Regex =
        Regex::new(r"\b(?P<value>[a-z]{5}\d{4}[a-z])\b").unwrap();

    pub static ref ID_DRIVING_LICENSE: Regex =
        Regex::new(r"\b(?P<value>[a-z]{2}\d{13})\b").unwrap();

    pub static ref ID_PASSPORT: Regex =
        Regex::new(r"\b(?P<value>[a-z]\d{7})\b").unwrap();

    pub static ref ID_NUMBER_GENERIC: Vec<Regex> = patterns(&[
        r"(?:id|identification)(?:\s*(?:no|number))?[.:\s#]+(?P<value>[a-z0-9][a-z0-9\-]{5,})",
        r"number[.:\s#]+(?P<value>[a-z0-9][a-z0-9\-]{5,})",
    ]);

    pub static ref DATE_OF_BIRTH: Vec<Regex> = patterns(&[
        r"dob[.:\s]*(?P<value>\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})",
        r"(?:date\s+of\s+birth|birth)[.:\s]*(?P<value>\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})",
        r"born[.:\s]*(?P<value>\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})",
    ]);

    pub static ref ID_ADDRESS: Vec<Regex> = patterns(&[
        r"address[:\s]+(?P<value>[^\n;]+)",
        r"residence[:\s]+(?P<value>[^\n;]+)",
    ]);

    // Property document fields
    pub static ref AREA: Vec<Regex> = patterns(&[
        r"(?:area|size)[:\s]*(?P<value>\d+(?:,\d{3})*(?:\.\d+)?)\s*(?:sq\.?\s*ft\.?|sqft|square\s*feet)",
        r"(?P<value>\d+(?:,\d{3})*(?:\.\d+)?)\s*(?:sq\.?\s*ft\.?|sqft|square\s*feet)",
    ]);

    pub static ref BEDROOMS: Vec<Regex> = patterns(&[
        r"bedrooms?[:\s]*(?P<value>\d+)",
        r"(?P<value>\d+)\s*(?:bedrooms?|bhk)",
        r"bed[:\s]+(?P<value>\d+)",
    ]);

    pub static ref BATHROOMS: Vec<Regex> = patterns(&[
        r"bathrooms?[:\s]*(?P<value>\d+(?:\.\d+)?)",
        r"(?P<value>\d+(?:\.\d+)?)\s*bathrooms?",
        r"bath[:\s]+(?P<value>\d+(?:\.\d+)?)",
    ]);
}

/// Try patterns in order; return the first `value` capture, trimmed.
pub(crate) fn first_capture(text: &str, candidates: &[Regex]) -> Option<String> {
    for pattern in candidates {
        if let Some(caps) = pattern.captures(text) {
            if let Some(value) = caps.name("value") {
                let value = value.as_str().trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// All date-like substrings in document order, across both supported
/// shapes (d/m/y and y/m/d), overlaps dropped.
pub(crate) fn find_dates(text: &str) -> Vec<String> {
    let mut matches: Vec<(usize, usize, String)> = DATE_DMY
        .find_iter(text)
        .chain(DATE_YMD.find_iter(text))
        .map(|m| (m.start(), m.end(), m.as_str().to_string()))
        .collect();
    matches.sort_by_key(|(start, _, _)| *start);

    let mut dates = Vec::new();
    let mut last_end = 0;
    for (start, end, value) in matches {
        if start >= last_end {
            dates.push(value);
            last_end = end;
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_capture_prefers_earlier_patterns() {
        let text = "monthly rent: $2,400\nrent: $100";
        assert_eq!(
            first_capture(text, &MONTHLY_RENT),
            Some("2,400".to_string())
        );
    }

    #[test]
    fn find_dates_preserves_document_order() {
        let text = "lease runs 01/02/2024 through 2025-01-31, signed 12/12/2023";
        assert_eq!(
            find_dates(text),
            vec!["01/02/2024", "2025-01-31", "12/12/2023"]
        );
    }

    #[test]
    fn find_dates_ignores_plain_numbers() {
        assert!(find_dates("rent is 1500 per month, unit 12b").is_empty());
    }

    #[test]
    fn dmy_does_not_split_ymd_matches() {
        assert_eq!(find_dates("2024-01-15"), vec!["2024-01-15"]);
    }
}
