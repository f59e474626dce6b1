//! Value normalization for extracted fields.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Honorifics stripped from person-name matches.
const HONORIFICS: &[&str] = &["mr", "ms", "mrs", "dr", "prof", "sir", "madam"];

/// Title-case a name: first letter of each token upper, rest lower.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean a raw person-name match: drop honorifics and non-alphabetic
/// tokens, title-case the rest. Returns `None` when fewer than two
/// characters survive, so a bare "Mr" never becomes a stored name.
pub(crate) fn clean_person_name(raw: &str) -> Option<String> {
    let tokens: Vec<&str> = raw
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphabetic()))
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_alphabetic()))
        .filter(|t| !HONORIFICS.contains(&t.to_lowercase().as_str()))
        .collect();

    let joined = tokens.join(" ");
    if joined.chars().count() < 2 {
        None
    } else {
        Some(title_case(&joined))
    }
}

/// Normalize a monetary/decimal match: strip thousands separators and
/// keep the value only if the residue parses as a decimal.
pub(crate) fn normalize_amount(raw: &str) -> Option<String> {
    let cleaned = raw.replace(',', "").trim().to_string();
    Decimal::from_str(&cleaned).ok().map(|_| cleaned)
}

/// Normalize an integer match (bedroom counts and the like).
pub(crate) fn normalize_integer(raw: &str) -> Option<String> {
    let cleaned = raw.replace(',', "").trim().to_string();
    cleaned.parse::<i64>().ok().map(|_| cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_cases_lowered_names() {
        assert_eq!(title_case("john doe"), "John Doe");
        assert_eq!(title_case("JANE  SMITH"), "Jane Smith");
    }

    #[test]
    fn strips_honorifics() {
        assert_eq!(clean_person_name("mr. john doe"), Some("John Doe".into()));
        assert_eq!(clean_person_name("dr jane smith"), Some("Jane Smith".into()));
    }

    #[test]
    fn discards_honorific_only_matches() {
        assert_eq!(clean_person_name("mr"), None);
        assert_eq!(clean_person_name("mr."), None);
        assert_eq!(clean_person_name("   "), None);
        assert_eq!(clean_person_name("a"), None);
    }

    #[test]
    fn amounts_lose_thousands_separators() {
        assert_eq!(normalize_amount("1,500"), Some("1500".into()));
        assert_eq!(normalize_amount("2400.50"), Some("2400.50".into()));
        assert_eq!(normalize_amount("12,345,678.90"), Some("12345678.90".into()));
    }

    #[test]
    fn non_numeric_residue_is_discarded() {
        assert_eq!(normalize_amount("12x4"), None);
        assert_eq!(normalize_integer("2.5"), None);
        assert_eq!(normalize_integer("3"), Some("3".into()));
    }
}
