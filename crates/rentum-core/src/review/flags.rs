//! Keyword-based flag detection in review comments.

use lazy_static::lazy_static;
use regex::Regex;

/// Positive signal keywords by theme, in scan order.
const GREEN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Payment",
        &["timely", "prompt", "regular", "consistent", "reliable", "punctual"],
    ),
    (
        "Maintenance",
        &["clean", "well-maintained", "careful", "responsible", "tidy"],
    ),
    (
        "Communication",
        &["responsive", "clear", "polite", "professional", "cooperative"],
    ),
    (
        "Behavior",
        &["respectful", "quiet", "friendly", "trustworthy", "honest"],
    ),
];

/// Negative signal keywords by theme, in scan order.
const RED_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Payment",
        &["late", "delayed", "missed", "defaulted", "irregular", "bounced"],
    ),
    (
        "Maintenance",
        &["damaged", "dirty", "neglected", "careless", "messy"],
    ),
    (
        "Communication",
        &["unresponsive", "rude", "aggressive", "difficult", "argumentative"],
    ),
    (
        "Behavior",
        &["noisy", "disruptive", "problematic", "unreliable", "dishonest"],
    ),
];

const PAYMENT_TERMS: &[&str] = &["pay", "payment", "rent"];
const PAYMENT_TIME_TERMS: &[&str] = &["pay", "payment", "rent", "time"];

lazy_static! {
    static ref NEGATION: Regex = Regex::new(r"never|not|didn't|wouldn't|couldn't").unwrap();
    static ref CONSISTENCY: Regex = Regex::new(r"always|every time|consistently").unwrap();
}

/// Scan comments for green and red flags.
///
/// Keyword hits become `"<Theme>: <keyword>"` flags in theme-then-keyword
/// order; the two fixed pattern flags are appended afterwards. Both lists
/// are deduplicated by exact string and capped at `limit`.
pub(crate) fn scan_comments(comments: &str, limit: usize) -> (Vec<String>, Vec<String>) {
    let comments = comments.to_lowercase();
    let mut green_flags = Vec::new();
    let mut red_flags = Vec::new();

    for (theme, keywords) in GREEN_KEYWORDS {
        for keyword in *keywords {
            if comments.contains(keyword) {
                push_unique(&mut green_flags, format!("{theme}: {keyword}"));
            }
        }
    }

    for (theme, keywords) in RED_KEYWORDS {
        for keyword in *keywords {
            if comments.contains(keyword) {
                push_unique(&mut red_flags, format!("{theme}: {keyword}"));
            }
        }
    }

    if NEGATION.is_match(&comments) && PAYMENT_TERMS.iter().any(|t| comments.contains(t)) {
        push_unique(
            &mut red_flags,
            "Payment: Negative payment history mentioned".to_string(),
        );
    }

    if CONSISTENCY.is_match(&comments) && PAYMENT_TIME_TERMS.iter().any(|t| comments.contains(t)) {
        push_unique(
            &mut green_flags,
            "Payment: Consistent positive behavior".to_string(),
        );
    }

    green_flags.truncate(limit);
    red_flags.truncate(limit);
    (green_flags, red_flags)
}

fn push_unique(flags: &mut Vec<String>, flag: String) {
    if !flags.contains(&flag) {
        flags.push(flag);
    }
}

/// The keyword term of a flag string, for summary rendering.
pub(crate) fn flag_term(flag: &str) -> &str {
    flag.splitn(2, ": ").nth(1).unwrap_or(flag)
}
