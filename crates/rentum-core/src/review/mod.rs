//! Review analysis: single-submission scoring and profile aggregation.

mod analyzer;
mod flags;
mod profile;

pub use analyzer::ReviewAnalyzer;
pub use profile::aggregate_profile;

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
