//! Single-review analysis: weighted scoring, risk tiers and summaries.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error};

use crate::models::review::{
    CategoryRatings, RatingCategory, ReviewAnalysis, ReviewSubmission, RiskTier,
};

use super::flags::{flag_term, scan_comments};
use super::round1;

/// Categories whose low ratings escalate risk on their own.
const CRITICAL_CATEGORIES: [RatingCategory; 2] = [
    RatingCategory::PaymentReliability,
    RatingCategory::LeaseCompliance,
];

/// Weighted review analyzer.
///
/// A pure function of the submission: analyzing the same input twice
/// produces identical output.
pub struct ReviewAnalyzer {
    flag_limit: usize,
}

impl ReviewAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self { flag_limit: 5 }
    }

    /// Set the per-list flag cap.
    pub fn with_flag_limit(mut self, limit: usize) -> Self {
        self.flag_limit = limit;
        self
    }

    /// Analyze a review submission.
    ///
    /// Never fails: an internal panic is caught at this boundary and
    /// converted into the fixed degraded analysis.
    pub fn analyze(&self, submission: &ReviewSubmission) -> ReviewAnalysis {
        match catch_unwind(AssertUnwindSafe(|| self.analyze_inner(submission))) {
            Ok(analysis) => analysis,
            Err(panic) => {
                let detail = panic_detail(panic.as_ref());
                error!("review analysis failed: {detail}");
                ReviewAnalysis::degraded(&detail)
            }
        }
    }

    fn analyze_inner(&self, submission: &ReviewSubmission) -> ReviewAnalysis {
        let ratings = &submission.ratings;
        let overall_score = weighted_score(ratings);
        let (green_flags, red_flags) = scan_comments(&submission.comments, self.flag_limit);
        let risk_tier = risk_tier(overall_score, &red_flags, ratings);
        let summary = summary(overall_score, risk_tier, &green_flags, &red_flags, ratings);

        debug!(
            score = overall_score,
            risk = ?risk_tier,
            green = green_flags.len(),
            red = red_flags.len(),
            "analyzed review submission"
        );

        ReviewAnalysis {
            overall_score,
            risk_tier,
            green_flags,
            red_flags,
            summary,
            category_breakdown: ratings.clone(),
        }
    }
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Weighted composite score on a 0-10 scale.
///
/// Unrated categories drop out of both the sum and the normalization
/// denominator, so partially-rated submissions still score on the full
/// scale.
fn weighted_score(ratings: &CategoryRatings) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for category in RatingCategory::ALL {
        if let Some(rating) = ratings.rated(category) {
            let rating = rating.min(5) as f64;
            let weight = category.weight();
            weighted_sum += rating / 5.0 * 10.0 * weight;
            total_weight += weight;
        }
    }

    if total_weight > 0.0 {
        round1(weighted_sum / total_weight)
    } else {
        0.0
    }
}

fn base_tier(score: f64) -> RiskTier {
    if score >= 8.0 {
        RiskTier::Low
    } else if score >= 6.0 {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Risk tier with escalation rules applied on top of the score bracket.
fn risk_tier(score: f64, red_flags: &[String], ratings: &CategoryRatings) -> RiskTier {
    let base = base_tier(score);

    let payment_reds = red_flags
        .iter()
        .filter(|flag| flag.to_lowercase().contains("payment"))
        .count();
    if payment_reds >= 2 {
        return RiskTier::High;
    }
    if payment_reds >= 1 && base != RiskTier::Low {
        return RiskTier::High;
    }

    // Unrated criticals count as low here, matching the established
    // scoring behavior callers depend on.
    let low_criticals = CRITICAL_CATEGORIES
        .iter()
        .filter(|category| ratings.raw(**category).unwrap_or(0) <= 2)
        .count();
    if low_criticals >= 2 {
        return RiskTier::High;
    }
    if low_criticals >= 1 && base == RiskTier::High {
        return RiskTier::High;
    }

    base
}

/// Narrative summary assembled from fixed sentence parts.
fn summary(
    score: f64,
    risk: RiskTier,
    green_flags: &[String],
    red_flags: &[String],
    ratings: &CategoryRatings,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        if score >= 8.0 {
            "Excellent tenant/landlord with strong overall performance."
        } else if score >= 6.0 {
            "Good tenant/landlord with satisfactory performance."
        } else if score >= 4.0 {
            "Average tenant/landlord with some areas for improvement."
        } else {
            "Below-average tenant/landlord with significant concerns."
        }
        .to_string(),
    );

    parts.push(
        match risk {
            RiskTier::Low => "Low risk - highly recommended.",
            RiskTier::Medium => "Medium risk - proceed with standard precautions.",
            RiskTier::High => {
                "High risk - requires careful consideration and additional safeguards."
            }
        }
        .to_string(),
    );

    if !green_flags.is_empty() {
        let strengths: Vec<&str> = green_flags.iter().take(3).map(|f| flag_term(f)).collect();
        parts.push(format!("Key strengths: {}.", strengths.join(", ")));
    }

    if !red_flags.is_empty() {
        let concerns: Vec<&str> = red_flags.iter().take(3).map(|f| flag_term(f)).collect();
        parts.push(format!("Areas of concern: {}.", concerns.join(", ")));
    }

    match ratings.rated(RatingCategory::PaymentReliability) {
        Some(rating) if rating >= 4 => parts.push("Strong payment history.".to_string()),
        Some(rating) if rating <= 2 => {
            parts.push("Payment reliability concerns noted.".to_string())
        }
        _ => {}
    }

    parts.join(" ")
}

fn panic_detail(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
