//! Review submission, analysis and profile models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The eight review categories, each carrying a fixed scoring weight.
///
/// Weights sum to 1.00; unrated categories are excluded from both the
/// weighted sum and the normalization denominator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RatingCategory {
    PaymentReliability,
    PropertyMaintenance,
    Communication,
    LeaseCompliance,
    Responsiveness,
    PropertyCondition,
    Fairness,
    PrivacyRespect,
}

impl RatingCategory {
    /// All categories in weight-table order.
    pub const ALL: [RatingCategory; 8] = [
        Self::PaymentReliability,
        Self::PropertyMaintenance,
        Self::Communication,
        Self::LeaseCompliance,
        Self::Responsiveness,
        Self::PropertyCondition,
        Self::Fairness,
        Self::PrivacyRespect,
    ];

    /// Scoring weight for this category.
    pub fn weight(self) -> f64 {
        match self {
            Self::PaymentReliability => 0.25,
            Self::PropertyMaintenance => 0.15,
            Self::Communication => 0.15,
            Self::LeaseCompliance => 0.20,
            Self::Responsiveness => 0.10,
            Self::PropertyCondition => 0.10,
            Self::Fairness => 0.03,
            Self::PrivacyRespect => 0.02,
        }
    }

    /// Snake-case key for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PaymentReliability => "payment_reliability",
            Self::PropertyMaintenance => "property_maintenance",
            Self::Communication => "communication",
            Self::LeaseCompliance => "lease_compliance",
            Self::Responsiveness => "responsiveness",
            Self::PropertyCondition => "property_condition",
            Self::Fairness => "fairness",
            Self::PrivacyRespect => "privacy_respect",
        }
    }
}

/// Per-category ratings on a 1-5 scale.
///
/// `None` and `Some(0)` both mean "not rated". The zero-or-absent mapping
/// is load-bearing: unrated categories must drop out of the weighted score
/// entirely rather than contribute a literal zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRatings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_reliability: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_maintenance: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_compliance: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsiveness: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_condition: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fairness: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_respect: Option<u8>,
}

impl CategoryRatings {
    /// The stored value for a category, zero included.
    pub fn raw(&self, category: RatingCategory) -> Option<u8> {
        match category {
            RatingCategory::PaymentReliability => self.payment_reliability,
            RatingCategory::PropertyMaintenance => self.property_maintenance,
            RatingCategory::Communication => self.communication,
            RatingCategory::LeaseCompliance => self.lease_compliance,
            RatingCategory::Responsiveness => self.responsiveness,
            RatingCategory::PropertyCondition => self.property_condition,
            RatingCategory::Fairness => self.fairness,
            RatingCategory::PrivacyRespect => self.privacy_respect,
        }
    }

    /// The effective rating: `None` when absent or zero.
    pub fn rated(&self, category: RatingCategory) -> Option<u8> {
        self.raw(category).filter(|r| *r > 0)
    }

    /// True when no category carries an effective rating.
    pub fn is_unrated(&self) -> bool {
        RatingCategory::ALL.iter().all(|c| self.rated(*c).is_none())
    }
}

/// A single review as submitted: up to eight optional ratings plus
/// free-text comments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSubmission {
    #[serde(flatten)]
    pub ratings: CategoryRatings,

    #[serde(default)]
    pub comments: String,
}

impl ReviewSubmission {
    /// Check ratings are within the 1-5 scale. Returns a list of issues,
    /// empty when the submission is well-formed.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for category in RatingCategory::ALL {
            if let Some(rating) = self.ratings.raw(category) {
                if rating > 5 {
                    issues.push(format!(
                        "{}: rating {} exceeds the 1-5 scale",
                        category.as_str(),
                        rating
                    ));
                }
            }
        }
        issues
    }
}

/// Three-level risk classification derived from a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Result of analyzing a single review submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    /// Weighted composite score on a 0-10 scale, one decimal.
    pub overall_score: f64,

    /// Derived risk tier.
    pub risk_tier: RiskTier,

    /// Positive signals found in the comments (at most 5, no duplicates).
    pub green_flags: Vec<String>,

    /// Negative signals found in the comments (at most 5, no duplicates).
    pub red_flags: Vec<String>,

    /// Human-readable narrative summary.
    pub summary: String,

    /// The input ratings echoed back.
    pub category_breakdown: CategoryRatings,
}

impl ReviewAnalysis {
    /// The fixed worst-case analysis returned when analysis itself fails.
    pub fn degraded(detail: &str) -> Self {
        Self {
            overall_score: 0.0,
            risk_tier: RiskTier::High,
            green_flags: Vec::new(),
            red_flags: vec!["Analysis failed".to_string()],
            summary: format!("Error in analysis: {detail}"),
            category_breakdown: CategoryRatings::default(),
        }
    }
}

/// Score trend over a user's most recent reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    /// Fewer than three scored reviews.
    InsufficientData,
    /// No reviews at all.
    #[default]
    Unknown,
}

/// Aggregated profile derived from a user's review history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Mean of all present overall scores, one decimal.
    pub average_score: f64,

    /// Number of reviews folded into the profile.
    pub review_count: usize,

    /// Per-category rating averages, two decimals.
    pub category_averages: BTreeMap<RatingCategory, f64>,

    /// Occurrence counts of each distinct green flag.
    pub green_flag_counts: BTreeMap<String, u32>,

    /// Occurrence counts of each distinct red flag.
    pub red_flag_counts: BTreeMap<String, u32>,

    /// Score trend over the last three scored reviews.
    pub trend: Trend,
}

/// One entry of a user's review history, as fed to profile aggregation.
///
/// Carries whichever of the analysis score, raw ratings and flag lists
/// are available for that review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,

    #[serde(flatten)]
    pub ratings: CategoryRatings,

    #[serde(default)]
    pub green_flags: Vec<String>,

    #[serde(default)]
    pub red_flags: Vec<String>,
}

impl From<&ReviewAnalysis> for ReviewRecord {
    fn from(analysis: &ReviewAnalysis) -> Self {
        Self {
            overall_score: Some(analysis.overall_score),
            ratings: analysis.category_breakdown.clone(),
            green_flags: analysis.green_flags.clone(),
            red_flags: analysis.red_flags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = RatingCategory::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_rating_counts_as_unrated() {
        let ratings = CategoryRatings {
            payment_reliability: Some(0),
            communication: Some(4),
            ..Default::default()
        };
        assert_eq!(ratings.rated(RatingCategory::PaymentReliability), None);
        assert_eq!(ratings.rated(RatingCategory::Communication), Some(4));
        assert_eq!(ratings.raw(RatingCategory::PaymentReliability), Some(0));
    }

    #[test]
    fn submission_deserializes_from_flat_record() {
        let submission: ReviewSubmission = serde_json::from_str(
            r#"{"payment_reliability": 5, "communication": 3, "comments": "always on time"}"#,
        )
        .unwrap();
        assert_eq!(
            submission.ratings.rated(RatingCategory::PaymentReliability),
            Some(5)
        );
        assert_eq!(submission.ratings.rated(RatingCategory::Fairness), None);
        assert_eq!(submission.comments, "always on time");
    }

    #[test]
    fn validate_rejects_out_of_scale_ratings() {
        let submission = ReviewSubmission {
            ratings: CategoryRatings {
                fairness: Some(9),
                ..Default::default()
            },
            comments: String::new(),
        };
        let issues = submission.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("fairness"));
    }

    #[test]
    fn degraded_analysis_has_fixed_shape() {
        let analysis = ReviewAnalysis::degraded("boom");
        assert_eq!(analysis.overall_score, 0.0);
        assert_eq!(analysis.risk_tier, RiskTier::High);
        assert!(analysis.green_flags.is_empty());
        assert_eq!(analysis.red_flags, vec!["Analysis failed".to_string()]);
        assert!(analysis.summary.contains("boom"));
    }
}
