//! Profile aggregation over a user's review history.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::review::{RatingCategory, ReviewRecord, Trend, UserProfile};

use super::{round1, round2};

/// Number of trailing scores the trend looks at.
const TREND_WINDOW: usize = 3;

/// Fold a user's review history into an aggregate profile.
///
/// The profile is recomputed in full from the input sequence on every
/// call; there is no incremental update.
pub fn aggregate_profile(reviews: &[ReviewRecord]) -> UserProfile {
    if reviews.is_empty() {
        return UserProfile::default();
    }

    let scores: Vec<f64> = reviews.iter().filter_map(|r| r.overall_score).collect();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        round1(scores.iter().sum::<f64>() / scores.len() as f64)
    };

    let mut category_averages = BTreeMap::new();
    for category in RatingCategory::ALL {
        let ratings: Vec<f64> = reviews
            .iter()
            .filter_map(|r| r.ratings.raw(category))
            .map(f64::from)
            .collect();
        if !ratings.is_empty() {
            let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
            category_averages.insert(category, round2(average));
        }
    }

    let mut green_flag_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut red_flag_counts: BTreeMap<String, u32> = BTreeMap::new();
    for review in reviews {
        for flag in &review.green_flags {
            *green_flag_counts.entry(flag.clone()).or_insert(0) += 1;
        }
        for flag in &review.red_flags {
            *red_flag_counts.entry(flag.clone()).or_insert(0) += 1;
        }
    }

    let trend = trend(&scores);

    debug!(
        reviews = reviews.len(),
        scored = scores.len(),
        average = average_score,
        trend = ?trend,
        "aggregated user profile"
    );

    UserProfile {
        average_score,
        review_count: reviews.len(),
        category_averages,
        green_flag_counts,
        red_flag_counts,
        trend,
    }
}

/// Trend over the last three scores in sequence order.
fn trend(scores: &[f64]) -> Trend {
    if scores.len() < TREND_WINDOW {
        return Trend::InsufficientData;
    }
    let recent = &scores[scores.len() - TREND_WINDOW..];
    if recent.iter().all(|s| *s >= 7.0) {
        Trend::Improving
    } else if recent.iter().all(|s| *s <= 5.0) {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
