pub mod housing;
pub mod red_flags;
pub mod rehab;
pub mod risk;
pub mod stewardship;

use crate::types::candidate::Candidate;
use crate::types::config::ScoringConfig;
use crate::types::scoring::{Dimension, DimensionOutcome, DimensionScore, ScoreResult};

/// Points awarded when a positive check passes, out of 100 per dimension.
pub const BASE_POINTS: f64 = 50.0;

/// Whole points for a coefficient-scaled rule, truncated toward zero.
pub fn coefficient_points(coefficient: f64) -> f64 {
    (BASE_POINTS * coefficient).trunc()
}

pub fn format_acres(acres: Option<f64>) -> String {
    match acres {
        Some(value) if value.is_finite() && value.fract() == 0.0 => format!("{value:.1}"),
        Some(value) => format!("{value}"),
        None => "unknown".to_string(),
    }
}

/// Scores one candidate against a validated weight table.
///
/// Pure: no I/O, no clock, no randomness. Explanations are ordered
/// stewardship, housing, rehab, risk, then one line per disqualifying tag.
/// A disqualifying tag discards the weighted total and yields 0.
pub fn score(candidate: &Candidate, config: &ScoringConfig) -> ScoreResult {
    let outcomes = [
        (
            Dimension::Stewardship,
            config.stewardship.weight,
            stewardship::stewardship_points(candidate, &config.stewardship),
        ),
        (
            Dimension::Housing,
            config.housing.weight,
            housing::housing_points(candidate, &config.housing),
        ),
        (
            Dimension::Rehab,
            config.rehab.weight,
            rehab::rehab_points(candidate, &config.rehab),
        ),
        (
            Dimension::Risk,
            config.risk.weight,
            risk::risk_points(candidate, &config.risk),
        ),
    ];

    let mut explanations = Vec::new();
    let mut dimensions = Vec::with_capacity(outcomes.len());
    for (dimension, weight, DimensionOutcome { points, explanations: lines }) in outcomes {
        explanations.extend(lines);
        dimensions.push(DimensionScore {
            dimension,
            points,
            weight,
            weighted: points * weight,
        });
    }
    let total: f64 = dimensions.iter().map(|dimension| dimension.weighted).sum();

    let matched_red_flags = red_flags::matching_red_flags(candidate, &config.red_flags);
    if !matched_red_flags.is_empty() {
        explanations.extend(
            matched_red_flags
                .iter()
                .map(|flag| red_flags::exclusion_explanation(flag)),
        );
        return ScoreResult {
            score: 0,
            explanations,
            dimensions,
            excluded: true,
            matched_red_flags,
        };
    }

    ScoreResult {
        score: clamp_score(total),
        explanations,
        dimensions,
        excluded: false,
        matched_red_flags,
    }
}

fn clamp_score(total: f64) -> u8 {
    total.trunc().clamp(0.0, 100.0) as u8
}
