use super::{coefficient_points, BASE_POINTS};
use crate::types::candidate::Candidate;
use crate::types::config::HousingWeights;
use crate::types::scoring::DimensionOutcome;

/// An unscored habitability value never meets the minimum, even a minimum of 0.
pub fn housing_points(candidate: &Candidate, weights: &HousingWeights) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::default();

    let habitable = candidate
        .habitability_score
        .is_some_and(|score| score >= weights.habitability_min_score);
    if habitable {
        outcome.credit(BASE_POINTS, "Habitability potential is strong.");
    } else {
        outcome.note("Habitability potential is weak or unknown.");
    }

    if candidate.adu_viability == Some(true) {
        outcome.credit(
            coefficient_points(weights.adu_viability_weight),
            "ADU/expansion potential present.",
        );
    }

    outcome
}
