use super::{coefficient_points, format_acres, BASE_POINTS};
use crate::types::candidate::Candidate;
use crate::types::config::StewardshipWeights;
use crate::types::scoring::DimensionOutcome;

pub fn stewardship_points(candidate: &Candidate, weights: &StewardshipWeights) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::default();
    let acres = format_acres(candidate.lot_size_acres);

    let meets_minimum = candidate
        .lot_size_acres
        .is_some_and(|lot| lot >= weights.min_acreage);
    if meets_minimum {
        outcome.credit(
            BASE_POINTS,
            format!("Lot size {acres} acres meets stewardship minimum."),
        );
    } else {
        outcome.note(format!("Lot size {acres} acres below stewardship minimum."));
    }

    if candidate.flood_risk.is_some_and(|risk| risk.is_severe()) {
        outcome.debit(
            coefficient_points(weights.flood_risk_penalty),
            "Flood risk present; stewardship score reduced.",
        );
    }

    outcome
}
