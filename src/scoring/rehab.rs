use super::coefficient_points;
use crate::types::candidate::{Candidate, PermitComplexity, RehabTier};
use crate::types::config::RehabWeights;
use crate::types::scoring::DimensionOutcome;

pub fn rehab_points(candidate: &Candidate, weights: &RehabWeights) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::default();

    match candidate.rehab_tier {
        Some(RehabTier::Cosmetic) => outcome.credit(
            coefficient_points(weights.cosmetic_tier_weight),
            "Cosmetic rehab only; easier project.",
        ),
        Some(RehabTier::Systems) => outcome.credit(
            coefficient_points(weights.systems_tier_weight),
            "Systems rehab needed; moderate complexity.",
        ),
        Some(RehabTier::Structural) => outcome.credit(
            coefficient_points(weights.structural_tier_weight),
            "Structural rehab needed; high complexity.",
        ),
        Some(RehabTier::Unknown) | None => {}
    }

    if candidate.permit_complexity == Some(PermitComplexity::High) {
        outcome.debit(
            coefficient_points(weights.permit_complexity_penalty),
            "Permit complexity is high; rehab score reduced.",
        );
    }

    outcome
}
