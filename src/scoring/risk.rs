use super::{coefficient_points, BASE_POINTS};
use crate::types::candidate::{Candidate, TitleRisk, ZoningAmbiguity};
use crate::types::config::RiskWeights;
use crate::types::scoring::DimensionOutcome;

pub const ENVIRONMENTAL_RED_FLAG: &str = "environmental_red_flag";

/// Title is the only rule with two exclusive branches: anything other than a
/// confirmed clear title, including an unassessed one, takes the penalty.
pub fn risk_points(candidate: &Candidate, weights: &RiskWeights) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::default();

    if candidate.title_risk == Some(TitleRisk::Clear) {
        outcome.credit(BASE_POINTS, "Title appears clear.");
    } else {
        outcome.debit(
            coefficient_points(weights.title_risk_penalty),
            "Title or tax risk present.",
        );
    }

    if candidate.zoning_ambiguity == Some(ZoningAmbiguity::High) {
        outcome.debit(
            coefficient_points(weights.zoning_ambiguity_penalty),
            "Zoning ambiguity detected.",
        );
    }

    if candidate.has_environmental_flag(ENVIRONMENTAL_RED_FLAG) {
        outcome.debit(
            coefficient_points(weights.environmental_red_flag_penalty),
            "Environmental red flag present.",
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> RiskWeights {
        RiskWeights {
            weight: 0.25,
            title_risk_penalty: 1.0,
            zoning_ambiguity_penalty: 0.5,
            environmental_red_flag_penalty: 0.8,
        }
    }

    #[test]
    fn clear_title_earns_base_points() {
        let mut candidate = Candidate::bare("a", "addr");
        candidate.title_risk = Some(TitleRisk::Clear);
        let outcome = risk_points(&candidate, &weights());
        assert_eq!(outcome.points, 50.0);
        assert_eq!(outcome.explanations, vec!["Title appears clear.".to_string()]);
    }

    #[test]
    fn unassessed_title_takes_penalty() {
        let candidate = Candidate::bare("a", "addr");
        let outcome = risk_points(&candidate, &weights());
        assert_eq!(outcome.points, -50.0);
        assert_eq!(
            outcome.explanations,
            vec!["Title or tax risk present.".to_string()]
        );
    }

    #[test]
    fn penalties_stack_in_rule_order() {
        let mut candidate = Candidate::bare("a", "addr");
        candidate.title_risk = Some(TitleRisk::Clouded);
        candidate.zoning_ambiguity = Some(ZoningAmbiguity::High);
        candidate.environmental_flags = vec![ENVIRONMENTAL_RED_FLAG.to_string()];
        let outcome = risk_points(&candidate, &weights());
        assert_eq!(outcome.points, -50.0 - 25.0 - 40.0);
        assert_eq!(
            outcome.explanations,
            vec![
                "Title or tax risk present.".to_string(),
                "Zoning ambiguity detected.".to_string(),
                "Environmental red flag present.".to_string(),
            ]
        );
    }

    #[test]
    fn other_environmental_tags_are_ignored() {
        let mut candidate = Candidate::bare("a", "addr");
        candidate.title_risk = Some(TitleRisk::Clear);
        candidate.environmental_flags = vec!["wetland_buffer".to_string()];
        assert_eq!(risk_points(&candidate, &weights()).points, 50.0);
    }
}
