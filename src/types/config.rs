use crate::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Candidates scoring at or above this value make the shortlist.
pub const INCLUSION_THRESHOLD: u8 = 60;

/// Weight table for the four scoring dimensions plus the disqualifying tags.
///
/// Every key is required: a table missing a coefficient is rejected at parse
/// time rather than scored with a silent default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    pub stewardship: StewardshipWeights,
    pub housing: HousingWeights,
    pub rehab: RehabWeights,
    pub risk: RiskWeights,
    pub red_flags: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StewardshipWeights {
    pub weight: f64,
    pub min_acreage: f64,
    pub flood_risk_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HousingWeights {
    pub weight: f64,
    pub habitability_min_score: f64,
    pub adu_viability_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RehabWeights {
    pub weight: f64,
    pub cosmetic_tier_weight: f64,
    pub systems_tier_weight: f64,
    pub structural_tier_weight: f64,
    pub permit_complexity_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskWeights {
    pub weight: f64,
    pub title_risk_penalty: f64,
    pub zoning_ambiguity_penalty: f64,
    pub environmental_red_flag_penalty: f64,
}

impl ScoringConfig {
    pub fn dimension_weights(&self) -> [f64; 4] {
        [
            self.stewardship.weight,
            self.housing.weight,
            self.rehab.weight,
            self.risk.weight,
        ]
    }

    fn coefficients(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("stewardship.weight", self.stewardship.weight),
            ("stewardship.min_acreage", self.stewardship.min_acreage),
            (
                "stewardship.flood_risk_penalty",
                self.stewardship.flood_risk_penalty,
            ),
            ("housing.weight", self.housing.weight),
            (
                "housing.habitability_min_score",
                self.housing.habitability_min_score,
            ),
            (
                "housing.adu_viability_weight",
                self.housing.adu_viability_weight,
            ),
            ("rehab.weight", self.rehab.weight),
            ("rehab.cosmetic_tier_weight", self.rehab.cosmetic_tier_weight),
            ("rehab.systems_tier_weight", self.rehab.systems_tier_weight),
            (
                "rehab.structural_tier_weight",
                self.rehab.structural_tier_weight,
            ),
            (
                "rehab.permit_complexity_penalty",
                self.rehab.permit_complexity_penalty,
            ),
            ("risk.weight", self.risk.weight),
            ("risk.title_risk_penalty", self.risk.title_risk_penalty),
            (
                "risk.zoning_ambiguity_penalty",
                self.risk.zoning_ambiguity_penalty,
            ),
            (
                "risk.environmental_red_flag_penalty",
                self.risk.environmental_red_flag_penalty,
            ),
        ]
    }

    pub fn validate(&self) -> Result<(), ScoutError> {
        for (key, value) in self.coefficients() {
            if !value.is_finite() {
                return Err(ScoutError::ConfigParse(format!(
                    "{key} must be a finite number"
                )));
            }
            if value < 0.0 {
                return Err(ScoutError::ConfigParse(format!(
                    "{key} must be non-negative (found {value})"
                )));
            }
        }

        for (dimension, weight) in ["stewardship", "housing", "rehab", "risk"]
            .iter()
            .zip(self.dimension_weights())
        {
            if weight > 1.0 {
                return Err(ScoutError::ConfigParse(format!(
                    "{dimension}.weight must be between 0.0 and 1.0 (found {weight})"
                )));
            }
        }

        if self.housing.habitability_min_score > 100.0 {
            return Err(ScoutError::ConfigParse(
                "housing.habitability_min_score must be between 0 and 100".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for flag in &self.red_flags {
            let normalized = flag.trim();
            if normalized.is_empty() {
                return Err(ScoutError::ConfigParse(
                    "red_flags entries must be non-empty tags".to_string(),
                ));
            }
            if normalized != flag.as_str() {
                return Err(ScoutError::ConfigParse(format!(
                    "red_flags tag '{flag}' must not have surrounding whitespace"
                )));
            }
            if !seen.insert(normalized) {
                return Err(ScoutError::ConfigParse(format!(
                    "red_flags contains duplicate tag: {normalized}"
                )));
            }
        }

        Ok(())
    }
}
