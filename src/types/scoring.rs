use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Stewardship,
    Housing,
    Rehab,
    Risk,
}

impl Dimension {
    pub const ORDER: [Dimension; 4] = [
        Dimension::Stewardship,
        Dimension::Housing,
        Dimension::Rehab,
        Dimension::Risk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stewardship => "stewardship",
            Self::Housing => "housing",
            Self::Rehab => "rehab",
            Self::Risk => "risk",
        }
    }
}

/// Unweighted points for one dimension and the rationale lines that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionOutcome {
    pub points: f64,
    pub explanations: Vec<String>,
}

impl DimensionOutcome {
    pub fn credit(&mut self, points: f64, explanation: impl Into<String>) {
        self.points += points;
        self.explanations.push(explanation.into());
    }

    pub fn debit(&mut self, points: f64, explanation: impl Into<String>) {
        self.points -= points;
        self.explanations.push(explanation.into());
    }

    pub fn note(&mut self, explanation: impl Into<String>) {
        self.explanations.push(explanation.into());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub points: f64,
    pub weight: f64,
    pub weighted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub explanations: Vec<String>,
    pub dimensions: Vec<DimensionScore>,
    pub excluded: bool,
    pub matched_red_flags: Vec<String>,
}

impl ScoreResult {
    /// Weighted sum before truncation and clamping.
    pub fn raw_total(&self) -> f64 {
        self.dimensions.iter().map(|dimension| dimension.weighted).sum()
    }
}
