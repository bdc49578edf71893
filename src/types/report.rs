use crate::types::scoring::ScoreResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortlistEntry {
    pub id: String,
    pub score: u8,
    pub address: String,
}

/// One scored candidate, shortlisted or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub id: String,
    pub address: String,
    pub result: ScoreResult,
}

impl Evaluation {
    pub fn shortlisted(&self, threshold: u8) -> bool {
        !self.result.excluded && self.result.score >= threshold
    }
}

/// Outcome of a batch run. `evaluations` keeps input order; `entries` is the
/// subset at or above the threshold, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortlist {
    pub generated_at: DateTime<Utc>,
    pub threshold: u8,
    pub evaluations: Vec<Evaluation>,
    pub entries: Vec<ShortlistEntry>,
}

impl Shortlist {
    /// Evaluations backing the shortlist entries, aligned with `entries`.
    pub fn included(&self) -> impl Iterator<Item = &Evaluation> + '_ {
        self.evaluations
            .iter()
            .filter(move |evaluation| evaluation.shortlisted(self.threshold))
    }

    pub fn excluded_count(&self) -> usize {
        self.evaluations
            .iter()
            .filter(|evaluation| evaluation.result.excluded)
            .count()
    }
}
