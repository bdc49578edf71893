use crate::scoring;
use crate::types::candidate::Candidate;
use crate::types::config::{ScoringConfig, INCLUSION_THRESHOLD};
use crate::types::report::{Evaluation, Shortlist, ShortlistEntry};
use chrono::{DateTime, Utc};

/// Scores every candidate once, in input order, and keeps those at or above
/// the inclusion threshold. Entries are never re-sorted by score.
pub fn assemble(
    candidates: &[Candidate],
    config: &ScoringConfig,
    generated_at: DateTime<Utc>,
) -> Shortlist {
    let evaluations = candidates
        .iter()
        .map(|candidate| {
            let result = scoring::score(candidate, config);
            if result.excluded {
                tracing::info!(
                    id = %candidate.id,
                    flags = ?result.matched_red_flags,
                    "excluded by red flag"
                );
            } else {
                tracing::debug!(id = %candidate.id, score = result.score, "scored candidate");
            }
            Evaluation {
                id: candidate.id.clone(),
                address: candidate.address.clone(),
                result,
            }
        })
        .collect::<Vec<_>>();

    let entries = evaluations
        .iter()
        .filter(|evaluation| evaluation.shortlisted(INCLUSION_THRESHOLD))
        .map(|evaluation| ShortlistEntry {
            id: evaluation.id.clone(),
            score: evaluation.result.score,
            address: evaluation.address.clone(),
        })
        .collect();

    Shortlist {
        generated_at,
        threshold: INCLUSION_THRESHOLD,
        evaluations,
        entries,
    }
}
