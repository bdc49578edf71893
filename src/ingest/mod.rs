pub mod reso;

use crate::error::{Result, ScoutError};
use crate::types::candidate::Candidate;
use std::collections::HashSet;
use std::path::Path;

/// Reads a candidate collection, either a JSON array or JSON Lines.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    if !path.exists() {
        return Err(ScoutError::CandidatesNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let candidates = parse_candidates(&content)?;
    tracing::info!(count = candidates.len(), path = %path.display(), "loaded candidates");
    warn_duplicate_ids(&candidates);
    Ok(candidates)
}

pub fn parse_candidates(content: &str) -> Result<Vec<Candidate>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).map_err(|e| ScoutError::CandidatesParse {
            line: e.line(),
            message: e.to_string(),
        });
    }

    let mut candidates = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let candidate = serde_json::from_str(line).map_err(|e| ScoutError::CandidatesParse {
            line: index + 1,
            message: e.to_string(),
        })?;
        candidates.push(candidate);
    }
    Ok(candidates)
}

pub fn duplicate_ids(candidates: &[Candidate]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for candidate in candidates {
        if !seen.insert(candidate.id.as_str()) && !duplicates.contains(&candidate.id.as_str()) {
            duplicates.push(candidate.id.as_str());
        }
    }
    duplicates
}

fn warn_duplicate_ids(candidates: &[Candidate]) {
    for id in duplicate_ids(candidates) {
        tracing::warn!(id, "candidate id appears more than once; all records are scored");
    }
}
