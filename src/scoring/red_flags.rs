use crate::types::candidate::Candidate;
use std::collections::BTreeSet;

/// Candidate tags that the configuration treats as disqualifying, in the
/// candidate's own tag order, each reported once.
pub fn matching_red_flags(candidate: &Candidate, disqualifying: &BTreeSet<String>) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();
    for flag in &candidate.red_flags {
        if disqualifying.contains(flag) && !matched.contains(flag) {
            matched.push(flag.clone());
        }
    }
    matched
}

pub fn exclusion_explanation(flag: &str) -> String {
    format!("Red flag present: {flag}. Excluded from shortlist.")
}
