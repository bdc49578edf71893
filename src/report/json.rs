use crate::types::report::{Shortlist, ShortlistEntry};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ShortlistDocument<'a> {
    generated_at: DateTime<Utc>,
    threshold: u8,
    evaluated: usize,
    shortlist: &'a [ShortlistEntry],
}

pub fn to_json(shortlist: &Shortlist) -> Result<String, serde_json::Error> {
    let document = ShortlistDocument {
        generated_at: shortlist.generated_at,
        threshold: shortlist.threshold,
        evaluated: shortlist.evaluations.len(),
        shortlist: &shortlist.entries,
    };
    serde_json::to_string_pretty(&document)
}
