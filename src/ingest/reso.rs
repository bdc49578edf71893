//! Mapping from RESO Web API property records to canonical candidates.
//!
//! Only listing facts are carried over. Assessments such as habitability,
//! rehab tier and title risk are left absent for later review.

use crate::error::{Result, ScoutError};
use crate::types::candidate::{Candidate, FloodRisk};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::Value;

pub const SOURCE_MLS: &str = "mls";

#[derive(Debug, Deserialize)]
pub struct ResoResponse {
    #[serde(default)]
    pub value: Vec<ResoListing>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResoListing {
    pub listing_key: Option<String>,
    pub unparsed_address: Option<String>,
    pub county_or_parish: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub lot_size_acres: Option<f64>,
    pub flood_zone: Option<String>,
    pub water_source: Option<Value>,
    pub utilities: Option<Value>,
}

pub fn parse_response(content: &str) -> Result<ResoResponse> {
    serde_json::from_str(content).map_err(|e| ScoutError::CandidatesParse {
        line: e.line(),
        message: e.to_string(),
    })
}

/// Returns `None` for records without a listing key.
pub fn normalize_listing(raw: &ResoListing, ingested_at: DateTime<Utc>) -> Option<Candidate> {
    let id = raw
        .listing_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())?;

    let mut candidate = Candidate::bare(id, raw.unparsed_address.clone().unwrap_or_default());
    candidate.county = raw.county_or_parish.clone();
    candidate.lat = raw.latitude;
    candidate.lng = raw.longitude;
    candidate.lot_size_acres = raw.lot_size_acres;
    candidate.flood_risk = raw.flood_zone.clone().map(FloodRisk::from);
    candidate.water_access = Some(raw.water_source.as_ref().is_some_and(|v| !v.is_null()));
    candidate.utility_status = raw.utilities.as_ref().and_then(utility_summary);
    candidate.source = Some(SOURCE_MLS.to_string());
    candidate.ingested_at = Some(ingested_at.to_rfc3339_opts(SecondsFormat::Secs, true));
    Some(candidate)
}

pub fn normalize_response(response: &ResoResponse, ingested_at: DateTime<Utc>) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(response.value.len());
    for (index, raw) in response.value.iter().enumerate() {
        match normalize_listing(raw, ingested_at) {
            Some(candidate) => candidates.push(candidate),
            None => tracing::warn!(index, "skipping RESO record without ListingKey"),
        }
    }
    candidates
}

fn utility_summary(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}
