use crate::types::report::Shortlist;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Record of what a run consumed and produced, enough to replay it.
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub scout_version: String,
    pub generated_at: String,
    pub candidates_sha256: String,
    pub config_sha256: String,
    pub evaluated: usize,
    pub excluded: usize,
    pub shortlisted: usize,
    pub artifacts: Vec<String>,
}

impl RunManifest {
    pub fn new(
        shortlist: &Shortlist,
        candidates_bytes: &[u8],
        config_bytes: &[u8],
        artifacts: Vec<String>,
    ) -> Self {
        Self {
            scout_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: shortlist.generated_at.to_rfc3339(),
            candidates_sha256: sha256_hex(candidates_bytes),
            config_sha256: sha256_hex(config_bytes),
            evaluated: shortlist.evaluations.len(),
            excluded: shortlist.excluded_count(),
            shortlisted: shortlist.entries.len(),
            artifacts,
        }
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
