use serde::{Deserialize, Deserializer, Serialize};

/// Canonical property record handed over by the ingestion adapter.
///
/// Scoring only ever borrows a candidate; results live in a separate
/// [`crate::types::scoring::ScoreResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub lot_size_acres: Option<f64>,
    #[serde(default)]
    pub flood_risk: Option<FloodRisk>,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub water_access: Option<bool>,
    #[serde(default)]
    pub industrial_distance_km: Option<f64>,
    #[serde(default)]
    pub habitability_score: Option<f64>,
    #[serde(default)]
    pub adu_viability: Option<bool>,
    #[serde(default)]
    pub neighborhood_stability: Option<String>,
    #[serde(default)]
    pub rehab_tier: Option<RehabTier>,
    #[serde(default)]
    pub permit_complexity: Option<PermitComplexity>,
    #[serde(default)]
    pub utility_status: Option<String>,
    #[serde(default)]
    pub title_risk: Option<TitleRisk>,
    #[serde(default)]
    pub zoning_ambiguity: Option<ZoningAmbiguity>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub environmental_flags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub ingested_at: Option<String>,
}

impl Candidate {
    /// A record with only an identity; every scored attribute absent.
    pub fn bare(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            county: None,
            lat: None,
            lng: None,
            lot_size_acres: None,
            flood_risk: None,
            soil_type: None,
            water_access: None,
            industrial_distance_km: None,
            habitability_score: None,
            adu_viability: None,
            neighborhood_stability: None,
            rehab_tier: None,
            permit_complexity: None,
            utility_status: None,
            title_risk: None,
            zoning_ambiguity: None,
            environmental_flags: Vec::new(),
            red_flags: Vec::new(),
            source: None,
            ingested_at: None,
        }
    }

    pub fn has_environmental_flag(&self, tag: &str) -> bool {
        self.environmental_flags.iter().any(|flag| flag == tag)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Declares a categorical field that parses case-insensitively and keeps
/// unrecognized values as `Unknown` instead of failing the whole batch.
macro_rules! category {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Unknown,
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unknown => "unknown",
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                let normalized = raw.trim();
                $(
                    if normalized.eq_ignore_ascii_case($label) {
                        return Self::$variant;
                    }
                )+
                Self::Unknown
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

category!(
    /// Flood exposure as reported by the listing source. `NoRisk` is the
    /// explicit "None" category, distinct from an absent value.
    FloodRisk {
        NoRisk => "None",
        Low => "Low",
        Moderate => "Moderate",
        High => "High",
        Uninsurable => "Uninsurable",
    }
);

category!(RehabTier {
    Cosmetic => "cosmetic",
    Systems => "systems",
    Structural => "structural",
});

category!(PermitComplexity {
    Low => "low",
    Moderate => "moderate",
    High => "high",
});

category!(TitleRisk {
    Clear => "clear",
    Clouded => "clouded",
});

category!(ZoningAmbiguity {
    Low => "low",
    High => "high",
});

impl FloodRisk {
    pub fn is_severe(self) -> bool {
        matches!(self, Self::High | Self::Uninsurable)
    }
}
