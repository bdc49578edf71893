use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("candidates file not found: {0}")]
    CandidatesNotFound(String),

    #[error("candidates parse error at line {line}: {message}")]
    CandidatesParse { line: usize, message: String },

    #[error("candidate not found: {0}")]
    CandidateNotFound(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoutError {
    /// Configuration problems abort before any candidate is scored.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound(_) | Self::ConfigParse(_) | Self::Toml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
