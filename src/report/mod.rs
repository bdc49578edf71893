pub mod json;
pub mod md;

use crate::error::ScoutError;
use crate::types::report::Shortlist;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(shortlist: &Shortlist, format: OutputFormat) -> Result<String, ScoutError> {
    match format {
        OutputFormat::Json => json::to_json(shortlist).map_err(ScoutError::Json),
        OutputFormat::Md => Ok(md::to_markdown(shortlist)),
    }
}
