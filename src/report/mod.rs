pub mod json;
pub mod md;
pub mod text;

use crate::error::CadRiskError;
use crate::scoring::rule::ScoringRule;
use crate::types::assessment::Assessment;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

/// An assessment plus the fingerprint of the record it was computed from.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub assessment: Assessment,
    pub input_digest: String,
}

/// Outcome for one record of a batch. Rejections carry the user-facing message only.
#[derive(Debug, Clone)]
pub enum BatchEntry {
    Assessed(AssessmentReport),
    Rejected(String),
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, CadRiskError> {
    match format {
        OutputFormat::Text => Ok(text::assessment(report)),
        OutputFormat::Json => json::assessment(report).map_err(CadRiskError::Json),
        OutputFormat::Md => Ok(md::assessment(report)),
    }
}

pub fn render_batch(entries: &[BatchEntry], format: OutputFormat) -> Result<String, CadRiskError> {
    match format {
        OutputFormat::Text => Ok(text::batch(entries)),
        OutputFormat::Json => json::batch(entries).map_err(CadRiskError::Json),
        OutputFormat::Md => Ok(md::batch(entries)),
    }
}

pub fn render_rule(rule: &ScoringRule, format: OutputFormat) -> Result<String, CadRiskError> {
    match format {
        OutputFormat::Text => Ok(text::rule(rule)),
        OutputFormat::Json => json::rule(rule).map_err(CadRiskError::Json),
        OutputFormat::Md => Ok(md::rule(rule)),
    }
}
