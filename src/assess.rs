use crate::digest::input_digest;
use crate::error::{CadRiskError, Result};
use crate::report::{AssessmentReport, BatchEntry};
use crate::scoring;
use crate::types::config::CadRiskConfig;
use crate::types::patient::PatientForm;
use crate::validate;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Validate, parse and score one submission.
pub fn assess(form: &PatientForm, config: &CadRiskConfig) -> Result<AssessmentReport> {
    let input = validate::parse(form, config.enforce_ranges())?;
    let assessment = scoring::score(&input, &config.rule());
    Ok(AssessmentReport {
        assessment,
        input_digest: input_digest(&input)?,
    })
}

/// Scores each form on its own. Input rejections become entries; anything
/// else aborts the batch.
pub fn assess_batch(forms: &[PatientForm], config: &CadRiskConfig) -> Result<Vec<BatchEntry>> {
    forms
        .iter()
        .enumerate()
        .map(|(index, form)| match assess(form, config) {
            Ok(report) => Ok(BatchEntry::Assessed(report)),
            Err(err) if err.is_input_rejection() => {
                warn!(index, error = %err, "batch record rejected");
                Ok(BatchEntry::Rejected(err.to_string()))
            }
            Err(err) => Err(err),
        })
        .collect()
}

pub fn read_form(path: &Path) -> Result<PatientForm> {
    serde_json::from_str(&read_source(path)?)
        .map_err(|e| CadRiskError::MalformedInput(e.to_string()))
}

pub fn read_batch(path: &Path) -> Result<Vec<PatientForm>> {
    serde_json::from_str(&read_source(path)?)
        .map_err(|e| CadRiskError::MalformedInput(e.to_string()))
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    if !path.exists() {
        return Err(CadRiskError::InputNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
