use super::{AssessmentReport, BatchEntry};
use crate::scoring::rule::{ScoringRule, UNSCORED_FIELDS};
use serde_json::{json, Map, Value};

fn assessment_value(report: &AssessmentReport) -> Value {
    let assessment = &report.assessment;
    json!({
        "label": assessment.label.as_str(),
        "score": assessment.score,
        "positive": assessment.is_positive(),
        "threshold": assessment.threshold,
        "factors": assessment.factors,
        "input_digest": report.input_digest,
    })
}

pub fn assessment(report: &AssessmentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&assessment_value(report))
}

pub fn batch(entries: &[BatchEntry]) -> Result<String, serde_json::Error> {
    let results: Vec<_> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            BatchEntry::Assessed(report) => {
                let mut value = assessment_value(report);
                if let Value::Object(fields) = &mut value {
                    fields.insert("index".to_string(), json!(index));
                }
                value
            }
            BatchEntry::Rejected(message) => json!({
                "index": index,
                "error": message,
            }),
        })
        .collect();
    serde_json::to_string_pretty(&results)
}

pub fn rule(rule: &ScoringRule) -> Result<String, serde_json::Error> {
    let weights: Map<String, Value> = rule
        .weights
        .entries()
        .into_iter()
        .map(|(key, points)| (key.to_string(), json!(points)))
        .collect();
    serde_json::to_string_pretty(&json!({
        "threshold": rule.threshold,
        "weights": weights,
        "unscored_fields": UNSCORED_FIELDS,
    }))
}
