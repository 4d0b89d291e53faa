use super::{AssessmentReport, BatchEntry};
use crate::scoring::rule::{ScoringRule, UNSCORED_FIELDS};

pub fn assessment(report: &AssessmentReport) -> String {
    let assessment = &report.assessment;
    let mut output = format!(
        "{} (score {}, threshold {})\n",
        assessment.label, assessment.score, assessment.threshold
    );
    for factor in &assessment.factors {
        output.push_str(&format!(
            "  +{} {}: {}\n",
            factor.points, factor.factor, factor.reason
        ));
    }
    output.push_str(&format!("digest: {}", report.input_digest));
    output
}

pub fn batch(entries: &[BatchEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            BatchEntry::Assessed(report) => format!(
                "[{index}] {} (score {})",
                report.assessment.label, report.assessment.score
            ),
            BatchEntry::Rejected(message) => format!("[{index}] rejected: {message}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn rule(rule: &ScoringRule) -> String {
    let mut output = format!("threshold: {}\nweights:\n", rule.threshold);
    for (key, points) in rule.weights.entries() {
        output.push_str(&format!("  {key}: {points}\n"));
    }
    output.push_str(&format!(
        "collected but not scored: {}",
        UNSCORED_FIELDS.join(", ")
    ));
    output
}
