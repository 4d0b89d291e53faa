use super::{AssessmentReport, BatchEntry};
use crate::scoring::rule::{ScoringRule, UNSCORED_FIELDS};

fn push_factors(output: &mut String, report: &AssessmentReport) {
    output.push_str("| Factor | Points | Reason |\n|---|---|---|\n");
    for factor in &report.assessment.factors {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            factor.factor, factor.points, factor.reason
        ));
    }
}

pub fn assessment(report: &AssessmentReport) -> String {
    let assessment = &report.assessment;
    let mut output = String::new();
    output.push_str("# CAD Risk Assessment\n\n");
    output.push_str(&format!("Result: **{}**\n\n", assessment.label));
    output.push_str(&format!(
        "Score: {} (threshold {})\n\n",
        assessment.score, assessment.threshold
    ));
    output.push_str("## Factors\n\n");
    push_factors(&mut output, report);
    output.push_str(&format!("\nInput digest: `{}`\n", report.input_digest));
    output
}

pub fn batch(entries: &[BatchEntry]) -> String {
    let mut output = String::new();
    output.push_str("# CAD Risk Batch\n\n");
    output.push_str("| # | Result | Score |\n|---|---|---|\n");
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            BatchEntry::Assessed(report) => output.push_str(&format!(
                "| {} | {} | {} |\n",
                index, report.assessment.label, report.assessment.score
            )),
            BatchEntry::Rejected(message) => {
                output.push_str(&format!("| {index} | rejected: {message} | - |\n"))
            }
        }
    }
    output
}

pub fn rule(rule: &ScoringRule) -> String {
    let mut output = String::new();
    output.push_str("# CAD Scoring Rule\n\n");
    output.push_str(&format!(
        "Positive when total >= {}\n\n## Weights\n\n",
        rule.threshold
    ));
    for (key, points) in rule.weights.entries() {
        output.push_str(&format!("- {key}: {points}\n"));
    }
    output.push_str("\n## Collected but not scored\n\n");
    for field in UNSCORED_FIELDS {
        output.push_str(&format!("- {field}\n"));
    }
    output
}
