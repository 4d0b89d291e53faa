use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Positive,
    Negative,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Positive => "CAD risk positive",
            RiskLabel::Negative => "CAD risk negative",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One term of the point rule and what it added to the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorContribution {
    pub factor: &'static str,
    pub points: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub label: RiskLabel,
    pub score: u32,
    pub threshold: u32,
    pub factors: Vec<FactorContribution>,
}

impl Assessment {
    pub fn is_positive(&self) -> bool {
        matches!(self.label, RiskLabel::Positive)
    }
}
