use crate::error::CadRiskError;
use crate::scoring::rule::{ScoringRule, MAX_POINTS, WEIGHT_KEYS};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CadRiskConfig {
    pub scoring: Option<ScoringConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    pub threshold: Option<u32>,
    pub weights: Option<HashMap<String, u32>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    #[serde(default = "default_enforce_ranges")]
    pub enforce_ranges: bool,
}

fn default_enforce_ranges() -> bool {
    true
}

impl CadRiskConfig {
    /// Built-in rule with any configured weights and threshold applied.
    pub fn rule(&self) -> ScoringRule {
        let mut rule = ScoringRule::default();
        if let Some(scoring) = &self.scoring {
            if let Some(threshold) = scoring.threshold {
                rule.threshold = threshold;
            }
            if let Some(weights) = &scoring.weights {
                for (key, value) in weights {
                    if let Some(slot) = rule.weights.slot_mut(key) {
                        *slot = *value;
                    }
                }
            }
        }
        rule
    }

    pub fn enforce_ranges(&self) -> bool {
        self.validation
            .as_ref()
            .map(|validation| validation.enforce_ranges)
            .unwrap_or_else(default_enforce_ranges)
    }

    pub fn validate(&self) -> Result<(), CadRiskError> {
        let Some(scoring) = &self.scoring else {
            return Ok(());
        };

        if let Some(threshold) = scoring.threshold {
            if !(1..=MAX_POINTS).contains(&threshold) {
                return Err(CadRiskError::ConfigParse(format!(
                    "scoring.threshold must be between 1 and {MAX_POINTS}"
                )));
            }
        }

        if let Some(weights) = &scoring.weights {
            let mut unknown = weights
                .keys()
                .filter(|key| !WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(CadRiskError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }

            let mut oversized = weights
                .iter()
                .filter(|(_, points)| **points > MAX_POINTS)
                .map(|(key, _)| key.clone())
                .collect::<Vec<_>>();
            if !oversized.is_empty() {
                oversized.sort();
                return Err(CadRiskError::ConfigParse(format!(
                    "scoring.weights must not exceed {MAX_POINTS}: {}",
                    oversized.join(", ")
                )));
            }
        }
        Ok(())
    }
}
