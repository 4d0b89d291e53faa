pub mod rule;

use crate::types::assessment::{Assessment, FactorContribution, RiskLabel};
use crate::types::patient::{Gender, PatientAssessmentInput};
use rule::*;
use tracing::{debug, info};

/// Applies the additive point rule. Pure: no I/O, no state.
pub fn score(input: &PatientAssessmentInput, rule: &ScoringRule) -> Assessment {
    let factors = vec![
        age_factor(input.age, &rule.weights),
        blood_pressure_factor(input.systolic_bp, input.diastolic_bp, &rule.weights),
        cholesterol_factor(input.cholesterol_mgdl, &rule.weights),
        glucose_factor(input.glucose_mgdl, &rule.weights),
        smoking_factor(input.smoking, &rule.weights),
        activity_factor(input.physically_active, &rule.weights),
        gender_factor(input.gender, &rule.weights),
    ];

    for factor in &factors {
        debug!(factor = factor.factor, points = factor.points, "factor scored");
    }

    let score = factors
        .iter()
        .fold(0u32, |total, factor| total.saturating_add(factor.points));
    let label = if score >= rule.threshold {
        RiskLabel::Positive
    } else {
        RiskLabel::Negative
    };
    info!(score, threshold = rule.threshold, label = %label, "assessment computed");

    Assessment {
        label,
        score,
        threshold: rule.threshold,
        factors,
    }
}

fn contribution(factor: &'static str, points: u32, reason: String) -> FactorContribution {
    FactorContribution {
        factor,
        points,
        reason,
    }
}

fn age_factor(age: i64, weights: &Weights) -> FactorContribution {
    let (points, reason) = if age > AGE_SENIOR_YEARS {
        (weights.age_over_65, format!("age {age} > {AGE_SENIOR_YEARS}"))
    } else if age > AGE_OLDER_YEARS {
        (
            weights.age_56_to_65,
            format!("age {age} in {}-{AGE_SENIOR_YEARS}", AGE_OLDER_YEARS + 1),
        )
    } else if age > AGE_MIDDLE_YEARS {
        (
            weights.age_46_to_55,
            format!("age {age} in {}-{AGE_OLDER_YEARS}", AGE_MIDDLE_YEARS + 1),
        )
    } else {
        (0, format!("age {age} <= {AGE_MIDDLE_YEARS}"))
    };
    contribution("age", points, reason)
}

fn blood_pressure_factor(systolic: i64, diastolic: i64, weights: &Weights) -> FactorContribution {
    let reading = format!("{systolic}/{diastolic} mmHg");
    let (points, reason) =
        if systolic > SYSTOLIC_STAGE_2_MMHG || diastolic > DIASTOLIC_STAGE_2_MMHG {
            (
                weights.bp_stage_2,
                format!(
                    "{reading} above {SYSTOLIC_STAGE_2_MMHG}/{DIASTOLIC_STAGE_2_MMHG}"
                ),
            )
        } else if systolic > SYSTOLIC_STAGE_1_MMHG || diastolic > DIASTOLIC_STAGE_1_MMHG {
            (
                weights.bp_stage_1,
                format!(
                    "{reading} above {SYSTOLIC_STAGE_1_MMHG}/{DIASTOLIC_STAGE_1_MMHG}"
                ),
            )
        } else {
            (0, format!("{reading} within normal range"))
        };
    contribution("blood_pressure", points, reason)
}

fn cholesterol_factor(cholesterol: i64, weights: &Weights) -> FactorContribution {
    let (points, reason) = if cholesterol > CHOLESTEROL_HIGH_MGDL {
        (
            weights.cholesterol_high,
            format!("cholesterol {cholesterol} mg/dL > {CHOLESTEROL_HIGH_MGDL}"),
        )
    } else if cholesterol > CHOLESTEROL_BORDERLINE_MGDL {
        (
            weights.cholesterol_borderline,
            format!("cholesterol {cholesterol} mg/dL > {CHOLESTEROL_BORDERLINE_MGDL}"),
        )
    } else {
        (
            0,
            format!("cholesterol {cholesterol} mg/dL <= {CHOLESTEROL_BORDERLINE_MGDL}"),
        )
    };
    contribution("cholesterol", points, reason)
}

fn glucose_factor(glucose: i64, weights: &Weights) -> FactorContribution {
    let (points, reason) = if glucose > GLUCOSE_HIGH_MGDL {
        (
            weights.glucose_high,
            format!("glucose {glucose} mg/dL > {GLUCOSE_HIGH_MGDL}"),
        )
    } else if glucose > GLUCOSE_ELEVATED_MGDL {
        (
            weights.glucose_elevated,
            format!("glucose {glucose} mg/dL > {GLUCOSE_ELEVATED_MGDL}"),
        )
    } else {
        (0, format!("glucose {glucose} mg/dL <= {GLUCOSE_ELEVATED_MGDL}"))
    };
    contribution("glucose", points, reason)
}

fn smoking_factor(smoking: bool, weights: &Weights) -> FactorContribution {
    if smoking {
        contribution("smoking", weights.smoking, "smoker".to_string())
    } else {
        contribution("smoking", 0, "non-smoker".to_string())
    }
}

fn activity_factor(physically_active: bool, weights: &Weights) -> FactorContribution {
    if physically_active {
        contribution("activity", 0, "physically active".to_string())
    } else {
        contribution("activity", weights.inactive, "not physically active".to_string())
    }
}

fn gender_factor(gender: Gender, weights: &Weights) -> FactorContribution {
    match gender {
        Gender::Male => contribution("gender", weights.male, "male".to_string()),
        Gender::Female => contribution("gender", 0, "female".to_string()),
    }
}
