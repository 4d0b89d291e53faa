use crate::error::{CadRiskError, Result};
use crate::types::patient::{Gender, PatientAssessmentInput, PatientForm};
use tracing::debug;

pub const MAX_AGE_YEARS: i64 = 130;
pub const ACTIVITY_LEVEL_RANGE: std::ops::RangeInclusive<i64> = 0..=10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub missing: Vec<&'static str>,
}

impl Validation {
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Reports every field that is absent or blank, in form order.
pub fn check(form: &PatientForm) -> Validation {
    let missing = form
        .fields()
        .into_iter()
        .filter(|(_, value)| value.map_or(true, |raw| raw.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();
    Validation { missing }
}

/// Gates a raw form and turns it into a typed record.
///
/// Nothing is parsed unless every field is present. Range checks run only
/// when `enforce_ranges` is set.
pub fn parse(form: &PatientForm, enforce_ranges: bool) -> Result<PatientAssessmentInput> {
    let validation = check(form);
    if !validation.passed() {
        debug!(missing = ?validation.missing, "form rejected");
        return Err(CadRiskError::MissingInput);
    }

    let input = PatientAssessmentInput {
        patient_id: text(&form.patient_id),
        age: integer("age", &form.age)?,
        gender: Gender::parse(&text(&form.gender)).ok_or(CadRiskError::InvalidInput {
            field: "gender",
            expected: "gender (male or female)",
        })?,
        height_cm: decimal("height_cm", &form.height_cm)?,
        weight_kg: decimal("weight_kg", &form.weight_kg)?,
        systolic_bp: integer("systolic_bp", &form.systolic_bp)?,
        diastolic_bp: integer("diastolic_bp", &form.diastolic_bp)?,
        cholesterol_mgdl: integer("cholesterol_mgdl", &form.cholesterol_mgdl)?,
        glucose_mgdl: integer("glucose_mgdl", &form.glucose_mgdl)?,
        smoking: flag("smoking", &form.smoking)?,
        alcohol_intake: flag("alcohol_intake", &form.alcohol_intake)?,
        physically_active: flag("physically_active", &form.physically_active)?,
        physical_activity_level: integer(
            "physical_activity_level",
            &form.physical_activity_level,
        )?,
    };

    if enforce_ranges {
        check_ranges(&input)?;
    }
    Ok(input)
}

fn text(raw: &Option<String>) -> String {
    raw.as_deref().unwrap_or_default().trim().to_string()
}

fn integer(field: &'static str, raw: &Option<String>) -> Result<i64> {
    text(raw).parse::<i64>().map_err(|_| CadRiskError::InvalidInput {
        field,
        expected: "integer",
    })
}

fn decimal(field: &'static str, raw: &Option<String>) -> Result<f64> {
    text(raw)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(CadRiskError::InvalidInput {
            field,
            expected: "number",
        })
}

fn flag(field: &'static str, raw: &Option<String>) -> Result<bool> {
    match text(raw).to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(CadRiskError::InvalidInput {
            field,
            expected: "boolean (yes or no)",
        }),
    }
}

fn check_ranges(input: &PatientAssessmentInput) -> Result<()> {
    if input.age <= 0 || input.age > MAX_AGE_YEARS {
        return Err(CadRiskError::OutOfRange {
            field: "age",
            detail: format!("expected 1-{MAX_AGE_YEARS}, got {}", input.age),
        });
    }
    for (field, value) in [("height_cm", input.height_cm), ("weight_kg", input.weight_kg)] {
        if value <= 0.0 {
            return Err(CadRiskError::OutOfRange {
                field,
                detail: format!("must be positive, got {value}"),
            });
        }
    }
    for (field, value) in [
        ("systolic_bp", input.systolic_bp),
        ("diastolic_bp", input.diastolic_bp),
        ("cholesterol_mgdl", input.cholesterol_mgdl),
        ("glucose_mgdl", input.glucose_mgdl),
    ] {
        if value < 0 {
            return Err(CadRiskError::OutOfRange {
                field,
                detail: format!("must not be negative, got {value}"),
            });
        }
    }
    if !ACTIVITY_LEVEL_RANGE.contains(&input.physical_activity_level) {
        return Err(CadRiskError::OutOfRange {
            field: "physical_activity_level",
            detail: format!(
                "expected {}-{}, got {}",
                ACTIVITY_LEVEL_RANGE.start(),
                ACTIVITY_LEVEL_RANGE.end(),
                input.physical_activity_level
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> PatientForm {
        PatientForm {
            patient_id: Some("P-042".to_string()),
            age: Some("52".to_string()),
            gender: Some("female".to_string()),
            height_cm: Some("168".to_string()),
            weight_kg: Some("64.5".to_string()),
            systolic_bp: Some("128".to_string()),
            diastolic_bp: Some("82".to_string()),
            cholesterol_mgdl: Some("210".to_string()),
            glucose_mgdl: Some("95".to_string()),
            smoking: Some("no".to_string()),
            alcohol_intake: Some("yes".to_string()),
            physically_active: Some("true".to_string()),
            physical_activity_level: Some("4".to_string()),
        }
    }

    #[test]
    fn complete_form_passes_and_parses() {
        let form = complete_form();
        assert!(check(&form).passed());

        let input = parse(&form, true).expect("complete form should parse");
        assert_eq!(input.patient_id, "P-042");
        assert_eq!(input.age, 52);
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.weight_kg, 64.5);
        assert!(!input.smoking);
        assert!(input.alcohol_intake);
        assert_eq!(input.physical_activity_level, 4);
    }

    #[test]
    fn each_missing_field_fails_the_gate() {
        let names = complete_form().fields().map(|(name, _)| name);
        for name in names {
            let mut form = complete_form();
            let slot = match name {
                "patient_id" => &mut form.patient_id,
                "age" => &mut form.age,
                "gender" => &mut form.gender,
                "height_cm" => &mut form.height_cm,
                "weight_kg" => &mut form.weight_kg,
                "systolic_bp" => &mut form.systolic_bp,
                "diastolic_bp" => &mut form.diastolic_bp,
                "cholesterol_mgdl" => &mut form.cholesterol_mgdl,
                "glucose_mgdl" => &mut form.glucose_mgdl,
                "smoking" => &mut form.smoking,
                "alcohol_intake" => &mut form.alcohol_intake,
                "physically_active" => &mut form.physically_active,
                _ => &mut form.physical_activity_level,
            };
            *slot = None;

            assert_eq!(check(&form).missing, vec![name]);
            assert!(matches!(parse(&form, true), Err(CadRiskError::MissingInput)));
        }
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let form = PatientForm {
            glucose_mgdl: Some("   ".to_string()),
            ..complete_form()
        };
        assert_eq!(check(&form).missing, vec!["glucose_mgdl"]);
    }

    #[test]
    fn empty_form_lists_every_field() {
        let validation = check(&PatientForm::default());
        assert_eq!(validation.missing.len(), 13);
        assert_eq!(validation.missing[0], "patient_id");
    }

    #[test]
    fn unparseable_number_is_invalid_input() {
        let form = PatientForm {
            cholesterol_mgdl: Some("high".to_string()),
            ..complete_form()
        };
        assert!(matches!(
            parse(&form, true),
            Err(CadRiskError::InvalidInput {
                field: "cholesterol_mgdl",
                ..
            })
        ));
    }

    #[test]
    fn unknown_gender_and_flag_are_invalid_input() {
        let form = PatientForm {
            gender: Some("x".to_string()),
            ..complete_form()
        };
        assert!(matches!(
            parse(&form, true),
            Err(CadRiskError::InvalidInput { field: "gender", .. })
        ));

        let form = PatientForm {
            smoking: Some("sometimes".to_string()),
            ..complete_form()
        };
        assert!(matches!(
            parse(&form, true),
            Err(CadRiskError::InvalidInput { field: "smoking", .. })
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected_when_enforced() {
        let form = PatientForm {
            physical_activity_level: Some("11".to_string()),
            ..complete_form()
        };
        assert!(matches!(
            parse(&form, true),
            Err(CadRiskError::OutOfRange {
                field: "physical_activity_level",
                ..
            })
        ));
        assert!(parse(&form, false).is_ok());

        let form = PatientForm {
            age: Some("-3".to_string()),
            ..complete_form()
        };
        assert!(matches!(
            parse(&form, true),
            Err(CadRiskError::OutOfRange { field: "age", .. })
        ));

        let form = PatientForm {
            height_cm: Some("0".to_string()),
            ..complete_form()
        };
        assert!(matches!(
            parse(&form, true),
            Err(CadRiskError::OutOfRange {
                field: "height_cm",
                ..
            })
        ));
    }
}
