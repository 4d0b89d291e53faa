use crate::types::patient::PatientAssessmentInput;
use sha2::{Digest, Sha256};

/// SHA-256 hex over the canonical JSON of a parsed record.
pub fn input_digest(input: &PatientAssessmentInput) -> Result<String, serde_json::Error> {
    let canonical = serde_json::to_vec(input)?;
    Ok(format!("{:x}", Sha256::digest(&canonical)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::patient::Gender;

    fn sample() -> PatientAssessmentInput {
        PatientAssessmentInput {
            patient_id: "P-7".to_string(),
            age: 61,
            gender: Gender::Male,
            height_cm: 180.0,
            weight_kg: 82.0,
            systolic_bp: 138,
            diastolic_bp: 85,
            cholesterol_mgdl: 220,
            glucose_mgdl: 104,
            smoking: false,
            alcohol_intake: true,
            physically_active: true,
            physical_activity_level: 5,
        }
    }

    #[test]
    fn digest_is_stable_and_sensitive_to_input() {
        let first = input_digest(&sample()).expect("digest should compute");
        let second = input_digest(&sample()).expect("digest should compute");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);

        let changed = PatientAssessmentInput {
            glucose_mgdl: 105,
            ..sample()
        };
        assert_ne!(first, input_digest(&changed).expect("digest should compute"));
    }
}
