use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A submission as it arrives from a form: every field is raw text and may be absent.
///
/// JSON submissions may carry numbers and booleans natively; they are
/// normalised to text so validation treats every source the same way.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    #[serde(deserialize_with = "lenient_text")]
    pub patient_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub age: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub height_cm: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub weight_kg: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub systolic_bp: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub diastolic_bp: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub cholesterol_mgdl: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub glucose_mgdl: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub smoking: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub alcohol_intake: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub physically_active: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub physical_activity_level: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Bool(flag)) => Some(flag.to_string()),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        // Arrays and objects fall through as text and fail parsing later.
        Some(other) => Some(other.to_string()),
    })
}

impl PatientForm {
    /// Field names paired with their raw values, in canonical form order.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 13] {
        [
            ("patient_id", self.patient_id.as_deref()),
            ("age", self.age.as_deref()),
            ("gender", self.gender.as_deref()),
            ("height_cm", self.height_cm.as_deref()),
            ("weight_kg", self.weight_kg.as_deref()),
            ("systolic_bp", self.systolic_bp.as_deref()),
            ("diastolic_bp", self.diastolic_bp.as_deref()),
            ("cholesterol_mgdl", self.cholesterol_mgdl.as_deref()),
            ("glucose_mgdl", self.glucose_mgdl.as_deref()),
            ("smoking", self.smoking.as_deref()),
            ("alcohol_intake", self.alcohol_intake.as_deref()),
            ("physically_active", self.physically_active.as_deref()),
            (
                "physical_activity_level",
                self.physical_activity_level.as_deref(),
            ),
        ]
    }

    /// Fields set on `overlay` replace the ones on `self`.
    pub fn overlay(mut self, overlay: PatientForm) -> PatientForm {
        fn pick(base: &mut Option<String>, top: Option<String>) {
            if top.is_some() {
                *base = top;
            }
        }
        pick(&mut self.patient_id, overlay.patient_id);
        pick(&mut self.age, overlay.age);
        pick(&mut self.gender, overlay.gender);
        pick(&mut self.height_cm, overlay.height_cm);
        pick(&mut self.weight_kg, overlay.weight_kg);
        pick(&mut self.systolic_bp, overlay.systolic_bp);
        pick(&mut self.diastolic_bp, overlay.diastolic_bp);
        pick(&mut self.cholesterol_mgdl, overlay.cholesterol_mgdl);
        pick(&mut self.glucose_mgdl, overlay.glucose_mgdl);
        pick(&mut self.smoking, overlay.smoking);
        pick(&mut self.alcohol_intake, overlay.alcohol_intake);
        pick(&mut self.physically_active, overlay.physically_active);
        pick(
            &mut self.physical_activity_level,
            overlay.physical_activity_level,
        );
        self
    }
}

/// A complete, parsed submission. Built only by `validate::parse`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientAssessmentInput {
    pub patient_id: String,
    pub age: i64,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub systolic_bp: i64,
    pub diastolic_bp: i64,
    pub cholesterol_mgdl: i64,
    pub glucose_mgdl: i64,
    pub smoking: bool,
    pub alcohol_intake: bool,
    pub physically_active: bool,
    pub physical_activity_level: i64,
}
