//! Constants of the CAD point rule.
//!
//! Cut-offs are exclusive lower bounds: a value must be strictly greater than
//! the cut-off to fall into the band. Weights and the threshold can be
//! overridden from `cadrisk.toml`; cut-offs cannot.

pub const AGE_SENIOR_YEARS: i64 = 65;
pub const AGE_OLDER_YEARS: i64 = 55;
pub const AGE_MIDDLE_YEARS: i64 = 45;

pub const SYSTOLIC_STAGE_2_MMHG: i64 = 140;
pub const DIASTOLIC_STAGE_2_MMHG: i64 = 90;
pub const SYSTOLIC_STAGE_1_MMHG: i64 = 130;
pub const DIASTOLIC_STAGE_1_MMHG: i64 = 80;

pub const CHOLESTEROL_HIGH_MGDL: i64 = 240;
pub const CHOLESTEROL_BORDERLINE_MGDL: i64 = 200;

pub const GLUCOSE_HIGH_MGDL: i64 = 126;
pub const GLUCOSE_ELEVATED_MGDL: i64 = 100;

/// Total at or above which the label is positive.
pub const DEFAULT_THRESHOLD: u32 = 5;

/// Largest weight or threshold a config may set.
pub const MAX_POINTS: u32 = 100;

pub const WEIGHT_KEYS: [&str; 12] = [
    "age_over_65",
    "age_56_to_65",
    "age_46_to_55",
    "bp_stage_2",
    "bp_stage_1",
    "cholesterol_high",
    "cholesterol_borderline",
    "glucose_high",
    "glucose_elevated",
    "smoking",
    "inactive",
    "male",
];

/// Fields the form requires that no factor reads.
pub const UNSCORED_FIELDS: [&str; 5] = [
    "patient_id",
    "height_cm",
    "weight_kg",
    "alcohol_intake",
    "physical_activity_level",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub age_over_65: u32,
    pub age_56_to_65: u32,
    pub age_46_to_55: u32,
    pub bp_stage_2: u32,
    pub bp_stage_1: u32,
    pub cholesterol_high: u32,
    pub cholesterol_borderline: u32,
    pub glucose_high: u32,
    pub glucose_elevated: u32,
    pub smoking: u32,
    pub inactive: u32,
    pub male: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            age_over_65: 3,
            age_56_to_65: 2,
            age_46_to_55: 1,
            bp_stage_2: 2,
            bp_stage_1: 1,
            cholesterol_high: 2,
            cholesterol_borderline: 1,
            glucose_high: 2,
            glucose_elevated: 1,
            smoking: 3,
            inactive: 1,
            male: 1,
        }
    }
}

impl Weights {
    pub fn slot_mut(&mut self, key: &str) -> Option<&mut u32> {
        match key {
            "age_over_65" => Some(&mut self.age_over_65),
            "age_56_to_65" => Some(&mut self.age_56_to_65),
            "age_46_to_55" => Some(&mut self.age_46_to_55),
            "bp_stage_2" => Some(&mut self.bp_stage_2),
            "bp_stage_1" => Some(&mut self.bp_stage_1),
            "cholesterol_high" => Some(&mut self.cholesterol_high),
            "cholesterol_borderline" => Some(&mut self.cholesterol_borderline),
            "glucose_high" => Some(&mut self.glucose_high),
            "glucose_elevated" => Some(&mut self.glucose_elevated),
            "smoking" => Some(&mut self.smoking),
            "inactive" => Some(&mut self.inactive),
            "male" => Some(&mut self.male),
            _ => None,
        }
    }

    pub fn entries(&self) -> [(&'static str, u32); 12] {
        [
            ("age_over_65", self.age_over_65),
            ("age_56_to_65", self.age_56_to_65),
            ("age_46_to_55", self.age_46_to_55),
            ("bp_stage_2", self.bp_stage_2),
            ("bp_stage_1", self.bp_stage_1),
            ("cholesterol_high", self.cholesterol_high),
            ("cholesterol_borderline", self.cholesterol_borderline),
            ("glucose_high", self.glucose_high),
            ("glucose_elevated", self.glucose_elevated),
            ("smoking", self.smoking),
            ("inactive", self.inactive),
            ("male", self.male),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRule {
    pub weights: Weights,
    pub threshold: u32,
}

impl Default for ScoringRule {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
