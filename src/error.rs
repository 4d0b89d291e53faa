use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadRiskError {
    /// The form is incomplete. Which fields are missing is logged, not shown.
    #[error("missing input: please fill in all fields")]
    MissingInput,

    #[error("invalid input: {field} is not a valid {expected}")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid input: {field} is out of range ({detail})")]
    OutOfRange { field: &'static str, detail: String },

    #[error("invalid input: malformed submission ({0})")]
    MalformedInput(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CadRiskError {
    /// Errors a user fixes by resubmitting corrected input.
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            CadRiskError::MissingInput
                | CadRiskError::InvalidInput { .. }
                | CadRiskError::OutOfRange { .. }
                | CadRiskError::MalformedInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CadRiskError>;
