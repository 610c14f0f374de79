use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Undefined result: {context}")]
    UndefinedResult { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CalculatorError {
    fn from(e: serde_json::Error) -> Self {
        CalculatorError::SerializationError(e.to_string())
    }
}
