use thiserror::Error;

/// Main error type for the planning system
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid trip parameters: {0}")]
    InvalidTrip(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed model response: {0}")]
    Decode(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Check if this error originated in the model call path (network,
    /// API rejection, or unparseable completion) rather than caller input.
    pub fn is_model_call_error(&self) -> bool {
        matches!(
            self,
            PlannerError::Http(_)
                | PlannerError::Api { .. }
                | PlannerError::Json(_)
                | PlannerError::Decode(_)
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::InvalidTrip(_) => "INVALID_TRIP",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::Api { .. } => "API_ERROR",
            PlannerError::Json(_) => "SERIALIZATION_ERROR",
            PlannerError::Decode(_) => "DECODE_ERROR",
        }
    }
}
