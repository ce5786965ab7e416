use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Weather request failed: {0}")]
    WeatherRequest(String),

    #[error("Weather response could not be decoded: {0}")]
    WeatherDecode(String),

    #[error("Completion API error (HTTP {status}): {message}")]
    Completion { status: u16, message: String },

    #[error("Completion response could not be decoded: {0}")]
    CompletionDecode(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::WeatherRequest(_) => "WEATHER_REQUEST_ERROR",
            PlannerError::WeatherDecode(_) => "WEATHER_DECODE_ERROR",
            PlannerError::Completion { .. } => "COMPLETION_ERROR",
            PlannerError::CompletionDecode(_) => "COMPLETION_DECODE_ERROR",
            PlannerError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        })
    }
}
