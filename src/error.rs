use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Shorthand for building an [`PlannerError::InvalidParameter`]
    pub fn invalid(message: impl Into<String>) -> Self {
        PlannerError::InvalidParameter(message.into())
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::InvalidParameter(_) => "INVALID_PARAMETER",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            PlannerError::Config(_) => "CONFIG_ERROR",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_shape() {
        let error = PlannerError::invalid("duration must be at least 1 day");
        let payload = error.to_error_payload();

        assert_eq!(payload["error"]["code"], "INVALID_PARAMETER");
        assert_eq!(
            payload["error"]["message"],
            "Invalid parameter: duration must be at least 1 day"
        );
    }

    #[test]
    fn test_serde_errors_convert() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let error: PlannerError = err.into();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }
}
