//! Error types and handling for `RiskMap`
//!
//! Scoring itself is total and never produces one of these; they surface
//! from configuration loading and the command line front-end.

use thiserror::Error;

/// Main error type for the `RiskMap` application
#[derive(Error, Debug)]
pub enum RiskMapError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Output serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl RiskMapError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RiskMapError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file.")
            }
            RiskMapError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            RiskMapError::Serialization { .. } => {
                "Could not encode the assessment for output.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = RiskMapError::config("bad zoom");
        assert!(matches!(config_err, RiskMapError::Config { .. }));

        let validation_err = RiskMapError::validation("count must be positive");
        assert!(matches!(validation_err, RiskMapError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = RiskMapError::config("zoom too large");
        assert!(config_err.user_message().contains("zoom too large"));
        assert!(config_err.user_message().contains("config file"));

        let validation_err = RiskMapError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: RiskMapError = json_err.into();
        assert!(matches!(err, RiskMapError::Serialization { .. }));
        assert!(err.user_message().contains("encode the assessment"));
    }
}
