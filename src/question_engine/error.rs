//! Error types for question generation.
//!
//! Both core error kinds are raised synchronously on bad input and carry
//! enough context to tell the caller what to fix.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionError {
    /// Operand bounds are not finite integers, or `min >= max`.
    #[error("Invalid range [{min}, {max}): bounds must be finite integers with min < max")]
    InvalidRange { min: f64, max: f64 },

    /// No weight survived filtering, so nothing can be chosen.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl QuestionError {
    pub fn invalid_range(min: f64, max: f64) -> Self {
        Self::InvalidRange { min, max }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias for question generation.
pub type Result<T> = std::result::Result<T, QuestionError>;
