//! Validation error types

use thiserror::Error;

/// Validation error for domain models
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field doesn't match its required format
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Numeric field outside its accepted range
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "height",
            min: 2,
            max: 500,
        };
        assert_eq!(err.to_string(), "height must be between 2 and 500");

        let err = ValidationError::InvalidFormat {
            field: "maze id",
            reason: "expected height:width:seed",
        };
        assert_eq!(err.to_string(), "maze id: expected height:width:seed");
    }
}
