//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Window for '{field}' ends before it starts")]
    InvertedWindow { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an inverted time window error.
    pub fn inverted_window(field: impl Into<String>) -> Self {
        ValidationError::InvertedWindow { field: field.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("case_id");
        assert_eq!(format!("{}", err), "Field 'case_id' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("relationship", "unknown variant");
        assert_eq!(
            format!("{}", err),
            "Field 'relationship' has invalid format: unknown variant"
        );
    }

    #[test]
    fn validation_error_inverted_window_displays_correctly() {
        let err = ValidationError::inverted_window("pilot");
        assert_eq!(format!("{}", err), "Window for 'pilot' ends before it starts");
    }
}
