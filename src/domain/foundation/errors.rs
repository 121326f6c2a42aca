//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' contains duplicate value '{value}'")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Payoff model construction
    MissingData,
    IncompleteTable,
    UnknownStrategy,

    // Cooperative analysis
    InvalidCoalition,

    // Input adapters
    InvalidTrialRecord,
    IoError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MissingData => "MISSING_DATA",
            ErrorCode::IncompleteTable => "INCOMPLETE_TABLE",
            ErrorCode::UnknownStrategy => "UNKNOWN_STRATEGY",
            ErrorCode::InvalidCoalition => "INVALID_COALITION",
            ErrorCode::InvalidTrialRecord => "INVALID_TRIAL_RECORD",
            ErrorCode::IoError => "IO_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// An outcome has no samples for a required measurement.
    pub fn missing_data(outcome: impl fmt::Display, measurement: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MissingData,
            format!("No trial samples of {} for outcome {}", measurement, outcome),
        )
        .with_detail("outcome", outcome.to_string())
        .with_detail("measurement", measurement.to_string())
    }

    /// A coalition outside {}, {U}, {D}, {U,D} was requested.
    pub fn invalid_coalition(members: &[&str]) -> Self {
        Self::new(
            ErrorCode::InvalidCoalition,
            format!("Not a coalition of the two-player game: {{{}}}", members.join(", ")),
        )
    }

    /// A strategy label is not part of a role's strategy set.
    pub fn unknown_strategy(role: impl fmt::Display, label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(
            ErrorCode::UnknownStrategy,
            format!("Strategy '{}' is not available to {}", label, role),
        )
        .with_detail("strategy", label)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("strategies");
        assert_eq!(format!("{}", err), "Field 'strategies' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("percentile", 0.0, 100.0, 150.0);
        assert_eq!(
            format!("{}", err),
            "Field 'percentile' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_duplicate_displays_correctly() {
        let err = ValidationError::duplicate("upstream strategies", "Dam");
        assert_eq!(
            format!("{}", err),
            "Field 'upstream strategies' contains duplicate value 'Dam'"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::IncompleteTable, "Table incomplete");
        assert_eq!(format!("{}", err), "[INCOMPLETE_TABLE] Table incomplete");
    }

    #[test]
    fn missing_data_names_outcome_and_measurement() {
        let err = DomainError::missing_data("(No, Both)", "upstream_cost");
        assert_eq!(err.code, ErrorCode::MissingData);
        assert_eq!(err.details.get("outcome"), Some(&"(No, Both)".to_string()));
        assert_eq!(
            err.details.get("measurement"),
            Some(&"upstream_cost".to_string())
        );
    }

    #[test]
    fn invalid_coalition_lists_members() {
        let err = DomainError::invalid_coalition(&["U", "X"]);
        assert_eq!(err.code, ErrorCode::InvalidCoalition);
        assert!(err.message.contains("{U, X}"));
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::empty_field("weights").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::MissingData), "MISSING_DATA");
        assert_eq!(format!("{}", ErrorCode::InvalidCoalition), "INVALID_COALITION");
    }
}
