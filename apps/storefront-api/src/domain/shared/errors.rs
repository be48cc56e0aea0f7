//! Shared domain errors.

use thiserror::Error;

/// Errors produced by value-object validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A value failed validation.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field carrying the invalid value.
        field: String,
        /// Human-readable explanation.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_display() {
        let err = DomainError::InvalidValue {
            field: "price".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(format!("{err}"), "Invalid value for 'price': cannot be negative");
    }
}
