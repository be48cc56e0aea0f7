//! Field-keyed validation errors.
//!
//! Order intake rejections are reported per offending field so the storefront
//! can render them inline next to the form inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Machine-readable rejection codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    /// A required field is missing or blank.
    Required,
    /// Email fails syntax validation.
    InvalidEmail,
    /// The items collection is empty.
    EmptyItems,
    /// Quantity is not a positive integer.
    InvalidQuantity,
    /// A line price is negative.
    NegativePrice,
    /// A product reference did not resolve in the catalog.
    InvalidReference,
    /// Custom-cake lead time not met.
    LeadTimeViolation,
    /// Pickup time is in the past.
    PastPickup,
    /// Caller-supplied total does not match the sum of line prices.
    TotalMismatch,
}

/// A single validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Machine-readable code.
    pub code: ValidationCode,
    /// Human-readable message.
    pub message: String,
}

/// A field-keyed map of validation failures.
///
/// Keys are request field paths (`pickup_datetime`, `items[2].product`, ...).
/// All applicable errors are collected; nothing short-circuits, so a response
/// names every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    /// Create an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure against a field.
    pub fn add(&mut self, field: impl Into<String>, code: ValidationCode, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(FieldError {
            code,
            message: message.into(),
        });
    }

    /// Whether any failure has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failures recorded against a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[FieldError]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Iterate over `(field, failures)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldError])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Convert into `Err(self)` when non-empty.
    ///
    /// # Errors
    ///
    /// Returns `self` if any failure was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, errors) in &self.errors {
            for e in errors {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {}", e.message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
