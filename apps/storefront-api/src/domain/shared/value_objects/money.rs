//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::domain::shared::DomainError;

/// A monetary amount.
///
/// Represented as a Decimal for exact arithmetic. Display rounds to 2 decimal
/// places; internal precision is preserved so snapshots compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from cents (integer).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Round to 2 decimal places.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Reject negative amounts.
    ///
    /// # Errors
    ///
    /// Returns error if the amount is below zero.
    pub fn validate_non_negative(&self, field: &str) -> Result<(), DomainError> {
        if self.is_negative() {
            return Err(DomainError::InvalidValue {
                field: field.to_string(),
                message: "Amount cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_from_cents() {
        let m = Money::from_cents(2400);
        assert_eq!(m.amount(), dec!(24.00));
    }

    #[test]
    fn money_display_two_decimals() {
        let m = Money::new(dec!(85));
        assert_eq!(format!("{m}"), "$85.00");
    }

    #[test]
    fn money_times_quantity() {
        let m = Money::new(dec!(15.50));
        assert_eq!(m.times(3).amount(), dec!(46.50));
    }

    #[test]
    fn money_sum() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), dec!(3.50));
    }

    #[test]
    fn money_scale_insensitive_equality() {
        // Snapshot comparisons must not depend on how many trailing zeros
        // the client sent.
        assert_eq!(Money::new(dec!(85.00)), Money::new(dec!(85)));
    }

    #[test]
    fn money_validate_non_negative() {
        assert!(Money::ZERO.validate_non_negative("price").is_ok());
        assert!(Money::new(dec!(-1)).validate_non_negative("price").is_err());
    }

    #[test]
    fn money_round() {
        let m = Money::new(dec!(1.005));
        assert_eq!(m.round().amount(), dec!(1.00));
    }

    #[test]
    fn serde_roundtrip() {
        let m = Money::new(dec!(24.00));
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
