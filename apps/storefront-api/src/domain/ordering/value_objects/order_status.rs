//! Order status in the pickup lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status: `Pending → Paid → Ready → Collected`.
///
/// Every order is created as `Pending`. Status is mutated only by
/// administrative action outside the intake workflow, so no transition
/// function is defined here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order placed, awaiting payment.
    #[default]
    Pending,
    /// Payment received.
    Paid,
    /// Baked and ready for pickup.
    Ready,
    /// Picked up by the customer.
    Collected,
}

impl OrderStatus {
    /// Canonical string form, as stored and served.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Ready => "Ready",
            Self::Collected => "Collected",
        }
    }

    /// Parse from the canonical string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Paid" => Some(Self::Paid),
            "Ready" => Some(Self::Ready),
            "Collected" => Some(Self::Collected),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn status_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Ready,
            OrderStatus::Collected,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("Shipped"), None);
    }

    #[test]
    fn status_serde_uses_title_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"Pending\""
        );
    }
}
