//! Custom-cake option records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{CakeOptionId, Money};

/// The kind of choice a cake option represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionKind {
    /// Cake flavor (e.g. "Cardamom & Rose").
    Flavor,
    /// Cake filling (e.g. "Honey Buttercream").
    Filling,
    /// Cake size (e.g. "8\" Medium").
    Size,
}

impl OptionKind {
    /// Canonical string form, as stored and served.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flavor => "FLAVOR",
            Self::Filling => "FILLING",
            Self::Size => "SIZE",
        }
    }

    /// Parse from the canonical string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FLAVOR" => Some(Self::Flavor),
            "FILLING" => Some(Self::Filling),
            "SIZE" => Some(Self::Size),
            _ => None,
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An available choice for configuring a custom cake.
///
/// Options are catalog-level; an order captures the option *name* at selection
/// time, never a live reference, so later edits or deletion of an option do
/// not retroactively change historical orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CakeOption {
    /// Option identifier.
    pub id: CakeOptionId,
    /// What this option selects.
    pub kind: OptionKind,
    /// Display name, snapshotted into orders as free text.
    pub name: String,
    /// Additive modifier on top of the base product price.
    pub price_modifier: Money,
}

impl CakeOption {
    /// Create an option with a freshly generated id.
    #[must_use]
    pub fn new(kind: OptionKind, name: impl Into<String>, price_modifier: Money) -> Self {
        Self {
            id: CakeOptionId::generate(),
            kind,
            name: name.into(),
            price_modifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_kind_roundtrip() {
        for kind in [OptionKind::Flavor, OptionKind::Filling, OptionKind::Size] {
            assert_eq!(OptionKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(OptionKind::parse("TOPPING"), None);
    }

    #[test]
    fn option_kind_serde_screaming_snake() {
        let json = serde_json::to_string(&OptionKind::Flavor).unwrap();
        assert_eq!(json, "\"FLAVOR\"");
    }

    #[test]
    fn cake_option_new() {
        let opt = CakeOption::new(OptionKind::Filling, "Apricot Jam", Money::ZERO);
        assert_eq!(opt.kind, OptionKind::Filling);
        assert_eq!(opt.name, "Apricot Jam");
    }
}
