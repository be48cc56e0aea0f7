//! Customer contact value object.

use serde::{Deserialize, Serialize};

/// Contact details captured with an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    email: String,
    phone: String,
}

impl Customer {
    /// Create a customer contact record. Field-level validation happens in
    /// the order validator so that all problems are reported together.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Minimal email syntax check: one `@` with a non-empty local part and a
    /// dotted, whitespace-free domain.
    #[must_use]
    pub fn email_is_valid(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return false;
        }
        // Domain needs an interior dot.
        match domain.split_once('.') {
            Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_accessors() {
        let c = Customer::new("Leila", "leila@example.com", "416-555-0100");
        assert_eq!(c.name(), "Leila");
        assert_eq!(c.email(), "leila@example.com");
        assert_eq!(c.phone(), "416-555-0100");
    }

    #[test]
    fn email_valid_cases() {
        assert!(Customer::email_is_valid("leila@example.com"));
        assert!(Customer::email_is_valid("a.b+c@mail.example.co"));
    }

    #[test]
    fn email_invalid_cases() {
        assert!(!Customer::email_is_valid(""));
        assert!(!Customer::email_is_valid("no-at-sign.example.com"));
        assert!(!Customer::email_is_valid("@example.com"));
        assert!(!Customer::email_is_valid("leila@"));
        assert!(!Customer::email_is_valid("leila@example"));
        assert!(!Customer::email_is_valid("leila@.com"));
        assert!(!Customer::email_is_valid("leila@exam ple.com"));
        assert!(!Customer::email_is_valid("leila@@example.com"));
    }
}
