//! Order Validator
//!
//! Pure-logic gate for order intake. Given a proposed order, the catalog
//! products its lines resolved to, and a single `now` captured at the start of
//! validation, produces either "valid" or a field-keyed rejection map. Performs
//! no writes.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::domain::catalog::Product;
use crate::domain::ordering::aggregate::PlaceOrderCommand;
use crate::domain::ordering::value_objects::{Customer, ValidationCode, ValidationErrors};
use crate::domain::shared::Timestamp;

/// Minimum lead time for orders containing a custom cake: a fixed 72 hours
/// from validation time, not calendar days.
const CUSTOM_CAKE_LEAD_HOURS: i64 = 72;

/// Stateless validator for proposed orders.
pub struct OrderValidator;

impl OrderValidator {
    /// Validate a proposed order.
    ///
    /// `resolved` carries, per line, the product the catalog resolved the
    /// line's reference to (`None` when the reference is unknown). Both
    /// temporal rules are evaluated against the same `now`, so they stay
    /// consistent even if validation takes non-zero time.
    ///
    /// # Errors
    ///
    /// Returns every applicable failure, keyed by request field.
    pub fn validate(
        now: Timestamp,
        cmd: &PlaceOrderCommand,
        resolved: &[Option<Product>],
    ) -> Result<(), ValidationErrors> {
        debug_assert_eq!(cmd.items.len(), resolved.len());

        let mut errors = ValidationErrors::new();

        Self::check_contact(&cmd.customer, &mut errors);
        Self::check_items(cmd, resolved, &mut errors);
        Self::check_pickup(now, cmd, resolved, &mut errors);
        Self::check_total(cmd, &mut errors);

        errors.into_result()
    }

    fn check_contact(customer: &Customer, errors: &mut ValidationErrors) {
        if customer.name().trim().is_empty() {
            errors.add("customer_name", ValidationCode::Required, "This field is required.");
        }
        if customer.email().trim().is_empty() {
            errors.add("email", ValidationCode::Required, "This field is required.");
        } else if !Customer::email_is_valid(customer.email()) {
            errors.add("email", ValidationCode::InvalidEmail, "Enter a valid email address.");
        }
        if customer.phone().trim().is_empty() {
            errors.add("phone", ValidationCode::Required, "This field is required.");
        }
    }

    fn check_items(
        cmd: &PlaceOrderCommand,
        resolved: &[Option<Product>],
        errors: &mut ValidationErrors,
    ) {
        if cmd.items.is_empty() {
            errors.add(
                "items",
                ValidationCode::EmptyItems,
                "An order must contain at least one item.",
            );
            return;
        }

        for (i, (item, product)) in cmd.items.iter().zip(resolved).enumerate() {
            if product.is_none() {
                errors.add(
                    format!("items[{i}].product"),
                    ValidationCode::InvalidReference,
                    format!("Unknown product: {}", item.product_id),
                );
            }
            if item.quantity == 0 {
                errors.add(
                    format!("items[{i}].quantity"),
                    ValidationCode::InvalidQuantity,
                    "Quantity must be a positive integer.",
                );
            }
            if item.price.is_negative() {
                errors.add(
                    format!("items[{i}].price"),
                    ValidationCode::NegativePrice,
                    "Price cannot be negative.",
                );
            }
        }
    }

    fn check_pickup(
        now: Timestamp,
        cmd: &PlaceOrderCommand,
        resolved: &[Option<Product>],
        errors: &mut ValidationErrors,
    ) {
        let has_custom_cake = resolved
            .iter()
            .flatten()
            .any(|product| product.is_custom_cake);

        // Lead-time rule first, then the general past-pickup rule; both are
        // reported when both apply.
        if has_custom_cake {
            let min_pickup = now.plus(Duration::hours(CUSTOM_CAKE_LEAD_HOURS));
            if cmd.pickup_at < min_pickup {
                errors.add(
                    "pickup_datetime",
                    ValidationCode::LeadTimeViolation,
                    "Custom Cakes require a minimum 3-day lead time from the current date.",
                );
            }
        }

        if cmd.pickup_at < now {
            errors.add(
                "pickup_datetime",
                ValidationCode::PastPickup,
                "Pickup time cannot be in the past.",
            );
        }
    }

    fn check_total(cmd: &PlaceOrderCommand, errors: &mut ValidationErrors) {
        if cmd.items.is_empty() {
            return;
        }

        let computed: Decimal = cmd
            .items
            .iter()
            .map(|item| item.price.amount() * Decimal::from(item.quantity))
            .sum();

        if cmd.total_price.amount() != computed {
            errors.add(
                "total_price",
                ValidationCode::TotalMismatch,
                format!("Total does not match the sum of line prices ({computed})."),
            );
        }
    }
}
