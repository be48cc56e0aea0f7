//! Catalog errors.

use thiserror::Error;

/// Errors from catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No product exists with the given slug or id.
    #[error("Product not found: {reference}")]
    ProductNotFound {
        /// The slug or id that failed to resolve.
        reference: String,
    },

    /// Underlying storage failed.
    #[error("Catalog storage failure: {message}")]
    Storage {
        /// Description of the failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_not_found_display() {
        let err = CatalogError::ProductNotFound {
            reference: "saffron-treat".to_string(),
        };
        assert!(format!("{err}").contains("saffron-treat"));
    }
}
