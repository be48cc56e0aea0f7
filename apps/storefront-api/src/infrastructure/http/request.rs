//! HTTP request DTOs.

use serde::{Deserialize, Serialize};

/// Query parameters for the product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListQuery {
    /// Restrict to products in the category with this slug.
    #[serde(default)]
    pub category: Option<String>,
    /// Restrict to custom cakes (`true`) or everything else (`false`).
    #[serde(default)]
    pub custom_cake: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_fields_are_optional() {
        let query: ProductListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.category, None);
        assert_eq!(query.custom_cake, None);
    }
}
