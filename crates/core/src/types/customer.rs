//! Customer profile types.

use serde::{Deserialize, Serialize};

use super::order::OrderRecord;

/// A registered customer.
///
/// At most one profile is active per process; the same shape is stored in the
/// global customer ledger, where `phone` is the uniqueness key. `orders`
/// holds the customer's order history, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

impl CustomerProfile {
    /// Create a profile with no order history.
    #[must_use]
    pub const fn new(name: String, phone: String, location: String) -> Self {
        Self {
            name,
            phone,
            location,
            orders: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_field_defaults_to_empty() {
        // Profiles saved before order history existed lack the field.
        let json = r#"{"name":"Jane","phone":"+256700000000","location":"Kampala"}"#;
        let profile: CustomerProfile = serde_json::from_str(json).unwrap();
        assert!(profile.orders.is_empty());
    }
}
