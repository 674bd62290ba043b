//! Order records.
//!
//! An order record is written once by the checkout flow and never edited
//! afterwards - the ledger is append-only. Only `status` is conceptually
//! mutable, and nothing currently moves an order past `Processing`; the
//! other states exist so the ledger can represent them.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Delivered,
    Cancelled,
}

/// A placed order, as persisted in both ledger views.
///
/// The identity fields are immutable once created. `total` is the rendered
/// display amount (`"70,000 UGX"`); `total_amount` carries the same value
/// numerically so projections can sum revenue without parsing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Human-readable order token (e.g. `"ORD-7K2M9QX4"`).
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_location: String,
    /// Human-readable local timestamp captured at creation.
    pub date: String,
    /// Rendered items summary (`"2x Red Velvet Heart, 1x Rolex"`).
    pub items: String,
    /// Rendered total with currency label.
    pub total: String,
    /// Total in whole UGX.
    pub total_amount: u64,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_processing() {
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }

    #[test]
    fn test_record_round_trips_with_camel_case_keys() {
        let record = OrderRecord {
            id: "ORD-AB12CD34".to_string(),
            customer_name: "Jane".to_string(),
            customer_phone: "+256700000000".to_string(),
            customer_location: "Kampala".to_string(),
            date: "04/08/2026, 10:30:00".to_string(),
            items: "2x Vanilla Pearl Gateau".to_string(),
            total: "260,000 UGX".to_string(),
            total_amount: 260_000,
            status: OrderStatus::Processing,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"customerName\""));
        assert!(json.contains("\"totalAmount\""));

        let back: OrderRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
