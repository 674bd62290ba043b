//! Order intake client.
//!
//! Sends the one-shot order notification to the form endpoint after the
//! order has been committed locally. The call is deliberately simple: a JSON
//! POST, 2xx means delivered, anything else (including a timeout) is a
//! failure for the checkout policy to interpret. Nothing here ever rolls
//! back the local ledger.

use morris_cakes_core::{CartLine, OrderRecord};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::IntakeConfig;

/// Errors from the order intake call.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// HTTP request failed (connection error or timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("intake endpoint returned status {status}")]
    Api { status: u16 },
}

/// One line of the itemized order breakdown.
#[derive(Debug, Serialize)]
pub struct SubmissionItem {
    pub name: String,
    pub quantity: u32,
    pub price: u64,
    pub subtotal: u64,
}

/// The order notification payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    /// Subject line shown by the form inbox.
    #[serde(rename = "_subject")]
    pub subject: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_location: String,
    pub order_id: String,
    pub order_date: String,
    /// Rendered items summary.
    pub order_items: String,
    /// Total in whole UGX.
    pub total_amount: u64,
    /// Itemized breakdown.
    pub items: Vec<SubmissionItem>,
}

impl OrderSubmission {
    /// Build the payload from a committed order and the cart lines it covers.
    #[must_use]
    pub fn from_order(record: &OrderRecord, lines: &[CartLine]) -> Self {
        Self {
            subject: format!("New order {} from {}", record.id, record.customer_name),
            customer_name: record.customer_name.clone(),
            customer_phone: record.customer_phone.clone(),
            customer_location: record.customer_location.clone(),
            order_id: record.id.clone(),
            order_date: record.date.clone(),
            order_items: record.items.clone(),
            total_amount: record.total_amount,
            items: lines
                .iter()
                .map(|line| SubmissionItem {
                    name: line.product.name.clone(),
                    quantity: line.quantity,
                    price: line.product.price,
                    subtotal: line.subtotal(),
                })
                .collect(),
        }
    }
}

/// Client for the order intake endpoint.
#[derive(Debug, Clone)]
pub struct IntakeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IntakeClient {
    /// Create a new intake client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &IntakeConfig) -> Result<Self, IntakeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Submit the order notification.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Http` on a transport failure or timeout, or
    /// `IntakeError::Api` on a non-success response.
    #[instrument(skip(self, submission), fields(order_id = %submission.order_id))]
    pub async fn submit(&self, submission: &OrderSubmission) -> Result<(), IntakeError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntakeError::Api {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use morris_cakes_core::{Category, OrderStatus, Product};

    #[test]
    fn test_submission_payload_shape() {
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
        let lines = vec![CartLine {
            product: Product {
                id: "c2".to_string(),
                name: "Vanilla Pearl Gateau".to_string(),
                category: Category::Cakes,
                price: 130_000,
                description: String::new(),
                image: String::new(),
                featured: false,
            },
            quantity: 2,
        }];

        let submission = OrderSubmission::from_order(&record, &lines);
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["customerName"], "Jane");
        assert_eq!(json["orderId"], "ORD-AB12CD34");
        assert_eq!(json["totalAmount"], 260_000);
        assert!(json["_subject"].as_str().unwrap().contains("ORD-AB12CD34"));
        assert_eq!(json["items"][0]["name"], "Vanilla Pearl Gateau");
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["subtotal"], 260_000);
    }
}
