//! WhatsApp handoff.
//!
//! Builds the `wa.me` deep link that opens a chat pre-filled with the order
//! receipt. The link is fire-and-forget: the service returns the URL and the
//! client opens it in a new browsing context.

use morris_cakes_core::{CartLine, OrderRecord, format_ugx};

/// Compose the order receipt message.
///
/// Multi-line plain text: greeting, order id, customer details, one line per
/// item with its subtotal, and the grand total.
#[must_use]
pub fn order_message(record: &OrderRecord, lines: &[CartLine]) -> String {
    let mut message = String::new();
    message.push_str("Hello Morris Cakes! I'd like to place an order:\n\n");
    message.push_str(&format!("Order {}\n", record.id));
    message.push_str(&format!(
        "{} | {} | {}\n\n",
        record.customer_name, record.customer_phone, record.customer_location
    ));
    for line in lines {
        message.push_str(&format!(
            "{}x {} - {}\n",
            line.quantity,
            line.product.name,
            format_ugx(line.subtotal())
        ));
    }
    message.push_str(&format!("\n*Total: {}*", record.total));
    message
}

/// Build a `wa.me` deep link for `number`, pre-filled with `text`.
///
/// The leading `+` is dropped from the number (the `wa.me` format) and the
/// text is percent-encoded.
#[must_use]
pub fn deep_link(number: &str, text: &str) -> String {
    let digits = number.trim_start_matches('+');
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use morris_cakes_core::{Category, OrderStatus, Product};

    fn jane_order() -> (OrderRecord, Vec<CartLine>) {
        let record = OrderRecord {
            id: "ORD-AB12CD34".to_string(),
            customer_name: "Jane".to_string(),
            customer_phone: "+256700000000".to_string(),
            customer_location: "Kampala".to_string(),
            date: "04/08/2026, 10:30:00".to_string(),
            items: "2x Golden Crust Savory Platter".to_string(),
            total: "70,000 UGX".to_string(),
            total_amount: 70_000,
            status: OrderStatus::Processing,
        };
        let lines = vec![CartLine {
            product: Product {
                id: "a".to_string(),
                name: "Golden Crust Savory Platter".to_string(),
                category: Category::Snacks,
                price: 35_000,
                description: String::new(),
                image: String::new(),
                featured: false,
            },
            quantity: 2,
        }];
        (record, lines)
    }

    #[test]
    fn test_message_carries_customer_and_total() {
        let (record, lines) = jane_order();
        let message = order_message(&record, &lines);

        assert!(message.contains("Jane"));
        assert!(message.contains("ORD-AB12CD34"));
        assert!(message.contains("2x Golden Crust Savory Platter - 70,000 UGX"));
        assert!(message.contains("*Total: 70,000 UGX*"));
    }

    #[test]
    fn test_deep_link_strips_plus_and_encodes_text() {
        let link = deep_link("+256764875008", "Hello Morris Cakes!\n\n*Total: 70,000 UGX*");

        assert!(link.starts_with("https://wa.me/256764875008?text="));
        assert!(!link.contains('+'));
        // Newlines and spaces are percent-encoded.
        assert!(link.contains("%0A"));
        assert!(link.contains("Hello%20Morris%20Cakes%21"));
    }

    #[test]
    fn test_checkout_payload_scenario() {
        // Cart of 2x a 35,000 UGX item for Jane: the handoff payload must
        // carry "70,000 UGX" and "Jane".
        let (record, lines) = jane_order();
        let link = deep_link("+256764875008", &order_message(&record, &lines));

        assert!(link.contains("Jane"));
        assert!(link.contains(&urlencoding::encode("70,000 UGX").into_owned()));
    }
}
