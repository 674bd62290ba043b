//! Admin overview handler.
//!
//! A read-only projection of the ledgers, gated by a plain passphrase
//! compare. This is deliberately not a security boundary (no hashing, no
//! rate limiting) - it keeps the shop's own phone out of the order list and
//! nothing more.

use axum::{Json, extract::State, http::HeaderMap};
use morris_cakes_core::{CustomerProfile, OrderRecord, format_ugx};
use serde::Serialize;
use tracing::instrument;

use crate::catalog;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Header carrying the admin passphrase.
const PASSPHRASE_HEADER: &str = "x-admin-passphrase";

/// The admin projection: both ledgers plus the headline numbers.
#[derive(Debug, Serialize)]
pub struct AdminOverview {
    /// Every placed order, most recent first.
    pub orders: Vec<OrderRecord>,
    /// Every registered customer.
    pub customers: Vec<CustomerProfile>,
    pub product_count: usize,
    /// Sum of all order totals in whole UGX.
    pub total_revenue: u64,
    pub total_revenue_display: String,
}

fn authorize(headers: &HeaderMap, passphrase: &str) -> Result<()> {
    let provided = headers
        .get(PASSPHRASE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;
    if provided == passphrase {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

/// Read-only overview of orders, customers, and revenue.
#[instrument(skip(state, headers))]
pub async fn overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AdminOverview>> {
    authorize(&headers, &state.config().admin_passphrase)?;

    let orders = state.orders().all()?;
    let customers = state.customers().all()?;
    let total_revenue = orders.iter().map(|o| o.total_amount).sum();

    Ok(Json(AdminOverview {
        orders,
        customers,
        product_count: catalog::products().len(),
        total_revenue,
        total_revenue_display: format_ugx(total_revenue),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_authorize_accepts_matching_passphrase() {
        let mut headers = HeaderMap::new();
        headers.insert(PASSPHRASE_HEADER, HeaderValue::from_static("morris123"));
        assert!(authorize(&headers, "morris123").is_ok());
    }

    #[test]
    fn test_authorize_rejects_missing_or_wrong_passphrase() {
        let headers = HeaderMap::new();
        assert!(matches!(
            authorize(&headers, "morris123"),
            Err(AppError::Unauthorized)
        ));

        let mut headers = HeaderMap::new();
        headers.insert(PASSPHRASE_HEADER, HeaderValue::from_static("guess"));
        assert!(matches!(
            authorize(&headers, "morris123"),
            Err(AppError::Unauthorized)
        ));
    }
}
