//! Checkout orchestration.
//!
//! Turning a cart into an order runs through a fixed sequence: guard against
//! double submission, snapshot the cart, require an active identity, commit
//! the order record to both ledger views, notify the intake endpoint, then
//! clear the cart and hand the receipt off to WhatsApp. The ledger commit
//! always precedes the network call - the local record is the durable one -
//! and the cart is only cleared after the policy's success path.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use morris_cakes_core::{Cart, OrderRecord, OrderStatus, format_ugx};
use rand::Rng;
use thiserror::Error;
use tracing::instrument;

use crate::config::CheckoutPolicy;
use crate::services::whatsapp;
use crate::services::{IntakeError, OrderSubmission};
use crate::state::AppState;
use crate::store::{OrderLedger, StoreError};

const ORDER_ID_LENGTH: usize = 8;

/// Errors from a checkout attempt.
///
/// Everything here is recoverable: the cart and identity are left intact so
/// the customer can retry, and an order that was committed locally before a
/// later step failed stays committed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout with an empty cart. No state change, no side effects.
    #[error("cart is empty")]
    CartEmpty,

    /// Checkout without an active profile. The caller surfaces the
    /// registration flow; no ledger writes or external calls happen.
    #[error("registration required before checkout")]
    RegistrationRequired,

    /// A checkout is already in flight (double-click guard).
    #[error("an order is already being submitted")]
    AlreadySubmitting,

    /// Committing the order to the ledgers failed; the cart is intact.
    #[error("failed to record order: {0}")]
    Ledger(#[from] StoreError),

    /// The intake notification failed under the blocking policy. The order
    /// is already recorded locally; the cart is kept for a retry.
    #[error("order notification failed: {0}")]
    Intake(#[from] IntakeError),
}

/// A successfully placed order.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: OrderRecord,
    /// Deep link for the WhatsApp receipt handoff.
    pub whatsapp_url: String,
    /// Whether the intake notification was delivered (always true under the
    /// blocking policy; best-effort reports the actual outcome).
    pub intake_delivered: bool,
}

/// Mutual exclusion for the one critical section in the system.
///
/// At most one checkout runs per process; a second request while one is in
/// flight is rejected. The flag is released on every exit path - success,
/// handled failure, or panic - because the guard releases it on drop.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    submitting: AtomicBool,
}

impl SubmissionGate {
    /// Try to enter the submitting state.
    ///
    /// Returns `None` if a checkout is already in flight.
    pub fn try_begin(&self) -> Option<SubmissionGuard<'_>> {
        self.submitting
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .ok()?;
        Some(SubmissionGuard { gate: self })
    }

    /// Whether a checkout is currently in flight (the UI's "submitting"
    /// indicator).
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }
}

/// RAII handle for the submitting flag.
pub struct SubmissionGuard<'a> {
    gate: &'a SubmissionGate,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.gate.submitting.store(false, Ordering::Release);
    }
}

/// Generate an order id: `ORD-` plus a random uppercase alphanumeric token.
///
/// The token space (36^8) makes collisions practically negligible, but the
/// ledger is already in hand so a drawn id is checked against it and redrawn
/// on a hit.
fn generate_order_id(ledger: &OrderLedger) -> Result<String, StoreError> {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    loop {
        let mut rng = rand::rng();
        let token: String = (0..ORDER_ID_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                // SAFETY: idx is always within bounds since random_range returns 0..CHARSET.len()
                char::from(*CHARSET.get(idx).expect("idx within bounds"))
            })
            .collect();
        let id = format!("ORD-{token}");
        if !ledger.contains_id(&id)? {
            return Ok(id);
        }
        tracing::debug!(order_id = %id, "order id collision, redrawing");
    }
}

/// Place an order from the current cart and identity.
///
/// On success the cart is empty, both ledger views hold the new record, and
/// the returned [`PlacedOrder`] carries the WhatsApp handoff link. On any
/// error the cart is untouched; see [`CheckoutError`] for what each failure
/// means for already-committed state.
///
/// # Errors
///
/// Returns a [`CheckoutError`] per the transition rules above.
#[instrument(skip(state))]
pub async fn place_order(state: &AppState) -> Result<PlacedOrder, CheckoutError> {
    let _guard = state
        .checkout_gate()
        .try_begin()
        .ok_or(CheckoutError::AlreadySubmitting)?;

    let snapshot: Cart = {
        let cart = state.lock_cart();
        if cart.is_empty() {
            return Err(CheckoutError::CartEmpty);
        }
        cart.clone()
    };

    let Some(mut profile) = state.identity().active() else {
        return Err(CheckoutError::RegistrationRequired);
    };

    let total_amount = snapshot.total();
    let record = OrderRecord {
        id: generate_order_id(state.orders())?,
        customer_name: profile.name.clone(),
        customer_phone: profile.phone.clone(),
        customer_location: profile.location.clone(),
        date: Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
        items: snapshot.summary(),
        total: format_ugx(total_amount),
        total_amount,
        status: OrderStatus::Processing,
    };

    // Local commit first: the order must survive even if the notification
    // never makes it out.
    state.orders().commit(&record, &mut profile)?;
    state.identity().replace_active(profile);

    let submission = OrderSubmission::from_order(&record, snapshot.lines());
    let intake_delivered = match state.intake().submit(&submission).await {
        Ok(()) => true,
        Err(e) => match state.config().checkout_policy {
            CheckoutPolicy::Blocking => return Err(e.into()),
            CheckoutPolicy::BestEffort => {
                tracing::warn!(order_id = %record.id, error = %e, "intake notification failed");
                false
            }
        },
    };

    state.lock_cart().clear();

    let message = whatsapp::order_message(&record, snapshot.lines());
    let whatsapp_url = whatsapp::deep_link(&state.config().whatsapp_number, &message);

    tracing::info!(order_id = %record.id, total = %record.total, "order placed");

    Ok(PlacedOrder {
        order: record,
        whatsapp_url,
        intake_delivered,
    })
}
