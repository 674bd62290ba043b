//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use morris_cakes_core::Cart;

use crate::checkout::SubmissionGate;
use crate::config::StorefrontConfig;
use crate::services::{ConsultClient, IntakeClient, IntakeError};
use crate::store::{CustomerLedger, IdentityStore, JsonStore, OrderLedger, StoreError};

/// Error initializing the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to open data directory: {0}")]
    Store(#[from] StoreError),
    #[error("failed to build intake client: {0}")]
    Intake(#[from] IntakeError),
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the one cart and the one submission
/// gate this process owns - the service models a single customer session, so
/// there is exactly one of each.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: Mutex<Cart>,
    identity: IdentityStore,
    orders: OrderLedger,
    customers: CustomerLedger,
    intake: IntakeClient,
    consult: ConsultClient,
    checkout_gate: SubmissionGate,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Opens the data directory and builds the outward service clients. The
    /// persisted profile is not loaded here - call
    /// [`IdentityStore::restore`] once at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the HTTP
    /// client fails to build.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let store = JsonStore::open(config.data_dir.clone())?;
        let customers = CustomerLedger::new(store.clone());
        let identity = IdentityStore::new(store.clone(), customers.clone());
        let orders = OrderLedger::new(store);
        let intake = IntakeClient::new(&config.intake)?;
        let consult = ConsultClient::new(config.consult.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                cart: Mutex::new(Cart::new()),
                identity,
                orders,
                customers,
                intake,
                consult,
                checkout_gate: SubmissionGate::default(),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Lock the session cart.
    ///
    /// Never blocks for long - all holders are short, synchronous critical
    /// sections.
    pub fn lock_cart(&self) -> MutexGuard<'_, Cart> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a reference to the identity store.
    #[must_use]
    pub fn identity(&self) -> &IdentityStore {
        &self.inner.identity
    }

    /// Get a reference to the order ledger.
    #[must_use]
    pub fn orders(&self) -> &OrderLedger {
        &self.inner.orders
    }

    /// Get a reference to the customer ledger.
    #[must_use]
    pub fn customers(&self) -> &CustomerLedger {
        &self.inner.customers
    }

    /// Get a reference to the order intake client.
    #[must_use]
    pub fn intake(&self) -> &IntakeClient {
        &self.inner.intake
    }

    /// Get a reference to the consultation client.
    #[must_use]
    pub fn consult(&self) -> &ConsultClient {
        &self.inner.consult
    }

    /// Get a reference to the checkout submission gate.
    #[must_use]
    pub fn checkout_gate(&self) -> &SubmissionGate {
        &self.inner.checkout_gate
    }
}
