//! The order ledger.
//!
//! Orders are recorded in two views: embedded in the owning customer profile
//! and in the global ledger the admin overview reads. A commit writes both,
//! newest first, before checkout is allowed to touch anything external - the
//! local record is the only durable trace of an order.

use morris_cakes_core::{CustomerProfile, OrderRecord};

use super::{JsonStore, StoreError, keys};

/// Append/read store for placed orders.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    store: JsonStore,
}

impl OrderLedger {
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Every placed order, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the ledger cannot be read.
    pub fn all(&self) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(self.store.get(keys::ORDER_LEDGER)?.unwrap_or_default())
    }

    /// Whether an order id already exists on the global ledger.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the ledger cannot be read.
    pub fn contains_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.all()?.iter().any(|o| o.id == id))
    }

    /// Commit an order into both views.
    ///
    /// Prepends the record to `profile.orders` and persists the profile, then
    /// prepends it to the global ledger. The commit counts as successful only
    /// once both writes land; on failure the caller surfaces a retryable
    /// error and leaves the cart untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either view cannot be written.
    pub fn commit(
        &self,
        record: &OrderRecord,
        profile: &mut CustomerProfile,
    ) -> Result<(), StoreError> {
        profile.orders.insert(0, record.clone());
        self.store.set(keys::ACTIVE_PROFILE, profile)?;

        let mut orders = self.all()?;
        orders.insert(0, record.clone());
        self.store.set(keys::ORDER_LEDGER, &orders)
    }
}
