//! Global customer ledger.

use morris_cakes_core::CustomerProfile;

use super::{JsonStore, StoreError, keys};

/// The global list of registered customers, unique by phone number.
#[derive(Debug, Clone)]
pub struct CustomerLedger {
    store: JsonStore,
}

impl CustomerLedger {
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// All registered customers, in registration order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the ledger cannot be read.
    pub fn all(&self) -> Result<Vec<CustomerProfile>, StoreError> {
        Ok(self.store.get(keys::CUSTOMER_LEDGER)?.unwrap_or_default())
    }

    /// Insert or replace a customer, keyed by phone.
    ///
    /// A registration with a phone already on the ledger replaces that entry
    /// in place; a new phone is appended.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the ledger cannot be read or written.
    pub fn upsert(&self, profile: &CustomerProfile) -> Result<(), StoreError> {
        let mut customers = self.all()?;
        if let Some(existing) = customers.iter_mut().find(|c| c.phone == profile.phone) {
            *existing = profile.clone();
        } else {
            customers.push(profile.clone());
        }
        self.store.set(keys::CUSTOMER_LEDGER, &customers)
    }
}
