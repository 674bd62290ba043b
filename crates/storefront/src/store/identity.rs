//! Active customer identity.
//!
//! At most one customer is "logged in" at a time. The active profile is held
//! in memory and persisted under [`keys::ACTIVE_PROFILE`] so it survives
//! restarts; the restore path self-heals by discarding a stored document that
//! no longer parses.

use std::sync::RwLock;

use morris_cakes_core::CustomerProfile;
use serde::Deserialize;
use thiserror::Error;

use super::{CustomerLedger, JsonStore, StoreError, keys};

/// Registration form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub location: String,
}

/// Errors from registering a customer.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("name is required")]
    MissingName,

    #[error("phone number is required")]
    MissingPhone,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Holder of the active customer profile.
#[derive(Debug)]
pub struct IdentityStore {
    store: JsonStore,
    customers: CustomerLedger,
    active: RwLock<Option<CustomerProfile>>,
}

impl IdentityStore {
    #[must_use]
    pub fn new(store: JsonStore, customers: CustomerLedger) -> Self {
        Self {
            store,
            customers,
            active: RwLock::new(None),
        }
    }

    /// The active profile, if any.
    #[must_use]
    pub fn active(&self) -> Option<CustomerProfile> {
        self.active
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Load the persisted profile once at startup.
    ///
    /// A document that fails to parse is discarded and its key cleared - the
    /// customer simply isn't logged in, which is not an error. A parsed
    /// profile with a blank name is likewise ignored.
    pub fn restore(&self) {
        match self.store.get::<CustomerProfile>(keys::ACTIVE_PROFILE) {
            Ok(Some(profile)) if !profile.name.trim().is_empty() => {
                tracing::info!(customer = %profile.name, "restored active profile");
                self.replace_active(profile);
            }
            Ok(_) => {}
            Err(StoreError::Corrupt(e)) => {
                tracing::warn!(error = %e, "discarding corrupt stored profile");
                if let Err(e) = self.store.remove(keys::ACTIVE_PROFILE) {
                    tracing::warn!(error = %e, "failed to clear corrupt profile");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored profile");
            }
        }
    }

    /// Register (or re-register) the customer.
    ///
    /// Order history carries over from the profile being replaced, so
    /// re-registering never wipes past orders. The customer is also upserted
    /// into the global customer ledger, keyed by phone.
    ///
    /// # Errors
    ///
    /// Returns `RegisterError::MissingName`/`MissingPhone` when the required
    /// fields are blank, or a `StoreError` if persisting fails.
    pub fn register(&self, form: Registration) -> Result<CustomerProfile, RegisterError> {
        if form.name.trim().is_empty() {
            return Err(RegisterError::MissingName);
        }
        if form.phone.trim().is_empty() {
            return Err(RegisterError::MissingPhone);
        }

        let orders = self.active().map(|p| p.orders).unwrap_or_default();
        let profile = CustomerProfile {
            name: form.name,
            phone: form.phone,
            location: form.location,
            orders,
        };

        self.store.set(keys::ACTIVE_PROFILE, &profile)?;
        self.customers.upsert(&profile)?;
        self.replace_active(profile.clone());

        Ok(profile)
    }

    /// Log the customer out: drop the in-memory profile and clear its key.
    ///
    /// The customer and order ledgers are untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key cannot be cleared.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.remove(keys::ACTIVE_PROFILE)?;
        *self
            .active
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }

    /// Swap the in-memory profile without touching storage.
    ///
    /// Used after an order-ledger commit, which persists the updated profile
    /// itself.
    pub fn replace_active(&self, profile: CustomerProfile) {
        *self
            .active
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(profile);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use morris_cakes_core::{OrderRecord, OrderStatus};

    fn identity(dir: &std::path::Path) -> IdentityStore {
        let store = JsonStore::open(dir).unwrap();
        IdentityStore::new(store.clone(), CustomerLedger::new(store))
    }

    fn registration(name: &str, phone: &str) -> Registration {
        Registration {
            name: name.to_string(),
            phone: phone.to_string(),
            location: "Kampala".to_string(),
        }
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        let dir = tempfile::tempdir().unwrap();
        let identity = identity(dir.path());

        assert!(matches!(
            identity.register(registration("   ", "+256700000001")),
            Err(RegisterError::MissingName)
        ));
        assert!(matches!(
            identity.register(registration("Jane", "")),
            Err(RegisterError::MissingPhone)
        ));
        assert!(identity.active().is_none());
    }

    #[test]
    fn test_register_persists_and_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let identity = identity(dir.path());
            identity
                .register(registration("Jane", "+256700000001"))
                .unwrap();
        }

        let identity = identity(dir.path());
        assert!(identity.active().is_none());
        identity.restore();
        assert_eq!(identity.active().unwrap().name, "Jane");
    }

    #[test]
    fn test_restore_discards_corrupt_profile() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("morris_user.json"), "{broken").unwrap();

        let identity = identity(dir.path());
        identity.restore();

        assert!(identity.active().is_none());
        // The corrupt key was cleared, so a later restore sees nothing.
        assert!(!dir.path().join("morris_user.json").exists());
    }

    #[test]
    fn test_reregistering_preserves_order_history() {
        let dir = tempfile::tempdir().unwrap();
        let identity = identity(dir.path());
        identity
            .register(registration("Jane", "+256700000001"))
            .unwrap();

        let mut with_order = identity.active().unwrap();
        with_order.orders.push(OrderRecord {
            id: "ORD-TEST0001".to_string(),
            customer_name: "Jane".to_string(),
            customer_phone: "+256700000001".to_string(),
            customer_location: "Kampala".to_string(),
            date: "04/08/2026, 09:00:00".to_string(),
            items: "1x Rustic Heritage Brown Bread".to_string(),
            total: "10,000 UGX".to_string(),
            total_amount: 10_000,
            status: OrderStatus::Processing,
        });
        identity.replace_active(with_order);

        let updated = identity
            .register(registration("Jane Namuli", "+256700000001"))
            .unwrap();
        assert_eq!(updated.name, "Jane Namuli");
        assert_eq!(updated.orders.len(), 1);
    }

    #[test]
    fn test_register_upserts_customer_ledger_by_phone() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let customers = CustomerLedger::new(store.clone());
        let identity = IdentityStore::new(store, customers.clone());

        identity
            .register(registration("Jane", "+256700000001"))
            .unwrap();
        identity
            .register(registration("Jane Namuli", "+256700000001"))
            .unwrap();

        let all = customers.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Jane Namuli");
    }

    #[test]
    fn test_logout_clears_active_but_not_ledgers() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let customers = CustomerLedger::new(store.clone());
        let identity = IdentityStore::new(store, customers.clone());

        identity
            .register(registration("Jane", "+256700000001"))
            .unwrap();
        identity.logout().unwrap();

        assert!(identity.active().is_none());
        assert_eq!(customers.all().unwrap().len(), 1);

        identity.restore();
        assert!(identity.active().is_none());
    }
}
