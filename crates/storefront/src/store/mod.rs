//! Persisted state for the storefront.
//!
//! All durable state lives in a small key-value store: one JSON document per
//! well-known key under the configured data directory. The layout mirrors
//! what the storefront keeps per customer device:
//!
//! - [`keys::ACTIVE_PROFILE`] - the active customer profile (with embedded
//!   order history, most recent first)
//! - [`keys::ORDER_LEDGER`] - every placed order, most recent first
//! - [`keys::CUSTOMER_LEDGER`] - every registered customer, unique by phone
//!
//! The ledgers are append-only; nothing ever updates or deletes a committed
//! order record.

pub mod customers;
pub mod identity;
pub mod orders;

pub use customers::CustomerLedger;
pub use identity::{IdentityStore, RegisterError, Registration};
pub use orders::OrderLedger;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// Active customer profile.
    pub const ACTIVE_PROFILE: &str = "morris_user";
    /// Global order ledger, most recent first.
    pub const ORDER_LEDGER: &str = "morris_orders";
    /// Global customer ledger, unique by phone.
    pub const CUSTOMER_LEDGER: &str = "morris_customers";
}

/// Errors from the key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document is not valid JSON for the requested type.
    #[error("corrupt stored document: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// File-backed JSON key-value store.
///
/// One document per key, written whole on every set. Cheap to clone and share.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: Arc<PathBuf>,
}

impl JsonStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir: Arc::new(dir) })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and deserialize the document stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` when the document exists but does not
    /// parse as `T` - callers that self-heal (the identity restore path)
    /// handle this by discarding the key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Serialize and persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }

    /// Remove the document stored under `key`. Missing keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the removal fails for a reason other than
    /// the key being absent.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
