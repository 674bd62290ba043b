//! Morris Cakes Core - Shared domain types.
//!
//! This crate provides the domain model shared across the Morris Cakes
//! storefront components:
//! - `storefront` - The public storefront service (catalog, cart, checkout)
//!
//! # Architecture
//!
//! The core crate contains only types and their pure operations - no I/O, no
//! persistence, no HTTP clients. The cart in particular is a plain value type
//! whose mutations are total functions; everything effectful (ledgers,
//! outward calls) lives in the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Products, cart, customer profiles, orders, and price
//!   formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
