//! Core types for the Morris Cakes storefront.

pub mod cart;
pub mod customer;
pub mod order;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLine};
pub use customer::CustomerProfile;
pub use order::{OrderRecord, OrderStatus};
pub use price::format_ugx;
pub use product::{Category, ParseCategoryError, Product};
