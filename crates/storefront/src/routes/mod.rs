//! HTTP route handlers for the storefront.
//!
//! Every endpoint speaks JSON; rendering is the client's concern.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Catalog listing (?category=&q=)
//! GET  /products/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Current cart
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Adjust a line quantity by a delta
//! POST /cart/remove            - Drop a line
//!
//! # Checkout
//! POST /checkout               - Place the order (commit + intake + handoff)
//!
//! # Auth
//! POST /auth/register          - Register / re-register the customer
//! POST /auth/logout            - Log out
//!
//! # Account
//! GET  /account                - Active profile with order history
//!
//! # Consultation
//! POST /consult                - Cake recommendation for an occasion
//!
//! # Admin (passphrase-gated, read-only)
//! GET  /admin/overview         - Ledgers, catalog count, revenue sum
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod consult;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", post(cart::checkout))
        .nest("/auth", auth_routes())
        .route("/account", get(account::index))
        .route("/consult", post(consult::consult))
        .route("/admin/overview", get(admin::overview))
}
