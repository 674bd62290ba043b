//! Cart and checkout route handlers.
//!
//! Cart mutations return the updated cart view so the client never has to
//! refetch; the add response additionally signals that the cart drawer
//! should open. Checkout runs the full orchestration in
//! [`crate::checkout::place_order`].

use axum::{Json, extract::State};
use morris_cakes_core::{Cart, CartLine, OrderRecord, format_ugx};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog;
use crate::checkout;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub subtotal: u64,
    pub image: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.clone(),
            name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
            subtotal: line.subtotal(),
            image: line.product.image.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: u64,
    pub total_display: String,
    pub item_count: u32,
    /// Whether a checkout is currently in flight.
    pub submitting: bool,
}

impl CartView {
    fn new(cart: &Cart, submitting: bool) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineView::from).collect(),
            total: cart.total(),
            total_display: format_ugx(cart.total()),
            item_count: cart.item_count(),
            submitting,
        }
    }
}

/// Add to cart request.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
}

/// Update quantity request.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: String,
    /// Signed quantity delta; the resulting quantity clamps at zero.
    pub delta: i64,
}

/// Remove from cart request.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: String,
}

/// Add response: the updated cart plus the open-drawer signal.
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub cart: CartView,
    /// Adding always opens the cart drawer.
    pub open_cart: bool,
}

/// Checkout response.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order: OrderRecord,
    /// Deep link the client opens for the WhatsApp receipt.
    pub whatsapp_url: String,
    pub intake_delivered: bool,
}

fn view(state: &AppState) -> CartView {
    CartView::new(&state.lock_cart(), state.checkout_gate().is_submitting())
}

/// Current cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(view(&state))
}

/// Add one unit of a product to the cart.
#[instrument(skip(state), fields(product_id = %request.product_id))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    let product = catalog::find(&request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    state.lock_cart().add(product.clone());

    Ok(Json(AddToCartResponse {
        cart: view(&state),
        open_cart: true,
    }))
}

/// Adjust a line quantity by a signed delta.
#[instrument(skip(state), fields(product_id = %request.product_id, delta = request.delta))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateCartRequest>,
) -> Json<CartView> {
    state
        .lock_cart()
        .update_quantity(&request.product_id, request.delta);
    Json(view(&state))
}

/// Drop a line from the cart.
#[instrument(skip(state), fields(product_id = %request.product_id))]
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<RemoveFromCartRequest>,
) -> Json<CartView> {
    state.lock_cart().remove(&request.product_id);
    Json(view(&state))
}

/// Place the order.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Json<CheckoutResponse>> {
    let placed = checkout::place_order(&state).await?;
    Ok(Json(CheckoutResponse {
        order: placed.order,
        whatsapp_url: placed.whatsapp_url,
        intake_delivered: placed.intake_delivered,
    }))
}
