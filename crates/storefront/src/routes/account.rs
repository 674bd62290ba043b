//! Account route handlers.

use axum::{Json, extract::State};
use morris_cakes_core::CustomerProfile;
use tracing::instrument;

use crate::state::AppState;

/// The active profile with its order history, or `null` when nobody is
/// registered.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Option<CustomerProfile>> {
    Json(state.identity().active())
}
