//! Registration and logout handlers.
//!
//! Registration is the whole of authentication here: a customer is whoever
//! the stored profile says they are. Re-registering with the same phone
//! updates the profile in place and keeps the order history.

use axum::{Json, extract::State, http::StatusCode};
use morris_cakes_core::CustomerProfile;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::store::Registration;

/// Register (or re-register) the customer.
#[instrument(skip(state, form), fields(phone = %form.phone))]
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<Registration>,
) -> Result<Json<CustomerProfile>> {
    let profile = state.identity().register(form)?;
    Ok(Json(profile))
}

/// Log the customer out.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode> {
    state.identity().logout()?;
    Ok(StatusCode::NO_CONTENT)
}
