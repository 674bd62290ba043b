//! Cake consultation handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Consultation request.
#[derive(Debug, Deserialize)]
pub struct ConsultRequest {
    pub occasion: String,
    pub preferences: String,
}

/// Consultation response.
#[derive(Debug, Serialize)]
pub struct ConsultResponse {
    pub recommendation: String,
}

/// Ask Chef Morris for a recommendation.
///
/// Always answers: service failures fall back to the house recommendation.
#[instrument(skip(state, request))]
pub async fn consult(
    State(state): State<AppState>,
    Json(request): Json<ConsultRequest>,
) -> Json<ConsultResponse> {
    let recommendation = state
        .consult()
        .recommend(&request.occasion, &request.preferences)
        .await;
    Json(ConsultResponse { recommendation })
}
