//! Guest Directory Routes
//!
//! Serves the directory loaded at startup. Read-only.

use axum::{extract::State, routing::get, Json, Router};

use crate::models::GuestResponse;
use crate::AppState;

/// List all guests
#[utoipa::path(
    get,
    path = "/api/guests",
    responses(
        (status = 200, description = "Guest directory in directory order", body = Vec<GuestResponse>)
    ),
    tag = "Guests"
)]
pub async fn list_guests(State(state): State<AppState>) -> Json<Vec<GuestResponse>> {
    tracing::debug!("Serving {} guests", state.guests.len());
    Json(state.guests.iter().map(GuestResponse::from).collect())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/guests", get(list_guests))
}
