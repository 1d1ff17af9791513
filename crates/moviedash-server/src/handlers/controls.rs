//! Filter control options handler.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::AppState;
use moviedash_core::Dashboard;

/// Options and defaults for the year slider, genre multi-select and certificate select.
#[utoipa::path(
    get,
    path = "/api/controls",
    tag = "dashboard",
    responses(
        (status = 200, description = "Control options", body = Object)
    )
)]
pub async fn get_controls(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(Dashboard::controls(&state.dataset, &state.settings))
}
