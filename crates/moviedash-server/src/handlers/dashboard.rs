//! Dashboard derivation handlers.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::types::{DashboardQuery, FilterResponse, ListingRowResponse};
use crate::AppState;
use moviedash_core::{views, Dashboard, DashboardRequest};

/// Derive every dashboard display for the given control state.
///
/// Director frequency is always computed over the full dataset; the detail
/// panel falls back to the first matching movie, or a "no results" notice.
#[utoipa::path(
    post,
    path = "/api/dashboard",
    tag = "dashboard",
    request_body = DashboardQuery,
    responses(
        (status = 200, description = "Dashboard snapshot", body = Object)
    )
)]
pub async fn derive_dashboard(
    State(state): State<Arc<AppState>>,
    Json(query): Json<DashboardQuery>,
) -> impl IntoResponse {
    let request = DashboardRequest::from(query);
    let snapshot = Dashboard::derive(&state.dataset, &request, &state.settings);
    tracing::debug!(count = snapshot.count, "Served dashboard snapshot");
    Json(snapshot)
}

/// Filtered listing only.
#[utoipa::path(
    post,
    path = "/api/movies/filter",
    tag = "movies",
    request_body = DashboardQuery,
    responses(
        (status = 200, description = "Movies matching the filters", body = FilterResponse)
    )
)]
pub async fn filter_movies(
    State(state): State<Arc<AppState>>,
    Json(query): Json<DashboardQuery>,
) -> impl IntoResponse {
    let request = DashboardRequest::from(query);
    let filter = Dashboard::resolve_filter(&state.dataset, &request, &state.settings);
    let view = filter.apply(&state.dataset);

    let movies: Vec<ListingRowResponse> = views::listing(&view)
        .into_iter()
        .map(ListingRowResponse::from)
        .collect();

    Json(FilterResponse {
        count: movies.len(),
        movies,
    })
}
