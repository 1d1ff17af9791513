//! Director frequency handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::types::{DirectorCountResponse, DirectorsQuery, DirectorsResponse, ErrorResponse};
use crate::AppState;
use moviedash_core::{config::MAX_ROW_LIMIT, views};

/// Most frequent directors across the whole dataset.
///
/// The result never depends on the dashboard filters.
#[utoipa::path(
    get,
    path = "/api/directors",
    tag = "directors",
    params(DirectorsQuery),
    responses(
        (status = 200, description = "Director frequency", body = DirectorsResponse),
        (status = 400, description = "Invalid limit", body = ErrorResponse)
    )
)]
pub async fn list_directors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DirectorsQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(state.settings.director_limit);
    if limit == 0 || limit > MAX_ROW_LIMIT {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!(
                "limit must be between 1 and {MAX_ROW_LIMIT}, got {limit}"
            ))),
        )
            .into_response();
    }

    let directors = views::director_frequency(&state.dataset, limit)
        .into_iter()
        .map(DirectorCountResponse::from)
        .collect();

    Json(DirectorsResponse { directors }).into_response()
}
