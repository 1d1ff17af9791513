//! Movie detail handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::types::{ErrorResponse, MovieResponse};
use crate::AppState;
use moviedash_core::{views, Error};

/// Full attribute set of a movie, looked up by exact name in the whole dataset.
#[utoipa::path(
    get,
    path = "/api/movies/{name}",
    tag = "movies",
    params(
        ("name" = String, Path, description = "Exact movie name")
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    )
)]
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match views::movie_detail(&state.dataset, &name) {
        Some(movie) => Json(MovieResponse::from(movie)).into_response(),
        None => {
            let err = Error::MovieNotFound(name);
            (StatusCode::NOT_FOUND, Json(ErrorResponse::from(&err))).into_response()
        }
    }
}
