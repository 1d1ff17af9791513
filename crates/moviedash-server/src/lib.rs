#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_for_each)]
//! `MovieDash` Server - HTTP dashboard and REST API for the IMDB Top 250.
//!
//! The dataset is loaded once at startup and shared read-only by every
//! request. Each dashboard interaction is a pure recomputation over it.
//!
//! ## OpenAPI Documentation
//!
//! The API is documented using OpenAPI 3.0. Access the interactive documentation at:
//! - Swagger UI: `GET /swagger-ui`
//! - OpenAPI JSON: `GET /api-docs/openapi.json`

mod handlers;
mod types;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use moviedash_core::{Dataset, DashboardSettings};

// Re-export types for external use
pub use types::*;

// Re-export handlers for routing
pub use handlers::{
    derive_dashboard, filter_movies, get_controls, get_movie, health_check, index,
    list_directors,
};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// MovieDash API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MovieDash API",
        version = "0.3.0",
        description = "Interactive dashboard over the IMDB Top 250. \
            Filter by year range, genre and certificate, and read the derived tables.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "page", description = "Embedded HTML dashboard"),
        (name = "dashboard", description = "Filter controls and derived displays"),
        (name = "movies", description = "Filtered listing and movie detail"),
        (name = "directors", description = "Director frequency over the full dataset")
    ),
    paths(
        handlers::health::health_check,
        handlers::page::index,
        handlers::controls::get_controls,
        handlers::dashboard::derive_dashboard,
        handlers::dashboard::filter_movies,
        handlers::movies::get_movie,
        handlers::directors::list_directors
    ),
    components(
        schemas(
            DashboardQuery,
            ListingRowResponse,
            FilterResponse,
            MovieResponse,
            DirectorCountResponse,
            DirectorsResponse,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;

// ============================================================================
// Application State
// ============================================================================

/// Application state shared across handlers.
pub struct AppState {
    /// The loaded dataset.
    pub dataset: Arc<Dataset>,
    /// Row limits and default selections.
    pub settings: DashboardSettings,
}

impl AppState {
    /// Wraps a loaded dataset with its dashboard settings.
    pub fn new(dataset: Arc<Dataset>, settings: DashboardSettings) -> Self {
        Self { dataset, settings }
    }
}

/// Build the application router: page, API routes and Swagger UI.
///
/// CORS and request tracing are layered on by the binary.
pub fn router(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/controls", get(get_controls))
        .route("/api/dashboard", post(derive_dashboard))
        .route("/api/movies/filter", post(filter_movies))
        .route("/api/movies/{name}", get(get_movie))
        .route("/api/directors", get(list_directors))
        .with_state(state);

    // Swagger UI (stateless router)
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    api_router.merge(Router::<()>::new().merge(swagger_ui))
}

// ============================================================================
// Tests
// ============================================================================
