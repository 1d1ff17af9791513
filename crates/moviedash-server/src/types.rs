//! Request/Response types for the MovieDash REST API.
//!
//! This module contains the data transfer objects used by the API handlers.
//! Dashboard snapshots are served straight from `moviedash-core`; everything
//! with a fixed shape gets an OpenAPI schema here.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use moviedash_core::{DashboardRequest, DirectorCount, ListingRow, Movie};

// ============================================================================
// Dashboard Types
// ============================================================================

/// Current state of the dashboard controls.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DashboardQuery {
    /// First year included; defaults to the slider default.
    #[schema(example = 1990)]
    pub year_start: Option<i32>,
    /// Last year included; defaults to the slider default.
    #[schema(example = 2010)]
    pub year_end: Option<i32>,
    /// Selected genres (case-insensitive substring match, any of).
    #[schema(example = json!(["Crime", "Sci-Fi"]))]
    pub genres: Vec<String>,
    /// Selected certificate, or "All".
    #[schema(example = "R")]
    pub certificate: Option<String>,
    /// Movie selected in the detail viewer.
    #[schema(example = "The Matrix")]
    pub movie: Option<String>,
}

impl From<DashboardQuery> for DashboardRequest {
    fn from(query: DashboardQuery) -> Self {
        Self {
            year_start: query.year_start,
            year_end: query.year_end,
            genres: query.genres,
            certificate: query.certificate,
            movie: query.movie,
        }
    }
}

/// A row of the filtered listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingRowResponse {
    /// Rank in the Top 250.
    pub rank: u32,
    /// Title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// IMDB rating.
    pub rating: f64,
    /// Genre text.
    pub genre: String,
    /// Certificate, null when unrated.
    pub certificate: Option<String>,
}

impl From<ListingRow> for ListingRowResponse {
    fn from(row: ListingRow) -> Self {
        Self {
            rank: row.rank,
            name: row.name,
            year: row.year,
            rating: row.rating,
            genre: row.genre,
            certificate: row.certificate,
        }
    }
}

/// Filtered listing only.
#[derive(Debug, Serialize, ToSchema)]
pub struct FilterResponse {
    /// Number of matching movies.
    pub count: usize,
    /// Matching movies in dataset order.
    pub movies: Vec<ListingRowResponse>,
}

// ============================================================================
// Movie Types
// ============================================================================

/// Full attribute set of one movie.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    /// Rank in the Top 250.
    pub rank: u32,
    /// Title.
    #[schema(example = "The Matrix")]
    pub name: String,
    /// Release year.
    pub year: i32,
    /// IMDB rating.
    pub rating: f64,
    /// Genre text.
    pub genre: String,
    /// Certificate, null when unrated.
    pub certificate: Option<String>,
    /// Run time as written in the dataset.
    pub run_time: String,
    /// Tagline.
    pub tagline: String,
    /// Budget as written in the dataset.
    pub budget: String,
    /// Box office as written in the dataset.
    pub box_office: String,
    /// Director(s).
    pub directors: String,
    /// Writer(s).
    pub writers: String,
    /// Main cast.
    pub casts: String,
    /// Numeric budget, null when the text holds no number.
    pub budget_clean: Option<f64>,
    /// Numeric box office, null when the text holds no number.
    pub box_office_clean: Option<f64>,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            rank: movie.rank,
            name: movie.name.clone(),
            year: movie.year,
            rating: movie.rating,
            genre: movie.genre.clone(),
            certificate: movie.certificate.clone(),
            run_time: movie.run_time.clone(),
            tagline: movie.tagline.clone(),
            budget: movie.budget.clone(),
            box_office: movie.box_office.clone(),
            directors: movie.directors.clone(),
            writers: movie.writers.clone(),
            casts: movie.casts.clone(),
            budget_clean: movie.budget_clean,
            box_office_clean: movie.box_office_clean,
        }
    }
}

// ============================================================================
// Director Types
// ============================================================================

/// Query parameters for the director frequency chart.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DirectorsQuery {
    /// Number of directors to return (1-250, default 10).
    pub limit: Option<usize>,
}

/// Movie count for one director.
#[derive(Debug, Serialize, ToSchema)]
pub struct DirectorCountResponse {
    /// Director text.
    pub director: String,
    /// Number of movies in the dataset.
    pub count: usize,
}

impl From<DirectorCount> for DirectorCountResponse {
    fn from(d: DirectorCount) -> Self {
        Self {
            director: d.director,
            count: d.count,
        }
    }
}

/// Director frequency over the whole dataset.
#[derive(Debug, Serialize, ToSchema)]
pub struct DirectorsResponse {
    /// Directors, most frequent first.
    pub directors: Vec<DirectorCountResponse>,
}

// ============================================================================
// Errors
// ============================================================================

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Stable error code, when the error came from the dataset layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// Error without a code.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }
}

impl From<&moviedash_core::Error> for ErrorResponse {
    fn from(err: &moviedash_core::Error) -> Self {
        Self {
            error: err.to_string(),
            code: Some(err.code().to_string()),
        }
    }
}
