//! # `MovieDash` Core
//!
//! Data layer of the `MovieDash` IMDB Top 250 dashboard.
//!
//! The dataset is a read-only CSV. It is loaded once into an immutable table,
//! filtered by year range, genre and certificate, and turned into a handful of
//! derived displays (top rated, top box office, director frequency, per-genre
//! leaders and a single-movie detail).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moviedash_core::{Dashboard, DashboardRequest, DashboardSettings, SharedDataset};
//!
//! let shared = SharedDataset::new("movie_ratings.csv");
//! let dataset = shared.get()?;
//!
//! let request = DashboardRequest {
//!     year_start: Some(1990),
//!     year_end: Some(2010),
//!     genres: vec!["Crime".into()],
//!     ..Default::default()
//! };
//! let snapshot = Dashboard::derive(&dataset, &request, &DashboardSettings::default());
//! println!("{} movies", snapshot.count);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_const_for_fn)]

pub mod config;
pub mod currency;
pub mod dashboard;
#[cfg(test)]
mod dashboard_tests;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod movie;
pub mod views;
#[cfg(test)]
mod views_tests;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::{ConfigError, MovieDashConfig};
pub use dashboard::{
    ControlOptions, Dashboard, DashboardRequest, DashboardSettings, DashboardSnapshot,
    DetailPanel, MovieDetail, NO_RESULTS_MESSAGE,
};
pub use dataset::{Dataset, SharedDataset, ALL_CERTIFICATES};
pub use error::{Error, Result};
pub use filter::{CertificateFilter, FilteredView, MovieFilter, YearRange};
pub use movie::{BoxOfficeRow, ListingRow, Movie, RatedRow};
pub use views::{DirectorCount, GenreLeader};
