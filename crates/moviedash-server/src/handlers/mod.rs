//! HTTP handlers for the MovieDash REST API.
//!
//! This module organizes handlers by display:
//! - `health`: Health check endpoint
//! - `page`: Embedded HTML dashboard
//! - `controls`: Filter control options
//! - `dashboard`: Full dashboard derivation and filtered listing
//! - `movies`: Single-movie detail lookup
//! - `directors`: Director frequency

pub mod controls;
pub mod dashboard;
pub mod directors;
pub mod health;
pub mod movies;
pub mod page;

pub use controls::get_controls;
pub use dashboard::{derive_dashboard, filter_movies};
pub use directors::list_directors;
pub use health::health_check;
pub use movies::get_movie;
pub use page::index;
