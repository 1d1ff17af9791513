//! Dashboard control state for the REPL.
//!
//! Holds the current year range, genre selection, certificate and detail
//! selection. Every dashboard display is re-derived from this state; nothing
//! here touches the dataset.

use moviedash_core::{DashboardRequest, ALL_CERTIFICATES};

/// Control state of one REPL session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSession {
    request: DashboardRequest,
}

impl DashboardSession {
    /// Creates a session with every control at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The request the current controls denote.
    #[must_use]
    pub fn request(&self) -> &DashboardRequest {
        &self.request
    }

    /// Sets the year range from two integer arguments.
    ///
    /// An inverted range is accepted; it simply matches nothing.
    pub fn set_years(&mut self, from: &str, to: &str) -> Result<(), String> {
        let start = parse_year(from)?;
        let end = parse_year(to)?;
        self.request.year_start = Some(start);
        self.request.year_end = Some(end);
        Ok(())
    }

    /// Adds a genre to the selection; selecting the same genre twice is a no-op.
    pub fn add_genre(&mut self, genre: &str) -> Result<(), String> {
        let genre = genre.trim();
        if genre.is_empty() {
            return Err("Genre must not be empty".to_string());
        }
        if !self.request.genres.iter().any(|g| g == genre) {
            self.request.genres.push(genre.to_string());
        }
        Ok(())
    }

    /// Removes a genre from the selection.
    pub fn remove_genre(&mut self, genre: &str) -> Result<(), String> {
        let genre = genre.trim();
        let before = self.request.genres.len();
        self.request.genres.retain(|g| g != genre);
        if self.request.genres.len() == before {
            return Err(format!("Genre '{genre}' is not selected"));
        }
        Ok(())
    }

    /// Clears the genre selection.
    pub fn clear_genres(&mut self) {
        self.request.genres.clear();
    }

    /// Selects a certificate; `options` are the values the dataset offers.
    pub fn set_certificate(&mut self, certificate: &str, options: &[String]) -> Result<(), String> {
        let certificate = certificate.trim();
        if !options.iter().any(|o| o == certificate) {
            return Err(format!(
                "Unknown certificate '{certificate}' (options: {})",
                options.join(", ")
            ));
        }
        self.request.certificate =
            (certificate != ALL_CERTIFICATES).then(|| certificate.to_string());
        Ok(())
    }

    /// Selects the movie shown by the detail viewer.
    pub fn select_movie(&mut self, name: &str) -> Result<(), String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Movie name must not be empty".to_string());
        }
        self.request.movie = Some(name.to_string());
        Ok(())
    }

    /// Resets every control to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the controls as displayable key-value pairs.
    #[must_use]
    pub fn all_settings(&self) -> Vec<(String, String)> {
        let years = match (self.request.year_start, self.request.year_end) {
            (Some(start), Some(end)) => format!("{start}-{end}"),
            _ => "(default)".to_string(),
        };
        let genres = if self.request.genres.is_empty() {
            "(any)".to_string()
        } else {
            self.request.genres.join(" | ")
        };

        vec![
            ("years".to_string(), years),
            ("genres".to_string(), genres),
            (
                "certificate".to_string(),
                self.request
                    .certificate
                    .clone()
                    .unwrap_or_else(|| ALL_CERTIFICATES.to_string()),
            ),
            (
                "movie".to_string(),
                self.request
                    .movie
                    .clone()
                    .unwrap_or_else(|| "(first match)".to_string()),
            ),
        ]
    }
}

fn parse_year(value: &str) -> Result<i32, String> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("Invalid year: {value}"))
}
