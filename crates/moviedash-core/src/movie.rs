//! Movie record and its row projections.

use serde::{Deserialize, Serialize};

use crate::currency::clean_currency;

/// One row of the IMDB Top 250 dataset as it appears in the CSV.
///
/// Only `rank`, `name`, `year` and `rating` are required columns. Every other
/// text column deserializes to an empty string when missing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MovieRecord {
    pub rank: u32,
    pub name: String,
    pub year: i32,
    pub rating: f64,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub certificate: Option<String>,
    #[serde(default)]
    pub run_time: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub box_office: String,
    #[serde(default)]
    pub casts: String,
    #[serde(default)]
    pub directors: String,
    #[serde(default)]
    pub writers: String,
}

/// A movie with its derived numeric currency fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Position in the Top 250 list (unique).
    pub rank: u32,
    /// Title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// IMDB rating.
    pub rating: f64,
    /// Genre text, possibly several joined by commas ("Crime,Drama").
    pub genre: String,
    /// Rating certificate, absent for unrated rows.
    pub certificate: Option<String>,
    /// Run time as written in the source ("2h 22m").
    pub run_time: String,
    /// Marketing tagline.
    pub tagline: String,
    /// Budget as written in the source.
    pub budget: String,
    /// Box office as written in the source.
    pub box_office: String,
    /// Director(s), as one text value.
    pub directors: String,
    /// Writer(s), as one text value.
    pub writers: String,
    /// Main cast, as one text value.
    pub casts: String,
    /// Budget parsed from `budget`, absent when it holds no number.
    pub budget_clean: Option<f64>,
    /// Box office parsed from `box_office`, absent when it holds no number.
    pub box_office_clean: Option<f64>,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        let budget_clean = clean_currency(&record.budget);
        let box_office_clean = clean_currency(&record.box_office);
        Self {
            rank: record.rank,
            name: record.name,
            year: record.year,
            rating: record.rating,
            genre: record.genre,
            certificate: record
                .certificate
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            run_time: record.run_time,
            tagline: record.tagline,
            budget: record.budget,
            box_office: record.box_office,
            directors: record.directors,
            writers: record.writers,
            casts: record.casts,
            budget_clean,
            box_office_clean,
        }
    }
}

/// A row of the full filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRow {
    /// Rank.
    pub rank: u32,
    /// Title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Rating.
    pub rating: f64,
    /// Genre text.
    pub genre: String,
    /// Certificate.
    pub certificate: Option<String>,
}

impl From<&Movie> for ListingRow {
    fn from(movie: &Movie) -> Self {
        Self {
            rank: movie.rank,
            name: movie.name.clone(),
            year: movie.year,
            rating: movie.rating,
            genre: movie.genre.clone(),
            certificate: movie.certificate.clone(),
        }
    }
}

/// A row of the top-rated table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedRow {
    /// Title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Rating.
    pub rating: f64,
}

impl From<&Movie> for RatedRow {
    fn from(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            year: movie.year,
            rating: movie.rating,
        }
    }
}

/// A row of the top box-office table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxOfficeRow {
    /// Title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Box office as written in the source.
    pub box_office: String,
    /// Parsed box office, used for ordering.
    pub box_office_clean: Option<f64>,
}

impl From<&Movie> for BoxOfficeRow {
    fn from(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            year: movie.year,
            box_office: movie.box_office.clone(),
            box_office_clean: movie.box_office_clean,
        }
    }
}
