//! Filter engine.
//!
//! A [`MovieFilter`] is a conjunction of three independent predicates: an
//! inclusive year range, an optional genre set and an optional certificate.
//! An empty genre set or [`CertificateFilter::All`] skips that predicate
//! entirely. Applying a filter borrows rows from the dataset and never
//! alters it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dataset::{Dataset, ALL_CERTIFICATES};
use crate::movie::Movie;

/// Inclusive year range. A range with `start > end` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First year included.
    pub start: i32,
    /// Last year included.
    pub end: i32,
}

impl YearRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Returns true if `year` lies within the range.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Clamps this range into `bounds`, or returns `None` if nothing of it remains.
    #[must_use]
    pub fn clamp_to(&self, bounds: (i32, i32)) -> Option<Self> {
        let start = self.start.max(bounds.0);
        let end = self.end.min(bounds.1);
        (start <= end).then_some(Self { start, end })
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Certificate constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum CertificateFilter {
    /// No constraint.
    #[default]
    All,
    /// Certificate must equal this value exactly.
    Only(String),
}

impl CertificateFilter {
    /// Parses a selector value: `"All"` means no constraint, anything else is exact.
    #[must_use]
    pub fn parse(selection: &str) -> Self {
        if selection == ALL_CERTIFICATES {
            Self::All
        } else {
            Self::Only(selection.to_string())
        }
    }

    /// Returns true if `certificate` satisfies the constraint.
    ///
    /// A missing certificate never equals a selected value.
    #[must_use]
    pub fn matches(&self, certificate: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => certificate == Some(wanted.as_str()),
        }
    }

    /// The selector value this filter corresponds to.
    #[must_use]
    pub fn as_selection(&self) -> &str {
        match self {
            Self::All => ALL_CERTIFICATES,
            Self::Only(value) => value,
        }
    }
}

/// The user's current filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieFilter {
    /// Inclusive year range.
    pub years: YearRange,
    /// Selected genres; empty means no genre constraint.
    pub genres: Vec<String>,
    /// Certificate constraint.
    pub certificate: CertificateFilter,
}

impl MovieFilter {
    /// A filter with only a year range.
    #[must_use]
    pub fn years(start: i32, end: i32) -> Self {
        Self {
            years: YearRange::new(start, end),
            genres: Vec::new(),
            certificate: CertificateFilter::All,
        }
    }

    /// Adds genres to select.
    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    /// Sets the certificate constraint.
    #[must_use]
    pub fn with_certificate(mut self, certificate: CertificateFilter) -> Self {
        self.certificate = certificate;
        self
    }

    /// Returns true if a genre constraint is active.
    #[must_use]
    pub fn has_genre_filter(&self) -> bool {
        !self.genres.is_empty()
    }

    /// Returns true if `movie` satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        self.years.contains(movie.year)
            && self.matches_genre(movie)
            && self.certificate.matches(movie.certificate.as_deref())
    }

    fn matches_genre(&self, movie: &Movie) -> bool {
        if self.genres.is_empty() {
            return true;
        }
        let haystack = movie.genre.to_lowercase();
        self.genres
            .iter()
            .any(|g| haystack.contains(&g.to_lowercase()))
    }

    /// Applies the filter, returning the matching rows in source order.
    #[must_use]
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        let rows: Vec<&Movie> = dataset.movies().iter().filter(|m| self.matches(m)).collect();
        tracing::debug!(
            years = %self.years,
            genres = ?self.genres,
            certificate = self.certificate.as_selection(),
            rows = rows.len(),
            "Applied movie filter"
        );
        FilteredView { rows }
    }
}

/// Rows of a dataset that matched a filter, in source order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    rows: Vec<&'a Movie>,
}

impl<'a> FilteredView<'a> {
    /// A view holding every row of the dataset.
    #[must_use]
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            rows: dataset.movies().iter().collect(),
        }
    }

    /// Matching rows.
    #[must_use]
    pub fn rows(&self) -> &[&'a Movie] {
        &self.rows
    }

    /// Number of matching rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ranks of the matching rows, in view order.
    #[must_use]
    pub fn ranks(&self) -> Vec<u32> {
        self.rows.iter().map(|m| m.rank).collect()
    }
}
