//! Error types for `MovieDash`.
//!
//! Only dataset loading can fail in practice. Filtering, sorting and grouping
//! are total over the in-memory table, and currency cleaning recovers locally
//! by producing an absent value instead of an error.

use thiserror::Error;

/// Result type alias for `MovieDash` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `MovieDash` operations.
///
/// Error codes follow the pattern `MDASH-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset file not found (MDASH-001).
    #[error("[MDASH-001] Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Dataset could not be parsed (MDASH-002).
    #[error("[MDASH-002] Malformed dataset: {0}")]
    MalformedDataset(String),

    /// Two records share the same rank (MDASH-003).
    #[error("[MDASH-003] Duplicate rank {rank} (rows {first_row} and {second_row})")]
    DuplicateRank {
        /// The repeated rank value.
        rank: u32,
        /// 1-based data row of the first occurrence.
        first_row: usize,
        /// 1-based data row of the repeated occurrence.
        second_row: usize,
    },

    /// Movie name not present in the dataset (MDASH-004).
    #[error("[MDASH-004] Movie '{0}' not found")]
    MovieNotFound(String),

    /// Configuration error (MDASH-005).
    #[error("[MDASH-005] Configuration error: {0}")]
    Config(String),

    /// IO error (MDASH-006).
    #[error("[MDASH-006] IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the error code (e.g., "MDASH-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DatasetNotFound(_) => "MDASH-001",
            Self::MalformedDataset(_) => "MDASH-002",
            Self::DuplicateRank { .. } => "MDASH-003",
            Self::MovieNotFound(_) => "MDASH-004",
            Self::Config(_) => "MDASH-005",
            Self::Io(_) => "MDASH-006",
        }
    }

    /// Returns true if this error must abort startup.
    ///
    /// Every dataset-load failure is fatal; there is no partial-load recovery.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DatasetNotFound(_)
                | Self::MalformedDataset(_)
                | Self::DuplicateRank { .. }
                | Self::Io(_)
        )
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::MalformedDataset(err.to_string())
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
