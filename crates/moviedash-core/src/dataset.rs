//! Dataset loading and the load-once table.
//!
//! The dataset is read from CSV exactly once, cleaned, and then shared as an
//! immutable `Arc<Dataset>` for the lifetime of the process. Nothing writes to
//! it after load; filtering only ever borrows rows.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::movie::{Movie, MovieRecord};

/// Certificate option meaning "no certificate constraint".
pub const ALL_CERTIFICATES: &str = "All";

/// The in-memory movie table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    movies: Vec<Movie>,
}

impl Dataset {
    /// Builds a dataset from already-cleaned movies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRank`] if two movies share a rank.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut seen: HashMap<u32, usize> = HashMap::with_capacity(movies.len());
        for (i, movie) in movies.iter().enumerate() {
            if let Some(first) = seen.insert(movie.rank, i + 1) {
                return Err(Error::DuplicateRank {
                    rank: movie.rank,
                    first_row: first,
                    second_row: i + 1,
                });
            }
        }
        Ok(Self { movies })
    }

    /// Loads the dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatasetNotFound`] if the file does not exist, and
    /// [`Error::MalformedDataset`] or [`Error::DuplicateRank`] if its content is invalid.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::DatasetNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        let dataset = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            Error::MalformedDataset(msg) => {
                Error::MalformedDataset(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Loaded movie dataset"
        );
        Ok(dataset)
    }

    /// Loads the dataset from any CSV reader with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDataset`] if a row cannot be parsed or holds a
    /// non-finite rating, and [`Error::DuplicateRank`] if two rows share a rank.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

        let mut movies = Vec::new();
        for (i, record) in csv_reader.deserialize::<MovieRecord>().enumerate() {
            let record = record
                .map_err(|e| Error::MalformedDataset(format!("row {}: {e}", i + 1)))?;
            if !record.rating.is_finite() {
                return Err(Error::MalformedDataset(format!(
                    "row {}: rating {} is not a finite number",
                    i + 1,
                    record.rating
                )));
            }
            movies.push(Movie::from(record));
        }

        let unparsed_budget = movies
            .iter()
            .filter(|m| m.budget_clean.is_none() && !m.budget.trim().is_empty())
            .count();
        let unparsed_box_office = movies
            .iter()
            .filter(|m| m.box_office_clean.is_none() && !m.box_office.trim().is_empty())
            .count();
        if unparsed_budget + unparsed_box_office > 0 {
            tracing::warn!(
                unparsed_budget,
                unparsed_box_office,
                "Some currency values hold no number and were left absent"
            );
        }

        Self::from_movies(movies)
    }

    /// All movies in source order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of movies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns true if the dataset holds no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Earliest and latest release year, or `None` for an empty dataset.
    #[must_use]
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.movies.iter().map(|m| m.year).min()?;
        let max = self.movies.iter().map(|m| m.year).max()?;
        Some((min, max))
    }

    /// Distinct non-empty genre values in first-occurrence order.
    #[must_use]
    pub fn genre_options(&self) -> Vec<String> {
        distinct(self.movies.iter().map(|m| m.genre.as_str()))
    }

    /// `"All"` followed by the distinct certificates in first-occurrence order.
    #[must_use]
    pub fn certificate_options(&self) -> Vec<String> {
        let mut options = vec![ALL_CERTIFICATES.to_string()];
        options.extend(distinct(
            self.movies.iter().filter_map(|m| m.certificate.as_deref()),
        ));
        options
    }

    /// First movie whose name matches exactly.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.name == name)
    }
}

pub(crate) fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Load-once table
// ============================================================================

/// A dataset that is read from disk on first access and never again.
///
/// Concurrent first calls serialize on an init guard, so the file is parsed
/// exactly once. A failed load leaves the cell empty and the next call retries.
#[derive(Debug)]
pub struct SharedDataset {
    path: PathBuf,
    cell: OnceLock<Arc<Dataset>>,
    init: Mutex<()>,
}

impl SharedDataset {
    /// Creates an unloaded handle for the given CSV path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Path this handle loads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true once the dataset has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the dataset, loading it on first call.
    ///
    /// # Errors
    ///
    /// Returns the load error if the first load fails.
    pub fn get(&self) -> Result<Arc<Dataset>> {
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }

        let _guard = self.init.lock();
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(Dataset::from_path(&self.path)?);
        let _ = self.cell.set(Arc::clone(&dataset));
        Ok(dataset)
    }
}

static GLOBAL: OnceLock<Arc<Dataset>> = OnceLock::new();
static GLOBAL_INIT: Mutex<()> = Mutex::new(());

/// Process-wide dataset.
///
/// The first call that loads successfully fixes the table; later calls return
/// it whatever path they pass. A failed load stores nothing, so a later call
/// with a valid path still loads.
///
/// # Errors
///
/// Returns the load error if the dataset has not been loaded yet and loading fails.
pub fn global<P: AsRef<Path>>(path: P) -> Result<Arc<Dataset>> {
    if let Some(dataset) = GLOBAL.get() {
        return Ok(Arc::clone(dataset));
    }

    let _guard = GLOBAL_INIT.lock();
    if let Some(dataset) = GLOBAL.get() {
        return Ok(Arc::clone(dataset));
    }

    let dataset = Arc::new(Dataset::from_path(path)?);
    let _ = GLOBAL.set(Arc::clone(&dataset));
    Ok(dataset)
}
