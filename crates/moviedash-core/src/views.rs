//! View derivations.
//!
//! Each function here derives one display from either a [`FilteredView`] or the
//! whole [`Dataset`]. They share no state and never fail; an empty input gives
//! an empty output.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::dataset::Dataset;
use crate::filter::FilteredView;
use crate::movie::{BoxOfficeRow, ListingRow, Movie, RatedRow};

/// Rows in the top-rated and top box-office tables.
pub const DEFAULT_TOP_N: usize = 5;

/// Directors in the frequency chart.
pub const DEFAULT_DIRECTOR_LIMIT: usize = 10;

/// Number of movies credited to one director value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorCount {
    /// Director text as it appears in the dataset.
    pub director: String,
    /// Number of movies.
    pub count: usize,
}

/// Highest-rated movie within one genre group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreLeader {
    /// Genre value of the group.
    pub genre: String,
    /// Title of the leading movie.
    pub name: String,
    /// Its rating.
    pub rating: f64,
}

/// Full filtered listing, projected to the listing columns, order preserved.
#[must_use]
pub fn listing(view: &FilteredView<'_>) -> Vec<ListingRow> {
    view.rows().iter().map(|m| ListingRow::from(*m)).collect()
}

/// The `n` highest-rated movies; ties keep source order.
#[must_use]
pub fn top_rated(view: &FilteredView<'_>, n: usize) -> Vec<RatedRow> {
    let mut rows: Vec<&Movie> = view.rows().to_vec();
    rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rows.into_iter().take(n).map(RatedRow::from).collect()
}

/// The `n` movies with the largest box office; absent values sort last.
#[must_use]
pub fn top_box_office(view: &FilteredView<'_>, n: usize) -> Vec<BoxOfficeRow> {
    let mut rows: Vec<&Movie> = view.rows().to_vec();
    rows.sort_by(|a, b| descending_absent_last(a.box_office_clean, b.box_office_clean));
    rows.into_iter().take(n).map(BoxOfficeRow::from).collect()
}

fn descending_absent_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Movies per director over the whole dataset, most frequent first.
///
/// Directors are counted by their full text value. Ties keep the order in
/// which each director first appears.
#[must_use]
pub fn director_frequency(dataset: &Dataset, limit: usize) -> Vec<DirectorCount> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, movie) in dataset.movies().iter().enumerate() {
        let director = movie.directors.trim();
        if director.is_empty() {
            continue;
        }
        counts.entry(director).or_insert((0, i)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(director, (count, first))| (director, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(director, count, _)| DirectorCount {
            director: director.to_string(),
            count,
        })
        .collect()
}

/// Highest-rated movie for each distinct genre value in the view.
///
/// Groups are keyed on the full genre text and returned in ascending key
/// order. Within a group the first movie with the maximum rating wins.
#[must_use]
pub fn genre_leaders(view: &FilteredView<'_>) -> Vec<GenreLeader> {
    let mut leaders: BTreeMap<&str, &Movie> = BTreeMap::new();
    for &movie in view.rows() {
        if movie.genre.trim().is_empty() {
            continue;
        }
        leaders
            .entry(movie.genre.as_str())
            .and_modify(|best| {
                if movie.rating > best.rating {
                    *best = movie;
                }
            })
            .or_insert(movie);
    }

    leaders
        .into_iter()
        .map(|(genre, movie)| GenreLeader {
            genre: genre.to_string(),
            name: movie.name.clone(),
            rating: movie.rating,
        })
        .collect()
}

/// Distinct movie names in the view, in view order.
#[must_use]
pub fn selectable_names(view: &FilteredView<'_>) -> Vec<String> {
    crate::dataset::distinct(view.rows().iter().map(|m| m.name.as_str()))
}

/// Full attribute set of the first movie with `name` in the unfiltered dataset.
#[must_use]
pub fn movie_detail<'a>(dataset: &'a Dataset, name: &str) -> Option<&'a Movie> {
    dataset.find_by_name(name)
}
