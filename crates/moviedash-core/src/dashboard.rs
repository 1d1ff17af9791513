//! Dashboard derivation.
//!
//! [`Dashboard::derive`] is the single re-render step: given the loaded
//! dataset and the current control state it computes every display at once.
//! It is a pure function and is invoked again on every control change.

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::dataset::{Dataset, ALL_CERTIFICATES};
use crate::filter::{CertificateFilter, MovieFilter, YearRange};
use crate::movie::{BoxOfficeRow, ListingRow, Movie, RatedRow};
use crate::views::{self, DirectorCount, GenreLeader, DEFAULT_DIRECTOR_LIMIT, DEFAULT_TOP_N};

/// Notice shown in place of the detail panel when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No movies match your filter criteria.";

/// Row limits and initial selection used when deriving a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Preferred initial year range, clamped into the dataset bounds.
    pub default_years: YearRange,
    /// Rows in the top-rated and top box-office tables.
    pub top_n: usize,
    /// Rows in the director frequency chart.
    pub director_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_years: YearRange::new(2000, 2025),
            top_n: DEFAULT_TOP_N,
            director_limit: DEFAULT_DIRECTOR_LIMIT,
        }
    }
}

impl From<&DashboardConfig> for DashboardSettings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            default_years: YearRange::new(config.default_year_start, config.default_year_end),
            top_n: config.top_n,
            director_limit: config.director_limit,
        }
    }
}

/// Control state sent by a surface on every interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardRequest {
    /// Lower end of the year range; defaults to the control default.
    pub year_start: Option<i32>,
    /// Upper end of the year range; defaults to the control default.
    pub year_end: Option<i32>,
    /// Selected genres.
    pub genres: Vec<String>,
    /// Selected certificate, `"All"` when absent.
    pub certificate: Option<String>,
    /// Movie selected in the detail viewer.
    pub movie: Option<String>,
}

/// Options and defaults for the three filter controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlOptions {
    /// Earliest and latest year in the dataset; the slider bounds.
    pub year_bounds: Option<YearRange>,
    /// Initial slider selection.
    pub default_years: YearRange,
    /// Genre multi-select options.
    pub genres: Vec<String>,
    /// Certificate options, starting with `"All"`.
    pub certificates: Vec<String>,
    /// Initial certificate selection.
    pub default_certificate: String,
}

/// Full attribute set of one movie, as shown by the detail viewer.
pub type MovieDetail = Movie;

/// Detail viewer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailPanel {
    /// A movie is selected.
    Movie {
        /// The selected movie, looked up in the unfiltered dataset.
        movie: Box<MovieDetail>,
    },
    /// The filtered view is empty.
    NoResults {
        /// Notice to display.
        message: String,
    },
}

impl DetailPanel {
    /// The selected movie, if any.
    #[must_use]
    pub fn movie(&self) -> Option<&MovieDetail> {
        match self {
            Self::Movie { movie } => Some(&**movie),
            Self::NoResults { .. } => None,
        }
    }
}

/// Every display derived from one control state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// The filter that was applied.
    pub filter: MovieFilter,
    /// Number of movies matching the filter.
    pub count: usize,
    /// Filtered listing.
    pub listing: Vec<ListingRow>,
    /// Highest-rated movies in the filtered view.
    pub top_rated: Vec<RatedRow>,
    /// Highest box office in the filtered view.
    pub top_box_office: Vec<BoxOfficeRow>,
    /// Most frequent directors over the whole dataset.
    pub top_directors: Vec<DirectorCount>,
    /// Per-genre leaders; present only while a genre filter is active.
    pub genre_leaders: Option<Vec<GenreLeader>>,
    /// Names offered by the detail viewer.
    pub selectable_movies: Vec<String>,
    /// Detail viewer state.
    pub detail: DetailPanel,
}

/// Dashboard derivation entry points.
pub struct Dashboard;

impl Dashboard {
    /// Describes the filter controls for `dataset`.
    #[must_use]
    pub fn controls(dataset: &Dataset, settings: &DashboardSettings) -> ControlOptions {
        let year_bounds = dataset.year_bounds().map(|(lo, hi)| YearRange::new(lo, hi));
        ControlOptions {
            year_bounds,
            default_years: Self::default_years(dataset, settings),
            genres: dataset.genre_options(),
            certificates: dataset.certificate_options(),
            default_certificate: ALL_CERTIFICATES.to_string(),
        }
    }

    /// Initial year selection: the preferred range clamped into the dataset
    /// bounds, or the full bounds if the clamp leaves nothing.
    #[must_use]
    pub fn default_years(dataset: &Dataset, settings: &DashboardSettings) -> YearRange {
        match dataset.year_bounds() {
            Some(bounds) => settings
                .default_years
                .clamp_to(bounds)
                .unwrap_or(YearRange::new(bounds.0, bounds.1)),
            None => settings.default_years,
        }
    }

    /// Resolves a request into the filter it denotes.
    #[must_use]
    pub fn resolve_filter(
        dataset: &Dataset,
        request: &DashboardRequest,
        settings: &DashboardSettings,
    ) -> MovieFilter {
        let defaults = Self::default_years(dataset, settings);
        let years = YearRange::new(
            request.year_start.unwrap_or(defaults.start),
            request.year_end.unwrap_or(defaults.end),
        );
        let genres = request
            .genres
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();
        let certificate = request
            .certificate
            .as_deref()
            .map_or(CertificateFilter::All, CertificateFilter::parse);

        MovieFilter {
            years,
            genres,
            certificate,
        }
    }

    /// Derives every display for the given control state.
    #[must_use]
    pub fn derive(
        dataset: &Dataset,
        request: &DashboardRequest,
        settings: &DashboardSettings,
    ) -> DashboardSnapshot {
        let filter = Self::resolve_filter(dataset, request, settings);
        let view = filter.apply(dataset);

        let selectable_movies = views::selectable_names(&view);
        let selected = request
            .movie
            .as_deref()
            .filter(|name| selectable_movies.iter().any(|n| n.as_str() == *name))
            .or_else(|| selectable_movies.first().map(String::as_str));

        let detail = match selected.and_then(|name| views::movie_detail(dataset, name)) {
            Some(movie) => DetailPanel::Movie {
                movie: Box::new(movie.clone()),
            },
            None => DetailPanel::NoResults {
                message: NO_RESULTS_MESSAGE.to_string(),
            },
        };

        let genre_leaders = filter
            .has_genre_filter()
            .then(|| views::genre_leaders(&view));

        tracing::debug!(
            count = view.len(),
            selected = selected.unwrap_or("-"),
            "Derived dashboard"
        );

        DashboardSnapshot {
            count: view.len(),
            listing: views::listing(&view),
            top_rated: views::top_rated(&view, settings.top_n),
            top_box_office: views::top_box_office(&view, settings.top_n),
            top_directors: views::director_frequency(dataset, settings.director_limit),
            genre_leaders,
            detail,
            selectable_movies,
            filter,
        }
    }
}
