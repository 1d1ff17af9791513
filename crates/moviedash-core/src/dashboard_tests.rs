//! Tests for `dashboard` module

use super::config::DashboardConfig;
use super::dashboard::*;
use super::dataset::Dataset;
use super::filter::{CertificateFilter, YearRange};
use super::test_fixtures::sample_dataset;

fn request(year_start: i32, year_end: i32) -> DashboardRequest {
    DashboardRequest {
        year_start: Some(year_start),
        year_end: Some(year_end),
        ..Default::default()
    }
}

// -------------------------------------------------------------------------
// Controls
// -------------------------------------------------------------------------

#[test]
fn test_controls_describe_dataset() {
    // Arrange
    let dataset = sample_dataset();

    // Act
    let controls = Dashboard::controls(&dataset, &DashboardSettings::default());

    // Assert
    assert_eq!(controls.year_bounds, Some(YearRange::new(1960, 2014)));
    assert_eq!(controls.default_years, YearRange::new(2000, 2014));
    assert_eq!(controls.certificates[0], "All");
    assert_eq!(controls.default_certificate, "All");
    assert_eq!(controls.genres.len(), 8);
}

#[test]
fn test_default_years_fall_back_to_full_bounds() {
    let dataset = sample_dataset();
    let settings = DashboardSettings {
        default_years: YearRange::new(2030, 2040),
        ..Default::default()
    };

    let years = Dashboard::default_years(&dataset, &settings);

    assert_eq!(years, YearRange::new(1960, 2014));
}

#[test]
fn test_settings_from_config() {
    let config = DashboardConfig {
        default_year_start: 1980,
        default_year_end: 1990,
        top_n: 3,
        director_limit: 4,
    };

    let settings = DashboardSettings::from(&config);

    assert_eq!(settings.default_years, YearRange::new(1980, 1990));
    assert_eq!(settings.top_n, 3);
    assert_eq!(settings.director_limit, 4);
}

// -------------------------------------------------------------------------
// Filter resolution
// -------------------------------------------------------------------------

#[test]
fn test_empty_request_uses_control_defaults() {
    // Arrange
    let dataset = sample_dataset();

    // Act
    let snapshot = Dashboard::derive(
        &dataset,
        &DashboardRequest::default(),
        &DashboardSettings::default(),
    );

    // Assert
    assert_eq!(snapshot.filter.years, YearRange::new(2000, 2014));
    assert_eq!(snapshot.filter.certificate, CertificateFilter::All);
    assert_eq!(snapshot.count, 4);
}

#[test]
fn test_blank_genres_are_ignored() {
    let dataset = sample_dataset();
    let req = DashboardRequest {
        genres: vec![String::new(), "  ".to_string()],
        ..request(1900, 2100)
    };

    let filter = Dashboard::resolve_filter(&dataset, &req, &DashboardSettings::default());

    assert!(filter.genres.is_empty());
}

#[test]
fn test_certificate_all_is_no_constraint() {
    let dataset = sample_dataset();
    let req = DashboardRequest {
        certificate: Some("All".to_string()),
        ..request(1900, 2100)
    };

    let snapshot = Dashboard::derive(&dataset, &req, &DashboardSettings::default());

    assert_eq!(snapshot.count, dataset.len());
}

// -------------------------------------------------------------------------
// Snapshot
// -------------------------------------------------------------------------

#[test]
fn test_snapshot_views_are_consistent() {
    // Arrange
    let dataset = sample_dataset();
    let req = DashboardRequest {
        genres: vec!["Drama".to_string()],
        certificate: Some("R".to_string()),
        ..request(1900, 2100)
    };

    // Act
    let snapshot = Dashboard::derive(&dataset, &req, &DashboardSettings::default());

    // Assert
    assert_eq!(snapshot.count, 5);
    assert_eq!(snapshot.listing.len(), 5);
    assert_eq!(snapshot.top_rated.len(), 5);
    assert_eq!(snapshot.top_rated[0].name, "The Shawshank Redemption");
    assert_eq!(snapshot.top_box_office[0].name, "The Godfather");
    assert_eq!(snapshot.top_directors[0].director, "Christopher Nolan");
    assert_eq!(snapshot.selectable_movies.len(), 5);
}

#[test]
fn test_genre_leaders_only_with_genre_filter() {
    let dataset = sample_dataset();
    let settings = DashboardSettings::default();

    let without = Dashboard::derive(&dataset, &request(1900, 2100), &settings);
    let with = Dashboard::derive(
        &dataset,
        &DashboardRequest {
            genres: vec!["Sci-Fi".to_string()],
            ..request(1900, 2100)
        },
        &settings,
    );

    assert!(without.genre_leaders.is_none());
    let leaders = with.genre_leaders.expect("leaders");
    assert_eq!(leaders.len(), 2);
}

#[test]
fn test_directors_ignore_year_filter() {
    // Arrange
    let dataset = sample_dataset();
    let settings = DashboardSettings::default();

    // Act
    let narrow = Dashboard::derive(&dataset, &request(1960, 1960), &settings);
    let wide = Dashboard::derive(&dataset, &request(1900, 2100), &settings);
    let empty = Dashboard::derive(&dataset, &request(1800, 1801), &settings);

    // Assert
    assert_eq!(narrow.top_directors, wide.top_directors);
    assert_eq!(empty.top_directors, wide.top_directors);
}

#[test]
fn test_row_limits_follow_settings() {
    let dataset = sample_dataset();
    let settings = DashboardSettings {
        top_n: 2,
        director_limit: 1,
        ..Default::default()
    };

    let snapshot = Dashboard::derive(&dataset, &request(1900, 2100), &settings);

    assert_eq!(snapshot.top_rated.len(), 2);
    assert_eq!(snapshot.top_box_office.len(), 2);
    assert_eq!(snapshot.top_directors.len(), 1);
}

// -------------------------------------------------------------------------
// Detail panel
// -------------------------------------------------------------------------

#[test]
fn test_detail_defaults_to_first_selectable() {
    let dataset = sample_dataset();

    let snapshot = Dashboard::derive(&dataset, &request(1990, 2000), &DashboardSettings::default());

    let movie = snapshot.detail.movie().expect("detail");
    assert_eq!(movie.name, "The Shawshank Redemption");
}

#[test]
fn test_detail_uses_requested_movie_when_selectable() {
    // Arrange
    let dataset = sample_dataset();
    let req = DashboardRequest {
        movie: Some("Fight Club".to_string()),
        ..request(1990, 2000)
    };

    // Act
    let snapshot = Dashboard::derive(&dataset, &req, &DashboardSettings::default());

    // Assert
    let movie = snapshot.detail.movie().expect("detail");
    assert_eq!(movie.name, "Fight Club");
    assert_eq!(movie.directors, "David Fincher");
}

#[test]
fn test_detail_ignores_movie_outside_view() {
    let dataset = sample_dataset();
    let req = DashboardRequest {
        movie: Some("Psycho".to_string()),
        ..request(1990, 2000)
    };

    let snapshot = Dashboard::derive(&dataset, &req, &DashboardSettings::default());

    assert_eq!(
        snapshot.detail.movie().map(|m| m.name.as_str()),
        Some("The Shawshank Redemption")
    );
}

#[test]
fn test_detail_is_identical_across_filters() {
    // Arrange
    let dataset = sample_dataset();
    let settings = DashboardSettings::default();
    let pick = |req: DashboardRequest| DashboardRequest {
        movie: Some("Interstellar".to_string()),
        ..req
    };

    // Act
    let wide = Dashboard::derive(&dataset, &pick(request(1900, 2100)), &settings);
    let narrow = Dashboard::derive(
        &dataset,
        &pick(DashboardRequest {
            genres: vec!["sci-fi".to_string()],
            certificate: Some("PG-13".to_string()),
            ..request(2014, 2014)
        }),
        &settings,
    );

    // Assert
    assert_eq!(wide.detail, narrow.detail);
    assert_eq!(wide.detail.movie().map(|m| m.rank), Some(8));
}

#[test]
fn test_empty_view_gives_no_results_panel() {
    // Arrange
    let dataset = sample_dataset();

    // Act
    let snapshot = Dashboard::derive(&dataset, &request(1800, 1801), &DashboardSettings::default());

    // Assert
    assert_eq!(snapshot.count, 0);
    assert!(snapshot.listing.is_empty());
    assert!(snapshot.top_rated.is_empty());
    assert!(snapshot.selectable_movies.is_empty());
    assert_eq!(
        snapshot.detail,
        DetailPanel::NoResults {
            message: NO_RESULTS_MESSAGE.to_string()
        }
    );
}

#[test]
fn test_empty_dataset_derives_empty_snapshot() {
    let dataset = Dataset::default();

    let snapshot = Dashboard::derive(
        &dataset,
        &DashboardRequest::default(),
        &DashboardSettings::default(),
    );

    assert_eq!(snapshot.count, 0);
    assert!(snapshot.top_directors.is_empty());
    assert!(snapshot.detail.movie().is_none());
}

// -------------------------------------------------------------------------
// Serialization
// -------------------------------------------------------------------------

#[test]
fn test_detail_panel_serializes_with_state_tag() {
    let panel = DetailPanel::NoResults {
        message: NO_RESULTS_MESSAGE.to_string(),
    };

    let json = serde_json::to_value(&panel).expect("serialize");

    assert_eq!(json["state"], "no_results");
    assert_eq!(json["message"], NO_RESULTS_MESSAGE);
}

#[test]
fn test_request_deserializes_with_defaults() {
    let req: DashboardRequest =
        serde_json::from_str(r#"{"genres": ["Drama"]}"#).expect("deserialize");

    assert_eq!(req.genres, vec!["Drama"]);
    assert!(req.year_start.is_none());
    assert!(req.certificate.is_none());
}
