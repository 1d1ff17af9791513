//! Tests for REPL session control state.

use crate::session::DashboardSession;

fn certificates() -> Vec<String> {
    ["All", "R", "PG-13", "Not Rated"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_new_session_uses_defaults() {
    let session = DashboardSession::new();

    let request = session.request();
    assert!(request.year_start.is_none());
    assert!(request.year_end.is_none());
    assert!(request.genres.is_empty());
    assert!(request.certificate.is_none());
    assert!(request.movie.is_none());
}

#[test]
fn test_set_years() {
    let mut session = DashboardSession::new();

    session.set_years("1990", "2010").unwrap();

    assert_eq!(session.request().year_start, Some(1990));
    assert_eq!(session.request().year_end, Some(2010));
}

#[test]
fn test_set_years_accepts_inverted_range() {
    let mut session = DashboardSession::new();

    assert!(session.set_years("2010", "1990").is_ok());
    assert_eq!(session.request().year_start, Some(2010));
}

#[test]
fn test_set_years_invalid() {
    let mut session = DashboardSession::new();

    let err = session.set_years("nineteen", "2010").unwrap_err();

    assert!(err.contains("nineteen"));
    assert!(session.request().year_start.is_none());
}

#[test]
fn test_add_genre_ignores_duplicates() {
    let mut session = DashboardSession::new();

    session.add_genre("Crime,Drama").unwrap();
    session.add_genre("Crime,Drama").unwrap();
    session.add_genre("Sci-Fi").unwrap();

    assert_eq!(
        session.request().genres,
        vec!["Crime,Drama".to_string(), "Sci-Fi".to_string()]
    );
}

#[test]
fn test_add_blank_genre_fails() {
    let mut session = DashboardSession::new();

    assert!(session.add_genre("   ").is_err());
    assert!(session.request().genres.is_empty());
}

#[test]
fn test_remove_genre() {
    let mut session = DashboardSession::new();
    session.add_genre("Drama").unwrap();

    session.remove_genre("Drama").unwrap();

    assert!(session.request().genres.is_empty());
    assert!(session.remove_genre("Drama").is_err());
}

#[test]
fn test_clear_genres() {
    let mut session = DashboardSession::new();
    session.add_genre("Drama").unwrap();
    session.add_genre("Crime").unwrap();

    session.clear_genres();

    assert!(session.request().genres.is_empty());
}

#[test]
fn test_set_certificate() {
    let mut session = DashboardSession::new();

    session.set_certificate("PG-13", &certificates()).unwrap();
    assert_eq!(session.request().certificate.as_deref(), Some("PG-13"));

    session.set_certificate("All", &certificates()).unwrap();
    assert!(session.request().certificate.is_none());
}

#[test]
fn test_set_certificate_with_space() {
    let mut session = DashboardSession::new();

    session.set_certificate("Not Rated", &certificates()).unwrap();

    assert_eq!(session.request().certificate.as_deref(), Some("Not Rated"));
}

#[test]
fn test_set_unknown_certificate() {
    let mut session = DashboardSession::new();

    let err = session.set_certificate("NC-17", &certificates()).unwrap_err();

    assert!(err.contains("NC-17"));
    assert!(err.contains("PG-13"));
    assert!(session.request().certificate.is_none());
}

#[test]
fn test_select_movie() {
    let mut session = DashboardSession::new();

    session.select_movie("  The Matrix ").unwrap();

    assert_eq!(session.request().movie.as_deref(), Some("The Matrix"));
    assert!(session.select_movie("").is_err());
}

#[test]
fn test_reset() {
    let mut session = DashboardSession::new();
    session.set_years("1990", "2000").unwrap();
    session.add_genre("Drama").unwrap();
    session.select_movie("Se7en").unwrap();

    session.reset();

    assert_eq!(session, DashboardSession::new());
}

#[test]
fn test_all_settings() {
    let mut session = DashboardSession::new();
    session.set_years("1990", "2000").unwrap();
    session.add_genre("Drama").unwrap();
    session.add_genre("Crime").unwrap();

    let settings = session.all_settings();

    assert_eq!(settings.len(), 4);
    assert!(settings.contains(&("years".to_string(), "1990-2000".to_string())));
    assert!(settings.contains(&("genres".to_string(), "Drama | Crime".to_string())));
    assert!(settings.contains(&("certificate".to_string(), "All".to_string())));
    assert!(settings.contains(&("movie".to_string(), "(first match)".to_string())));
}
