//! Tests for `views` module

use super::dataset::Dataset;
use super::filter::{FilteredView, MovieFilter};
use super::test_fixtures::sample_dataset;
use super::views::*;

// -------------------------------------------------------------------------
// Listing
// -------------------------------------------------------------------------

#[test]
fn test_listing_preserves_order_and_projects_columns() {
    // Arrange
    let dataset = sample_dataset();
    let view = MovieFilter::years(1990, 2000).apply(&dataset);

    // Act
    let rows = listing(&view);

    // Assert
    let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 6, 10]);
    assert_eq!(rows[0].name, "The Shawshank Redemption");
    assert_eq!(rows[0].certificate.as_deref(), Some("R"));
}

// -------------------------------------------------------------------------
// Top rated
// -------------------------------------------------------------------------

#[test]
fn test_top_rated_sorted_descending_with_stable_ties() {
    // Arrange
    let dataset = sample_dataset();
    let view = FilteredView::all(&dataset);

    // Act
    let top = top_rated(&view, DEFAULT_TOP_N);

    // Assert
    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "The Shawshank Redemption",
            "The Godfather",
            "The Dark Knight",
            "The Godfather Part II",
            "Inception",
        ]
    );
}

#[test]
fn test_top_rated_length_is_min_of_n_and_view() {
    let dataset = sample_dataset();
    let small = MovieFilter::years(2008, 2010).apply(&dataset);

    assert_eq!(top_rated(&small, 5).len(), 2);
    assert_eq!(top_rated(&FilteredView::all(&dataset), 5).len(), 5);
    assert!(top_rated(&FilteredView::default(), 5).is_empty());
}

#[test]
fn test_top_rated_is_descending_for_every_window() {
    let dataset = sample_dataset();

    for lo in 1960..=2014 {
        let view = MovieFilter::years(lo, lo + 10).apply(&dataset);
        let top = top_rated(&view, 5);
        assert_eq!(top.len(), view.len().min(5));
        for pair in top.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }
}

// -------------------------------------------------------------------------
// Top box office
// -------------------------------------------------------------------------

#[test]
fn test_top_box_office_sorted_descending() {
    // Arrange
    let dataset = sample_dataset();
    let view = FilteredView::all(&dataset);

    // Act
    let top = top_box_office(&view, 3);

    // Assert
    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["The Dark Knight", "Inception", "Interstellar"]);
    assert_eq!(top[0].box_office, "1006234167");
}

#[test]
fn test_top_box_office_puts_absent_values_last() {
    // Arrange
    let dataset = sample_dataset();
    let view = MovieFilter::years(1999, 1999).apply(&dataset);

    // Act
    let top = top_box_office(&view, 5);

    // Assert
    assert_eq!(top.len(), 2);
    assert!(top.iter().all(|r| r.box_office_clean.is_none()));
    assert_eq!(top[0].name, "The Green Mile");
}

#[test]
fn test_top_box_office_absent_after_present() {
    let csv = "rank,name,year,rating,box_office\n\
               1,A,2000,8.0,Not Available\n\
               2,B,2000,8.0,$100\n\
               3,C,2000,8.0,\n\
               4,D,2000,8.0,$300\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).expect("load");

    let top = top_box_office(&FilteredView::all(&dataset), 5);

    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["D", "B", "A", "C"]);
}

// -------------------------------------------------------------------------
// Director frequency
// -------------------------------------------------------------------------

#[test]
fn test_director_frequency_ranks_by_count_then_first_occurrence() {
    // Arrange
    let dataset = sample_dataset();

    // Act
    let directors = director_frequency(&dataset, DEFAULT_DIRECTOR_LIMIT);

    // Assert
    let summary: Vec<(&str, usize)> = directors
        .iter()
        .map(|d| (d.director.as_str(), d.count))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Christopher Nolan", 3),
            ("Frank Darabont", 2),
            ("Francis Ford Coppola", 2),
            ("Hayao Miyazaki", 1),
            ("Alfred Hitchcock", 1),
            ("David Fincher", 1),
        ]
    );
}

#[test]
fn test_director_frequency_respects_limit() {
    let dataset = sample_dataset();

    let directors = director_frequency(&dataset, 2);

    assert_eq!(directors.len(), 2);
    assert_eq!(directors[1].director, "Frank Darabont");
}

#[test]
fn test_director_frequency_skips_empty_values() {
    let csv = "rank,name,year,rating,directors\n1,A,2000,8.0,\n2,B,2000,8.0,Ann Lee\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).expect("load");

    let directors = director_frequency(&dataset, 10);

    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].director, "Ann Lee");
}

// -------------------------------------------------------------------------
// Genre leaders
// -------------------------------------------------------------------------

#[test]
fn test_genre_leaders_one_row_per_genre_value() {
    // Arrange
    let dataset = sample_dataset();
    let view = MovieFilter::years(1900, 2100)
        .with_genres(["Crime"])
        .apply(&dataset);

    // Act
    let leaders = genre_leaders(&view);

    // Assert
    let summary: Vec<(&str, &str)> = leaders
        .iter()
        .map(|l| (l.genre.as_str(), l.name.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Action,Crime,Drama", "The Dark Knight"),
            ("Crime,Drama", "The Godfather"),
            ("Crime,Drama,Fantasy", "The Green Mile"),
        ]
    );
}

#[test]
fn test_genre_leader_ties_keep_first_occurrence() {
    let csv = "rank,name,year,rating,genre\n1,A,2000,8.0,Drama\n2,B,2000,9.0,Drama\n3,C,2000,9.0,Drama\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).expect("load");

    let leaders = genre_leaders(&FilteredView::all(&dataset));

    assert_eq!(leaders.len(), 1);
    assert_eq!(leaders[0].name, "B");
    assert!((leaders[0].rating - 9.0).abs() < f64::EPSILON);
}

#[test]
fn test_genre_leader_holds_group_maximum() {
    let dataset = sample_dataset();
    let view = FilteredView::all(&dataset);

    for leader in genre_leaders(&view) {
        let max = view
            .rows()
            .iter()
            .filter(|m| m.genre == leader.genre)
            .map(|m| m.rating)
            .fold(f64::MIN, f64::max);
        assert!((leader.rating - max).abs() < f64::EPSILON);
    }
}

// -------------------------------------------------------------------------
// Detail
// -------------------------------------------------------------------------

#[test]
fn test_selectable_names_are_distinct_in_view_order() {
    let csv = "rank,name,year,rating\n1,Heat,1995,8.3\n2,Alien,1979,8.5\n3,Heat,1986,6.0\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).expect("load");

    let names = selectable_names(&FilteredView::all(&dataset));

    assert_eq!(names, vec!["Heat", "Alien"]);
}

#[test]
fn test_movie_detail_uses_unfiltered_dataset() {
    // Arrange
    let dataset = sample_dataset();
    let view = MovieFilter::years(2014, 2014).apply(&dataset);
    assert_eq!(view.len(), 1);

    // Act
    let detail = movie_detail(&dataset, "Psycho").expect("found");

    // Assert
    assert_eq!(detail.year, 1960);
    assert_eq!(detail.directors, "Alfred Hitchcock");
    assert!(movie_detail(&dataset, "Heat").is_none());
}
