//! Terminal rendering of dashboard displays.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use moviedash_core::{
    BoxOfficeRow, ControlOptions, DashboardSnapshot, DetailPanel, DirectorCount, GenreLeader,
    ListingRow, Movie, RatedRow,
};

/// Width of the longest bar in the director chart.
const BAR_WIDTH: usize = 30;

/// Output format for dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Unicode tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Section title of the top-rated table.
pub fn rated_title(top_n: usize) -> String {
    format!("Top {top_n} by rating")
}

/// Section title of the box-office table.
pub fn box_office_title(top_n: usize) -> String {
    format!("Top {top_n} by box office")
}

/// Print every display of a snapshot.
pub fn print_snapshot(
    snapshot: &DashboardSnapshot,
    top_n: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json(snapshot);
    }

    print_summary(snapshot);
    section("Filtered movies");
    print_listing(&snapshot.listing);
    section(&rated_title(top_n));
    print_top_rated(&snapshot.top_rated);
    section(&box_office_title(top_n));
    print_box_office(&snapshot.top_box_office);
    section("Top directors (all movies)");
    print_directors(&snapshot.top_directors);
    section("Top movie per genre");
    print_genre_leaders(snapshot.genre_leaders.as_deref());
    section("Movie details");
    print_detail(&snapshot.detail);
    Ok(())
}

/// One-line description of the active filter and match count.
pub fn print_summary(snapshot: &DashboardSnapshot) {
    let filter = &snapshot.filter;
    let genres = if filter.genres.is_empty() {
        "any genre".to_string()
    } else {
        filter.genres.join(" | ")
    };
    println!(
        "{} movies match  (years {}, {}, certificate {})",
        snapshot.count.to_string().green().bold(),
        filter.years,
        genres,
        filter.certificate.as_selection()
    );
}

fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

fn empty_notice(rows: usize) -> bool {
    if rows == 0 {
        println!("{}", "No results.".dimmed());
        return true;
    }
    false
}

/// Print the filtered listing.
pub fn print_listing(rows: &[ListingRow]) {
    if empty_notice(rows.len()) {
        return;
    }
    let mut table = new_table(&["Rank", "Name", "Year", "Rating", "Genre", "Certificate"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.rank).set_alignment(CellAlignment::Right),
            Cell::new(&row.name),
            Cell::new(row.year),
            Cell::new(format!("{:.1}", row.rating)),
            Cell::new(&row.genre),
            Cell::new(row.certificate.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{table}");
}

/// Print the top-rated table.
pub fn print_top_rated(rows: &[RatedRow]) {
    if empty_notice(rows.len()) {
        return;
    }
    let mut table = new_table(&["Name", "Year", "Rating"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(row.year),
            Cell::new(format!("{:.1}", row.rating)),
        ]);
    }
    println!("{table}");
}

/// Print the box-office table with the amounts as written in the source.
pub fn print_box_office(rows: &[BoxOfficeRow]) {
    if empty_notice(rows.len()) {
        return;
    }
    let mut table = new_table(&["Name", "Year", "Box office"]);
    for row in rows {
        let amount = raw_or_dash(&row.box_office);
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(row.year),
            Cell::new(amount).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn raw_or_dash(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        "-".to_string()
    } else {
        raw.to_string()
    }
}

/// Text bar for `count` scaled against `max`.
pub fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(len)
}

/// Print the director frequency chart.
pub fn print_directors(rows: &[DirectorCount]) {
    if empty_notice(rows.len()) {
        return;
    }
    let max = rows.iter().map(|d| d.count).max().unwrap_or(0);
    let mut table = new_table(&["Director", "Movies", ""]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.director),
            Cell::new(row.count).set_alignment(CellAlignment::Right),
            Cell::new(bar(row.count, max)).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

/// Print per-genre leaders, or a hint when no genre is selected.
pub fn print_genre_leaders(leaders: Option<&[GenreLeader]>) {
    let Some(leaders) = leaders else {
        println!("{}", "Select a genre to see the top movie per genre.".dimmed());
        return;
    };
    if empty_notice(leaders.len()) {
        return;
    }
    let mut table = new_table(&["Genre", "Movie", "Rating"]);
    for leader in leaders {
        table.add_row(vec![
            Cell::new(&leader.genre),
            Cell::new(&leader.name),
            Cell::new(format!("{:.1}", leader.rating)),
        ]);
    }
    println!("{table}");
}

/// Print the detail panel.
pub fn print_detail(detail: &DetailPanel) {
    match detail {
        DetailPanel::Movie { movie } => print_movie(movie),
        DetailPanel::NoResults { message } => println!("{}", message.yellow()),
    }
}

/// Print every attribute of one movie.
pub fn print_movie(movie: &Movie) {
    println!("{} ({})", movie.name.bold().green(), movie.year);
    let fields = [
        ("Rank", movie.rank.to_string()),
        ("Rating", format!("{:.1}", movie.rating)),
        ("Genre", movie.genre.clone()),
        (
            "Certificate",
            movie.certificate.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Run time", movie.run_time.clone()),
        ("Tagline", movie.tagline.clone()),
        ("Budget", raw_or_dash(&movie.budget)),
        ("Box office", raw_or_dash(&movie.box_office)),
        ("Directors", movie.directors.clone()),
        ("Writers", movie.writers.clone()),
        ("Cast", movie.casts.clone()),
    ];
    for (label, value) in fields {
        println!("  {:<12} {}", format!("{label}:").cyan(), value);
    }
}

/// Print the filter control options.
pub fn print_controls(controls: &ControlOptions) {
    match controls.year_bounds {
        Some(bounds) => println!("{} {}", "Years:".cyan(), bounds),
        None => println!("{} {}", "Years:".cyan(), "(empty dataset)".dimmed()),
    }
    println!("{} {}", "Default years:".cyan(), controls.default_years);
    println!("{}", "Genres:".cyan());
    for genre in &controls.genres {
        println!("  - {genre}");
    }
    println!(
        "{} {}",
        "Certificates:".cyan(),
        controls.certificates.join(", ")
    );
}

/// Print control settings as key-value pairs.
pub fn print_settings(settings: &[(String, String)]) {
    for (key, value) in settings {
        println!("  {:<12} {}", key.cyan(), value);
    }
}

/// Print REPL help message
pub fn print_help(top_n: usize) {
    println!("\n{}", "MovieDash REPL Commands".bold().underline());
    println!();
    println!("{}", "Controls:".bold());
    println!("  {}     Set the year range", ".years <from> <to>".yellow());
    println!("  {}   Add a genre to the filter", ".genre add <genre>".yellow());
    println!(
        "  {} Remove a genre from the filter",
        ".genre remove <genre>".yellow()
    );
    println!("  {}        Clear the genre filter", ".genre clear".yellow());
    println!("  {}        Select a certificate", ".cert <cert|All>".yellow());
    println!("  {}       Select the detail movie", ".movie <name>".yellow());
    println!("  {}               Reset every control", ".reset".yellow());
    println!("  {}            Show current controls", ".controls".yellow());
    println!("  {}             Show control options", ".options".yellow());
    println!();
    println!("{}", "Displays:".bold());
    println!("  {}                Full dashboard", ".show".yellow());
    println!("  {}                Filtered listing", ".list".yellow());
    println!("  {}                 {}", ".top".yellow(), rated_title(top_n));
    println!("  {}           {}", ".boxoffice".yellow(), box_office_title(top_n));
    println!("  {}           Top directors (all movies)", ".directors".yellow());
    println!("  {}             Top movie per genre", ".leaders".yellow());
    println!("  {}              Movie details", ".detail".yellow());
    println!();
    println!("{}", "Session:".bold());
    println!("  {}   Set output format", ".format table|json".yellow());
    println!("  {}       Toggle timing display", ".timing on|off".yellow());
    println!("  {}                Show this help", ".help".yellow());
    println!("  {}                Exit the REPL", ".quit".yellow());
    println!();
}
