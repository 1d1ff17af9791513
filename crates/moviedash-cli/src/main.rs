#![allow(clippy::doc_markdown)]
//! `MovieDash` CLI - terminal dashboard over the IMDB Top 250
//!
//! Usage:
//!   `moviedash show --from 1990 --to 2010 --genre Crime`
//!   `moviedash detail "The Matrix"`
//!   `moviedash directors --limit 5`
//!   `moviedash repl`

mod repl;
mod repl_output;
mod session;
#[cfg(test)]
mod session_tests;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use moviedash_core::config::MAX_ROW_LIMIT;
use moviedash_core::{
    dataset, views, Dashboard, DashboardRequest, DashboardSettings, Dataset, MovieDashConfig,
};

use repl_output::OutputFormat;

#[derive(Parser)]
#[command(name = "moviedash")]
#[command(
    author,
    version,
    about = "MovieDash CLI - Interactive IMDB Top 250 dashboard"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Dataset CSV file (overrides the configured path)
    #[arg(short, long, global = true, env = "MOVIEDASH_DATA_PATH")]
    data: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "MOVIEDASH_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive and print the dashboard for one set of controls
    Show {
        /// First year included
        #[arg(long)]
        from: Option<i32>,

        /// Last year included
        #[arg(long)]
        to: Option<i32>,

        /// Genre to match (repeatable, any of)
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        /// Certificate, or "All"
        #[arg(long)]
        certificate: Option<String>,

        /// Movie for the detail panel
        #[arg(short, long)]
        movie: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show every attribute of one movie
    Detail {
        /// Exact movie name
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Most frequent directors across the whole dataset
    Directors {
        /// Number of directors to list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show dataset info and control options
    Info,

    /// Print the effective configuration
    Config,

    /// Start interactive REPL
    Repl,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<MovieDashConfig> {
    let mut config = match &cli.config {
        Some(path) => MovieDashConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MovieDashConfig::load().context("loading moviedash.toml")?,
    };
    if let Some(data) = &cli.data {
        config.data.path = data.display().to_string();
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn load_dataset(config: &MovieDashConfig) -> anyhow::Result<Arc<Dataset>> {
    dataset::global(config.data.path.as_str())
        .with_context(|| format!("loading dataset {}", config.data.path))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let settings = DashboardSettings::from(&config.dashboard);

    match cli.command {
        Commands::Show {
            from,
            to,
            genres,
            certificate,
            movie,
            format,
        } => {
            let movies = load_dataset(&config)?;
            let request = DashboardRequest {
                year_start: from,
                year_end: to,
                genres,
                certificate,
                movie,
            };
            let snapshot = Dashboard::derive(&movies, &request, &settings);
            repl_output::print_snapshot(&snapshot, settings.top_n, format)?;
        }
        Commands::Detail { name, format } => {
            let movies = load_dataset(&config)?;
            let movie = views::movie_detail(&movies, &name)
                .ok_or_else(|| moviedash_core::Error::MovieNotFound(name.clone()))?;
            match format {
                OutputFormat::Json => repl_output::print_json(movie)?,
                OutputFormat::Table => repl_output::print_movie(movie),
            }
        }
        Commands::Directors { limit, format } => {
            let limit = limit.unwrap_or(settings.director_limit);
            if limit == 0 || limit > MAX_ROW_LIMIT {
                anyhow::bail!("--limit must be between 1 and {MAX_ROW_LIMIT}, got {limit}");
            }
            let movies = load_dataset(&config)?;
            let directors = views::director_frequency(&movies, limit);
            match format {
                OutputFormat::Json => repl_output::print_json(&directors)?,
                OutputFormat::Table => repl_output::print_directors(&directors),
            }
        }
        Commands::Info => {
            let movies = load_dataset(&config)?;
            println!("{} {}", "MovieDash dataset:".bold(), config.data.path.green());
            println!("{} {}", "Movies:".cyan(), movies.len());
            repl_output::print_controls(&Dashboard::controls(&movies, &settings));
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
        Commands::Repl => {
            let movies = load_dataset(&config)?;
            repl::run(movies, settings, &config.data.path)?;
        }
    }

    Ok(())
}
