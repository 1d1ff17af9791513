#![allow(clippy::doc_markdown)]
//! `MovieDash` Server - HTTP dashboard over the IMDB Top 250.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moviedash_core::{dataset, DashboardSettings, MovieDashConfig};
use moviedash_server::{router, AppState};

/// MovieDash Server - Interactive IMDB Top 250 dashboard
#[derive(Parser, Debug)]
#[command(name = "moviedash-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "MOVIEDASH_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset CSV file
    #[arg(short, long, env = "MOVIEDASH_DATA_PATH")]
    data: Option<String>,

    /// Host address to bind to
    #[arg(long, env = "MOVIEDASH_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "MOVIEDASH_PORT")]
    port: Option<u16>,
}

fn init_tracing(config: &MovieDashConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", config.logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MovieDashConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MovieDashConfig::load().context("loading moviedash.toml")?,
    };

    // CLI flags win over file and environment
    if let Some(data) = args.data {
        config.data.path = data;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate().context("invalid configuration")?;

    init_tracing(&config);

    tracing::info!("Starting MovieDash server...");
    tracing::info!("Dataset: {}", config.data.path);

    // Load once; a missing or corrupt dataset aborts startup
    let movies = dataset::global(config.data.path.as_str())
        .with_context(|| format!("loading dataset {}", config.data.path))?;
    let settings = DashboardSettings::from(&config.dashboard);
    let state = Arc::new(AppState::new(movies, settings));

    let mut app = router(state).layer(TraceLayer::new_for_http());
    if config.server.cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!("MovieDash server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
