//! CLI entry point for the F1 Stats Explorer.
//!
//! `serve` runs the JSON API and dashboard; `fetch` runs the same pipeline
//! once for a season and logs the result.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use f1_stats_explorer::{
    analyzers::{
        compute_driver_stats, compute_points_timeline, constructor_standings, driver_standings,
    },
    config::{AppConfig, parse_bind_addr},
    http::{AppState, build_router},
    logging,
    output::print_json,
    season::Season,
};
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "f1_stats_explorer")]
#[command(about = "Formula 1 season standings and statistics", long_about = None)]
struct Cli {
    /// Base URL of the Ergast-compatible API (overrides F1_API_BASE_URL)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Results requested per upstream page (overrides F1_PAGE_SIZE)
    #[arg(long, global = true)]
    page_size: Option<u32>,

    /// Upstream request timeout in seconds (overrides F1_HTTP_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Retries on transient upstream errors (overrides F1_MAX_RETRIES)
    #[arg(long, global = true)]
    max_retries: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the JSON API and the dashboard page
    Serve {
        /// Address to listen on (overrides F1_BIND_ADDR)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Fetch one season and log the aggregate as JSON
    Fetch {
        /// Championship year, e.g. 2021
        #[arg(value_name = "SEASON")]
        season: String,

        /// Which aggregate to print
        #[arg(short, long, value_enum, default_value_t = View::Drivers)]
        view: View,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    Drivers,
    Constructors,
    Points,
    Stats,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = self.max_retries {
            config.max_retries = retries;
        }
        if let Commands::Serve {
            bind: Some(bind), ..
        } = &self.command
        {
            config.bind_addr = parse_bind_addr(bind)?;
        }
        config.validate()?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = logging::init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    cli.apply_overrides(&mut config)?;

    let state = AppState::from_config(&config)?;

    match cli.command {
        Commands::Serve { .. } => serve(state, &config).await?,
        Commands::Fetch { season, view } => fetch_season(&state, &season, view).await?,
    }

    Ok(())
}

#[tracing::instrument(skip_all, fields(bind = %config.bind_addr, upstream = %config.api_base_url))]
async fn serve(state: AppState, config: &AppConfig) -> Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received, draining connections");
        })
        .await?;

    info!("Server stopped");
    Ok(())
}

#[tracing::instrument(skip_all, fields(season = %season))]
async fn fetch_season(state: &AppState, season: &str, view: View) -> Result<()> {
    let season = Season::parse(season)?;
    let results = state.api.race_results(season).await?;

    match view {
        View::Drivers => print_json(&driver_standings(&results))?,
        View::Constructors => print_json(&constructor_standings(&results))?,
        View::Points => print_json(&compute_points_timeline(&results))?,
        View::Stats => print_json(&compute_driver_stats(&results))?,
    }

    Ok(())
}
