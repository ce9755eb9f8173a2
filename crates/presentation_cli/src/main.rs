//! Pesca Lombardia CLI
//!
//! Fishing conditions for the Ticino and Lago Maggiore area from the
//! command line.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{
    ApplicationError,
    ports::ThermalStateStore,
    services::{CalendarRow, ForecastService, WaterTemperatureService},
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Europe::Rome;
use clap::{Parser, Subcommand, ValueEnum};
use infrastructure::{
    AppConfig, InMemoryThermalStateStore, LoggingConfig, WeatherAdapter, load_catalog,
    open_thermal_store,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Pesca Lombardia CLI
#[derive(Parser)]
#[command(name = "pesca-cli")]
#[command(author, version, about = "Fishing activity forecasts for Lombardy", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "PESCA_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List fishing zones
    Zones,

    /// List species profiles
    Species {
        /// Only species living in this zone (id or name)
        #[arg(short, long)]
        zone: Option<String>,
    },

    /// Refresh a zone and rank its species
    ///
    /// Example: pesca-cli forecast --zone oleggio
    Forecast {
        /// Zone id or name
        #[arg(short, long)]
        zone: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the fishing calendar
    Calendar {
        /// Only species whose season is open or closed
        #[arg(short, long, value_enum)]
        status: Option<StatusFilter>,

        /// Day to evaluate (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Print the calendar as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Calendar status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatusFilter {
    Open,
    Closed,
}

impl StatusFilter {
    /// Suspended and not-yet-open seasons count as closed
    fn matches(self, row: &CalendarRow) -> bool {
        match self {
            Self::Open => row.status.is_open(),
            Self::Closed => !row.status.is_open(),
        }
    }
}

/// Determine log filter level from verbosity count
fn log_filter(verbose: u8, logging: &LoggingConfig) -> String {
    match verbose {
        0 => logging.level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the tracing subscriber, `RUST_LOG` wins over flags and config
fn init_tracing(filter: &str, json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .init();
}

/// Current wall-clock time in the zones' timezone
fn local_now() -> NaiveDateTime {
    Utc::now().with_timezone(&Rome).naive_local()
}

/// Wire the forecast service from configuration
///
/// Commands that never estimate water temperature get a throwaway
/// in-memory store so they do not touch the database.
fn build_service(config: &AppConfig, persistent: bool) -> anyhow::Result<ForecastService> {
    let catalog = load_catalog(&config.catalog).context("Failed to load catalog")?;
    let store: Arc<dyn ThermalStateStore> = if persistent {
        open_thermal_store(&config.database).context("Failed to open thermal state store")?
    } else {
        Arc::new(InMemoryThermalStateStore::new())
    };
    let water = WaterTemperatureService::new(store, config.thermal.model())
        .with_retention_days(config.thermal.retention_days);
    let weather = WeatherAdapter::with_config(config.weather.clone())?;

    debug!(
        zones = catalog.zones().len(),
        species = catalog.species().len(),
        backend = %config.database.backend,
        "Forecast service ready"
    );
    Ok(ForecastService::new(
        Arc::new(catalog),
        Arc::new(weather),
        Arc::new(water),
    ))
}

async fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    let persistent = matches!(command, Commands::Forecast { .. });
    let service = build_service(config, persistent)?;

    match command {
        Commands::Zones => {
            print!("{}", render::zones(service.catalog()));
        },

        Commands::Species { zone } => {
            let profiles = service.species(zone.as_deref())?;
            print!("{}", render::species(&profiles));
        },

        Commands::Forecast { zone, json } => {
            let report = service.zone_report(&zone, local_now()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::report(&report));
            }
        },

        Commands::Calendar { status, date, json } => {
            let today = date.unwrap_or_else(|| local_now().date());
            let rows: Vec<CalendarRow> = service
                .calendar(today)
                .into_iter()
                .filter(|row| status.is_none_or(|s| s.matches(row)))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", render::calendar(&rows));
            }
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(&path.to_string_lossy()),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(
        &log_filter(cli.verbose, &config.logging),
        config.logging.json,
    );

    let result = run(cli.command, &config).await;
    if let Err(err) = &result {
        let retryable = err
            .downcast_ref::<ApplicationError>()
            .is_some_and(ApplicationError::is_retryable);
        if retryable {
            eprintln!("The weather service is not responding, try again later.");
        }
    }
    result
}
