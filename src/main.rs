//! CLI entry point for the bikeshare statistics tool.
//!
//! Provides subcommands for running the four statistics reports over a
//! city's trip log and for printing a window of filtered raw records.

use anyhow::Result;
use bikeshare_stats::filter::{FilterCriteria, filter_trips};
use bikeshare_stats::loader::load_city;
use bikeshare_stats::output::{self, DurationDisplay, StationDisplay, TimeDisplay, UserDisplay};
use bikeshare_stats::reports::duration::duration_report;
use bikeshare_stats::reports::station::station_report;
use bikeshare_stats::reports::time::time_report;
use bikeshare_stats::reports::users::user_report;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self as tracing_fmt, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the four statistics reports for a city
    Report {
        /// City to analyze: chicago, "new york city", or washington
        #[arg(value_name = "CITY")]
        city: String,

        /// Month to restrict to (january..june), or "all"
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Weekday to restrict to (monday..sunday), or "all"
        #[arg(short, long, default_value = "all")]
        day: String,

        /// Directory containing the per-city CSV files
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Emit reports as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print a window of filtered raw trip records in file order
    Raw {
        /// City to analyze: chicago, "new york city", or washington
        #[arg(value_name = "CITY")]
        city: String,

        /// Month to restrict to (january..june), or "all"
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Weekday to restrict to (monday..sunday), or "all"
        #[arg(short, long, default_value = "all")]
        day: String,

        /// Directory containing the per-city CSV files
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Number of records to print
        #[arg(short, long, default_value_t = 5)]
        limit: usize,

        /// Number of records to skip first
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = tracing_fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = tracing_fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            city,
            month,
            day,
            data_dir,
            json,
        } => {
            let criteria = FilterCriteria::parse(&city, &month, &day)?;
            run_reports(&criteria, Path::new(&data_dir), json)?;
        }
        Commands::Raw {
            city,
            month,
            day,
            data_dir,
            limit,
            offset,
        } => {
            let criteria = FilterCriteria::parse(&city, &month, &day)?;
            print_raw(&criteria, Path::new(&data_dir), limit, offset)?;
        }
    }

    Ok(())
}

/// Loads, filters, and runs all four reports. Each report runs
/// independently; one skipped report does not stop the others.
#[tracing::instrument(skip(criteria, data_dir, json), fields(city = %criteria.city))]
fn run_reports(criteria: &FilterCriteria, data_dir: &Path, json: bool) -> Result<()> {
    let dataset = load_city(data_dir, criteria.city)?;
    let filtered = filter_trips(&dataset, criteria.month, criteria.day);

    info!(
        loaded = dataset.len(),
        filtered = filtered.len(),
        "Dataset filtered"
    );

    match time_report(&filtered) {
        Ok(report) => emit(&TimeDisplay::from(&report), json)?,
        Err(e) => warn!(error = %e, "Travel time report skipped"),
    }

    match station_report(&filtered) {
        Ok(report) => emit(&StationDisplay::from(&report), json)?,
        Err(e) => warn!(error = %e, "Station report skipped"),
    }

    match duration_report(&filtered) {
        Ok(report) => emit(&DurationDisplay::from(&report), json)?,
        Err(e) => warn!(error = %e, "Duration report skipped"),
    }

    match user_report(&filtered) {
        Ok(report) => emit(&UserDisplay::from(&report), json)?,
        Err(e) => warn!(error = %e, "User report skipped"),
    }

    Ok(())
}

fn emit<D: Serialize + fmt::Display>(value: &D, json: bool) -> Result<()> {
    if json {
        output::print_json(value)?;
    } else {
        info!("{}", value);
    }
    Ok(())
}

/// Prints a bounded window of the filtered records in their original
/// relative order.
fn print_raw(criteria: &FilterCriteria, data_dir: &Path, limit: usize, offset: usize) -> Result<()> {
    let dataset = load_city(data_dir, criteria.city)?;
    let filtered = filter_trips(&dataset, criteria.month, criteria.day);

    for (i, record) in filtered
        .records()
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
    {
        info!(record = i, "{:?}", record);
    }

    info!(
        total = filtered.len(),
        offset, limit, "Raw record window printed"
    );
    Ok(())
}
