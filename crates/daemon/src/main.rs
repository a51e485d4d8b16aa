//! Barbershop - Main Entry Point
//! Parses the four shop parameters, sets up logging and runs one business day

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use barbershop_core::application::{Barbershop, ClosureReport};
use barbershop_core::domain::{ShopArgs, ShopConfig};
use barbershop_core::AppError;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "barbershop=info,barbershop_core=info";

/// Exit code for rejected arguments (no task was started)
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "barbershop")]
#[command(about = "Sleeping barber simulation", long_about = None)]
#[command(version)]
struct Cli {
    /// Waiting room capacity
    #[arg(allow_negative_numbers = true)]
    seats: String,

    /// Haircut time in milliseconds
    #[arg(allow_negative_numbers = true)]
    haircut_ms: String,

    /// Average arrival interval in milliseconds
    #[arg(allow_negative_numbers = true)]
    arrival_ms: String,

    /// Shop open time in seconds
    #[arg(allow_negative_numbers = true)]
    open_secs: String,

    /// Number of barbers
    #[arg(short, long, env = "BARBERSHOP_BARBERS", default_value_t = 1)]
    barbers: usize,

    /// Log output format
    #[arg(long, env = "BARBERSHOP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Print the closure report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Development: human-readable with colors
    Pretty,
    /// Production: JSON structured logging
    Json,
}

impl Cli {
    fn shop_args(&self) -> ShopArgs {
        ShopArgs {
            seats: self.seats.clone(),
            haircut_ms: self.haircut_ms.clone(),
            arrival_ms: self.arrival_ms.clone(),
            open_secs: self.open_secs.clone(),
        }
    }
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    let installed = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .try_init(),
    };
    installed.context("Failed to install tracing subscriber")
}

fn print_summary(report: &ClosureReport) {
    println!(
        "Served {} customer(s); {} seated, {} turned away (full: {}, closed: {})",
        report.customers_served(),
        report.seated,
        report.turned_away(),
        report.turned_away_full,
        report.turned_away_closed,
    );
    for barber in &report.barbers {
        println!("  {}: {} haircut(s)", barber.name, barber.served);
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 1. Validate configuration before anything concurrent starts
    let config = match ShopConfig::parse(&cli.shop_args()) {
        Ok(config) => config.with_barbers(cli.barbers),
        Err(AppError::InvalidArguments(issues)) => {
            for issue in &issues {
                eprintln!("error: {}", issue);
            }
            eprintln!("{}", Cli::command().render_usage());
            return Ok(ExitCode::from(EXIT_USAGE));
        }
        Err(e) => return Err(e.into()),
    };

    // 2. Initialize logging
    init_logging(cli.log_format)?;
    info!("Barbershop v{} starting...", VERSION);

    // 3. Run until fully closed
    let report = Barbershop::new(config).run().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(ExitCode::SUCCESS)
}
