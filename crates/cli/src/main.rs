//! Storefront QA CLI - Main Entry Point
//!
//! Generates, validates and inspects test data from the shell, and runs the
//! booking lifecycle smoke check against a configured booking API.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use storefront_qa_common::SuiteConfig;

mod commands;
mod output;

use commands::{booking, constants, lifecycle, payment, scenario, user, validate};

/// Storefront QA - test data for storefront and booking API suites
#[derive(Parser)]
#[command(name = "sqa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Suite configuration file (TOML); defaults apply when it is missing
    #[arg(long, default_value = "sqa.toml", global = true, env = "SQA_CONFIG")]
    config: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bookings
    Booking(booking::BookingArgs),

    /// Generate user accounts
    User(user::UserArgs),

    /// Generate payment details
    Payment(payment::PaymentArgs),

    /// Build a named scenario
    Scenario(scenario::ScenarioArgs),

    /// Validate entities read from a JSON file
    Validate(validate::ValidateArgs),

    /// Show the validation bounds
    Constants,

    /// Run the booking lifecycle against the configured booking API
    Lifecycle(lifecycle::LifecycleArgs),

    /// Manage the suite configuration file
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SuiteConfig::load(&cli.config)?.apply_env()?;

    // Initialize logging
    let log_level = if cli.verbose || config.logging.debug {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    debug!(config = %cli.config.display(), booking_api = %config.urls.booking_api, "configuration loaded");

    match cli.command {
        Commands::Booking(args) => booking::execute(args, cli.format)?,
        Commands::User(args) => user::execute(args, cli.format)?,
        Commands::Payment(args) => payment::execute(args, cli.format)?,
        Commands::Scenario(args) => scenario::execute(args, cli.format)?,
        Commands::Validate(args) => validate::execute(args, cli.format)?,
        Commands::Constants => constants::execute(cli.format),
        Commands::Lifecycle(args) => lifecycle::execute(args, &config, cli.format).await?,
        Commands::Config(command) => commands::config::execute(command, &config, &cli.config)?,
        Commands::Version => {
            println!("Storefront QA CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Test data library v{}", storefront_qa_common::VERSION);
        }
    }

    Ok(())
}
