//! GBS CLI - Command line harness for the GBS pricing library
//!
//! # Commands
//!
//! - `gbs price` - Price a single European vanilla option and print
//!   its value and Greeks
//! - `gbs limits` - Print the validation bound table
//!
//! The CLI is a thin caller of `pricer_gbs`; all validation and
//! pricing semantics live in the library.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Generalized Black-Scholes-Merton option pricer CLI
#[derive(Parser)]
#[command(name = "gbs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European vanilla option and print value plus Greeks
    Price {
        /// Option type: call (c) or put (p)
        #[arg(short = 'o', long)]
        option_type: String,

        /// Price of the underlying asset (FS)
        #[arg(short, long)]
        underlying: f64,

        /// Strike price (X)
        #[arg(short, long)]
        strike: f64,

        /// Time to expiration in years (T)
        #[arg(short = 't', long)]
        expiry: f64,

        /// Risk-free rate (r), as a fraction (0.05 for 5%)
        #[arg(short, long)]
        rate: f64,

        /// Cost of carry (b), as a fraction
        #[arg(short, long, default_value = "0.0")]
        carry: f64,

        /// Annualised volatility (V), as a fraction
        #[arg(long)]
        volatility: f64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print the validation bound table
    Limits,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            option_type,
            underlying,
            strike,
            expiry,
            rate,
            carry,
            volatility,
            format,
        } => commands::price::run(
            &option_type,
            underlying,
            strike,
            expiry,
            rate,
            carry,
            volatility,
            &format,
        ),
        Commands::Limits => commands::limits::run(),
    }
}
