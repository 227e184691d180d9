//! Price command implementation
//!
//! Prices a single European vanilla option through `pricer_gbs` and
//! prints value plus Greeks.

use tracing::info;

use pricer_gbs::analytical::{price, GbsResult, OptionType};

use crate::{CliError, Result};

/// Run the price command
#[allow(clippy::too_many_arguments)]
pub fn run(
    option_type: &str,
    underlying: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    volatility: f64,
    format: &str,
) -> Result<()> {
    let option_type: OptionType = option_type.parse()?;

    info!("Pricing {} FS={} X={} T={}", option_type, underlying, strike, expiry);

    let result = price(
        option_type,
        underlying,
        strike,
        expiry,
        rate,
        carry,
        volatility,
    )?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "table" => {
            print_table(option_type, &result);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    Ok(())
}

fn print_table(option_type: OptionType, result: &GbsResult) {
    println!("\n┌────────────┬──────────────────┐");
    println!("│ {:<10} │ {:>16} │", "Quantity", option_type);
    println!("├────────────┼──────────────────┤");
    println!("│ {:<10} │ {:>16.10} │", "value", result.value);
    println!("│ {:<10} │ {:>16.10} │", "delta", result.delta);
    println!("│ {:<10} │ {:>16.10} │", "gamma", result.gamma);
    println!("│ {:<10} │ {:>16.10} │", "theta", result.theta);
    println!("│ {:<10} │ {:>16.10} │", "vega", result.vega);
    println!("│ {:<10} │ {:>16.10} │", "rho", result.rho);
    println!("└────────────┴──────────────────┘");
}
