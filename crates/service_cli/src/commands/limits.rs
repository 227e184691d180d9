//! Limits command implementation
//!
//! Prints the validation bound table applied to every pricing request.

use pricer_gbs::analytical::GbsLimits;

use crate::Result;

/// Run the limits command
pub fn run() -> Result<()> {
    println!("\n┌────────────────────┬────────────────┬────────────────┐");
    println!("│ {:<18} │ {:>14} │ {:>14} │", "Parameter", "Min", "Max");
    println!("├────────────────────┼────────────────┼────────────────┤");
    print_row("underlying_price", GbsLimits::MIN_UNDERLYING, GbsLimits::MAX_UNDERLYING);
    print_row("strike", GbsLimits::MIN_STRIKE, GbsLimits::MAX_STRIKE);
    print_row("time_to_expiration", GbsLimits::MIN_EXPIRY, GbsLimits::MAX_EXPIRY);
    print_row("cost_of_carry", GbsLimits::MIN_CARRY, GbsLimits::MAX_CARRY);
    print_row("risk_free_rate", GbsLimits::MIN_RATE, GbsLimits::MAX_RATE);
    print_row("volatility", GbsLimits::MIN_VOLATILITY, GbsLimits::MAX_VOLATILITY);
    println!("└────────────────────┴────────────────┴────────────────┘");
    Ok(())
}

fn print_row(name: &str, min: f64, max: f64) {
    println!("│ {:<18} │ {:>14} │ {:>14} │", name, min, max);
}
