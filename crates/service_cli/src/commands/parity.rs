//! Parity command implementation
//!
//! Compares a quoted price with the put-call parity price.

use super::OptionArgs;
use crate::{CliError, Result};

/// Run the parity command, returning the relative deviation.
pub fn run(args: &OptionArgs, market_price: f64, threshold: f64) -> Result<f64> {
    if !market_price.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "Market price must be finite, got {}",
            market_price
        )));
    }
    if threshold.is_nan() || threshold < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Threshold must be non-negative, got {}",
            threshold
        )));
    }

    let option = args.to_option()?;
    let deviation = option.parity_deviation(market_price);
    option.check_put_call_parity(market_price, threshold);

    println!("{}", option);
    println!("Market price: {:.6}", market_price);
    println!("Parity-implied price: {:.6}", option.price_by_put_call_parity());
    println!("Relative deviation: {:.6}", deviation);
    println!("Parity gap: {:.6e}", option.parity_gap());

    Ok(deviation)
}
