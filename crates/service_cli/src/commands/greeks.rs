//! Greeks command implementation
//!
//! Prints every closed-form sensitivity of one option together with the
//! finite-difference delta and gamma.

use pricer_models::analytical::Greeks;

use super::OptionArgs;
use crate::Result;

/// Sensitivities in display order.
pub fn rows(greeks: &Greeks, numeric_delta: f64, numeric_gamma: f64) -> Vec<(&'static str, f64)> {
    vec![
        ("Delta", greeks.delta),
        ("Gamma", greeks.gamma),
        ("Vega", greeks.vega),
        ("Theta", greeks.theta),
        ("Rho", greeks.rho),
        ("Vanna", greeks.vanna),
        ("Charm", greeks.charm),
        ("Speed", greeks.speed),
        ("Color", greeks.color),
        ("dVega/dTime", greeks.d_vega_d_time),
        ("Vomma", greeks.vomma),
        ("Veta", greeks.veta),
        ("Zomma", greeks.zomma),
        ("Lambda", greeks.lambda),
        ("Ultima", greeks.ultima),
        ("Numeric delta", numeric_delta),
        ("Numeric gamma", numeric_gamma),
    ]
}

/// Run the greeks command
pub fn run(args: &OptionArgs, bump: f64) -> Result<Vec<(&'static str, f64)>> {
    let option = args.to_option()?;
    let rows = rows(
        &option.greeks(),
        option.numeric_delta(bump),
        option.numeric_gamma(bump),
    );

    println!("{}", option);
    println!("{:<16}{:>20.6}", "Price", option.price());
    for (name, value) in &rows {
        println!("{:<16}{:>20.6}", name, value);
    }

    Ok(rows)
}
