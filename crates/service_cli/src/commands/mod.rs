//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use clap::Args;
use pricer_models::analytical::EuropeanOption;
use pricer_models::instruments::OptionType;

use crate::Result;

pub mod greeks;
pub mod parity;
pub mod price;
pub mod sweep;

/// Contract parameters shared by the single-option commands.
///
/// Defaults describe the call of the classic convergence study.
#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Option type (call or put)
    #[arg(short = 't', long = "type", default_value = "call", value_parser = parse_option_type)]
    pub kind: OptionType,

    /// Time to maturity in years
    #[arg(short = 'T', long, default_value_t = 0.25)]
    pub maturity: f64,

    /// Strike price
    #[arg(short = 'K', long, default_value_t = 65.0)]
    pub strike: f64,

    /// Spot price of the underlying
    #[arg(short = 'S', long, default_value_t = 60.0)]
    pub spot: f64,

    /// Risk-free rate
    #[arg(short = 'r', long, default_value_t = 0.08)]
    pub rate: f64,

    /// Volatility
    #[arg(short = 'v', long, default_value_t = 0.3)]
    pub volatility: f64,

    /// Cost of carry (defaults to the rate)
    #[arg(short = 'b', long)]
    pub cost_of_carry: Option<f64>,

    /// Reporting id
    #[arg(long, default_value_t = 1)]
    pub id: i32,
}

fn parse_option_type(s: &str) -> std::result::Result<OptionType, String> {
    s.parse::<OptionType>().map_err(|e| e.to_string())
}

impl OptionArgs {
    /// Builds the option and checks it lies inside the model's domain.
    pub fn to_option(&self) -> Result<EuropeanOption> {
        let mut option = EuropeanOption::new(
            self.kind,
            self.maturity,
            self.strike,
            self.spot,
            self.rate,
            self.volatility,
        )
        .with_id(self.id);
        if let Some(carry) = self.cost_of_carry {
            option = option.with_cost_of_carry(carry);
        }
        option.contract().validate()?;
        Ok(option)
    }
}
