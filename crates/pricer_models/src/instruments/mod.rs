//! Instrument definitions.
//!
//! - [`OptionType`]: call/put discriminator with terminal payoff
//! - [`OptionContract`]: the parameters of one European option

pub mod contract;
pub mod option_type;

pub use contract::{OptionContract, DEFAULT_OPTION_ID};
pub use option_type::OptionType;
