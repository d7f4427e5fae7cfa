//! # Pricer Models
//!
//! European option instruments and the closed-form generalised
//! Black-Scholes-Merton model.
//!
//! This crate provides:
//! - Instrument data ([`instruments::OptionType`], [`instruments::OptionContract`])
//! - The analytical model ([`analytical::EuropeanOption`]): price, put-call
//!   parity, fifteen analytical Greeks and finite-difference delta/gamma
//!
//! ## Design Principles
//!
//! - **Value types**: options are `Copy`; bumped copies feed finite differences
//! - **No hidden validation**: numeric methods propagate NaN/Inf, validation is
//!   opt-in through [`instruments::OptionContract::validate`]
//! - **Exhaustive dispatch**: every call/put branch is a `match` on
//!   [`instruments::OptionType`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
