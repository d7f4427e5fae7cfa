//! Property tests for put-call parity and no-arbitrage price bounds.

use pricer_models::analytical::EuropeanOption;
use pricer_models::instruments::OptionType;
use proptest::prelude::*;

fn option_strategy() -> impl Strategy<Value = EuropeanOption> {
    (
        0.05..3.0f64,
        10.0..200.0f64,
        10.0..200.0f64,
        -0.02..0.10f64,
        0.05..0.8f64,
        -0.05..0.10f64,
    )
        .prop_map(|(maturity, strike, spot, rate, volatility, carry)| {
            EuropeanOption::new(OptionType::Call, maturity, strike, spot, rate, volatility)
                .with_cost_of_carry(carry)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// C - P = S·e^((b-r)T) - K·e^(-rT) from either side of the pair.
    #[test]
    fn prop_parity_gap_vanishes(option in option_strategy()) {
        let scale = option.spot() + option.strike();
        prop_assert!(option.parity_gap().abs() <= 1e-10 * scale);
        prop_assert!(option.opposite().parity_gap().abs() <= 1e-10 * scale);
    }

    /// With b = r the parity-implied price is the opposite option's price.
    #[test]
    fn prop_parity_price_is_opposite_when_carry_equals_rate(option in option_strategy()) {
        let option = option.with_cost_of_carry(option.rate());
        let scale = option.spot() + option.strike();
        for side in [option, option.opposite()] {
            let diff = side.price_by_put_call_parity() - side.opposite().price();
            prop_assert!(diff.abs() <= 1e-10 * scale);
        }
    }

    /// Prices stay within the model-free bounds.
    #[test]
    fn prop_price_bounds(option in option_strategy()) {
        let carry = (option.cost_of_carry() - option.rate()) * option.maturity();
        let spot_leg = option.spot() * carry.exp();
        let strike_leg = option.strike() * option.discount_factor();
        let tol = 1e-10 * (option.spot() + option.strike());

        let call = option.price();
        prop_assert!(call >= (spot_leg - strike_leg).max(0.0) - tol);
        prop_assert!(call <= spot_leg + tol);

        let put = option.opposite().price();
        prop_assert!(put >= (strike_leg - spot_leg).max(0.0) - tol);
        prop_assert!(put <= strike_leg + tol);
    }

    /// Call delta lies in [0, carry], put delta in [-carry, 0].
    #[test]
    fn prop_delta_bounds(option in option_strategy()) {
        let carry = ((option.cost_of_carry() - option.rate()) * option.maturity()).exp();
        let call = option.delta();
        let put = option.opposite().delta();
        prop_assert!((0.0..=carry).contains(&call));
        prop_assert!((-carry..=0.0).contains(&put));
        prop_assert!(option.gamma() >= 0.0);
        prop_assert!(option.vega() >= 0.0);
    }
}
