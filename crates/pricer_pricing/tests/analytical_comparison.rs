//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to the closed-form
//! generalised Black-Scholes-Merton price for β = 1.
//!
//! # Test Categories
//!
//! 1. **Reference Options**: the classic call and put scenarios
//! 2. **Convergence Tests**: standard error shrinks as 1/√n and the
//!    discretisation bias shrinks with finer time grids
//! 3. **Elasticity Tests**: special-cased exponents agree with `powf`
//! 4. **Boundary Tests**: deep in/out-of-the-money options

use std::sync::Arc;

use approx::assert_relative_eq;
use pricer_models::analytical::EuropeanOption;
use pricer_models::instruments::OptionType;
use pricer_pricing::mc::{Elasticity, MonteCarloConfig, MonteCarloEngine, SimulationResult};
use pricer_pricing::report::MemorySink;

const SEED: u64 = 42;
const WORKERS: usize = 8;

fn reference_call() -> EuropeanOption {
    EuropeanOption::new(OptionType::Call, 0.25, 65.0, 60.0, 0.08, 0.3)
}

fn reference_put() -> EuropeanOption {
    EuropeanOption::new(OptionType::Put, 1.0, 100.0, 100.0, 0.0, 0.2).with_id(2)
}

fn engine(option: EuropeanOption, n_paths: usize, subintervals: usize) -> MonteCarloEngine {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .subintervals(subintervals)
        .seed(SEED)
        .workers(WORKERS)
        .build()
        .unwrap();
    MonteCarloEngine::with_config(option, config).with_sink(Arc::new(MemorySink::new()))
}

fn assert_within_standard_errors(result: &SimulationResult, k: f64, label: &str) {
    let se = result.standard_error.unwrap();
    let error = result.bias().abs();
    assert!(
        error < k * se,
        "{}: MC={:.4}, Analytical={:.4}, Error={:.4}, Tolerance={:.4}",
        label,
        result.price,
        result.analytical_price,
        error,
        k * se
    );
}

// ============================================================================
// Reference Options
// ============================================================================

#[test]
fn test_reference_call_mc_vs_analytical() {
    let result = engine(reference_call(), 100_000, 50).simulate(Elasticity::Linear, true);
    assert_relative_eq!(result.analytical_price, 2.1334, epsilon = 1e-4);
    assert_within_standard_errors(&result, 4.0, "Reference call");
}

#[test]
fn test_reference_put_mc_vs_analytical() {
    let result = engine(reference_put(), 100_000, 50).simulate(Elasticity::Linear, true);
    assert_relative_eq!(result.analytical_price, 7.9656, epsilon = 1e-4);
    assert_within_standard_errors(&result, 4.0, "Reference put");
}

#[test]
fn test_fine_time_grid_mc_vs_analytical() {
    let result = engine(reference_put(), 20_000, 500).simulate(Elasticity::Linear, true);
    assert_within_standard_errors(&result, 4.0, "Put, 500 subintervals");
}

#[test]
#[ignore = "ten million paths; run with --ignored"]
fn test_reference_call_ten_million_paths() {
    let result = engine(reference_call(), 10_000_000, 100).simulate(Elasticity::Linear, true);
    assert!((result.price - result.analytical_price).abs() < 0.01);
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_standard_error_shrinks_with_paths() {
    let small = engine(reference_call(), 1_000, 20).simulate(Elasticity::Linear, true);
    let large = engine(reference_call(), 100_000, 20).simulate(Elasticity::Linear, true);

    // 100x the paths: standard error should fall by about 10x
    let ratio = small.standard_error.unwrap() / large.standard_error.unwrap();
    assert!(
        (7.0..13.0).contains(&ratio),
        "SE ratio {:.3} outside [7, 13]",
        ratio
    );
}

#[test]
fn test_path_sweep_stays_within_confidence_band() {
    for n_paths in [1_000, 10_000, 100_000] {
        let result = engine(reference_put(), n_paths, 20).simulate(Elasticity::Linear, true);
        assert_within_standard_errors(&result, 4.0, &format!("{} paths", n_paths));
    }
}

#[test]
fn test_discretisation_bias_shrinks_with_subintervals() {
    // High volatility makes the one-step Euler bias large: the terminal
    // spot is normal, so the put is worth 100·φ(0) ≈ 39.894 against the
    // closed-form 38.292
    let option = EuropeanOption::new(OptionType::Put, 1.0, 100.0, 100.0, 0.0, 1.0);
    let coarse = engine(option, 100_000, 1).simulate(Elasticity::Linear, true);
    let fine = engine(option, 100_000, 200).simulate(Elasticity::Linear, true);

    let coarse_se = coarse.standard_error.unwrap();
    assert!(
        coarse.bias() > 4.0 * coarse_se,
        "one-step bias {:.4} not resolved (SE {:.4})",
        coarse.bias(),
        coarse_se
    );
    assert_within_standard_errors(&fine, 4.0, "Put, 200 subintervals");
    assert!(fine.bias().abs() < coarse.bias().abs());
}

#[test]
fn test_error_analysis_report_reaches_sink() {
    let sink = Arc::new(MemorySink::new());
    let engine = engine(reference_call(), 10_000, 100).with_sink(sink.clone());

    let price = engine.price(1.0, true);
    let reports = sink.reports();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].mc_price, price);
    assert_eq!(reports[0].bsm_price, reference_call().price());
    assert_relative_eq!(
        reports[0].standard_error,
        reports[0].standard_deviation / 100.0,
        max_relative = 1e-14
    );
}

// ============================================================================
// Elasticity Tests
// ============================================================================

#[test]
fn test_special_elasticities_match_general_exponent() {
    // Spot near 1 keeps S^2 dynamics well behaved
    let option = EuropeanOption::new(OptionType::Call, 0.5, 1.0, 1.0, 0.03, 0.2);
    let engine = engine(option, 5_000, 50);

    for (special, beta) in [
        (Elasticity::Linear, 1.0),
        (Elasticity::SquareRoot, 0.5),
        (Elasticity::Quadratic, 2.0),
    ] {
        let fast = engine.simulate(special, false).price;
        let general = engine.simulate(Elasticity::General(beta), false).price;
        assert_relative_eq!(fast, general, max_relative = 1e-9);
    }
}

#[test]
fn test_square_root_elasticity_lowers_atm_put_value() {
    // σ·S^0.5 at S = 100 is a tenth of σ·S
    let engine = engine(reference_put(), 20_000, 50);
    let gbm = engine.simulate(Elasticity::Linear, false).price;
    let cev = engine.simulate(Elasticity::SquareRoot, false).price;
    assert!(cev < 0.2 * gbm, "CEV {:.4} vs GBM {:.4}", cev, gbm);
}

#[test]
fn test_simulation_ignores_cost_of_carry() {
    let base = engine(reference_call(), 5_000, 20).simulate(Elasticity::Linear, false);
    let carried = engine(reference_call().with_cost_of_carry(0.0), 5_000, 20)
        .simulate(Elasticity::Linear, false);
    assert_eq!(base.price, carried.price);
    assert_ne!(base.analytical_price, carried.analytical_price);
}

// ============================================================================
// Boundary Tests
// ============================================================================

#[test]
fn test_deep_out_of_the_money_call_is_worthless() {
    let option = reference_call().with_spot(20.0);
    let result = engine(option, 20_000, 20).simulate(Elasticity::Linear, true);
    assert!(result.price < 1e-6);
    assert!(result.analytical_price < 1e-10);
}

#[test]
fn test_deep_in_the_money_put_near_intrinsic() {
    let option = reference_put().with_spot(20.0);
    let result = engine(option, 20_000, 20).simulate(Elasticity::Linear, true);
    assert_relative_eq!(result.analytical_price, 80.0, epsilon = 1e-8);
    assert_within_standard_errors(&result, 4.0, "Deep ITM put");
}
