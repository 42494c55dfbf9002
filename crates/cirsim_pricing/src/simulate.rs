//! CIR path simulation driver.
//!
//! One call owns the entire computation: unit conversion at the boundary,
//! shock generation, recurrence stepping, and closed-form price evaluation.
//!
//! # Algorithm
//!
//! 1. Convert the starting annualised rate to instantaneous units.
//! 2. Per scenario, in parallel: seed a generator from the base seed and the
//!    scenario index, draw one standard normal shock per step, evolve the
//!    rate with the Euler-Maruyama recurrence, and price the zero-coupon
//!    bond at every grid row with its remaining maturity.
//! 3. Convert each rate column back to annualised units, reject any column
//!    containing a non-finite value, and gather the columns into the two
//!    output tables.
//!
//! Steps within a scenario are strictly ordered (step `k` needs step
//! `k - 1`); scenarios never read each other's state.

use cirsim_models::conversions::{annual_to_instantaneous, instantaneous_to_annual};
use cirsim_models::{CirBondPricer, CirParams};
use rayon::prelude::*;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::rng::SimRng;
use crate::table::PathTable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one simulation run: two tables of identical shape sharing the
/// integer row index `0..n_steps`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationOutput {
    /// Annualised interest rates, one column per scenario.
    pub rates: PathTable,
    /// Zero-coupon bond prices implied by each rate trajectory. Row `k`
    /// prices remaining maturity `horizon - k * dt` at row `k`'s rate.
    pub prices: PathTable,
}

/// Simulates CIR short-rate paths and the implied zero-coupon bond prices.
///
/// # Arguments
///
/// * `params` - Validated CIR model parameters
/// * `config` - Time grid, scenario batch, optional starting rate and seed
///
/// # Returns
///
/// A [`SimulationOutput`] whose tables have `floor(number_of_years *
/// steps_per_year) + 1` rows and `number_of_scenarios` columns. Row 0 holds
/// the starting rate (no shock applied) and the full-maturity bond price.
///
/// # Errors
///
/// Returns [`SimulationError`] if the configuration is invalid or if any
/// grid cell evaluates to a NaN or infinity; no partial tables are returned.
///
/// # Examples
///
/// ```rust
/// use cirsim_models::CirParams;
/// use cirsim_pricing::{simulate, SimulationConfig};
///
/// let params = CirParams::new(0.05, 0.03, 0.05).unwrap();
/// let config = SimulationConfig::builder()
///     .number_of_years(1.0)
///     .steps_per_year(12)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let output = simulate(&params, &config).unwrap();
/// // No shock at time zero: row 0 is the default starting rate b
/// assert!((output.rates.value(0, 0) - 0.03).abs() < 1e-15);
/// ```
pub fn simulate(
    params: &CirParams<f64>,
    config: &SimulationConfig,
) -> Result<SimulationOutput, SimulationError> {
    config.validate()?;

    let initial_annual = config.initial_rate().unwrap_or(params.long_term_mean);
    let initial_rate = annual_to_instantaneous(initial_annual);

    let pricer = CirBondPricer::new(params);
    let n_steps = config.n_steps();
    let n_scenarios = config.number_of_scenarios();
    let dt = config.dt();
    let horizon = config.number_of_years();
    let base_seed = config.seed().unwrap_or_else(rand::random);

    debug!(
        n_steps,
        n_scenarios,
        seed = base_seed,
        "generating CIR scenario paths"
    );

    let columns: Vec<(Vec<f64>, Vec<f64>)> = (0..n_scenarios)
        .into_par_iter()
        .map(|scenario| {
            simulate_scenario(
                params,
                &pricer,
                scenario,
                base_seed,
                initial_rate,
                dt,
                horizon,
                n_steps,
            )
        })
        .collect::<Result<_, SimulationError>>()?;

    let (rate_columns, price_columns): (Vec<_>, Vec<_>) = columns.into_iter().unzip();

    debug!(n_scenarios, "simulation complete");

    Ok(SimulationOutput {
        rates: PathTable::from_columns(rate_columns),
        prices: PathTable::from_columns(price_columns),
    })
}

/// Evolves a single scenario over the full grid.
///
/// Works in instantaneous units throughout; the rate column is annualised
/// only after the last step. The price column never needs conversion.
#[allow(clippy::too_many_arguments)]
fn simulate_scenario(
    params: &CirParams<f64>,
    pricer: &CirBondPricer<f64>,
    scenario: usize,
    base_seed: u64,
    initial_rate: f64,
    dt: f64,
    horizon: f64,
    n_steps: usize,
) -> Result<(Vec<f64>, Vec<f64>), SimulationError> {
    let mut rng = SimRng::for_scenario(base_seed, scenario);
    let mut shocks = vec![0.0; n_steps - 1];
    rng.fill_normal(&mut shocks);

    let mut rates = Vec::with_capacity(n_steps);
    let mut prices = Vec::with_capacity(n_steps);

    let mut rate = initial_rate;
    rates.push(rate);
    prices.push(pricer.price(horizon, rate));

    for (step, &dw) in shocks.iter().enumerate() {
        rate = params.evolve_step(rate, dt, dw);
        let tau = horizon - (step + 1) as f64 * dt;
        rates.push(rate);
        prices.push(pricer.price(tau, rate));
    }

    for rate in rates.iter_mut() {
        *rate = instantaneous_to_annual(*rate);
    }

    if let Some(step) = first_non_finite(&rates).or_else(|| first_non_finite(&prices)) {
        return Err(SimulationError::NonFinite { step, scenario });
    }

    Ok((rates, prices))
}

fn first_non_finite(values: &[f64]) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}
