//! Simulation configuration.
//!
//! This module provides the immutable configuration type and builder for a
//! CIR simulation run. The configuration owns everything about the time grid
//! and the scenario batch; the model coefficients themselves live in
//! [`cirsim_models::CirParams`].

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of scenarios allowed per run.
pub const MAX_SCENARIOS: usize = 10_000_000;

/// Maximum number of time grid rows allowed per run.
pub const MAX_GRID_ROWS: usize = 10_000_000;

/// CIR simulation configuration.
///
/// Immutable configuration specifying the time grid and scenario batch.
/// Use [`SimulationConfigBuilder`] to construct instances; the builder
/// validates at build time, so a `SimulationConfig` in hand is always valid.
///
/// # Examples
///
/// ```rust
/// use cirsim_pricing::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .number_of_years(10.0)
///     .steps_per_year(12)
///     .number_of_scenarios(1_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_steps(), 121); // floor(10 * 12) + 1
/// assert!((config.dt() - 1.0 / 12.0).abs() < 1e-15);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Total simulated horizon in years.
    number_of_years: f64,
    /// Discretisation granularity (grid points per year).
    steps_per_year: usize,
    /// Number of independent scenarios (output columns).
    number_of_scenarios: usize,
    /// Optional starting annualised rate; defaults to the model's long-term
    /// mean when unset.
    initial_rate: Option<f64>,
    /// Optional seed for reproducibility; entropy-seeded when unset.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the simulated horizon in years.
    #[inline]
    pub fn number_of_years(&self) -> f64 {
        self.number_of_years
    }

    /// Returns the number of grid points per year.
    #[inline]
    pub fn steps_per_year(&self) -> usize {
        self.steps_per_year
    }

    /// Returns the number of independent scenarios.
    #[inline]
    pub fn number_of_scenarios(&self) -> usize {
        self.number_of_scenarios
    }

    /// Returns the optional starting annualised rate.
    #[inline]
    pub fn initial_rate(&self) -> Option<f64> {
        self.initial_rate
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the time step size in years: `1 / steps_per_year`.
    #[inline]
    pub fn dt(&self) -> f64 {
        1.0 / self.steps_per_year as f64
    }

    /// Returns the number of grid rows: `floor(number_of_years *
    /// steps_per_year) + 1`. Row 0 is time zero; the last row is
    /// approximately the horizon.
    #[inline]
    pub fn n_steps(&self) -> usize {
        (self.number_of_years * self.steps_per_year as f64).floor() as usize + 1
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `number_of_years` is non-positive or non-finite
    /// - `steps_per_year` is 0
    /// - the resulting grid exceeds [`MAX_GRID_ROWS`] rows
    /// - `number_of_scenarios` is 0 or greater than [`MAX_SCENARIOS`]
    /// - `initial_rate` is set but negative or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.number_of_years.is_finite() || self.number_of_years <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "number_of_years",
                value: format!("must be positive and finite, got {}", self.number_of_years),
            });
        }
        if self.steps_per_year == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "steps_per_year",
                value: "must be positive".to_string(),
            });
        }

        // Compare in floating point before casting so an oversized horizon
        // cannot overflow the row count
        let raw_rows = self.number_of_years * self.steps_per_year as f64;
        if raw_rows >= MAX_GRID_ROWS as f64 {
            return Err(ConfigError::InvalidGridSize(
                (raw_rows as usize).saturating_add(1),
            ));
        }

        if self.number_of_scenarios == 0 || self.number_of_scenarios > MAX_SCENARIOS {
            return Err(ConfigError::InvalidScenarioCount(self.number_of_scenarios));
        }

        if let Some(rate) = self.initial_rate {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name: "initial_rate",
                    value: format!("must be non-negative and finite, got {}", rate),
                });
            }
        }

        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// `number_of_years` and `steps_per_year` must be set explicitly;
/// `number_of_scenarios` defaults to 1.
///
/// # Examples
///
/// ```rust
/// use cirsim_pricing::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .number_of_years(1.0)
///     .steps_per_year(252) // daily grid
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.number_of_scenarios(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    number_of_years: Option<f64>,
    steps_per_year: Option<usize>,
    number_of_scenarios: Option<usize>,
    initial_rate: Option<f64>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the simulated horizon in years.
    #[inline]
    pub fn number_of_years(mut self, years: f64) -> Self {
        self.number_of_years = Some(years);
        self
    }

    /// Sets the number of grid points per year.
    #[inline]
    pub fn steps_per_year(mut self, steps: usize) -> Self {
        self.steps_per_year = Some(steps);
        self
    }

    /// Sets the number of independent scenarios.
    #[inline]
    pub fn number_of_scenarios(mut self, scenarios: usize) -> Self {
        self.number_of_scenarios = Some(scenarios);
        self
    }

    /// Sets the starting annualised rate. When unset, the model's long-term
    /// mean is used.
    #[inline]
    pub fn initial_rate(mut self, rate: f64) -> Self {
        self.initial_rate = Some(rate);
        self
    }

    /// Sets the seed for reproducibility. When unset, the engine seeds from
    /// entropy and the run is not reproducible.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required option is missing or any option
    /// fails validation.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let number_of_years = self.number_of_years.ok_or(ConfigError::InvalidParameter {
            name: "number_of_years",
            value: "must be specified".to_string(),
        })?;

        let steps_per_year = self.steps_per_year.ok_or(ConfigError::InvalidParameter {
            name: "steps_per_year",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            number_of_years,
            steps_per_year,
            number_of_scenarios: self.number_of_scenarios.unwrap_or(1),
            initial_rate: self.initial_rate,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = SimulationConfig::builder()
            .number_of_years(10.0)
            .steps_per_year(12)
            .number_of_scenarios(500)
            .build()
            .unwrap();

        assert_eq!(config.number_of_years(), 10.0);
        assert_eq!(config.steps_per_year(), 12);
        assert_eq!(config.number_of_scenarios(), 500);
        assert_eq!(config.initial_rate(), None);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_defaults_to_one_scenario() {
        let config = SimulationConfig::builder()
            .number_of_years(1.0)
            .steps_per_year(12)
            .build()
            .unwrap();
        assert_eq!(config.number_of_scenarios(), 1);
    }

    #[test]
    fn test_builder_with_seed_and_initial_rate() {
        let config = SimulationConfig::builder()
            .number_of_years(1.0)
            .steps_per_year(12)
            .initial_rate(0.04)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(config.initial_rate(), Some(0.04));
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_grid_shape_whole_years() {
        let config = SimulationConfig::builder()
            .number_of_years(10.0)
            .steps_per_year(12)
            .build()
            .unwrap();
        assert_eq!(config.n_steps(), 121);
    }

    #[test]
    fn test_grid_shape_fractional_horizon_floors() {
        // floor(1.5 * 12) + 1 = 19
        let config = SimulationConfig::builder()
            .number_of_years(1.5)
            .steps_per_year(12)
            .build()
            .unwrap();
        assert_eq!(config.n_steps(), 19);

        // floor(0.9 * 12) + 1 = floor(10.8) + 1 = 11
        let config = SimulationConfig::builder()
            .number_of_years(0.9)
            .steps_per_year(12)
            .build()
            .unwrap();
        assert_eq!(config.n_steps(), 11);
    }

    #[test]
    fn test_sub_step_horizon_has_single_row() {
        // floor(0.5 * 1) + 1 = 1: only the time-zero row
        let config = SimulationConfig::builder()
            .number_of_years(0.5)
            .steps_per_year(1)
            .build()
            .unwrap();
        assert_eq!(config.n_steps(), 1);
    }

    #[test]
    fn test_dt() {
        let config = SimulationConfig::builder()
            .number_of_years(1.0)
            .steps_per_year(4)
            .build()
            .unwrap();
        assert_eq!(config.dt(), 0.25);
    }

    #[test]
    fn test_invalid_zero_years() {
        let result = SimulationConfig::builder()
            .number_of_years(0.0)
            .steps_per_year(12)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "number_of_years",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_negative_years() {
        let result = SimulationConfig::builder()
            .number_of_years(-1.0)
            .steps_per_year(12)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_non_finite_years() {
        let result = SimulationConfig::builder()
            .number_of_years(f64::NAN)
            .steps_per_year(12)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_zero_steps_per_year() {
        let result = SimulationConfig::builder()
            .number_of_years(1.0)
            .steps_per_year(0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "steps_per_year",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_zero_scenarios() {
        let result = SimulationConfig::builder()
            .number_of_years(1.0)
            .steps_per_year(12)
            .number_of_scenarios(0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidScenarioCount(0))));
    }

    #[test]
    fn test_invalid_too_many_scenarios() {
        let result = SimulationConfig::builder()
            .number_of_years(1.0)
            .steps_per_year(12)
            .number_of_scenarios(MAX_SCENARIOS + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidScenarioCount(_))));
    }

    #[test]
    fn test_invalid_oversized_grid() {
        let result = SimulationConfig::builder()
            .number_of_years(1e12)
            .steps_per_year(12)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidGridSize(_))));
    }

    #[test]
    fn test_invalid_negative_initial_rate() {
        let result = SimulationConfig::builder()
            .number_of_years(1.0)
            .steps_per_year(12)
            .initial_rate(-0.01)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "initial_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_number_of_years() {
        let result = SimulationConfig::builder().steps_per_year(12).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "number_of_years",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_steps_per_year() {
        let result = SimulationConfig::builder().number_of_years(1.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "steps_per_year",
                ..
            })
        ));
    }
}
