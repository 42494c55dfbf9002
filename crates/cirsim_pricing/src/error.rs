//! Error types for the simulation engine.
//!
//! This module defines structured error types for configuration validation
//! and runtime failures in the CIR simulation driver.

use cirsim_models::ModelError;
use thiserror::Error;

/// Configuration error for the simulation engine.
///
/// These errors occur during construction when invalid grid or scenario
/// parameters are provided.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Scenario count outside the valid range [1, 10_000_000].
    #[error("Invalid scenario count {0}: must be in range [1, 10_000_000]")]
    InvalidScenarioCount(usize),

    /// Time grid would have more rows than the allowed maximum of 10_000_000.
    #[error("Invalid grid size {0}: must be at most 10_000_000 rows")]
    InvalidGridSize(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Top-level simulation error.
///
/// A simulation either returns two fully-populated, consistent tables or
/// fails with one of these variants before returning anything; there are no
/// partial results.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// The simulation configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The CIR model parameters were rejected.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The recurrence or the bond formula produced a NaN or infinity,
    /// typically from overflow under extreme parameter magnitudes. The
    /// offending grid cell is reported instead of a table containing
    /// non-finite entries.
    #[error("Non-finite value at step {step}, scenario {scenario}")]
    NonFinite {
        /// Grid row of the first non-finite value.
        step: usize,
        /// Scenario column of the first non-finite value.
        scenario: usize,
    },
}
