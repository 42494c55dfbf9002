//! Error types for CIR model construction.
//!
//! This module provides:
//! - `ModelError`: Errors raised when model parameters are rejected

use thiserror::Error;

/// Model parameter errors.
///
/// Raised by [`crate::CirParams::new`] when a parameter set would leave the
/// discretised recurrence or the closed-form bond formula undefined. Values
/// are reported as `f64` regardless of the generic float type used by the
/// caller.
///
/// # Examples
/// ```
/// use cirsim_models::{CirParams, ModelError};
///
/// let err = CirParams::new(0.05_f64, 0.03, 0.0).unwrap_err();
/// assert!(matches!(err, ModelError::InvalidVolatility { .. }));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Mean reversion speed must be strictly positive.
    #[error("Invalid mean reversion speed: a = {value}")]
    InvalidMeanReversion {
        /// The rejected value.
        value: f64,
    },

    /// Long-term mean rate must be non-negative.
    #[error("Invalid long-term mean rate: b = {value}")]
    InvalidLongTermMean {
        /// The rejected value.
        value: f64,
    },

    /// Volatility must be strictly positive. A zero volatility divides by
    /// zero in the closed-form `B(tau)` term and the `A(tau)` exponent.
    #[error("Invalid volatility: sigma = {value}")]
    InvalidVolatility {
        /// The rejected value.
        value: f64,
    },

    /// A parameter was NaN or infinite.
    #[error("Non-finite parameter '{name}': {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
