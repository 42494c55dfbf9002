//! Cox-Ingersoll-Ross (CIR) short-rate model.
//!
//! The CIR model describes short-rate dynamics with mean reversion:
//! ```text
//! dr(t) = a * (b - r(t)) * dt + sigma * sqrt(r(t)) * dW(t)
//! ```
//! where:
//! - r(t) = instantaneous short rate at time t
//! - a = mean reversion speed (must be positive)
//! - b = long-term mean rate (must be non-negative)
//! - sigma = volatility (must be positive)
//! - dW(t) = Wiener process increment
//!
//! ## Discretisation
//!
//! Path simulation uses the explicit Euler-Maruyama scheme with a reflection
//! fix:
//! ```text
//! r(t+dt) = | r(t) + a * (b - r(t)) * dt + sigma * sqrt(r(t)) * sqrt(dt) * dW |
//! ```
//! The absolute value guards against the (rare, discretisation-induced) case
//! of a negative intermediate value under the square root. This is a biased
//! approximation of the exactly non-negative continuous-time process; it is
//! preserved as-is because replacing it (e.g. with full truncation) would
//! change the simulated output distribution.
//!
//! ## Feller Condition
//!
//! For the continuous-time process to remain strictly positive, the Feller
//! condition must hold:
//! ```text
//! 2 * a * b >= sigma^2
//! ```
//! The condition is exposed as a diagnostic; violating it is not an error.

use num_traits::Float;

use crate::error::ModelError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CIR model parameters.
///
/// # Type Parameters
///
/// * `T` - Float type (`f64` or `f32`)
///
/// # Examples
///
/// ```
/// use cirsim_models::CirParams;
///
/// let params = CirParams::new(0.05_f64, 0.03, 0.05).unwrap();
/// assert!(params.satisfies_feller());
///
/// // Invalid: zero volatility
/// assert!(CirParams::new(0.05_f64, 0.03, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CirParams<T: Float> {
    /// Mean reversion speed (a > 0).
    pub mean_reversion: T,
    /// Long-term mean rate, annualised (b >= 0). Also the default initial
    /// rate when no explicit starting rate is configured.
    pub long_term_mean: T,
    /// Volatility of the short rate (sigma > 0).
    pub volatility: T,
}

impl<T: Float> CirParams<T> {
    /// Creates new CIR parameters with validation.
    ///
    /// # Arguments
    ///
    /// * `mean_reversion` - Mean reversion speed (must be positive)
    /// * `long_term_mean` - Long-term mean rate (must be non-negative)
    /// * `volatility` - Short rate volatility (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if any parameter is non-finite, if
    /// `mean_reversion` or `volatility` is non-positive, or if
    /// `long_term_mean` is negative. Zero volatility is rejected because it
    /// divides by zero in the closed-form bond formula.
    pub fn new(mean_reversion: T, long_term_mean: T, volatility: T) -> Result<Self, ModelError> {
        let as_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);

        for (name, value) in [
            ("mean_reversion", mean_reversion),
            ("long_term_mean", long_term_mean),
            ("volatility", volatility),
        ] {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteParameter {
                    name,
                    value: as_f64(value),
                });
            }
        }

        if mean_reversion <= T::zero() {
            return Err(ModelError::InvalidMeanReversion {
                value: as_f64(mean_reversion),
            });
        }
        if long_term_mean < T::zero() {
            return Err(ModelError::InvalidLongTermMean {
                value: as_f64(long_term_mean),
            });
        }
        if volatility <= T::zero() {
            return Err(ModelError::InvalidVolatility {
                value: as_f64(volatility),
            });
        }

        Ok(Self {
            mean_reversion,
            long_term_mean,
            volatility,
        })
    }

    /// Evolves the instantaneous rate by one time step.
    ///
    /// Applies the Euler-Maruyama recurrence with reflection fix. `dw` is a
    /// standard normal draw; the `sqrt(dt)` scaling that turns it into a
    /// Brownian increment happens here.
    ///
    /// # Arguments
    ///
    /// * `rate` - Current instantaneous rate (non-negative)
    /// * `dt` - Time step size in years (positive)
    /// * `dw` - Standard normal variate for this step
    ///
    /// # Returns
    ///
    /// The next instantaneous rate; non-negative by construction.
    #[inline]
    pub fn evolve_step(&self, rate: T, dt: T, dw: T) -> T {
        let drift = self.mean_reversion * (self.long_term_mean - rate) * dt;
        let diffusion = self.volatility * rate.sqrt() * dt.sqrt() * dw;
        (rate + drift + diffusion).abs()
    }

    /// Checks whether the Feller condition `2ab >= sigma^2` is satisfied.
    ///
    /// When satisfied, the continuous-time CIR process remains strictly
    /// positive. Diagnostic only; the discretised recurrence stays
    /// non-negative either way thanks to the reflection fix.
    pub fn satisfies_feller(&self) -> bool {
        let two = T::one() + T::one();
        two * self.mean_reversion * self.long_term_mean >= self.volatility * self.volatility
    }

    /// Returns the Feller ratio `2ab / sigma^2`.
    ///
    /// Values >= 1.0 indicate the Feller condition is satisfied.
    pub fn feller_ratio(&self) -> T {
        let two = T::one() + T::one();
        let numerator = two * self.mean_reversion * self.long_term_mean;
        numerator / (self.volatility * self.volatility)
    }
}
