//! Rate unit conversions.
//!
//! The CIR recurrence and the closed-form bond formula operate on
//! instantaneous (continuously-compounded) rates, while rates are quoted and
//! reported in annualised terms. These two conversions are exact inverses of
//! each other and are applied only at the boundary: once on the initial
//! condition going in, and once on the rate table coming out. Bond prices are
//! computed from instantaneous rates directly and are never converted.

use num_traits::Float;

/// Converts an annualised interest rate to an instantaneous rate.
///
/// Computes `ln(1 + rate)` via `ln_1p` for accuracy near zero.
///
/// # Examples
///
/// ```
/// use cirsim_models::conversions::annual_to_instantaneous;
///
/// let r = annual_to_instantaneous(0.03_f64);
/// assert!((r - 1.03_f64.ln()).abs() < 1e-15);
/// ```
#[inline]
pub fn annual_to_instantaneous<T: Float>(rate: T) -> T {
    rate.ln_1p()
}

/// Converts an instantaneous interest rate to an annualised rate.
///
/// Computes `exp(rate) - 1` via `exp_m1` for accuracy near zero. Exact
/// inverse of [`annual_to_instantaneous`].
///
/// # Examples
///
/// ```
/// use cirsim_models::conversions::instantaneous_to_annual;
///
/// let r = instantaneous_to_annual(0.0_f64);
/// assert_eq!(r, 0.0);
/// ```
#[inline]
pub fn instantaneous_to_annual<T: Float>(rate: T) -> T {
    rate.exp_m1()
}
