//! Closed-form zero-coupon bond pricing under CIR dynamics.
//!
//! The CIR model admits an affine bond-price formula. For remaining maturity
//! `tau` and instantaneous rate `r`:
//! ```text
//! h        = sqrt(a^2 + 2 * sigma^2)
//! A(tau)   = ( 2h * exp((h + a) * tau / 2)
//!            / (2h + (h + a) * (exp(h * tau) - 1)) ) ^ (2ab / sigma^2)
//! B(tau)   = 2 * (exp(h * tau) - 1) / (2h + (h + a) * (exp(h * tau) - 1))
//! P(tau,r) = A(tau) * exp(-B(tau) * r)
//! ```
//! `h` and the exponent `2ab / sigma^2` depend only on model parameters, so
//! [`CirBondPricer`] computes them once and reuses them across the whole
//! grid. At `tau = 0` the formula collapses to `A = 1`, `B = 0`, `P = 1`:
//! the bond pulls to par at maturity.

use num_traits::Float;

use crate::cir::CirParams;

/// Zero-coupon bond pricer for a fixed CIR parameter set.
///
/// Construct once per simulation run, then evaluate [`CirBondPricer::price`]
/// at every (step, scenario) grid cell.
///
/// # Examples
///
/// ```
/// use cirsim_models::{CirBondPricer, CirParams};
///
/// let params = CirParams::new(0.05_f64, 0.03, 0.05).unwrap();
/// let pricer = CirBondPricer::new(&params);
///
/// // A bond at maturity is worth par regardless of the rate.
/// let price = pricer.price(0.0, 0.04);
/// assert!((price - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CirBondPricer<T: Float> {
    /// `sqrt(a^2 + 2 sigma^2)`, computed once per parameter set.
    h: T,
    /// `h + a`.
    h_plus_a: T,
    /// Exponent of the `A(tau)` term: `2ab / sigma^2`.
    exponent: T,
}

impl<T: Float> CirBondPricer<T> {
    /// Creates a pricer for the given parameter set.
    ///
    /// Precomputes `h = sqrt(a^2 + 2 sigma^2)` and the `A(tau)` exponent.
    /// The argument of the square root is non-negative for any real
    /// parameters, and `sigma > 0` is guaranteed by [`CirParams::new`], so
    /// construction cannot fail.
    pub fn new(params: &CirParams<T>) -> Self {
        let two = T::one() + T::one();
        let a = params.mean_reversion;
        let b = params.long_term_mean;
        let sigma = params.volatility;

        let h = (a * a + two * sigma * sigma).sqrt();
        Self {
            h,
            h_plus_a: h + a,
            exponent: two * a * b / (sigma * sigma),
        }
    }

    /// Prices a zero-coupon bond with remaining maturity `tau` years at
    /// instantaneous rate `rate`.
    ///
    /// For economically sensible parameters the result lies in `(0, 1]`.
    /// Extreme parameter magnitudes can overflow `exp(h * tau)` and yield a
    /// non-finite price; detection is left to the simulation driver, which
    /// rejects tables containing non-finite entries.
    pub fn price(&self, tau: T, rate: T) -> T {
        let two = T::one() + T::one();
        let exp_h_tau_m1 = (self.h * tau).exp() - T::one();
        let denominator = two * self.h + self.h_plus_a * exp_h_tau_m1;

        let a_term = (two * self.h * (self.h_plus_a * tau / two).exp() / denominator)
            .powf(self.exponent);
        let b_term = two * exp_h_tau_m1 / denominator;

        a_term * (-b_term * rate).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pricer(a: f64, b: f64, sigma: f64) -> CirBondPricer<f64> {
        CirBondPricer::new(&CirParams::new(a, b, sigma).unwrap())
    }

    #[test]
    fn test_h_is_precomputed_from_parameters() {
        let p = pricer(0.05, 0.03, 0.05);
        let expected = (0.05_f64 * 0.05 + 2.0 * 0.05 * 0.05).sqrt();
        assert_relative_eq!(p.h, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_price_at_maturity_is_par() {
        let p = pricer(0.05, 0.03, 0.05);
        for &rate in &[0.0, 0.01, 0.03, 0.1, 0.5] {
            assert_relative_eq!(p.price(0.0, rate), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_price_near_maturity_converges_to_par() {
        let p = pricer(0.05, 0.03, 0.05);
        assert_relative_eq!(p.price(1e-9, 0.03), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_price_in_unit_interval() {
        let p = pricer(0.05, 0.03, 0.05);
        for &tau in &[0.25, 1.0, 5.0, 10.0, 30.0] {
            for &rate in &[0.001, 0.03, 0.08] {
                let price = p.price(tau, rate);
                assert!(price > 0.0 && price <= 1.0, "P({}, {}) = {}", tau, rate, price);
            }
        }
    }

    #[test]
    fn test_price_decreases_with_rate() {
        let p = pricer(0.05, 0.03, 0.05);
        let low = p.price(5.0, 0.02);
        let high = p.price(5.0, 0.06);
        assert!(low > high);
    }

    #[test]
    fn test_price_decreases_with_maturity() {
        let p = pricer(0.05, 0.03, 0.05);
        let short = p.price(1.0, 0.03);
        let long = p.price(10.0, 0.03);
        assert!(short > long);
    }

    #[test]
    fn test_price_reference_value() {
        // Independent evaluation of the affine formula at tau = 1,
        // r = ln(1.03), a = 0.05, b = 0.03, sigma = 0.05
        let (a, b, sigma) = (0.05_f64, 0.03, 0.05);
        let rate = 1.03_f64.ln();
        let tau = 1.0;

        let h = (a * a + 2.0 * sigma * sigma).sqrt();
        let denom = 2.0 * h + (h + a) * ((h * tau).exp() - 1.0);
        let a_term =
            (2.0 * h * ((h + a) * tau / 2.0).exp() / denom).powf(2.0 * a * b / (sigma * sigma));
        let b_term = 2.0 * ((h * tau).exp() - 1.0) / denom;
        let expected = a_term * (-b_term * rate).exp();

        let p = pricer(a, b, sigma);
        assert_relative_eq!(p.price(tau, rate), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_long_term_mean_degenerates_a_term() {
        // b = 0 makes the A(tau) exponent zero, so A = 1 for any maturity
        let p = pricer(0.05, 0.0, 0.05);
        let price = p.price(5.0, 0.03);
        let b_only = (-2.0
            * ((p.h * 5.0_f64).exp() - 1.0)
            / (2.0 * p.h + p.h_plus_a * ((p.h * 5.0_f64).exp() - 1.0))
            * 0.03)
            .exp();
        assert_relative_eq!(price, b_only, epsilon = 1e-14);
    }

    #[test]
    fn test_extreme_parameters_overflow_to_non_finite() {
        // exp(h * tau) overflows for very large h; the driver is expected to
        // reject the resulting non-finite prices
        let p = pricer(0.05, 0.03, 1e200);
        assert!(!p.price(1.0, 0.03).is_finite());
    }

    #[test]
    fn test_f32_compatibility() {
        let params = CirParams::new(0.05_f32, 0.03, 0.05).unwrap();
        let p = CirBondPricer::new(&params);
        let price = p.price(1.0_f32, 0.03);
        assert!(price > 0.0 && price <= 1.0);
    }
}
