//! # Cirsim Models (Model Layer)
//!
//! Pure mathematics for the Cox-Ingersoll-Ross (CIR) short-rate model:
//! - Rate unit conversions (annualised vs. instantaneous compounding)
//! - `CirParams`: validated model parameters with Feller diagnostics
//! - Euler-Maruyama discretisation step with reflection fix
//! - Closed-form zero-coupon bond pricing under CIR dynamics
//!
//! This crate is deliberately free of randomness and I/O; the simulation
//! driver lives in `cirsim_pricing`. All model functions are generic over
//! [`num_traits::Float`] so they work with `f64` and `f32` alike.
//!
//! ## Example
//!
//! ```
//! use cirsim_models::{CirBondPricer, CirParams};
//! use cirsim_models::conversions::annual_to_instantaneous;
//!
//! let params = CirParams::new(0.05_f64, 0.03, 0.05).unwrap();
//! let pricer = CirBondPricer::new(&params);
//!
//! // Price a 1-year zero-coupon bond at a 3% annualised short rate.
//! let rate = annual_to_instantaneous(0.03);
//! let price = pricer.price(1.0, rate);
//! assert!(price > 0.0 && price <= 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bond;
pub mod cir;
pub mod conversions;
pub mod error;

pub use bond::CirBondPricer;
pub use cir::CirParams;
pub use error::ModelError;
