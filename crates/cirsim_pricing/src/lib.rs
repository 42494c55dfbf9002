//! # Cirsim Pricing (Engine Layer)
//!
//! Monte Carlo simulation driver for the CIR short-rate model. Given model
//! parameters from `cirsim_models` and a [`SimulationConfig`], the engine
//! produces two time-indexed tables per run:
//! - annualised interest rates, one column per scenario,
//! - the implied zero-coupon bond prices along each rate trajectory.
//!
//! Scenarios are mutually independent, so the engine evolves them in
//! parallel with `rayon`; steps within a scenario are strictly ordered.
//! Each scenario draws its shocks from a seed derived from the configured
//! base seed, so results are bit-reproducible regardless of how rayon
//! schedules the work.
//!
//! ## Usage Example
//!
//! ```rust
//! use cirsim_models::CirParams;
//! use cirsim_pricing::{simulate, SimulationConfig};
//!
//! let params = CirParams::new(0.05, 0.03, 0.05).unwrap();
//! let config = SimulationConfig::builder()
//!     .number_of_years(1.0)
//!     .steps_per_year(12)
//!     .number_of_scenarios(100)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let output = simulate(&params, &config).unwrap();
//! assert_eq!(output.rates.n_steps(), 13); // floor(1 * 12) + 1
//! assert_eq!(output.prices.n_scenarios(), 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod rng;
pub mod simulate;
pub mod table;

pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use error::{ConfigError, SimulationError};
pub use rng::SimRng;
pub use simulate::{simulate, SimulationOutput};
pub use table::PathTable;
