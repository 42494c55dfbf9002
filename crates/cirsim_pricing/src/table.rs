//! Time-indexed output tables.
//!
//! A simulation run produces two tables of identical shape: annualised rates
//! and bond prices, each with one row per grid step and one column per
//! scenario.
//!
//! # Memory Layout
//!
//! Values are stored row-major: `data[step * n_scenarios + scenario]`. Rows
//! are contiguous, so reading one time slice across all scenarios is a plain
//! slice borrow.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-size table of simulated values, row-indexed by grid step and
/// column-indexed by scenario.
///
/// # Examples
///
/// ```rust
/// use cirsim_pricing::PathTable;
///
/// // Two scenarios over three grid rows
/// let table = PathTable::from_columns(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
/// assert_eq!(table.n_steps(), 3);
/// assert_eq!(table.n_scenarios(), 2);
/// assert_eq!(table.value(1, 0), 2.0);
/// assert_eq!(table.row(2), &[3.0, 6.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathTable {
    /// Row-major values, `n_steps * n_scenarios` entries.
    data: Vec<f64>,
    n_steps: usize,
    n_scenarios: usize,
}

impl PathTable {
    /// Builds a table from per-scenario columns.
    ///
    /// Each column holds one scenario's values over the full grid; all
    /// columns must have equal length.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is empty or the column lengths disagree.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Self {
        assert!(!columns.is_empty(), "table requires at least one scenario");
        let n_steps = columns[0].len();
        assert!(
            columns.iter().all(|c| c.len() == n_steps),
            "all scenario columns must have equal length"
        );

        let n_scenarios = columns.len();
        let mut data = vec![0.0; n_steps * n_scenarios];
        for (scenario, column) in columns.iter().enumerate() {
            for (step, &value) in column.iter().enumerate() {
                data[step * n_scenarios + scenario] = value;
            }
        }

        Self {
            data,
            n_steps,
            n_scenarios,
        }
    }

    /// Returns the number of grid rows.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of scenario columns.
    #[inline]
    pub fn n_scenarios(&self) -> usize {
        self.n_scenarios
    }

    /// Returns the value at the given grid row and scenario column.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn value(&self, step: usize, scenario: usize) -> f64 {
        assert!(scenario < self.n_scenarios, "scenario index out of range");
        self.data[step * self.n_scenarios + scenario]
    }

    /// Returns one time slice: the values of every scenario at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is out of range.
    #[inline]
    pub fn row(&self, step: usize) -> &[f64] {
        &self.data[step * self.n_scenarios..(step + 1) * self.n_scenarios]
    }

    /// Returns the final time slice (the row nearest the horizon).
    #[inline]
    pub fn terminal_row(&self) -> &[f64] {
        self.row(self.n_steps - 1)
    }

    /// Returns one scenario's full trajectory as an owned vector.
    ///
    /// # Panics
    ///
    /// Panics if `scenario` is out of range.
    pub fn column(&self, scenario: usize) -> Vec<f64> {
        assert!(scenario < self.n_scenarios, "scenario index out of range");
        (0..self.n_steps)
            .map(|step| self.data[step * self.n_scenarios + scenario])
            .collect()
    }

    /// Returns the raw row-major values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}
