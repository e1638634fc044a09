//! Rod-cutting profit maximization.
//!
//! Two interchangeable dynamic-programming strategies:
//!
//! - [`MemoizedSolver`]: top-down recursion with a call-scoped memo table.
//!   Ties keep the uncut piece, then the smallest first cut found.
//! - [`TabulatedSolver`]: bottom-up profit and choice tables. Ties resolve
//!   to the smallest first cut, even over the uncut piece.
//!
//! Both return the same `max_profit` for any input; the piece lists may
//! differ when several cuttings earn the same revenue.
//!
//! # Usage
//!
//! ```
//! use u_combopt::rod::{rod_cutting_memo, rod_cutting_table};
//!
//! let prices = [1, 3, 8];
//! let memo = rod_cutting_memo(3, &prices).unwrap();
//! let table = rod_cutting_table(3, &prices).unwrap();
//! assert_eq!(memo.max_profit, 8);
//! assert_eq!(memo.cuts, vec![3]);
//! assert_eq!(table, memo);
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1 (Rod cutting)

mod memo;
mod table;

pub use memo::MemoizedSolver;
pub use table::TabulatedSolver;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::models::{CutPlan, RodCutRequest};

/// A rod-cutting strategy.
pub trait RodCutSolver: Send + Sync + Debug {
    /// Strategy name.
    fn name(&self) -> &'static str;

    /// Finds the most profitable way to cut a rod of `length`.
    ///
    /// `prices[i]` is the revenue for a piece of length `i + 1`.
    ///
    /// # Errors
    /// [`Error::PriceTableTooShort`] when `prices` has fewer than `length` entries.
    fn solve(&self, length: usize, prices: &[i64]) -> Result<CutPlan>;
}

/// Selects a rod-cutting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutStrategy {
    /// Top-down recursion; stack depth grows with rod length.
    Memoized,
    /// Bottom-up iteration.
    #[default]
    Tabulated,
}

impl CutStrategy {
    /// Returns the solver for this strategy.
    pub fn solver(self) -> &'static dyn RodCutSolver {
        match self {
            CutStrategy::Memoized => &MemoizedSolver,
            CutStrategy::Tabulated => &TabulatedSolver,
        }
    }

    /// Solves with this strategy.
    pub fn solve(self, length: usize, prices: &[i64]) -> Result<CutPlan> {
        self.solver().solve(length, prices)
    }
}

impl RodCutRequest {
    /// Solves this request with the given strategy.
    pub fn solve_with(&self, strategy: CutStrategy) -> Result<CutPlan> {
        strategy.solve(self.length, &self.prices)
    }
}

/// Solves by memoized recursion.
pub fn rod_cutting_memo(length: usize, prices: &[i64]) -> Result<CutPlan> {
    MemoizedSolver.solve(length, prices)
}

/// Solves by tabulation.
pub fn rod_cutting_table(length: usize, prices: &[i64]) -> Result<CutPlan> {
    TabulatedSolver.solve(length, prices)
}

/// Fails fast when the price table cannot cover the rod.
fn check_prices(length: usize, prices: &[i64]) -> Result<()> {
    if prices.len() < length {
        return Err(Error::PriceTableTooShort {
            length,
            available: prices.len(),
        });
    }
    Ok(())
}
