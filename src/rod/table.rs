//! Bottom-up tabulated rod cutting.
//!
//! # Algorithm
//!
//! For each length `i = 1..=n`, start from the uncut piece and try every
//! first cut `j` from `i` down to `1`, keeping `dp[i-j] + price[j-1]`
//! whenever it is greater than or equal to the current best. Because the
//! comparison is non-strict and `j` descends, ties settle on the smallest
//! first cut. The piece list is rebuilt by following the choice table.
//!
//! # Complexity
//! O(n²) time, O(n) memory, no recursion.

use super::{check_prices, RodCutSolver};
use crate::error::{Error, Result};
use crate::models::CutPlan;

/// Tabulated rod-cutting solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedSolver;

impl RodCutSolver for TabulatedSolver {
    fn name(&self) -> &'static str {
        "tabulated"
    }

    fn solve(&self, length: usize, prices: &[i64]) -> Result<CutPlan> {
        check_prices(length, prices)?;

        let mut profit = vec![0i64; length + 1];
        let mut choice = vec![0usize; length + 1];

        for i in 1..=length {
            profit[i] = prices[i - 1];
            choice[i] = i;

            for j in (1..=i).rev() {
                let candidate = profit[i - j]
                    .checked_add(prices[j - 1])
                    .ok_or(Error::ProfitOverflow { length: i })?;
                if candidate >= profit[i] {
                    profit[i] = candidate;
                    choice[i] = j;
                }
            }
        }

        let cuts = reconstruct(&choice, length);
        tracing::trace!(length, max_profit = profit[length], "tabulated solve");

        Ok(CutPlan::new(profit[length], cuts))
    }
}

/// Follows first-cut choices from `length` down to 0, left to right.
fn reconstruct(choice: &[usize], length: usize) -> Vec<usize> {
    let mut cuts = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        let piece = choice[remaining];
        cuts.push(piece);
        remaining -= piece;
    }
    cuts.reverse();
    cuts
}
