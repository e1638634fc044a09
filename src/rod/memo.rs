//! Top-down memoized rod cutting.
//!
//! # Algorithm
//!
//! `best(k)` is the best revenue and piece list for a rod of length `k`:
//!
//! 1. `best(0) = (0, [])`.
//! 2. Start from the uncut piece `(price[k-1], [k])`.
//! 3. For first cut `i = 1..k-1` ascending, replace the candidate only if
//!    `price[i-1] + best(k-i)` is strictly greater.
//!
//! Results are memoized per call, keyed by remaining length.
//!
//! # Complexity
//! O(n²) time, O(n) memory, O(n) recursion depth.

use std::collections::HashMap;

use super::{check_prices, RodCutSolver};
use crate::error::{Error, Result};
use crate::models::CutPlan;

/// Memoized recursive rod-cutting solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedSolver;

impl RodCutSolver for MemoizedSolver {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn solve(&self, length: usize, prices: &[i64]) -> Result<CutPlan> {
        check_prices(length, prices)?;

        let mut table = MemoTable::new(prices);
        let max_profit = table.best(length)?;
        let cuts = table.pieces(length);
        tracing::trace!(length, max_profit, subproblems = table.memo.len(), "memoized solve");

        Ok(CutPlan::new(max_profit, cuts))
    }
}

/// Memo state owned by a single solve call.
///
/// Maps remaining length to its best revenue and the first piece that earns it.
struct MemoTable<'a> {
    prices: &'a [i64],
    memo: HashMap<usize, (i64, usize)>,
}

impl<'a> MemoTable<'a> {
    fn new(prices: &'a [i64]) -> Self {
        Self {
            prices,
            memo: HashMap::new(),
        }
    }

    fn best(&mut self, length: usize) -> Result<i64> {
        if length == 0 {
            return Ok(0);
        }
        if let Some(&(profit, _)) = self.memo.get(&length) {
            return Ok(profit);
        }

        let mut max_profit = self.prices[length - 1];
        let mut first_cut = length;

        for first in 1..length {
            let rest = self.best(length - first)?;
            let profit = self.prices[first - 1]
                .checked_add(rest)
                .ok_or(Error::ProfitOverflow { length })?;
            // Strict: ties keep the earlier candidate
            if profit > max_profit {
                max_profit = profit;
                first_cut = first;
            }
        }

        self.memo.insert(length, (max_profit, first_cut));
        Ok(max_profit)
    }

    /// Rebuilds the piece list from stored first cuts, left to right.
    fn pieces(&self, length: usize) -> Vec<usize> {
        let mut cuts = Vec::new();
        let mut remaining = length;
        while let Some(&(_, first)) = self.memo.get(&remaining) {
            cuts.push(first);
            remaining -= first;
        }
        cuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_case() {
        let plan = MemoizedSolver.solve(5, &[2, 5, 7, 8, 10]).unwrap();
        assert_eq!(plan.max_profit, 12);
        // 1+2+2 is found first among the 12-revenue cuttings
        assert_eq!(plan.cuts, vec![1, 2, 2]);
        assert_eq!(plan.number_of_cuts, 2);
    }

    #[test]
    fn test_no_cut_optimal() {
        let plan = MemoizedSolver.solve(3, &[1, 3, 8]).unwrap();
        assert_eq!(plan.max_profit, 8);
        assert_eq!(plan.cuts, vec![3]);
        assert_eq!(plan.number_of_cuts, 0);
    }

    #[test]
    fn test_uniform_cuts() {
        let plan = MemoizedSolver.solve(4, &[3, 5, 6, 7]).unwrap();
        assert_eq!(plan.max_profit, 12);
        assert_eq!(plan.cuts, vec![1, 1, 1, 1]);
        assert_eq!(plan.number_of_cuts, 3);
    }

    #[test]
    fn test_uncut_wins_ties() {
        // 4 = 2+2 = 1+3 ties the whole rod at 10
        let plan = MemoizedSolver.solve(4, &[2, 5, 8, 10]).unwrap();
        assert_eq!(plan.max_profit, 10);
        assert_eq!(plan.cuts, vec![4]);
    }

    #[test]
    fn test_zero_length() {
        let plan = MemoizedSolver.solve(0, &[5, 6]).unwrap();
        assert_eq!(plan.max_profit, 0);
        assert!(plan.cuts.is_empty());
        assert_eq!(plan.number_of_cuts, 0);
    }

    #[test]
    fn test_longer_price_table_ignored() {
        let plan = MemoizedSolver.solve(2, &[1, 5, 100]).unwrap();
        assert_eq!(plan.max_profit, 5);
        assert_eq!(plan.cuts, vec![2]);
    }

    #[test]
    fn test_long_rod_all_unit_pieces() {
        // price[k-1] = 2k - 1 with price[0] = 2: unit pieces always win
        let length = 2000;
        let prices: Vec<i64> = (1..=length as i64)
            .map(|k| if k == 1 { 2 } else { 2 * k - 1 })
            .collect();

        let plan = MemoizedSolver.solve(length, &prices).unwrap();
        assert_eq!(plan.max_profit, 2 * length as i64);
        assert_eq!(plan.cuts, vec![1; length]);
        assert_eq!(plan.number_of_cuts, length - 1);
    }

    #[test]
    fn test_profit_overflow() {
        let err = MemoizedSolver.solve(2, &[i64::MAX, 0]).unwrap_err();
        assert_eq!(err, Error::ProfitOverflow { length: 2 });
    }

    #[test]
    fn test_clrs_table() {
        let prices = [1, 5, 8, 9, 10, 17, 17, 20, 24, 30];
        let expected = [1, 5, 8, 10, 13, 17, 18, 22, 25, 30];
        for (i, &want) in expected.iter().enumerate() {
            let plan = MemoizedSolver.solve(i + 1, &prices).unwrap();
            assert_eq!(plan.max_profit, want, "length {}", i + 1);
            assert_eq!(plan.revenue(&prices), Some(want));
        }
    }
}
