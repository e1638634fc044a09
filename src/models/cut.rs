//! Rod-cutting problem and solution records.

use serde::{Deserialize, Serialize};

/// A rod-cutting instance.
///
/// `prices[i]` is the revenue for a piece of length `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RodCutRequest {
    /// Rod length.
    pub length: usize,
    /// Price per piece length, indexed from length 1.
    pub prices: Vec<i64>,
}

impl RodCutRequest {
    /// Creates a rod-cutting request.
    pub fn new(length: usize, prices: Vec<i64>) -> Self {
        Self { length, prices }
    }
}

/// An optimal way to cut a rod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutPlan {
    /// Best achievable revenue.
    pub max_profit: i64,
    /// Piece lengths, left to right.
    pub cuts: Vec<usize>,
    /// Cuts needed to produce the pieces (pieces - 1, or 0).
    pub number_of_cuts: usize,
}

impl CutPlan {
    /// Builds a plan from its profit and piece list.
    pub fn new(max_profit: i64, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Sum of piece lengths.
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }

    /// Revenue of the pieces under `prices`.
    ///
    /// Returns `None` when a piece has no listed price.
    pub fn revenue(&self, prices: &[i64]) -> Option<i64> {
        self.cuts
            .iter()
            .map(|&piece| piece.checked_sub(1).and_then(|i| prices.get(i)).copied())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_count() {
        assert_eq!(CutPlan::new(8, vec![3]).number_of_cuts, 0);
        assert_eq!(CutPlan::new(12, vec![2, 3]).number_of_cuts, 1);
        assert_eq!(CutPlan::new(0, vec![]).number_of_cuts, 0);
    }

    #[test]
    fn test_revenue_and_length() {
        let plan = CutPlan::new(12, vec![2, 3]);
        assert_eq!(plan.total_length(), 5);
        assert_eq!(plan.revenue(&[2, 5, 7, 8, 10]), Some(12));
        assert_eq!(plan.revenue(&[2]), None);
    }

    #[test]
    fn test_request_record_shape() {
        let req: RodCutRequest =
            serde_json::from_str(r#"{"length": 3, "prices": [1, 3, 8]}"#).unwrap();
        assert_eq!(req, RodCutRequest::new(3, vec![1, 3, 8]));

        let value = serde_json::to_value(CutPlan::new(8, vec![3])).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"max_profit": 8, "cuts": [3], "number_of_cuts": 0})
        );
    }
}
