//! 0/1 knapsack by tabulation.
//!
//! Variables:
//!   n      : number of items
//!   W      : capacity
//!   table  : (n+1) x (W+1), table[i][w] = best value from items[..i] within weight w
//!
//! Equations:
//!   table[0][*] = 0
//!   table[i][w] = max(table[i-1][w], table[i-1][w - wt[i-1]] + val[i-1])   if wt[i-1] <= w
//!               = table[i-1][w]                                           otherwise
//!
//!   Sums are checked; a total past i64::MAX is rejected as invalid input.
//!   Item i-1 was taken iff table[i][w] != table[i-1][w] while walking back from (n, W).
//!   O(n*W) time and space.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{AlgoError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackSolution {
    /// Optimal total value.
    pub value: i64,
    /// Indices of the chosen items, ascending.
    pub items: Vec<usize>,
}

pub fn knapsack(weights: &[i64], values: &[i64], capacity: i64) -> Result<KnapsackSolution> {
    if weights.len() != values.len() {
        return Err(AlgoError::InvalidInput(format!(
            "{} weights but {} values",
            weights.len(),
            values.len()
        )));
    }
    let cap = usize::try_from(capacity).map_err(|_| {
        AlgoError::InvalidInput(format!("capacity must be non-negative, got {capacity}"))
    })?;
    let wts = weights
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            usize::try_from(w).map_err(|_| {
                AlgoError::InvalidInput(format!("weight of item {i} is negative: {w}"))
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    let n = wts.len();
    trace!(items = n, capacity = cap, "knapsack table");
    let mut table = vec![vec![0i64; cap + 1]; n + 1];
    for i in 1..=n {
        for w in 0..=cap {
            let skip = table[i - 1][w];
            table[i][w] = if wts[i - 1] <= w {
                let take = table[i - 1][w - wts[i - 1]]
                    .checked_add(values[i - 1])
                    .ok_or_else(|| {
                        AlgoError::InvalidInput(format!(
                            "total value overflows i64 at item {}",
                            i - 1
                        ))
                    })?;
                skip.max(take)
            } else {
                skip
            };
        }
    }

    let mut items = Vec::new();
    let mut w = cap;
    for i in (1..=n).rev() {
        if table[i][w] != table[i - 1][w] {
            items.push(i - 1);
            w -= wts[i - 1];
        }
    }
    items.reverse();

    let value = table[n][cap];
    debug!(value, chosen = items.len(), "knapsack solved");
    Ok(KnapsackSolution { value, items })
}
