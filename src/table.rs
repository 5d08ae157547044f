//! Full-table 0/1 knapsack.
//!
//! This is the baseline formulation: an `(n + 1) x (capacity + 1)` grid where
//! `m[i][w]` is the best value reachable with the first `i` items under weight
//! budget `w`. Every other strategy in the crate must agree with it exactly,
//! including which witness subset is returned when several are optimal.

use crate::item::{packed_value, row_len, Item, Solution};

/// Dense DP table for one knapsack instance.
///
/// Row `i` covers the prefix `items[..i]`; column `w` is the residual
/// capacity. Row 0 and column 0 are all zero, and the table is
/// non-decreasing along both axes.
#[derive(Clone, Debug)]
pub struct DpTable<'a> {
    items: &'a [Item],
    capacity: usize,
    rows: Vec<Vec<u64>>,
}

impl<'a> DpTable<'a> {
    /// Fill the table row by row.
    ///
    /// # Panics
    /// Panics if `capacity == usize::MAX`, or if packing items together
    /// would push a value past `u64::MAX`. The second cannot happen when the
    /// values of all items sum to at most `u64::MAX`.
    pub fn build(items: &'a [Item], capacity: usize) -> Self {
        let n = items.len();
        let mut rows = vec![vec![0u64; row_len(capacity)]; n + 1];

        for i in 1..=n {
            let item = items[i - 1];
            let (prev, cur) = rows.split_at_mut(i);
            let prev = &prev[i - 1];
            let cur = &mut cur[0];
            // Column 0 stays zero even for zero-weight items.
            for w in 1..=capacity {
                cur[w] = if item.weight <= w {
                    packed_value(item.value, prev[w - item.weight]).max(prev[w])
                } else {
                    prev[w]
                };
            }
        }

        Self {
            items,
            capacity,
            rows,
        }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `m[i][w]`.
    ///
    /// # Panics
    /// Panics if `i > num_items()` or `w > capacity()`.
    pub fn get(&self, i: usize, w: usize) -> u64 {
        self.rows[i][w]
    }

    /// Row `i` of the table.
    pub fn row(&self, i: usize) -> &[u64] {
        &self.rows[i]
    }

    /// `m[n][capacity]`.
    pub fn optimal_value(&self) -> u64 {
        self.rows[self.num_items()][self.capacity]
    }

    /// Walk back from `(n, capacity)` and collect the taken items.
    ///
    /// Item `i` counts as taken only when `m[i][w] != m[i-1][w]`; exact ties
    /// resolve to skipping it.
    pub fn reconstruct(&self) -> Vec<Item> {
        let mut w = self.capacity;
        let mut taken = Vec::new();
        for i in (1..=self.num_items()).rev() {
            if self.rows[i][w] != self.rows[i - 1][w] {
                let item = self.items[i - 1];
                taken.push(item);
                w -= item.weight;
            }
        }
        taken.reverse();
        taken
    }

    pub fn into_solution(self) -> Solution {
        Solution {
            value: self.optimal_value(),
            items: self.reconstruct(),
        }
    }
}

/// Solve with the full `O(n * capacity)` table.
///
/// # Panics
/// Same conditions as [`DpTable::build`].
pub fn solve_full_table(items: &[Item], capacity: usize) -> Solution {
    DpTable::build(items, capacity).into_solution()
}
