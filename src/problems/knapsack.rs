//! 0/1 knapsack as a layered DP.
//!
//! Layer `i` decides item `i`; the frontier at position `i` is row `i` of the
//! full table (best value for every residual capacity `0..=capacity` using
//! the first `i` items). Reconstruction carries the residual capacity and
//! applies the same `m[i+1][w] != m[i][w]` test as the full-table backtrack,
//! so both return the same witness.

use crate::item::{packed_value, row_len, Item, Solution};
use crate::traits::LayeredProblem;

/// Knapsack instance borrowed for one engine run.
///
/// The engine panics under the same conditions as
/// [`DpTable::build`](crate::table::DpTable::build): a capacity of
/// `usize::MAX`, or packed values overflowing `u64`.
#[derive(Clone, Debug)]
pub struct KnapsackProblem<'a> {
    pub items: &'a [Item],
    pub capacity: usize,
}

/// One DP row: best value for each residual capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnapsackRow {
    pub best: Vec<u64>, // length = capacity + 1
}

impl<'a> KnapsackProblem<'a> {
    pub fn new(items: &'a [Item], capacity: usize) -> Self {
        Self { items, capacity }
    }

    /// Keep the items flagged as taken, in input order.
    pub fn selected(&self, taken: &[bool]) -> Vec<Item> {
        self.items
            .iter()
            .zip(taken)
            .filter_map(|(it, &t)| t.then_some(*it))
            .collect()
    }

    pub fn into_solution(self, value: u64, taken: &[bool]) -> Solution {
        Solution {
            value,
            items: self.selected(taken),
        }
    }
}

impl<'a> LayeredProblem for KnapsackProblem<'a> {
    type Frontier = KnapsackRow;
    type State = usize;
    type Decision = bool;
    type Cost = u64;

    fn num_layers(&self) -> usize {
        self.items.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        KnapsackRow {
            best: vec![0; row_len(self.capacity)],
        }
    }

    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier {
        let Item { weight, value } = self.items[layer];
        let prev = &frontier.best;
        let mut next = vec![0u64; prev.len()];
        // next[0] stays 0 regardless of zero-weight items.
        for w in 1..=self.capacity {
            next[w] = if weight <= w {
                packed_value(value, prev[w - weight]).max(prev[w])
            } else {
                prev[w]
            };
        }
        KnapsackRow { best: next }
    }

    fn terminal_state(&self, _frontier_t: &Self::Frontier) -> Self::State {
        self.capacity
    }

    fn backtrack_step(
        &self,
        layer: usize,
        before: &Self::Frontier,
        after: &Self::Frontier,
        state: &Self::State,
    ) -> (Self::State, Self::Decision) {
        let w = *state;
        if after.best[w] != before.best[w] {
            (w - self.items[layer].weight, true)
        } else {
            (w, false)
        }
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.best[self.capacity]
    }
}
