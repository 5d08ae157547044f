//! Entry points that pick a strategy and return a [`Solution`].

use crate::builder::DpEngineBuilder;
use crate::item::{Item, Solution};
use crate::problems::knapsack::KnapsackProblem;
use crate::table::solve_full_table;

/// How to lay out the DP while solving.
///
/// Both strategies return identical solutions; they differ only in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Keep the whole `(n + 1) x (capacity + 1)` table.
    #[default]
    FullTable,
    /// Keep one row per block of items and replay blocks while backtracking.
    /// `None` uses `ceil(sqrt(n))` items per block.
    Checkpointed { block_size: Option<usize> },
}

/// Solve with the full table.
///
/// ```
/// use knapsack_dp::{items_from_pairs, solve};
///
/// let items = items_from_pairs(&[(2, 3), (3, 4), (4, 5), (5, 5)]);
/// let sol = solve(&items, 7);
/// assert_eq!(sol.value, 9);
/// assert_eq!(sol.items, items_from_pairs(&[(3, 4), (4, 5)]));
/// ```
///
/// # Panics
/// Panics if `capacity == usize::MAX`, or if a packed subset's value would
/// exceed `u64::MAX`. Neither happens when the item values sum to at most
/// `u64::MAX` and the table fits in memory.
pub fn solve(items: &[Item], capacity: usize) -> Solution {
    solve_with(items, capacity, Strategy::FullTable)
}

/// Solve with an explicit [`Strategy`].
///
/// # Panics
/// Panics if `Strategy::Checkpointed` carries `Some(0)` as block size, and
/// under the same conditions as [`solve`].
pub fn solve_with(items: &[Item], capacity: usize, strategy: Strategy) -> Solution {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("solve", items = items.len(), capacity, ?strategy);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let solution = match strategy {
        Strategy::FullTable => solve_full_table(items, capacity),
        Strategy::Checkpointed { block_size } => {
            let problem = KnapsackProblem::new(items, capacity);
            let engine = DpEngineBuilder::new(problem)
                .with_optional_block_size(block_size)
                .build();
            let (value, taken) = engine.run();
            engine.into_problem().into_solution(value, &taken)
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        value = solution.value,
        selected = solution.items.len(),
        "solved"
    );

    solution
}
