//! Exact 0/1 knapsack by dynamic programming.
//!
//! Given items with non-negative integer weights and values and a capacity,
//! find the most valuable subset whose total weight fits, together with one
//! witness subset.
//!
//! ## Strategies
//! - [`Strategy::FullTable`]: the classic `(n + 1) x (capacity + 1)` table
//!   ([`DpTable`]) with a backward walk to recover the chosen items.
//! - [`Strategy::Checkpointed`]: the same recurrence run through the generic
//!   [`DpEngine`], which keeps one row per block of items and replays blocks
//!   during reconstruction. Memory drops to `O(sqrt(n) * capacity)` at the
//!   cost of computing every row twice.
//!
//! Both strategies return the same solution, including which subset is
//! reported when several are optimal.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{items_from_pairs, solve_with, Strategy};
//!
//! let items = items_from_pairs(&[(2, 3), (3, 4), (4, 5), (5, 5)]);
//! let sol = solve_with(&items, 7, Strategy::Checkpointed { block_size: None });
//! assert_eq!(sol.value, 9);
//! assert_eq!(sol.items, items_from_pairs(&[(3, 4), (4, 5)]));
//! ```
//!
//! ## Zero-weight items
//! Column 0 of the table is always zero. A zero-weight item is therefore
//! never collected at capacity 0, and it also drops out of any optimum that
//! fills the remaining capacity exactly (items `[(0, 5), (3, 4)]` at
//! capacity 3 give 5, not 9). Outputs of the `knapsack` tool depend on this
//! recurrence, so it is kept as is.

pub mod builder;
pub mod checkpoint;
pub mod engine;
pub mod io;
pub mod item;
pub mod problems;
pub mod solver;
pub mod table;
pub mod traits;

pub use crate::builder::DpEngineBuilder;
pub use crate::engine::DpEngine;
pub use crate::io::{parse_input, write_result, InputError, Instance};
pub use crate::item::{items_from_pairs, Item, Solution};
pub use crate::problems::knapsack::KnapsackProblem;
pub use crate::solver::{solve, solve_with, Strategy};
pub use crate::table::DpTable;
pub use crate::traits::LayeredProblem;
