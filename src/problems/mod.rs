//! [`LayeredProblem`](crate::traits::LayeredProblem) implementations.
//!
//! - [`knapsack`]: 0/1 knapsack, one layer per item.

pub mod knapsack;
