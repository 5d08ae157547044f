//! Core trait for dynamic programs the checkpointed engine can run.
//!
//! The engine only needs a recurrence that advances one layer at a time and
//! a way to step backwards across a single layer once both of its bounding
//! frontiers are known. Everything else (how many rows are kept, when they
//! are recomputed) is the engine's business.

/// A layered dynamic program over a fixed instance.
///
/// Semantics:
/// - There are `T = num_layers()` layers. Layer `i` turns the frontier at
///   position `i` into the frontier at position `i + 1`.
/// - `forward_step` must depend only on its input frontier and the instance
///   data, so the engine may recompute any frontier from an earlier one.
/// - Reconstruction starts from `terminal_state` at position `T` and calls
///   `backtrack_step` for `i = T-1, ..., 0`, each call yielding the state at
///   position `i` and the decision taken in layer `i`.
pub trait LayeredProblem {
    /// DP values at one position (e.g. a table row).
    type Frontier: Clone;

    /// Cursor carried through reconstruction (e.g. a residual capacity).
    type State: Clone;

    /// What the optimal path did in one layer.
    type Decision;

    /// Objective value.
    type Cost: Copy + Ord;

    /// Number of layers `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at position 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Apply layer `layer`, mapping the frontier at `layer` to `layer + 1`.
    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier;

    /// Where reconstruction starts, given the frontier at position `T`.
    fn terminal_state(&self, frontier_t: &Self::Frontier) -> Self::State;

    /// Step back across layer `layer`.
    ///
    /// `before` is the frontier at position `layer`, `after` the frontier at
    /// `layer + 1`, and `state` the cursor at `layer + 1`.
    fn backtrack_step(
        &self,
        layer: usize,
        before: &Self::Frontier,
        after: &Self::Frontier,
        state: &Self::State,
    ) -> (Self::State, Self::Decision);

    /// Objective value read off the final frontier.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}
