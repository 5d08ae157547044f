//! Generic checkpointed DP engine.
//!
//! Two passes over a [`LayeredProblem`]:
//! 1. A forward pass that runs the recurrence once and keeps only the
//!    frontier entering each block of `block_size` layers.
//! 2. A backward pass that walks the blocks from last to first, replays each
//!    block from its checkpoint and backtracks through it layer by layer.
//!
//! Every layer is computed at most twice, and at most
//! `ceil(T / b) + b + 1` frontiers are alive at once, so the default
//! `b = ceil(sqrt(T))` gives `O(sqrt(T))` frontiers instead of `T + 1`.
//!
//! Because replayed frontiers are bit-for-bit the ones a full table would
//! hold, reconstruction makes exactly the same choices as a full-table
//! backtrack.

use crate::checkpoint::{default_block_size, Checkpoint};
use crate::traits::LayeredProblem;

/// Checkpointed engine for a problem instance `P`.
///
/// ```
/// use knapsack_dp::{items_from_pairs, DpEngine, KnapsackProblem};
///
/// let items = items_from_pairs(&[(2, 3), (3, 4), (4, 5), (5, 5)]);
/// let engine = DpEngine::new(KnapsackProblem::new(&items, 7));
/// let (value, taken) = engine.run();
/// assert_eq!(value, 9);
/// assert_eq!(taken, vec![false, true, true, false]);
/// ```
pub struct DpEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

struct ForwardArtifacts<F> {
    checkpoints: Vec<Checkpoint<F>>,
    final_frontier: F,
}

impl<P: LayeredProblem> DpEngine<P> {
    /// Create an engine with block size `ceil(sqrt(T))`.
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create an engine with an explicit block size.
    ///
    /// A block size of at least `T` degenerates to keeping every frontier of
    /// the single block during reconstruction, i.e. the full table.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn into_problem(self) -> P {
        self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks (and therefore checkpoints) the forward pass keeps.
    pub fn num_blocks(&self) -> usize {
        self.problem.num_layers().div_ceil(self.block_size)
    }

    /// Upper bound on frontiers held at once during [`run`](Self::run).
    pub fn live_frontier_bound(&self) -> usize {
        let t = self.problem.num_layers();
        self.num_blocks() + self.block_size.min(t) + 1
    }

    fn forward_pass(&self) -> ForwardArtifacts<P::Frontier> {
        let t = self.problem.num_layers();
        let b = self.block_size;
        let num_blocks = self.num_blocks();

        let mut checkpoints = Vec::with_capacity(num_blocks);
        let mut frontier = self.problem.init_frontier();

        for k in 0..num_blocks {
            let start = k * b;
            let end = ((k + 1) * b).min(t);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("forward_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            checkpoints.push(Checkpoint {
                start,
                end,
                frontier: frontier.clone(),
            });
            for layer in start..end {
                frontier = self.problem.forward_step(layer, &frontier);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            layers = t,
            block_size = b,
            checkpoints = checkpoints.len(),
            "forward pass complete"
        );

        ForwardArtifacts {
            checkpoints,
            final_frontier: frontier,
        }
    }

    /// Recompute the frontiers at positions `start..=end` of one block.
    fn replay_block(&self, checkpoint: &Checkpoint<P::Frontier>) -> Vec<P::Frontier> {
        let mut rows = Vec::with_capacity(checkpoint.len() + 1);
        rows.push(checkpoint.frontier.clone());
        for layer in checkpoint.start..checkpoint.end {
            let next = self.problem.forward_step(layer, &rows[layer - checkpoint.start]);
            rows.push(next);
        }
        rows
    }

    /// Run both passes.
    ///
    /// Returns `(optimal_cost, decisions)` where `decisions[i]` is the
    /// decision the reconstructed optimum made in layer `i`.
    pub fn run(&self) -> (P::Cost, Vec<P::Decision>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_engine_run", block_size = self.block_size);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let ForwardArtifacts {
            checkpoints,
            final_frontier,
        } = {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("forward_pass");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.forward_pass()
        };

        let cost = self.problem.extract_cost(&final_frontier);
        let mut state = self.problem.terminal_state(&final_frontier);
        drop(final_frontier);

        let mut decisions = Vec::with_capacity(self.problem.num_layers());
        {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("reconstruct", blocks = checkpoints.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            for checkpoint in checkpoints.iter().rev() {
                #[cfg(feature = "tracing")]
                let span = tracing::trace_span!(
                    "backtrack_block",
                    start = checkpoint.start,
                    end = checkpoint.end
                );
                #[cfg(feature = "tracing")]
                let _enter = span.enter();

                let rows = self.replay_block(checkpoint);
                for layer in (checkpoint.start..checkpoint.end).rev() {
                    let local = layer - checkpoint.start;
                    let (prev, decision) = self.problem.backtrack_step(
                        layer,
                        &rows[local],
                        &rows[local + 1],
                        &state,
                    );
                    decisions.push(decision);
                    state = prev;
                }
            }
        }
        decisions.reverse();

        (cost, decisions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Frontier counts how many layers have been applied; decisions record
    /// which frontiers backtracking saw.
    struct CountingProblem {
        t: usize,
        forward_calls: Cell<usize>,
    }

    impl CountingProblem {
        fn new(t: usize) -> Self {
            Self {
                t,
                forward_calls: Cell::new(0),
            }
        }
    }

    impl LayeredProblem for CountingProblem {
        type Frontier = usize;
        type State = usize;
        type Decision = (usize, usize, usize);
        type Cost = usize;

        fn num_layers(&self) -> usize {
            self.t
        }
        fn init_frontier(&self) -> Self::Frontier {
            0
        }
        fn forward_step(&self, _layer: usize, f: &Self::Frontier) -> Self::Frontier {
            self.forward_calls.set(self.forward_calls.get() + 1);
            f + 1
        }
        fn terminal_state(&self, frontier_t: &Self::Frontier) -> Self::State {
            *frontier_t
        }
        fn backtrack_step(
            &self,
            layer: usize,
            before: &Self::Frontier,
            after: &Self::Frontier,
            state: &Self::State,
        ) -> (Self::State, Self::Decision) {
            assert_eq!(*state, layer + 1, "state must be the cursor at layer + 1");
            (state - 1, (layer, *before, *after))
        }
        fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
            *frontier_t
        }
    }

    #[test]
    fn forward_pass_block_shapes() {
        let engine = DpEngine::with_block_size(CountingProblem::new(5), 2);
        let artifacts = engine.forward_pass();
        let spans: Vec<_> = artifacts
            .checkpoints
            .iter()
            .map(|c| (c.start, c.end, c.frontier))
            .collect();
        assert_eq!(spans, vec![(0, 2, 0), (2, 4, 2), (4, 5, 4)]);
        assert_eq!(artifacts.final_frontier, 5);
        assert_eq!(engine.num_blocks(), 3);
    }

    #[test]
    fn backtrack_sees_adjacent_frontiers_in_order() {
        for b in 1..=7 {
            let engine = DpEngine::with_block_size(CountingProblem::new(6), b);
            let (cost, decisions) = engine.run();
            assert_eq!(cost, 6);
            let expected: Vec<_> = (0..6).map(|l| (l, l, l + 1)).collect();
            assert_eq!(decisions, expected, "block size {b}");
        }
    }

    #[test]
    fn each_layer_computed_at_most_twice() {
        let engine = DpEngine::with_block_size(CountingProblem::new(10), 3);
        let _ = engine.run();
        assert_eq!(engine.problem().forward_calls.get(), 20);
    }

    #[test]
    fn zero_layers_yield_no_decisions() {
        let engine = DpEngine::new(CountingProblem::new(0));
        assert_eq!(engine.num_blocks(), 0);
        let (cost, decisions) = engine.run();
        assert_eq!(cost, 0);
        assert!(decisions.is_empty());
    }

    #[test]
    fn default_block_size_bounds_live_frontiers() {
        let engine = DpEngine::new(CountingProblem::new(100));
        assert_eq!(engine.block_size(), 10);
        assert_eq!(engine.live_frontier_bound(), 21);
    }

    #[test]
    #[should_panic(expected = "block_size must be positive")]
    fn with_block_size_panics_on_zero() {
        let _ = DpEngine::with_block_size(CountingProblem::new(2), 0);
    }
}
