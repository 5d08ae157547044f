//! Row checkpoints kept by the engine between its two passes.
//!
//! Each `Checkpoint` covers an interval [start, end) of layers and stores the
//! frontier *entering* that interval, which is all the backward pass needs to
//! recompute the interval's rows on demand.

/// Frontier snapshot at the start of a contiguous block of layers.
#[derive(Debug, Clone)]
pub struct Checkpoint<F> {
    /// First layer of the block.
    pub start: usize,
    /// One past the last layer of the block.
    pub end: usize,
    /// Frontier at layer `start`.
    pub frontier: F,
}

impl<F> Checkpoint<F> {
    /// Number of layers the block spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Block size used when none is configured: `ceil(sqrt(T))` for `T` layers.
///
/// With `T / b` checkpoints plus `b` recomputed rows live at once, this keeps
/// the engine at `O(sqrt(T))` frontiers.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        return 1;
    }
    let mut b = (num_layers as f64).sqrt() as usize;
    // Float sqrt can be off by one for large inputs.
    while b * b < num_layers {
        b += 1;
    }
    while b > 1 && (b - 1) * (b - 1) >= num_layers {
        b -= 1;
    }
    b
}
