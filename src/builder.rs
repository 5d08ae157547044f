use crate::checkpoint::default_block_size;
use crate::{DpEngine, LayeredProblem};

/// Builder for [`DpEngine`] with an optional explicit block size.
pub struct DpEngineBuilder<P: LayeredProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredProblem> DpEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Accepts `None` to fall back to the default, which suits CLI options.
    pub fn with_optional_block_size(mut self, block_size: Option<usize>) -> Self {
        self.block_size = block_size;
        self
    }

    /// # Panics
    /// Panics if an explicit block size of 0 was configured.
    pub fn build(self) -> DpEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers()));
        DpEngine::with_block_size(self.problem, b)
    }
}
