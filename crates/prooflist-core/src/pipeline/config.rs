//! Pipeline configuration

/// Hard cap on the cumulative number of results
pub const MAX_BATCH_SIZE: usize = 1000;

/// Files processed between two cooperative yields to the runtime
pub const YIELD_EVERY: usize = 50;

/// Configuration for a [`HashPipeline`](super::HashPipeline)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Maximum number of results the list may hold
    pub max_batch_size: usize,
    /// Yield after this many files; `0` disables yielding
    pub yield_every: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_batch_size: MAX_BATCH_SIZE,
            yield_every: YIELD_EVERY,
        }
    }
}

impl PipelineConfig {
    /// Set the result cap
    #[must_use]
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    /// Set the yield interval
    #[must_use]
    pub fn with_yield_every(mut self, yield_every: usize) -> Self {
        self.yield_every = yield_every;
        self
    }
}
