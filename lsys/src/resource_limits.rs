/// Safety bounds for generation
///
/// Sequence length can grow exponentially with the number of generations.
/// By default only the length is capped; a generation count bound is opt-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum number of generations a single `generate` call may run
    /// Typical plant models: 5-10, Limit: none unless the caller sets one
    pub max_generations: usize,

    /// Maximum number of symbols in any produced generation
    /// Typical plant models: ~100K symbols, Limit: 10M (100x)
    pub max_sequence_length: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_generations: usize::MAX,
            max_sequence_length: 10_000_000,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits that never trigger; the caller bounds the work instead
    pub fn unlimited() -> Self {
        Self {
            max_generations: usize::MAX,
            max_sequence_length: usize::MAX,
        }
    }
}
