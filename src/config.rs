//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Knobs for a single solve.
///
/// Every field has a default, so a partial JSON object deserializes into a
/// usable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Width of each relaxation node vector.
    pub vector_dim: usize,
    /// Number of relaxation passes over the graph.
    pub iterations: usize,
    /// Maximum number of inference passes before giving up on a fixed point.
    pub max_infer_iter: usize,
    /// Weight of a node's own vector when blending with its neighbors.
    pub alpha: f64,
    /// Seed for node initialization. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Assign `0` to blanks that have no anchor on either side.
    pub zero_fallback: bool,
    /// Upper bound on dedup increments for a single candidate.
    pub max_dedup_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            vector_dim: 5,
            iterations: 5,
            max_infer_iter: 5,
            alpha: 0.5,
            seed: None,
            zero_fallback: true,
            max_dedup_steps: 1 << 20,
        }
    }
}

impl SolverConfig {
    /// Returns a copy with a fixed node-initialization seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    ///
    /// Called by `solve` before any node is built.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.vector_dim == 0 {
            return Err(ValidationError::InvalidVectorDimension);
        }
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ValidationError::InvalidBlendFactor { value: self.alpha });
        }
        if self.max_dedup_steps == 0 {
            return Err(ValidationError::InvalidDedupBound);
        }
        Ok(())
    }
}
