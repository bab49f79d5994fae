//! Solve orchestration: relax, infer, merge.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::{ExecutionError, GapfillResult};
use crate::inference::{InferenceEngine, InferenceReport};
use crate::relaxation::RelaxationGraph;
use crate::sequence::{InferredMap, KnownMap, Sequence};

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Resolved sequence: known values unchanged, blanks filled.
    pub values: Vec<i64>,
    /// Inferred value for each blank position.
    pub inferred: InferredMap,
    /// Relaxed node vectors in position order. Diagnostic only.
    pub embeddings: Vec<Vec<f64>>,
    /// Inference loop statistics.
    pub report: InferenceReport,
}

/// Fill every blank in `sequence`.
///
/// # Errors
///
/// - `ValidationError` if `config` is rejected by `SolverConfig::validate`.
/// - `ExecutionError::MissingInferredValue` if a blank has no inferred value
///   once the inference budget is spent.
/// - `ExecutionError::ArithmeticOverflow` / `DedupExhausted` from inference.
///
/// # Examples
///
/// ```
/// use gapfill::{solve, Sequence, SolverConfig};
///
/// let seq = Sequence::from(vec![Some(5), None, None]);
/// let solution = solve(&seq, &SolverConfig::default().with_seed(7)).unwrap();
/// assert_eq!(solution.values, vec![5, 6, 7]);
/// assert_eq!(solution.inferred.get(&1), Some(&6));
/// ```
pub fn solve(sequence: &Sequence, config: &SolverConfig) -> GapfillResult<Solution> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut graph = RelaxationGraph::build(sequence, config.vector_dim, &mut rng);
    graph.propagate(config.iterations, config.alpha);

    let known = sequence.known_map();
    let mut engine = InferenceEngine::with_config(&known, sequence.len(), config);
    let report = engine.run(config.max_infer_iter)?;
    let inferred = engine.into_inferred();

    let values = merge(sequence, &known, &inferred)?;

    tracing::debug!(
        len = sequence.len(),
        blanks = inferred.len(),
        passes = report.passes,
        converged = report.converged,
        "solve complete"
    );

    Ok(Solution {
        values,
        inferred,
        embeddings: graph.into_embeddings(),
        report,
    })
}

/// Combine known and inferred values into a full sequence.
///
/// Fails on the first blank position without an inferred value.
pub fn merge(
    sequence: &Sequence,
    known: &KnownMap,
    inferred: &InferredMap,
) -> Result<Vec<i64>, ExecutionError> {
    (0..sequence.len())
        .map(|index| {
            known
                .get(&index)
                .or_else(|| inferred.get(&index))
                .copied()
                .ok_or(ExecutionError::MissingInferredValue { index })
        })
        .collect()
}
