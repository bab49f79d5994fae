//! Error types for gapfill.
//!
//! Errors are strongly typed using thiserror and split into
//! validation (bad configuration, rejected before any work) and
//! execution (the solve itself could not complete).

use thiserror::Error;

/// Validation errors raised by `SolverConfig::validate`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Vector dimension must be at least 1")]
    InvalidVectorDimension,

    #[error("Blend factor {value} is out of range [0.0, 1.0]")]
    InvalidBlendFactor {
        value: f64,
    },

    #[error("Dedup step bound must be at least 1")]
    InvalidDedupBound,

    #[error("Node {index} has {actual} dimensions, expected {expected}")]
    MixedVectorDimensions {
        index: usize,
        actual: usize,
        expected: usize,
    },
}

/// Execution errors that occur while inferring or merging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("Missing inferred value for blank position {index}")]
    MissingInferredValue {
        index: usize,
    },

    #[error("Arithmetic overflow while proposing a value for position {index}")]
    ArithmeticOverflow {
        index: usize,
    },

    #[error("No free value for position {index} within {steps} steps (started at {candidate})")]
    DedupExhausted {
        index: usize,
        candidate: i64,
        steps: usize,
    },
}

/// Top-level error type for gapfill.
#[derive(Debug, Error)]
pub enum GapfillError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

impl GapfillError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }
}

/// Result type alias for gapfill operations.
pub type GapfillResult<T> = Result<T, GapfillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_blend_factor() {
        let err = ValidationError::InvalidBlendFactor { value: 1.5 };
        let msg = format!("{err}");
        assert!(msg.contains("1.5"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn test_validation_error_mixed_dimensions() {
        let err = ValidationError::MixedVectorDimensions {
            index: 1,
            actual: 2,
            expected: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains("Node 1"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn test_execution_error_missing_value() {
        let err = ExecutionError::MissingInferredValue { index: 7 };
        let msg = format!("{err}");
        assert!(msg.contains("Missing inferred value"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_execution_error_dedup_exhausted() {
        let err = ExecutionError::DedupExhausted {
            index: 2,
            candidate: -4,
            steps: 16,
        };
        let msg = format!("{err}");
        assert!(msg.contains("-4"));
        assert!(msg.contains("16 steps"));
    }

    #[test]
    fn test_gapfill_error_from_validation() {
        let err: GapfillError = ValidationError::InvalidVectorDimension.into();
        assert!(err.is_validation());
        assert!(!err.is_execution());
    }

    #[test]
    fn test_gapfill_error_from_execution() {
        let err: GapfillError = ExecutionError::ArithmeticOverflow { index: 0 }.into();
        assert!(err.is_execution());
        assert!(!err.is_validation());
    }
}
