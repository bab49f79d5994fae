//! # gapfill - blank reconstruction for integer sequences
//!
//! Given an ordered sequence where some slots are known integers and the rest
//! are blank, gapfill assigns every blank an integer so that:
//!
//! - known values are never changed,
//! - each blank follows from its nearest known-or-inferred neighbors
//!   (floor-division interpolation, or a ±1 step when only one side exists),
//! - no value is used twice across known and inferred slots.
//!
//! A solve also runs a relaxation pass over a chain graph of small random
//! vectors. Those vectors are returned for inspection and have no effect on
//! the inferred values.
//!
//! ## Usage
//!
//! ```rust
//! use gapfill::{solve, Sequence, SolverConfig};
//!
//! let seq = Sequence::from(vec![Some(0), None, None, None, Some(10)]);
//! let solution = solve(&seq, &SolverConfig::default().with_seed(1)).unwrap();
//!
//! assert_eq!(solution.values, vec![0, 2, 4, 7, 10]);
//! assert!(solution.report.converged);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod inference;
pub mod relaxation;
pub mod sequence;
pub mod solver;

// Re-export primary types at crate root for convenience
pub use config::SolverConfig;
pub use error::{ExecutionError, GapfillError, GapfillResult, ValidationError};
pub use inference::{InferenceEngine, InferenceReport, ProposalRule};
pub use relaxation::{Node, NodeLabel, NodeOrigin, RelaxationGraph};
pub use sequence::{InferredMap, KnownMap, Sequence};
pub use solver::{merge, solve, Solution};
