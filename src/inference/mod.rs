//! Blank inference.
//!
//! Nearest-anchor interpolation/extrapolation with a global uniqueness
//! constraint, iterated to a fixed point.

mod engine;
mod policies;
mod resolver;

pub use engine::{InferenceEngine, InferenceReport, PassSummary, RuleCounts};
pub use policies::{propose, Anchor, Proposal, ProposalRule};
pub use resolver::resolve_collision;
