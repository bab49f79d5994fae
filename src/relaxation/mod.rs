//! Relaxation graph.
//!
//! A diagnostic structural pass: one node per sequence position, each holding
//! a small random vector that is smoothed toward its chain neighbors. The
//! resulting vectors are reported alongside a solution but never feed into
//! the inferred values.

mod graph;
mod node;

pub use graph::RelaxationGraph;
pub use node::{Node, NodeLabel, NodeOrigin, INIT_SCALE, NORM_EPSILON};
