use rand::Rng;

use crate::error::ValidationError;
use crate::sequence::Sequence;

use super::node::{Node, NodeLabel, NodeOrigin};

/// Chain graph over sequence positions.
///
/// Known positions are pinned: their vectors never change. Blank positions
/// are relaxed toward their immediate neighbors.
#[derive(Debug, Clone)]
pub struct RelaxationGraph {
    nodes: Vec<Node>,
    pinned: Vec<bool>,
}

impl RelaxationGraph {
    /// Builds one randomly-initialized node per position.
    pub fn build<R: Rng + ?Sized>(sequence: &Sequence, dim: usize, rng: &mut R) -> Self {
        let mut nodes = Vec::with_capacity(sequence.len());
        let mut pinned = Vec::with_capacity(sequence.len());
        for (index, slot) in sequence.as_slice().iter().enumerate() {
            let origin = if slot.is_some() {
                NodeOrigin::Known
            } else {
                NodeOrigin::Blank
            };
            nodes.push(Node::random(NodeLabel { origin, index }, dim, rng));
            pinned.push(slot.is_some());
        }
        Self { nodes, pinned }
    }

    /// Builds a graph from prepared nodes. Nodes with a `Known` origin are pinned.
    ///
    /// Every node must have the width of the first one.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, ValidationError> {
        if let Some(expected) = nodes.first().map(Node::dim) {
            let mismatch = nodes.iter().enumerate().find(|(_, n)| n.dim() != expected);
            if let Some((index, node)) = mismatch {
                return Err(ValidationError::MixedVectorDimensions {
                    index,
                    actual: node.dim(),
                    expected,
                });
            }
        }
        let pinned = nodes
            .iter()
            .map(|n| n.label.origin == NodeOrigin::Known)
            .collect();
        Ok(Self { nodes, pinned })
    }

    /// Runs `iterations` left-to-right relaxation passes.
    ///
    /// Updates are in place: a blank node sees its left neighbor as already
    /// updated in the current pass and its right neighbor as left by the
    /// previous one.
    pub fn propagate(&mut self, iterations: usize, alpha: f64) {
        for pass in 0..iterations {
            for i in 0..self.nodes.len() {
                if self.pinned[i] {
                    continue;
                }
                self.relax_node(i, alpha);
            }
            tracing::trace!(pass, nodes = self.nodes.len(), "relaxation pass complete");
        }
    }

    fn relax_node(&mut self, i: usize, alpha: f64) {
        let (before, rest) = self.nodes.split_at_mut(i);
        let Some((node, after)) = rest.split_first_mut() else {
            return;
        };

        let mut neighbors: Vec<&Node> = Vec::with_capacity(2);
        if let Some(left) = before.last() {
            neighbors.push(left);
        }
        if let Some(right) = after.first() {
            neighbors.push(right);
        }
        node.propagate(&neighbors, alpha);
    }

    /// Nodes in position order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consumes the graph, returning each node's vector in position order.
    #[must_use]
    pub fn into_embeddings(self) -> Vec<Vec<f64>> {
        self.nodes
            .into_iter()
            .map(|n| n.vector().to_vec())
            .collect()
    }
}
