use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Added to the L2 norm before dividing, so a zero vector stays finite.
pub const NORM_EPSILON: f64 = 1e-8;

/// Scale applied to uniform `[0, 1)` draws when initializing a node.
pub const INIT_SCALE: f64 = 0.1;

/// Whether a node was built from a known slot or a blank one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeOrigin {
    /// The slot held a value.
    Known,
    /// The slot was blank.
    Blank,
}

/// Diagnostic node name, rendered as `K{index}` or `B{index}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeLabel {
    /// Origin of the slot.
    pub origin: NodeOrigin,
    /// Position of the slot in the sequence.
    pub index: usize,
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            NodeOrigin::Known => write!(f, "K{}", self.index),
            NodeOrigin::Blank => write!(f, "B{}", self.index),
        }
    }
}

/// One relaxation node: a label and a fixed-width vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Diagnostic label.
    pub label: NodeLabel,
    vector: Vec<f64>,
}

impl Node {
    /// Creates a node whose components are independent draws in `[0, INIT_SCALE)`.
    pub fn random<R: Rng + ?Sized>(label: NodeLabel, dim: usize, rng: &mut R) -> Self {
        let vector = (0..dim).map(|_| rng.gen::<f64>() * INIT_SCALE).collect();
        Self { label, vector }
    }

    /// Creates a node with an explicit vector.
    #[must_use]
    pub fn with_vector(label: NodeLabel, vector: Vec<f64>) -> Self {
        Self { label, vector }
    }

    /// Current vector.
    #[must_use]
    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    /// Width of the vector.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.vector.len()
    }

    /// Moves this node's vector toward the mean of its neighbors.
    ///
    /// `new = alpha * self + (1 - alpha) * mean`, then L2-normalized with
    /// `NORM_EPSILON` added to the norm. No-op when `neighbors` is empty.
    pub fn propagate(&mut self, neighbors: &[&Node], alpha: f64) {
        if neighbors.is_empty() {
            return;
        }

        let mut mean = vec![0.0f64; self.vector.len()];
        for neighbor in neighbors {
            debug_assert_eq!(neighbor.dim(), self.dim(), "neighbor width mismatch");
            for (acc, x) in mean.iter_mut().zip(&neighbor.vector) {
                *acc += x;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let count = neighbors.len() as f64;

        let mut norm2 = 0.0f64;
        for (x, m) in self.vector.iter_mut().zip(&mean) {
            *x = alpha * *x + (1.0 - alpha) * (m / count);
            norm2 += *x * *x;
        }

        let inv = (norm2.sqrt() + NORM_EPSILON).recip();
        for x in &mut self.vector {
            *x *= inv;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn blank(index: usize, vector: Vec<f64>) -> Node {
        Node::with_vector(
            NodeLabel {
                origin: NodeOrigin::Blank,
                index,
            },
            vector,
        )
    }

    #[test]
    fn test_label_renders_origin_prefix() {
        let k = NodeLabel {
            origin: NodeOrigin::Known,
            index: 3,
        };
        let b = NodeLabel {
            origin: NodeOrigin::Blank,
            index: 12,
        };
        assert_eq!(k.to_string(), "K3");
        assert_eq!(b.to_string(), "B12");
    }

    #[test]
    fn test_random_node_is_small_and_positive() {
        let mut rng = StdRng::seed_from_u64(42);
        let node = Node::random(
            NodeLabel {
                origin: NodeOrigin::Blank,
                index: 0,
            },
            16,
            &mut rng,
        );
        assert_eq!(node.dim(), 16);
        assert!(node.vector().iter().all(|x| (0.0..INIT_SCALE).contains(x)));
    }

    #[test]
    fn test_propagate_without_neighbors_is_noop() {
        let mut node = blank(0, vec![0.3, 0.4]);
        node.propagate(&[], 0.5);
        assert_eq!(node.vector(), &[0.3, 0.4]);
    }

    #[test]
    fn test_propagate_blends_and_normalizes() {
        let mut node = blank(1, vec![1.0, 0.0]);
        let left = blank(0, vec![0.0, 1.0]);
        let right = blank(2, vec![0.0, 3.0]);
        node.propagate(&[&left, &right], 0.5);

        // mean = [0, 2], blended = [0.5, 1.0]
        let norm = (0.5f64 * 0.5 + 1.0).sqrt() + NORM_EPSILON;
        assert!((node.vector()[0] - 0.5 / norm).abs() < 1e-12);
        assert!((node.vector()[1] - 1.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_propagate_zero_vector_stays_finite() {
        let mut node = blank(0, vec![0.0, 0.0]);
        let neighbor = blank(1, vec![0.0, 0.0]);
        node.propagate(&[&neighbor], 0.5);
        assert!(node.vector().iter().all(|x| x.is_finite() && *x == 0.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "neighbor width mismatch")]
    fn test_propagate_rejects_mismatched_neighbor_in_debug() {
        let mut node = blank(0, vec![1.0, 0.0, 0.0]);
        let neighbor = blank(1, vec![0.0, 1.0]);
        node.propagate(&[&neighbor], 0.5);
    }
}
