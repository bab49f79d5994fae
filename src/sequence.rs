//! Partially-known integer sequences.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Position index → value, for every non-blank slot of a sequence.
pub type KnownMap = BTreeMap<usize, i64>;

/// Position index → value, for blank slots filled by inference.
pub type InferredMap = BTreeMap<usize, i64>;

/// An ordered sequence where each slot is either a known integer or blank.
///
/// # Examples
///
/// ```
/// use gapfill::Sequence;
///
/// let seq = Sequence::from(vec![Some(0), None, Some(10)]);
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.blank_count(), 1);
/// assert!(seq.is_blank(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Option<i64>>);

impl Sequence {
    /// Number of slots, blank or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the slots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<i64>] {
        &self.0
    }

    /// Returns true if `index` is in range and blank.
    #[must_use]
    pub fn is_blank(&self, index: usize) -> bool {
        matches!(self.0.get(index), Some(None))
    }

    /// Number of blank slots.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_none()).count()
    }

    /// Builds the known map.
    #[must_use]
    pub fn known_map(&self) -> KnownMap {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|v| (i, v)))
            .collect()
    }
}

impl From<Vec<Option<i64>>> for Sequence {
    fn from(slots: Vec<Option<i64>>) -> Self {
        Self(slots)
    }
}

impl FromIterator<Option<i64>> for Sequence {
    fn from_iter<I: IntoIterator<Item = Option<i64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
