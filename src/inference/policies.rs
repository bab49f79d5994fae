use serde::{Deserialize, Serialize};

use crate::error::ExecutionError;

/// Nearest known-or-inferred value on one side of a blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Position of the anchor.
    pub index: usize,
    /// Value held at that position.
    pub value: i64,
}

/// Which rule produced a candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalRule {
    /// Anchors on both sides: floor-division linear interpolation.
    Interpolate,

    /// Only a left anchor: one above it.
    ExtendLeft,

    /// Only a right anchor: one below it.
    ExtendRight,

    /// No anchor anywhere: zero.
    Fallback,
}

impl ProposalRule {
    /// Returns a short stable identifier suitable for logging/debugging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Interpolate => "interpolate",
            Self::ExtendLeft => "extend_left",
            Self::ExtendRight => "extend_right",
            Self::Fallback => "fallback",
        }
    }
}

/// A proposed value for a blank, before deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    /// Candidate value.
    pub value: i64,
    /// Rule that produced it.
    pub rule: ProposalRule,
}

/// Propose a value for blank position `index` from its anchors.
///
/// Interpolation is `left + (right - left) * (index - left.index) / span`
/// where the division floors toward negative infinity and is applied to the
/// whole product. Returns `Ok(None)` only when there is no anchor and
/// `zero_fallback` is off.
pub fn propose(
    index: usize,
    left: Option<Anchor>,
    right: Option<Anchor>,
    zero_fallback: bool,
) -> Result<Option<Proposal>, ExecutionError> {
    let overflow = || ExecutionError::ArithmeticOverflow { index };

    let proposal = match (left, right) {
        (Some(l), Some(r)) => {
            let span = i128::try_from(r.index - l.index).map_err(|_| overflow())?;
            let offset = i128::try_from(index - l.index).map_err(|_| overflow())?;
            let delta = i128::from(r.value) - i128::from(l.value);
            let step = delta
                .checked_mul(offset)
                .ok_or_else(overflow)?
                .div_euclid(span);
            let value = i64::try_from(i128::from(l.value) + step).map_err(|_| overflow())?;
            Proposal {
                value,
                rule: ProposalRule::Interpolate,
            }
        }
        (Some(l), None) => Proposal {
            value: l.value.checked_add(1).ok_or_else(overflow)?,
            rule: ProposalRule::ExtendLeft,
        },
        (None, Some(r)) => Proposal {
            value: r.value.checked_sub(1).ok_or_else(overflow)?,
            rule: ProposalRule::ExtendRight,
        },
        (None, None) if zero_fallback => Proposal {
            value: 0,
            rule: ProposalRule::Fallback,
        },
        (None, None) => return Ok(None),
    };

    Ok(Some(proposal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(index: usize, value: i64) -> Option<Anchor> {
        Some(Anchor { index, value })
    }

    fn value_of(p: Result<Option<Proposal>, ExecutionError>) -> i64 {
        p.unwrap().unwrap().value
    }

    #[test]
    fn test_interpolates_with_floor_division_on_product() {
        assert_eq!(value_of(propose(1, anchor(0, 0), anchor(4, 10), true)), 2);
        assert_eq!(value_of(propose(2, anchor(0, 0), anchor(4, 10), true)), 5);
        assert_eq!(value_of(propose(3, anchor(0, 0), anchor(4, 10), true)), 7);
    }

    #[test]
    fn test_interpolation_floors_negative_steps() {
        // -10 * 1 / 3 floors to -4, truncation would give -3.
        assert_eq!(value_of(propose(1, anchor(0, 10), anchor(3, 0), true)), 6);
        // -1 * 1 / 2 floors to -1.
        assert_eq!(value_of(propose(2, anchor(1, 5), anchor(3, 4), true)), 4);
    }

    #[test]
    fn test_single_sided_extrapolation() {
        let p = propose(3, anchor(2, 7), None, true).unwrap().unwrap();
        assert_eq!(p.value, 8);
        assert_eq!(p.rule, ProposalRule::ExtendLeft);

        let p = propose(0, None, anchor(1, 7), true).unwrap().unwrap();
        assert_eq!(p.value, 6);
        assert_eq!(p.rule, ProposalRule::ExtendRight);
    }

    #[test]
    fn test_no_anchor_uses_fallback_policy() {
        let p = propose(0, None, None, true).unwrap().unwrap();
        assert_eq!(p.value, 0);
        assert_eq!(p.rule, ProposalRule::Fallback);

        assert_eq!(propose(0, None, None, false).unwrap(), None);
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = propose(1, anchor(0, i64::MAX), None, true).unwrap_err();
        assert_eq!(err, ExecutionError::ArithmeticOverflow { index: 1 });

        let err = propose(0, None, anchor(1, i64::MIN), true).unwrap_err();
        assert_eq!(err, ExecutionError::ArithmeticOverflow { index: 0 });
    }

    #[test]
    fn test_interpolation_between_extremes_does_not_overflow() {
        let v = value_of(propose(1, anchor(0, i64::MIN), anchor(2, i64::MAX), true));
        assert_eq!(v, -1);
    }

    #[test]
    fn test_rule_names_are_stable() {
        assert_eq!(ProposalRule::Interpolate.name(), "interpolate");
        assert_eq!(ProposalRule::Fallback.name(), "fallback");
    }
}
