use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::ExecutionError;
use crate::sequence::{InferredMap, KnownMap};

use super::policies::{propose, Anchor, ProposalRule};
use super::resolver::resolve_collision;

/// How many blanks each rule proposed for during one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCounts {
    /// Proposals interpolated between two anchors.
    pub interpolate: usize,
    /// Proposals extended from a left anchor.
    pub extend_left: usize,
    /// Proposals extended from a right anchor.
    pub extend_right: usize,
    /// Proposals that fell back to zero.
    pub fallback: usize,
    /// Blanks left without a proposal.
    pub unresolved: usize,
}

impl RuleCounts {
    fn record(&mut self, rule: Option<ProposalRule>) {
        match rule {
            Some(ProposalRule::Interpolate) => self.interpolate += 1,
            Some(ProposalRule::ExtendLeft) => self.extend_left += 1,
            Some(ProposalRule::ExtendRight) => self.extend_right += 1,
            Some(ProposalRule::Fallback) => self.fallback += 1,
            None => self.unresolved += 1,
        }
    }
}

/// Outcome of a single inference pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    /// Positions whose inferred value was written or rewritten.
    pub changed: usize,
    /// Rule usage during the pass.
    pub rules: RuleCounts,
}

/// Outcome of a bounded inference run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceReport {
    /// Passes executed.
    pub passes: usize,
    /// True if the last pass changed nothing.
    pub converged: bool,
    /// Changed-position count for each executed pass.
    pub changes_per_pass: Vec<usize>,
    /// Rule usage during the last executed pass.
    pub final_rules: RuleCounts,
}

/// Fixed-point blank filler.
///
/// Each pass visits blank positions in index order, proposes a value from
/// the nearest known-or-inferred anchors, bumps it past every value already
/// in use and commits it immediately, so later positions in the same pass
/// see it both as an anchor and as a used value.
#[derive(Debug, Clone)]
pub struct InferenceEngine<'a> {
    known: &'a KnownMap,
    len: usize,
    inferred: InferredMap,
    zero_fallback: bool,
    max_dedup_steps: usize,
}

impl<'a> InferenceEngine<'a> {
    /// Creates an engine over a sequence of `len` slots with default policies.
    #[must_use]
    pub fn new(known: &'a KnownMap, len: usize) -> Self {
        Self::with_config(known, len, &SolverConfig::default())
    }

    /// Creates an engine taking its policies from `config`.
    #[must_use]
    pub fn with_config(known: &'a KnownMap, len: usize, config: &SolverConfig) -> Self {
        Self {
            known,
            len,
            inferred: InferredMap::new(),
            zero_fallback: config.zero_fallback,
            max_dedup_steps: config.max_dedup_steps,
        }
    }

    /// Current inferred values.
    #[must_use]
    pub fn inferred(&self) -> &InferredMap {
        &self.inferred
    }

    /// Consumes the engine, returning the inferred values.
    #[must_use]
    pub fn into_inferred(self) -> InferredMap {
        self.inferred
    }

    /// Runs passes until one changes nothing or `max_passes` have run.
    pub fn run(&mut self, max_passes: usize) -> Result<InferenceReport, ExecutionError> {
        let mut report = InferenceReport::default();
        for _ in 0..max_passes {
            let summary = self.step()?;
            report.passes += 1;
            report.changes_per_pass.push(summary.changed);
            report.final_rules = summary.rules;
            if summary.changed == 0 {
                report.converged = true;
                break;
            }
        }

        tracing::debug!(
            passes = report.passes,
            converged = report.converged,
            inferred = self.inferred.len(),
            "inference finished"
        );
        Ok(report)
    }

    /// Runs one pass over every blank position.
    pub fn step(&mut self) -> Result<PassSummary, ExecutionError> {
        let mut summary = PassSummary::default();

        for i in 0..self.len {
            if self.known.contains_key(&i) {
                continue;
            }

            let left = (0..i).rev().find_map(|j| self.anchor_at(j));
            let right = (i + 1..self.len).find_map(|j| self.anchor_at(j));

            let Some(proposal) = propose(i, left, right, self.zero_fallback)? else {
                summary.rules.record(None);
                continue;
            };
            summary.rules.record(Some(proposal.rule));

            let used = self.used_values(i);
            let value = resolve_collision(i, proposal.value, &used, self.max_dedup_steps)?;

            if self.inferred.get(&i) != Some(&value) {
                tracing::trace!(
                    index = i,
                    value,
                    rule = proposal.rule.name(),
                    "committed inferred value"
                );
                self.inferred.insert(i, value);
                summary.changed += 1;
            }
        }

        tracing::debug!(changed = summary.changed, "inference pass complete");
        Ok(summary)
    }

    fn anchor_at(&self, index: usize) -> Option<Anchor> {
        self.known
            .get(&index)
            .or_else(|| self.inferred.get(&index))
            .map(|&value| Anchor { index, value })
    }

    /// Known and inferred values, leaving out `except`'s own inferred value.
    fn used_values(&self, except: usize) -> HashSet<i64> {
        self.known
            .values()
            .copied()
            .chain(
                self.inferred
                    .iter()
                    .filter(|&(&k, _)| k != except)
                    .map(|(_, &v)| v),
            )
            .collect()
    }
}
