// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Branch coverage of the reducer
//!
//! `CoverageMonitor` records which `Decision`s fired and how often, across
//! any number of reductions, and renders a per-decision report with the
//! overall coverage ratio. Lend it to the reducer as `&mut monitor` and
//! inspect it after the run.

use crate::{decision::Decision, monitor::reduction_monitor::ReductionMonitor};
use congruence_core::num::numeric::CongruenceNumeric;
use fixedbitset::FixedBitSet;

/// A monitor tracking which reducer decisions were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMonitor {
    covered: FixedBitSet,
    hits: [u64; Decision::COUNT],
}

impl Default for CoverageMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageMonitor {
    /// Creates a monitor with no decision covered.
    #[inline]
    pub fn new() -> Self {
        Self {
            covered: FixedBitSet::with_capacity(Decision::COUNT),
            hits: [0; Decision::COUNT],
        }
    }

    /// Returns `true` if `decision` fired at least once.
    #[inline]
    pub fn is_covered(&self, decision: Decision) -> bool {
        self.covered.contains(decision.id())
    }

    /// Returns how often `decision` fired.
    #[inline]
    pub fn hits(&self, decision: Decision) -> u64 {
        self.hits[decision.id()]
    }

    /// Returns the number of distinct decisions that fired.
    #[inline]
    pub fn covered_count(&self) -> usize {
        self.covered.count_ones(..)
    }

    /// Returns the fraction of decisions that fired, in `[0, 1]`.
    #[inline]
    pub fn coverage(&self) -> f64 {
        self.covered_count() as f64 / Decision::COUNT as f64
    }

    /// Returns the decisions that never fired, ordered by identifier.
    pub fn uncovered(&self) -> Vec<Decision> {
        self.covered
            .zeroes()
            .filter_map(Decision::from_id)
            .collect()
    }

    /// Forgets everything recorded so far.
    #[inline]
    pub fn reset(&mut self) {
        self.covered.clear();
        self.hits = [0; Decision::COUNT];
    }

    /// Renders a table of every decision with its hit count and the coverage ratio.
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<4} | {:<24} | {:<7} | {:>10}\n",
            "Id", "Decision", "Taken", "Hits"
        ));
        out.push_str(&"-".repeat(54));
        out.push('\n');
        for decision in Decision::ALL {
            out.push_str(&format!(
                "{:<4} | {:<24} | {:<7} | {:>10}\n",
                decision.id(),
                decision.name(),
                if self.is_covered(decision) { "yes" } else { "no" },
                self.hits(decision)
            ));
        }
        out.push_str(&"-".repeat(54));
        out.push('\n');
        out.push_str(&format!(
            "Branch coverage: {:.2}% ({}/{})\n",
            self.coverage() * 100.0,
            self.covered_count(),
            Decision::COUNT
        ));
        out
    }
}

impl std::fmt::Display for CoverageMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report())
    }
}

impl<T> ReductionMonitor<T> for CoverageMonitor
where
    T: CongruenceNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CoverageMonitor"
    }

    #[inline(always)]
    fn on_decision(&mut self, decision: Decision) {
        let id = decision.id();
        self.covered.insert(id);
        self.hits[id] = self.hits[id].saturating_add(1);
    }
}
