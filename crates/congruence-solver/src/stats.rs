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

use congruence_core::stats::FactorizationStatistics;
use std::time::Duration;

/// Statistics collected during one reduction or one full solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReductionStatistics {
    /// Number of input equations.
    pub equations_in: u64,
    /// Number of prime-power pieces produced by the split phase.
    pub pieces_split: u64,
    /// Number of pairs compared in the reconcile phase.
    pub pairs_compared: u64,
    /// Pairs where one modulus divides the other.
    pub comparable_pairs: u64,
    /// Pieces removed because another piece implied them.
    pub discarded: u64,
    /// Contradictions found (0 or 1 per run).
    pub conflicts: u64,
    /// Number of equations in the reduced system.
    pub equations_out: u64,
    /// Work spent factorizing the moduli.
    pub factorization: FactorizationStatistics,
    /// Total time spent in the call.
    pub time_total: Duration,
}

impl ReductionStatistics {
    #[inline]
    pub fn on_equation_in(&mut self) {
        self.equations_in = self.equations_in.saturating_add(1);
    }

    #[inline]
    pub fn on_piece_split(&mut self) {
        self.pieces_split = self.pieces_split.saturating_add(1);
    }

    #[inline]
    pub fn on_pair_compared(&mut self) {
        self.pairs_compared = self.pairs_compared.saturating_add(1);
    }

    #[inline]
    pub fn on_comparable_pair(&mut self) {
        self.comparable_pairs = self.comparable_pairs.saturating_add(1);
    }

    #[inline]
    pub fn on_discard(&mut self) {
        self.discarded = self.discarded.saturating_add(1);
    }

    #[inline]
    pub fn on_conflict(&mut self) {
        self.conflicts = self.conflicts.saturating_add(1);
    }

    #[inline]
    pub fn set_equations_out(&mut self, count: usize) {
        self.equations_out = count as u64;
    }

    #[inline]
    pub fn set_factorization(&mut self, statistics: FactorizationStatistics) {
        self.factorization = statistics;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for ReductionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Reduction Statistics:")?;
        writeln!(f, "  Equations in:         {}", self.equations_in)?;
        writeln!(f, "  Pieces split:         {}", self.pieces_split)?;
        writeln!(f, "  Pairs compared:       {}", self.pairs_compared)?;
        writeln!(f, "  Comparable pairs:     {}", self.comparable_pairs)?;
        writeln!(f, "  Discarded:            {}", self.discarded)?;
        writeln!(f, "  Conflicts:            {}", self.conflicts)?;
        writeln!(f, "  Equations out:        {}", self.equations_out)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        write!(f, "{}", self.factorization)
    }
}
