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

/// Statistics collected by a `Factorizer`.
///
/// Counters are cumulative across calls until `Factorizer::reset_statistics`
/// is invoked, so a reducer can report the total work spent on all moduli of
/// one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FactorizationStatistics {
    /// Number of values taken off the worklist.
    pub values_popped: u64,
    /// Number of prime factors emitted.
    pub primes_found: u64,
    /// Number of divisor probes started (including the even short-cut).
    pub probes: u64,
    /// Number of probes that only found the trivial divisor and were retried.
    pub failed_probes: u64,
}

impl FactorizationStatistics {
    #[inline]
    pub fn on_value_popped(&mut self) {
        self.values_popped = self.values_popped.saturating_add(1);
    }

    #[inline]
    pub fn on_prime_found(&mut self) {
        self.primes_found = self.primes_found.saturating_add(1);
    }

    #[inline]
    pub fn on_probe(&mut self) {
        self.probes = self.probes.saturating_add(1);
    }

    #[inline]
    pub fn on_probe_failed(&mut self) {
        self.failed_probes = self.failed_probes.saturating_add(1);
    }
}

impl std::fmt::Display for FactorizationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Factorization Statistics:")?;
        writeln!(f, "  Values popped:        {}", self.values_popped)?;
        writeln!(f, "  Primes found:         {}", self.primes_found)?;
        writeln!(f, "  Probes:               {}", self.probes)?;
        writeln!(f, "  Failed probes:        {}", self.failed_probes)?;
        Ok(())
    }
}
