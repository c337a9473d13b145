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

//! Reduction monitoring interface
//!
//! Declares the `ReductionMonitor` trait for observing the equation reducer.
//!
//! Lifecycle
//! - enter → {decision | split}* → {decision | discard}* → (conflict | decision*) → exit
//! - `on_exit_reduce` is called exactly once per reduction that got past
//!   input validation, with the final result and statistics.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Every callback except `name` has an empty default body, so a monitor
//!   only implements the events it cares about.

use crate::{
    congruence::{Conflict, Congruence, CongruenceSystem},
    decision::Decision,
    result::ReductionResult,
    stats::ReductionStatistics,
};
use congruence_core::num::numeric::CongruenceNumeric;

/// Trait for observing the equation reducer.
pub trait ReductionMonitor<T>
where
    T: CongruenceNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when a reduction starts, with the validated and normalized input.
    fn on_enter_reduce(&mut self, _input: &CongruenceSystem<T>) {}
    /// Called every time the reducer takes a branch.
    fn on_decision(&mut self, _decision: Decision) {}
    /// Called when an input equation yields a prime-power piece.
    fn on_split(&mut self, _source: &Congruence<T>, _piece: &Congruence<T>) {}
    /// Called when `discarded` is removed because `kept` implies it.
    fn on_discard(&mut self, _kept: &Congruence<T>, _discarded: &Congruence<T>) {}
    /// Called when two pieces contradict each other.
    fn on_conflict(&mut self, _conflict: &Conflict<T>) {}
    /// Called when the reduction ends.
    fn on_exit_reduce(&mut self, _result: &ReductionResult<T>, _statistics: &ReductionStatistics) {
    }
}

impl<T, M> ReductionMonitor<T> for &mut M
where
    T: CongruenceNumeric,
    M: ReductionMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_reduce(&mut self, input: &CongruenceSystem<T>) {
        (**self).on_enter_reduce(input);
    }

    #[inline(always)]
    fn on_decision(&mut self, decision: Decision) {
        (**self).on_decision(decision);
    }

    #[inline(always)]
    fn on_split(&mut self, source: &Congruence<T>, piece: &Congruence<T>) {
        (**self).on_split(source, piece);
    }

    #[inline(always)]
    fn on_discard(&mut self, kept: &Congruence<T>, discarded: &Congruence<T>) {
        (**self).on_discard(kept, discarded);
    }

    #[inline(always)]
    fn on_conflict(&mut self, conflict: &Conflict<T>) {
        (**self).on_conflict(conflict);
    }

    #[inline(always)]
    fn on_exit_reduce(&mut self, result: &ReductionResult<T>, statistics: &ReductionStatistics) {
        (**self).on_exit_reduce(result, statistics);
    }
}

impl<'a, T> std::fmt::Debug for dyn ReductionMonitor<T> + 'a
where
    T: CongruenceNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReductionMonitor({})", self.name())
    }
}

impl<'a, T> std::fmt::Display for dyn ReductionMonitor<T> + 'a
where
    T: CongruenceNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReductionMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingMonitor {
        decisions: usize,
    }

    impl ReductionMonitor<i64> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_decision(&mut self, _decision: Decision) {
            self.decisions += 1;
        }
    }

    fn drive<M: ReductionMonitor<i64>>(mut monitor: M) {
        monitor.on_decision(Decision::SplitEquation);
        monitor.on_decision(Decision::EmitReduced);
    }

    #[test]
    fn test_mutable_reference_forwards() {
        let mut monitor = CountingMonitor::default();
        drive(&mut monitor);
        assert_eq!(monitor.decisions, 2);
    }

    #[test]
    fn test_dyn_display() {
        let monitor: Box<dyn ReductionMonitor<i64>> = Box::new(CountingMonitor::default());
        assert_eq!(format!("{}", monitor), "ReductionMonitor(CountingMonitor)");
        assert_eq!(format!("{:?}", monitor), "ReductionMonitor(CountingMonitor)");
    }
}
