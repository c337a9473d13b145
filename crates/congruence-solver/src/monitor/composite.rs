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

//! Monitoring combinators for the reducer
//!
//! Provides `CompositeReductionMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging and coverage tracking
//! without coupling them to the reducer.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - Every callback fans out to all children.

use crate::{
    congruence::{Conflict, Congruence, CongruenceSystem},
    decision::Decision,
    monitor::reduction_monitor::ReductionMonitor,
    result::ReductionResult,
    stats::ReductionStatistics,
};
use congruence_core::num::numeric::CongruenceNumeric;

/// A reduction monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeReductionMonitor<'a, T>
where
    T: CongruenceNumeric,
{
    monitors: Vec<Box<dyn ReductionMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeReductionMonitor<'a, T>
where
    T: CongruenceNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeReductionMonitor<'a, T>
where
    T: CongruenceNumeric,
{
    /// Creates a new empty `CompositeReductionMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeReductionMonitor` with the specified capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: ReductionMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn ReductionMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn ReductionMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn ReductionMonitor<T> + 'a>> for CompositeReductionMonitor<'a, T>
where
    T: CongruenceNumeric,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ReductionMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> std::fmt::Debug for CompositeReductionMonitor<'a, T>
where
    T: CongruenceNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.monitors.iter()).finish()
    }
}

impl<'a, T> ReductionMonitor<T> for CompositeReductionMonitor<'a, T>
where
    T: CongruenceNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeReductionMonitor"
    }

    #[inline(always)]
    fn on_enter_reduce(&mut self, input: &CongruenceSystem<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_reduce(input);
        }
    }

    #[inline(always)]
    fn on_decision(&mut self, decision: Decision) {
        for monitor in &mut self.monitors {
            monitor.on_decision(decision);
        }
    }

    #[inline(always)]
    fn on_split(&mut self, source: &Congruence<T>, piece: &Congruence<T>) {
        for monitor in &mut self.monitors {
            monitor.on_split(source, piece);
        }
    }

    #[inline(always)]
    fn on_discard(&mut self, kept: &Congruence<T>, discarded: &Congruence<T>) {
        for monitor in &mut self.monitors {
            monitor.on_discard(kept, discarded);
        }
    }

    #[inline(always)]
    fn on_conflict(&mut self, conflict: &Conflict<T>) {
        for monitor in &mut self.monitors {
            monitor.on_conflict(conflict);
        }
    }

    #[inline(always)]
    fn on_exit_reduce(&mut self, result: &ReductionResult<T>, statistics: &ReductionStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_reduce(result, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{coverage::CoverageMonitor, no_op::NoOperationMonitor};

    #[test]
    fn test_fan_out_in_insertion_order() {
        let mut first = CoverageMonitor::new();
        let mut second = CoverageMonitor::new();
        {
            let mut composite = CompositeReductionMonitor::<i64>::new();
            composite.add_monitor(&mut first);
            composite.add_monitor(NoOperationMonitor::new());
            composite.add_monitor_boxed(Box::new(&mut second));
            assert_eq!(composite.len(), 3);
            composite.on_decision(Decision::ScanPair);
            composite.on_decision(Decision::ScanPair);
        }
        assert_eq!(first.hits(Decision::ScanPair), 2);
        assert_eq!(second.hits(Decision::ScanPair), 2);
    }

    #[test]
    fn test_from_iterator_and_clear() {
        let boxed: Vec<Box<dyn ReductionMonitor<i64>>> = vec![
            Box::new(NoOperationMonitor::new()),
            Box::new(NoOperationMonitor::new()),
        ];
        let mut composite: CompositeReductionMonitor<'_, i64> = boxed.into_iter().collect();
        assert_eq!(composite.len(), 2);
        assert_eq!(
            format!("{:?}", composite),
            "[ReductionMonitor(NoOperationMonitor), ReductionMonitor(NoOperationMonitor)]"
        );
        composite.clear();
        assert!(composite.is_empty());
    }
}
