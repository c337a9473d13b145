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

use crate::{
    congruence::{Conflict, Congruence, CongruenceSystem},
    decision::Decision,
    monitor::reduction_monitor::ReductionMonitor,
    result::ReductionResult,
    stats::ReductionStatistics,
};
use congruence_core::num::numeric::CongruenceNumeric;
use tracing::Level;

// `tracing` requires the level of an event to be a constant.
macro_rules! event_at {
    ($level:expr, $($arg:tt)+) => {
        if $level == Level::ERROR {
            tracing::event!(Level::ERROR, $($arg)+)
        } else if $level == Level::WARN {
            tracing::event!(Level::WARN, $($arg)+)
        } else if $level == Level::INFO {
            tracing::event!(Level::INFO, $($arg)+)
        } else if $level == Level::DEBUG {
            tracing::event!(Level::DEBUG, $($arg)+)
        } else {
            tracing::event!(Level::TRACE, $($arg)+)
        }
    };
}

/// A monitor that reports every reducer callback as a `tracing` event.
///
/// Split, discard and decision events are emitted at the configured level.
/// The summary on exit is emitted at the configured level as well. A
/// conflict is emitted one level above the configured one, capped at `WARN`
/// unless the configured level is already `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogReductionMonitor {
    level: Level,
    log_decisions: bool,
    decisions: u64,
}

impl LogReductionMonitor {
    /// Creates a monitor emitting at `level`. Decisions are not logged.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            log_decisions: false,
            decisions: 0,
        }
    }

    /// Enables or disables one event per decision.
    #[inline]
    pub fn with_decisions(mut self, log_decisions: bool) -> Self {
        self.log_decisions = log_decisions;
        self
    }

    /// Returns the configured level.
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the number of decisions seen since the last reduction started.
    #[inline]
    pub fn decisions(&self) -> u64 {
        self.decisions
    }

    #[inline]
    fn conflict_level(&self) -> Level {
        if self.level == Level::TRACE {
            Level::DEBUG
        } else if self.level == Level::DEBUG {
            Level::INFO
        } else if self.level == Level::INFO {
            Level::WARN
        } else {
            self.level
        }
    }
}

impl Default for LogReductionMonitor {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl std::fmt::Display for LogReductionMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogReductionMonitor(level: {}, decisions: {})",
            self.level, self.log_decisions
        )
    }
}

impl<T> ReductionMonitor<T> for LogReductionMonitor
where
    T: CongruenceNumeric,
{
    fn name(&self) -> &str {
        "LogReductionMonitor"
    }

    fn on_enter_reduce(&mut self, input: &CongruenceSystem<T>) {
        self.decisions = 0;
        event_at!(self.level, equations = input.len(), "reduction started: {}", input);
    }

    fn on_decision(&mut self, decision: Decision) {
        self.decisions = self.decisions.saturating_add(1);
        if self.log_decisions {
            event_at!(self.level, id = decision.id(), "decision {}", decision);
        }
    }

    fn on_split(&mut self, source: &Congruence<T>, piece: &Congruence<T>) {
        event_at!(self.level, "split {} into {}", source, piece);
    }

    fn on_discard(&mut self, kept: &Congruence<T>, discarded: &Congruence<T>) {
        event_at!(self.level, "discard {} (implied by {})", discarded, kept);
    }

    fn on_conflict(&mut self, conflict: &Conflict<T>) {
        event_at!(self.conflict_level(), "conflict: {}", conflict);
    }

    fn on_exit_reduce(&mut self, result: &ReductionResult<T>, statistics: &ReductionStatistics) {
        event_at!(
            self.level,
            decisions = self.decisions,
            pieces = statistics.pieces_split,
            discarded = statistics.discarded,
            equations_out = statistics.equations_out,
            elapsed = ?statistics.time_total,
            "reduction finished: {}",
            result
        );
    }
}
