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

//! Outcomes of the reducer, the eliminator and the solver pipeline.
//!
//! An unsatisfiable system is a normal outcome, not an error: each result
//! enum carries an `Unsatisfiable` variant next to the success variant, and
//! `CongruenceError` is reserved for malformed calls and overflow.

use crate::{
    congruence::{Conflict, Congruence, CongruenceSystem},
    stats::ReductionStatistics,
};

/// The result of reducing a system to pairwise coprime moduli.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReductionResult<T> {
    /// An equivalent system whose moduli are pairwise coprime prime powers.
    Reduced(CongruenceSystem<T>),
    /// Two pieces of the input contradict each other.
    Unsatisfiable(Conflict<T>),
}

impl<T> ReductionResult<T> {
    #[inline]
    pub fn is_reduced(&self) -> bool {
        matches!(self, ReductionResult::Reduced(_))
    }

    #[inline]
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, ReductionResult::Unsatisfiable(_))
    }

    /// Returns the reduced system, if any.
    #[inline]
    pub fn reduced(&self) -> Option<&CongruenceSystem<T>> {
        match self {
            ReductionResult::Reduced(system) => Some(system),
            ReductionResult::Unsatisfiable(_) => None,
        }
    }

    /// Consumes the result and returns the reduced system, if any.
    #[inline]
    pub fn into_reduced(self) -> Option<CongruenceSystem<T>> {
        match self {
            ReductionResult::Reduced(system) => Some(system),
            ReductionResult::Unsatisfiable(_) => None,
        }
    }

    /// Returns the conflict, if any.
    #[inline]
    pub fn conflict(&self) -> Option<&Conflict<T>> {
        match self {
            ReductionResult::Reduced(_) => None,
            ReductionResult::Unsatisfiable(conflict) => Some(conflict),
        }
    }
}

impl<T> std::fmt::Display for ReductionResult<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReductionResult::Reduced(system) => write!(f, "Reduced({})", system),
            ReductionResult::Unsatisfiable(conflict) => write!(f, "Unsatisfiable({})", conflict),
        }
    }
}

/// A reduction result together with the statistics of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionOutcome<T> {
    pub result: ReductionResult<T>,
    pub statistics: ReductionStatistics,
}

impl<T> ReductionOutcome<T> {
    #[inline]
    pub fn new(result: ReductionResult<T>, statistics: ReductionStatistics) -> Self {
        Self { result, statistics }
    }
}

/// The result of removing the coefficient from `c·x ≡ a (mod m)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationResult<T> {
    /// The equivalent equation `x ≡ a' (mod m')`.
    Eliminated(Congruence<T>),
    /// `gcd(c, m)` does not divide `a`.
    Unsatisfiable { gcd: T },
}

impl<T> EliminationResult<T>
where
    T: Copy,
{
    #[inline]
    pub fn is_eliminated(&self) -> bool {
        matches!(self, EliminationResult::Eliminated(_))
    }

    /// Returns the eliminated congruence, if any.
    #[inline]
    pub fn congruence(&self) -> Option<Congruence<T>> {
        match self {
            EliminationResult::Eliminated(congruence) => Some(*congruence),
            EliminationResult::Unsatisfiable { .. } => None,
        }
    }
}

impl<T> std::fmt::Display for EliminationResult<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EliminationResult::Eliminated(congruence) => write!(f, "Eliminated({})", congruence),
            EliminationResult::Unsatisfiable { gcd } => {
                write!(f, "Unsatisfiable(gcd={} does not divide the residue)", gcd)
            }
        }
    }
}

/// Why a system has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsatisfiableReason<T> {
    /// The reducer found two contradicting pieces.
    Conflict(Conflict<T>),
    /// The coefficient of equation `index` could not be eliminated.
    IndivisibleResidue { index: usize, gcd: T },
}

impl<T> std::fmt::Display for UnsatisfiableReason<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsatisfiableReason::Conflict(conflict) => write!(f, "{}", conflict),
            UnsatisfiableReason::IndivisibleResidue { index, gcd } => write!(
                f,
                "equation {}: gcd {} of coefficient and modulus does not divide the residue",
                index, gcd
            ),
        }
    }
}

/// The result of the full solver pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult<T> {
    /// `solution` is the unique class `x ≡ A (mod M)` of the system;
    /// `reduced` is the coprime system it was combined from.
    Solved {
        solution: Congruence<T>,
        reduced: CongruenceSystem<T>,
    },
    /// The system has no solution.
    Unsatisfiable(UnsatisfiableReason<T>),
}

impl<T> SolveResult<T>
where
    T: Copy,
{
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved { .. })
    }

    #[inline]
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, SolveResult::Unsatisfiable(_))
    }

    /// Returns the combined solution, if any.
    #[inline]
    pub fn solution(&self) -> Option<Congruence<T>> {
        match self {
            SolveResult::Solved { solution, .. } => Some(*solution),
            SolveResult::Unsatisfiable(_) => None,
        }
    }
}

impl<T> std::fmt::Display for SolveResult<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveResult::Solved { solution, .. } => write!(f, "Solved({})", solution),
            SolveResult::Unsatisfiable(reason) => write!(f, "Unsatisfiable({})", reason),
        }
    }
}

/// A solve result together with the statistics of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome<T> {
    pub result: SolveResult<T>,
    pub statistics: ReductionStatistics,
}

impl<T> SolveOutcome<T>
where
    T: Copy,
{
    #[inline]
    pub fn new(result: SolveResult<T>, statistics: ReductionStatistics) -> Self {
        Self { result, statistics }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.result.is_solved()
    }

    #[inline]
    pub fn is_unsatisfiable(&self) -> bool {
        self.result.is_unsatisfiable()
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.result)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_result_accessors() {
        let system: CongruenceSystem<i64> = vec![Congruence::new(1, 4)].into();
        let reduced = ReductionResult::Reduced(system.clone());
        assert!(reduced.is_reduced());
        assert_eq!(reduced.reduced(), Some(&system));
        assert_eq!(reduced.conflict(), None);

        let conflict = Conflict {
            first: Congruence::new(0, 4),
            second: Congruence::new(1, 2),
        };
        let unsat = ReductionResult::Unsatisfiable(conflict);
        assert!(unsat.is_unsatisfiable());
        assert_eq!(unsat.conflict(), Some(&conflict));
        assert_eq!(unsat.into_reduced(), None);
    }

    #[test]
    fn test_display() {
        let solved = SolveResult::Solved {
            solution: Congruence::new(59i64, 60),
            reduced: CongruenceSystem::new(),
        };
        assert_eq!(solved.to_string(), "Solved(x ≡ 59 (mod 60))");
        assert_eq!(solved.solution(), Some(Congruence::new(59, 60)));

        let unsat: SolveResult<i64> =
            SolveResult::Unsatisfiable(UnsatisfiableReason::IndivisibleResidue { index: 1, gcd: 2 });
        assert!(unsat.to_string().starts_with("Unsatisfiable(equation 1"));

        let elim: EliminationResult<i64> = EliminationResult::Unsatisfiable { gcd: 2 };
        assert!(!elim.is_eliminated());
        assert_eq!(elim.congruence(), None);
    }
}
