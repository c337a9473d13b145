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

//! # Congruence Solver
//!
//! The full pipeline: optional coefficient elimination, reduction to
//! pairwise coprime moduli, and Chinese remainder combination.
//!
//! `CongruenceSolver` owns a `Reducer` (and through it a `Factorizer`), so a
//! caller solving many systems reuses the same buffers. The random source and
//! the monitor are passed per call.

use crate::{
    combine::combine,
    congruence::validate_parts,
    eliminate::eliminate_coefficient,
    error::{CongruenceError, InvalidInputError},
    monitor::{no_op::NoOperationMonitor, reduction_monitor::ReductionMonitor},
    reduce::Reducer,
    result::{EliminationResult, ReductionResult, SolveOutcome, SolveResult, UnsatisfiableReason},
    stats::ReductionStatistics,
};
use congruence_core::num::numeric::CongruenceNumeric;
use rand::Rng;
use std::time::Instant;

/// Solves systems of congruences.
#[derive(Clone, Debug, Default)]
pub struct CongruenceSolver<T>
where
    T: CongruenceNumeric,
{
    reducer: Reducer<T>,
}

impl<T> CongruenceSolver<T>
where
    T: CongruenceNumeric,
{
    /// Creates a solver with a default `Reducer`.
    #[inline]
    pub fn new() -> Self {
        Self::with_reducer(Reducer::new())
    }

    /// Creates a solver around the given reducer.
    #[inline]
    pub fn with_reducer(reducer: Reducer<T>) -> Self {
        Self { reducer }
    }

    /// Returns the reducer.
    #[inline]
    pub fn reducer(&self) -> &Reducer<T> {
        &self.reducer
    }

    /// Solves `x ≡ residues[i] (mod moduli[i])` for all `i`.
    ///
    /// Returns `SolveResult::Solved` with the unique class `x ≡ A (mod M)`
    /// (where `M` is the lcm of the moduli) and the reduced system, or
    /// `SolveResult::Unsatisfiable` with the conflicting pieces.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for mismatched lengths or non-positive moduli.
    /// - `Overflow` if the lcm of the moduli does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use congruence_solver::{solver::CongruenceSolver, monitor::no_op::NoOperationMonitor};
    /// # use congruence_solver::congruence::Congruence;
    /// # use rand::{SeedableRng, rngs::StdRng};
    /// let mut solver = CongruenceSolver::new();
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let outcome = solver
    ///     .solve(&[1i64, 2, 3, 4, 5], &[2, 3, 4, 5, 6], &mut rng, NoOperationMonitor::new())
    ///     .unwrap();
    /// assert_eq!(outcome.result.solution(), Some(Congruence::new(59, 60)));
    /// ```
    pub fn solve<R, M>(
        &mut self,
        residues: &[T],
        moduli: &[T],
        rng: &mut R,
        monitor: M,
    ) -> Result<SolveOutcome<T>, CongruenceError>
    where
        R: Rng,
        M: ReductionMonitor<T>,
    {
        let start = Instant::now();
        let outcome = self.reducer.reduce(residues, moduli, rng, monitor)?;
        let mut statistics = outcome.statistics;

        let result = match outcome.result {
            ReductionResult::Reduced(reduced) => {
                let solution = combine(&reduced)?;
                tracing::debug!(%solution, "system solved");
                SolveResult::Solved { solution, reduced }
            }
            ReductionResult::Unsatisfiable(conflict) => {
                SolveResult::Unsatisfiable(UnsatisfiableReason::Conflict(conflict))
            }
        };

        statistics.set_total_time(start.elapsed());
        Ok(SolveOutcome::new(result, statistics))
    }

    /// Solves `coefficients[i]·x ≡ residues[i] (mod moduli[i])` for all `i`.
    ///
    /// Every coefficient is eliminated first; an equation whose residue is not
    /// divisible by `gcd(coefficient, modulus)` makes the system unsatisfiable
    /// with `UnsatisfiableReason::IndivisibleResidue`.
    ///
    /// # Errors
    ///
    /// As `solve`, plus `InvalidInput(CoefficientLengthMismatch)`.
    pub fn solve_linear<R, M>(
        &mut self,
        coefficients: &[T],
        residues: &[T],
        moduli: &[T],
        rng: &mut R,
        monitor: M,
    ) -> Result<SolveOutcome<T>, CongruenceError>
    where
        R: Rng,
        M: ReductionMonitor<T>,
    {
        let start = Instant::now();
        if coefficients.len() != residues.len() {
            return Err(InvalidInputError::CoefficientLengthMismatch {
                coefficients: coefficients.len(),
                residues: residues.len(),
            }
            .into());
        }
        validate_parts(residues, moduli)?;

        let mut eliminated_residues = Vec::with_capacity(residues.len());
        let mut eliminated_moduli = Vec::with_capacity(moduli.len());
        for (index, ((&c, &a), &m)) in coefficients.iter().zip(residues).zip(moduli).enumerate() {
            match eliminate_coefficient(c, a, m)? {
                EliminationResult::Eliminated(congruence) => {
                    eliminated_residues.push(congruence.residue());
                    eliminated_moduli.push(congruence.modulus());
                }
                EliminationResult::Unsatisfiable { gcd } => {
                    tracing::debug!(index, %gcd, "coefficient cannot be eliminated");
                    let mut statistics = ReductionStatistics::default();
                    statistics.set_total_time(start.elapsed());
                    return Ok(SolveOutcome::new(
                        SolveResult::Unsatisfiable(UnsatisfiableReason::IndivisibleResidue {
                            index,
                            gcd,
                        }),
                        statistics,
                    ));
                }
            }
        }

        let mut outcome = self.solve(&eliminated_residues, &eliminated_moduli, rng, monitor)?;
        outcome.statistics.set_total_time(start.elapsed());
        Ok(outcome)
    }
}

/// Solves a system with a fresh solver, the thread-local RNG and no monitor.
///
/// # Errors
///
/// See `CongruenceSolver::solve`.
///
/// # Examples
///
/// ```rust
/// # use congruence_solver::solver::solve;
/// let result = solve(&[2i64, 3, 2], &[3, 5, 7]).unwrap();
/// let solution = result.solution().unwrap();
/// assert_eq!((solution.residue(), solution.modulus()), (23, 105));
/// ```
pub fn solve<T>(residues: &[T], moduli: &[T]) -> Result<SolveResult<T>, CongruenceError>
where
    T: CongruenceNumeric,
{
    let mut rng = rand::rng();
    CongruenceSolver::new()
        .solve(residues, moduli, &mut rng, NoOperationMonitor::new())
        .map(|outcome| outcome.result)
}

/// Solves a system with leading coefficients with a fresh solver, the
/// thread-local RNG and no monitor.
///
/// # Errors
///
/// See `CongruenceSolver::solve_linear`.
pub fn solve_linear<T>(
    coefficients: &[T],
    residues: &[T],
    moduli: &[T],
) -> Result<SolveResult<T>, CongruenceError>
where
    T: CongruenceNumeric,
{
    let mut rng = rand::rng();
    CongruenceSolver::new()
        .solve_linear(coefficients, residues, moduli, &mut rng, NoOperationMonitor::new())
        .map(|outcome| outcome.result)
}
