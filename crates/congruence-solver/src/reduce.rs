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

//! # Equation Reducer
//!
//! Rewrites a system `x ≡ aᵢ (mod mᵢ)` into an equivalent system whose
//! moduli are pairwise coprime, or proves that no solution exists.
//!
//! ## Algorithm
//!
//! 1. **Split.** Each modulus is factorized and its prime factors grouped
//!    into prime powers `pᵏ`. Equation `i` is replaced by one piece
//!    `x ≡ aᵢ mod pᵏ (mod pᵏ)` per group, ordered by input equation and then
//!    by ascending prime. A modulus of 1 contributes no piece.
//! 2. **Reconcile.** Pieces are compared pairwise, `i < j`. Two pieces are
//!    comparable when one modulus divides the other, which for prime powers
//!    means they share the prime. The piece with the larger modulus implies
//!    the other one if its residue reduces to the other's residue; the
//!    implied piece is removed. Otherwise the system is unsatisfiable and the
//!    reducer stops with the two pieces as the `Conflict`. On equal moduli the
//!    pivot `i` is the one removed, so equal duplicates collapse regardless
//!    of their order and disagreeing ones always conflict.
//!
//! After reconciliation no two surviving pieces share a prime, so the moduli
//! are pairwise coprime and the system can be combined by `crate::combine`.

use crate::{
    congruence::{Conflict, Congruence, CongruenceSystem},
    decision::Decision,
    error::CongruenceError,
    monitor::{no_op::NoOperationMonitor, reduction_monitor::ReductionMonitor},
    result::{ReductionOutcome, ReductionResult},
    stats::ReductionStatistics,
};
use congruence_core::{math::factor::Factorizer, num::numeric::CongruenceNumeric};
use rand::Rng;
use std::time::Instant;

/// A reusable equation reducer.
///
/// Owns a `Factorizer` and the piece buffer, so repeated reductions do not
/// reallocate. Nothing else carries over from one call to the next.
#[derive(Clone, Debug)]
pub struct Reducer<T>
where
    T: CongruenceNumeric,
{
    factorizer: Factorizer<T>,
    pieces: Vec<Congruence<T>>,
}

impl<T> Default for Reducer<T>
where
    T: CongruenceNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Reducer<T>
where
    T: CongruenceNumeric,
{
    /// Creates a reducer with a default `Factorizer`.
    #[inline]
    pub fn new() -> Self {
        Self::with_factorizer(Factorizer::new())
    }

    /// Creates a reducer around the given factorizer.
    #[inline]
    pub fn with_factorizer(factorizer: Factorizer<T>) -> Self {
        Self {
            factorizer,
            pieces: Vec::new(),
        }
    }

    /// Returns the factorizer.
    #[inline]
    pub fn factorizer(&self) -> &Factorizer<T> {
        &self.factorizer
    }

    /// Reduces `x ≡ residues[i] (mod moduli[i])` to pairwise coprime moduli.
    ///
    /// # Errors
    ///
    /// Returns `CongruenceError::InvalidInput` if the slices differ in length
    /// or a modulus is not positive. An unsatisfiable system is reported as
    /// `ReductionResult::Unsatisfiable`, not as an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use congruence_solver::{reduce::Reducer, monitor::no_op::NoOperationMonitor};
    /// # use rand::{SeedableRng, rngs::StdRng};
    /// let mut reducer = Reducer::new();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let outcome = reducer
    ///     .reduce(&[1i64, 2, 3, 4, 5], &[2, 3, 4, 5, 6], &mut rng, NoOperationMonitor::new())
    ///     .unwrap();
    /// let reduced = outcome.result.into_reduced().unwrap();
    /// assert_eq!(reduced.residues(), vec![3, 4, 2]);
    /// assert_eq!(reduced.moduli(), vec![4, 5, 3]);
    /// ```
    pub fn reduce<R, M>(
        &mut self,
        residues: &[T],
        moduli: &[T],
        rng: &mut R,
        mut monitor: M,
    ) -> Result<ReductionOutcome<T>, CongruenceError>
    where
        R: Rng,
        M: ReductionMonitor<T>,
    {
        let start = Instant::now();
        let input = CongruenceSystem::from_parts(residues, moduli)?;

        let mut statistics = ReductionStatistics::default();
        self.factorizer.reset_statistics();
        self.pieces.clear();
        monitor.on_enter_reduce(&input);

        let split = self.split(&input, rng, &mut monitor, &mut statistics);
        statistics.set_factorization(*self.factorizer.statistics());
        split?;

        let result = match self.reconcile(&mut monitor, &mut statistics) {
            Some(conflict) => {
                statistics.on_conflict();
                tracing::debug!(%conflict, "system is unsatisfiable");
                monitor.on_conflict(&conflict);
                ReductionResult::Unsatisfiable(conflict)
            }
            None => {
                for _ in &self.pieces {
                    monitor.on_decision(Decision::EmitReduced);
                }
                statistics.set_equations_out(self.pieces.len());
                ReductionResult::Reduced(self.pieces.drain(..).collect())
            }
        };

        statistics.set_total_time(start.elapsed());
        tracing::debug!(
            equations_in = statistics.equations_in,
            equations_out = statistics.equations_out,
            discarded = statistics.discarded,
            "reduction finished"
        );
        monitor.on_exit_reduce(&result, &statistics);
        Ok(ReductionOutcome::new(result, statistics))
    }

    /// Splits every equation into one piece per prime power of its modulus.
    fn split<R, M>(
        &mut self,
        input: &CongruenceSystem<T>,
        rng: &mut R,
        monitor: &mut M,
        statistics: &mut ReductionStatistics,
    ) -> Result<(), CongruenceError>
    where
        R: Rng,
        M: ReductionMonitor<T>,
    {
        for equation in input {
            statistics.on_equation_in();
            monitor.on_decision(Decision::SplitEquation);

            let factorization = self.factorizer.factorize(equation.modulus(), rng)?;
            let mut groups = factorization.prime_powers().peekable();
            while let Some(group) = groups.next() {
                monitor.on_decision(Decision::OpenPrimePower);
                for _ in 1..group.exponent() {
                    monitor.on_decision(Decision::InspectFactor);
                    monitor.on_decision(Decision::ExtendPrimePower);
                }
                if groups.peek().is_some() {
                    monitor.on_decision(Decision::InspectFactor);
                    monitor.on_decision(Decision::ClosePrimePower);
                }

                let piece = Congruence::new(equation.residue(), group.value());
                tracing::trace!(%equation, %piece, "split");
                statistics.on_piece_split();
                monitor.on_split(equation, &piece);
                self.pieces.push(piece);
            }
        }
        Ok(())
    }

    /// Removes implied pieces in place. Returns the first contradiction found.
    fn reconcile<M>(
        &mut self,
        monitor: &mut M,
        statistics: &mut ReductionStatistics,
    ) -> Option<Conflict<T>>
    where
        M: ReductionMonitor<T>,
    {
        let pieces = &mut self.pieces;
        let mut i = 0;
        'pivot: while i < pieces.len() {
            monitor.on_decision(Decision::ScanPivot);
            let mut j = i + 1;
            while j < pieces.len() {
                monitor.on_decision(Decision::ScanPair);
                statistics.on_pair_compared();
                let (pivot, later) = (pieces[i], pieces[j]);

                if !pivot.is_comparable_with(&later) {
                    monitor.on_decision(Decision::IncomparablePair);
                    j += 1;
                    continue;
                }
                monitor.on_decision(Decision::ComparablePair);
                statistics.on_comparable_pair();

                if pivot.modulus() > later.modulus() {
                    monitor.on_decision(Decision::PivotModulusGreater);
                    if !pivot.implies(&later) {
                        monitor.on_decision(Decision::ConflictLaterSubsumed);
                        return Some(Conflict {
                            first: pivot,
                            second: later,
                        });
                    }
                    monitor.on_decision(Decision::DiscardLater);
                    tracing::trace!(kept = %pivot, discarded = %later, "discard");
                    statistics.on_discard();
                    monitor.on_discard(&pivot, &later);
                    pieces.remove(j);
                } else {
                    monitor.on_decision(Decision::PivotModulusNotGreater);
                    if !later.implies(&pivot) {
                        monitor.on_decision(Decision::ConflictPivotSubsumed);
                        return Some(Conflict {
                            first: later,
                            second: pivot,
                        });
                    }
                    monitor.on_decision(Decision::DiscardPivot);
                    tracing::trace!(kept = %later, discarded = %pivot, "discard");
                    statistics.on_discard();
                    monitor.on_discard(&later, &pivot);
                    pieces.remove(i);
                    // The next piece moved into slot `i`; scan it as the new pivot.
                    continue 'pivot;
                }
            }
            i += 1;
        }
        None
    }
}

/// Reduces a system with a fresh `Reducer`, the thread-local RNG and no monitor.
///
/// # Errors
///
/// See `Reducer::reduce`.
///
/// # Examples
///
/// ```rust
/// # use congruence_solver::reduce::reduce;
/// let result = reduce(&[1i64, 0], &[2, 2]).unwrap();
/// assert!(result.is_unsatisfiable());
/// ```
pub fn reduce<T>(residues: &[T], moduli: &[T]) -> Result<ReductionResult<T>, CongruenceError>
where
    T: CongruenceNumeric,
{
    let mut rng = rand::rng();
    Reducer::new()
        .reduce(residues, moduli, &mut rng, NoOperationMonitor::new())
        .map(|outcome| outcome.result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::InvalidInputError,
        monitor::coverage::CoverageMonitor,
    };
    use congruence_core::math::factor::ProbeConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

    fn run(
        residues: &[IntegerType],
        moduli: &[IntegerType],
    ) -> ReductionOutcome<IntegerType> {
        let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
        Reducer::new()
            .reduce(residues, moduli, &mut rng, NoOperationMonitor::new())
            .unwrap()
    }

    fn pairs(system: &CongruenceSystem<IntegerType>) -> Vec<(IntegerType, IntegerType)> {
        system.iter().map(|c| (c.residue(), c.modulus())).collect()
    }

    #[test]
    fn test_reduce_mixed_system() {
        let outcome = run(&[1, 2, 3, 4, 5], &[2, 3, 4, 5, 6]);
        let reduced = outcome.result.reduced().unwrap();
        assert_eq!(pairs(reduced), vec![(3, 4), (4, 5), (2, 3)]);
        assert!(reduced.is_pairwise_coprime());

        let stats = outcome.statistics;
        assert_eq!(stats.equations_in, 5);
        assert_eq!(stats.pieces_split, 6);
        assert_eq!(stats.discarded, 3);
        assert_eq!(stats.conflicts, 0);
        assert_eq!(stats.equations_out, 3);
    }

    #[test]
    fn test_reduce_conflicting_equal_moduli() {
        let outcome = run(&[1, 0], &[2, 2]);
        let conflict = outcome.result.conflict().copied().unwrap();
        assert_eq!(conflict.first, Congruence::new(0, 2));
        assert_eq!(conflict.second, Congruence::new(1, 2));
        assert_eq!(outcome.statistics.conflicts, 1);
    }

    #[test]
    fn test_reduce_conflicting_prime_powers() {
        // x ≡ 0 (mod 4) forces x even, x ≡ 1 (mod 2) forces it odd.
        let outcome = run(&[0, 1], &[4, 2]);
        let conflict = outcome.result.conflict().copied().unwrap();
        assert_eq!(conflict.first, Congruence::new(0, 4));
        assert_eq!(conflict.second, Congruence::new(1, 2));

        let outcome = run(&[1, 0], &[2, 4]);
        let conflict = outcome.result.conflict().copied().unwrap();
        assert_eq!(conflict.first, Congruence::new(0, 4));
        assert_eq!(conflict.second, Congruence::new(1, 2));
    }

    #[test]
    fn test_reduce_equal_duplicates_collapse_in_either_order() {
        let forward = run(&[3, 3], &[4, 4]);
        assert_eq!(pairs(forward.result.reduced().unwrap()), vec![(3, 4)]);

        let backward = run(&[7, 3], &[4, 4]);
        assert_eq!(pairs(backward.result.reduced().unwrap()), vec![(3, 4)]);
    }

    #[test]
    fn test_reduce_keeps_coprime_system() {
        let outcome = run(&[1, 2, 3], &[4, 9, 25]);
        assert_eq!(
            pairs(outcome.result.reduced().unwrap()),
            vec![(1, 4), (2, 9), (3, 25)]
        );
        assert_eq!(outcome.statistics.discarded, 0);
    }

    #[test]
    fn test_reduce_splits_composite_modulus() {
        let outcome = run(&[-1], &[360]);
        assert_eq!(
            pairs(outcome.result.reduced().unwrap()),
            vec![(7, 8), (8, 9), (4, 5)]
        );
    }

    #[test]
    fn test_reduce_modulus_one_is_dropped() {
        let outcome = run(&[5, 2], &[1, 3]);
        assert_eq!(pairs(outcome.result.reduced().unwrap()), vec![(2, 3)]);

        let outcome = run(&[5], &[1]);
        assert!(outcome.result.reduced().unwrap().is_empty());
    }

    #[test]
    fn test_reduce_empty_system() {
        let outcome = run(&[], &[]);
        assert!(outcome.result.reduced().unwrap().is_empty());
        assert_eq!(outcome.statistics.equations_in, 0);
    }

    #[test]
    fn test_reduce_rejects_invalid_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut reducer = Reducer::<IntegerType>::new();
        let err = reducer
            .reduce(&[1, 2], &[3], &mut rng, NoOperationMonitor::new())
            .unwrap_err();
        assert_eq!(
            err,
            CongruenceError::InvalidInput(InvalidInputError::LengthMismatch {
                residues: 2,
                moduli: 1
            })
        );

        let err = reducer
            .reduce(&[1, 2], &[3, 0], &mut rng, NoOperationMonitor::new())
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_reduce_is_deterministic_under_seed() {
        let config = ProbeConfig::new(2, 1_000);
        let mut first = Reducer::with_factorizer(Factorizer::with_config(config));
        let mut second = first.clone();
        let moduli = [1_000_003 * 999_983, 221, 1_000_003];
        let residues = [17, 4, 17];

        let a = first
            .reduce(&residues, &moduli, &mut ChaCha8Rng::seed_from_u64(9), NoOperationMonitor::new())
            .unwrap();
        let b = second
            .reduce(&residues, &moduli, &mut ChaCha8Rng::seed_from_u64(9), NoOperationMonitor::new())
            .unwrap();
        assert_eq!(a.result, b.result);
        assert_eq!(a.statistics.factorization, b.statistics.factorization);
        assert_eq!(first.factorizer().config(), &config);
        assert_eq!(*first.factorizer().statistics(), a.statistics.factorization);
        assert_eq!(
            pairs(a.result.reduced().unwrap()),
            vec![(17, 999_983), (4, 13), (4, 17), (17, 1_000_003)]
        );
    }

    #[test]
    fn test_reduce_reports_decisions() {
        let mut coverage = CoverageMonitor::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut reducer = Reducer::new();
        reducer
            .reduce(&[1, 2, 3, 4, 5], &[2, 3, 4, 5, 6], &mut rng, &mut coverage)
            .unwrap();

        assert_eq!(coverage.hits(Decision::SplitEquation), 5);
        assert_eq!(coverage.hits(Decision::EmitReduced), 3);
        // 4 = 2·2 extends once; 6 = 2·3 closes the group of 2.
        assert_eq!(coverage.hits(Decision::ExtendPrimePower), 1);
        assert_eq!(coverage.hits(Decision::ClosePrimePower), 1);
        assert_eq!(coverage.hits(Decision::OpenPrimePower), 6);
        assert_eq!(coverage.hits(Decision::DiscardPivot), 2);
        assert_eq!(coverage.hits(Decision::DiscardLater), 1);
        assert!(!coverage.is_covered(Decision::ConflictLaterSubsumed));
        assert!(!coverage.is_covered(Decision::ConflictPivotSubsumed));

        reducer
            .reduce(&[0, 1], &[4, 2], &mut rng, &mut coverage)
            .unwrap();
        reducer
            .reduce(&[1, 0], &[2, 4], &mut rng, &mut coverage)
            .unwrap();
        assert!(coverage.is_covered(Decision::ConflictLaterSubsumed));
        assert!(coverage.is_covered(Decision::ConflictPivotSubsumed));
        assert_eq!(coverage.coverage(), 1.0);
    }

    #[test]
    fn test_free_function_matches_reducer() {
        let result = reduce(&[1, 2, 3, 4, 5], &[2, 3, 4, 5, 6]).unwrap();
        assert_eq!(pairs(result.reduced().unwrap()), vec![(3, 4), (4, 5), (2, 3)]);
    }
}
