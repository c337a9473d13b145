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

//! # Prime Factorization
//!
//! Splits a positive integer into its sorted multiset of prime factors.
//!
//! The `Factorizer` keeps a min-ordered worklist of values still to be
//! factored, seeded with the input. Each round removes the smallest pending
//! value `d`: primes go straight to the output, composites are handed to a
//! Pollard-rho style probe. The probe draws two seeds `x, c` from the
//! injected generator, iterates `x ← x² + c (mod d)` alongside a second
//! sequence `y` running at twice the speed, and stops as soon as
//! `gcd(|x - y|, d)` is not 1. A gcd equal to `d` means the probe failed; `d`
//! goes back on the worklist and the next round retries it with fresh seeds.
//! Otherwise both the divisor and the cofactor are enqueued.
//!
//! Each retry succeeds with high probability, so factorization terminates
//! with overwhelming probability but has no deterministic step bound. Even
//! values short-circuit to the divisor 2.
//!
//! ```rust
//! use congruence_core::math::factor::factorize;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let factorization = factorize(360i64, &mut rng).unwrap();
//! assert_eq!(factorization.factors(), &[2, 2, 2, 3, 3, 5]);
//!
//! let powers: Vec<i64> = factorization.prime_powers().map(|p| p.value()).collect();
//! assert_eq!(powers, vec![8, 9, 5]);
//! ```

use crate::{
    error::FactorizationError,
    math::prime::is_prime,
    num::{
        arith::{add_mod, gcd, mul_mod},
        numeric::CongruenceNumeric,
    },
    stats::FactorizationStatistics,
};
use num_traits::NumCast;
use rand::Rng;
use smallvec::SmallVec;
use std::{cmp::Reverse, collections::BinaryHeap, iter::FusedIterator};

/// Smallest seed drawn by the rho probe unless configured otherwise.
pub const DEFAULT_SEED_MIN: u64 = 2;
/// Largest seed drawn by the rho probe unless configured otherwise.
pub const DEFAULT_SEED_MAX: u64 = 1_000_000;

/// Seed range for the randomized divisor probe.
///
/// # Invariants
///
/// `2 <= seed_min <= seed_max`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ProbeConfig {
    seed_min: u64,
    seed_max: u64,
}

impl ProbeConfig {
    /// Creates a new `ProbeConfig`.
    ///
    /// # Panics
    ///
    /// Panics if `seed_min < 2` or `seed_min > seed_max`.
    #[inline]
    pub fn new(seed_min: u64, seed_max: u64) -> Self {
        assert!(
            (2..=seed_max).contains(&seed_min),
            "Invalid probe seed range: require 2 <= seed_min <= seed_max"
        );
        Self { seed_min, seed_max }
    }

    /// Creates a new `ProbeConfig` if the range is valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use congruence_core::math::factor::ProbeConfig;
    /// assert!(ProbeConfig::try_new(2, 100).is_some());
    /// assert!(ProbeConfig::try_new(1, 100).is_none());
    /// assert!(ProbeConfig::try_new(50, 10).is_none());
    /// ```
    #[inline]
    pub fn try_new(seed_min: u64, seed_max: u64) -> Option<Self> {
        if (2..=seed_max).contains(&seed_min) {
            Some(Self { seed_min, seed_max })
        } else {
            None
        }
    }

    /// Returns the smallest seed the probe may draw.
    #[inline]
    pub const fn seed_min(&self) -> u64 {
        self.seed_min
    }

    /// Returns the largest seed the probe may draw.
    #[inline]
    pub const fn seed_max(&self) -> u64 {
        self.seed_max
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            seed_min: DEFAULT_SEED_MIN,
            seed_max: DEFAULT_SEED_MAX,
        }
    }
}

impl std::fmt::Display for ProbeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProbeConfig(seeds: [{}, {}])", self.seed_min, self.seed_max)
    }
}

/// A maximal run of equal primes `p, p, ..., p` collapsed into `p^k`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PrimePower<T> {
    prime: T,
    exponent: u32,
    value: T,
}

impl<T> PrimePower<T>
where
    T: Copy,
{
    /// Returns the prime `p`.
    #[inline]
    pub fn prime(&self) -> T {
        self.prime
    }

    /// Returns the exponent `k` (at least 1).
    #[inline]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Returns `p^k`.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> std::fmt::Display for PrimePower<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.prime)
        } else {
            write!(f, "{}^{}", self.prime, self.exponent)
        }
    }
}

/// The ascending multiset of prime factors of a positive integer.
///
/// `12` factors as `[2, 2, 3]`; `1` has the empty factorization.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PrimeFactorization<T>
where
    T: CongruenceNumeric,
{
    factors: SmallVec<[T; 16]>,
}

impl<T> PrimeFactorization<T>
where
    T: CongruenceNumeric,
{
    /// Returns the factorization of 1.
    #[inline]
    pub fn empty() -> Self {
        Self {
            factors: SmallVec::new(),
        }
    }

    /// Returns the prime factors in ascending order, with repetition.
    #[inline]
    pub fn factors(&self) -> &[T] {
        &self.factors
    }

    /// Returns the number of prime factors counted with multiplicity.
    #[inline]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns `true` for the factorization of 1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns the product of all factors, i.e. the factored value.
    #[inline]
    pub fn product(&self) -> T {
        self.factors.iter().fold(T::one(), |acc, &p| acc * p)
    }

    /// Returns an iterator over the prime-power groups in ascending prime order.
    #[inline]
    pub fn prime_powers(&self) -> PrimePowers<'_, T> {
        PrimePowers {
            factors: &self.factors,
            position: 0,
        }
    }

    /// Consumes the factorization and returns the factors as a vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.factors.into_vec()
    }
}

impl<T> Default for PrimeFactorization<T>
where
    T: CongruenceNumeric,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Display for PrimeFactorization<T>
where
    T: CongruenceNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        for (i, power) in self.prime_powers().enumerate() {
            if i > 0 {
                write!(f, " · ")?;
            }
            write!(f, "{}", power)?;
        }
        Ok(())
    }
}

/// Iterator over the prime-power groups of a `PrimeFactorization`.
///
/// # Examples
///
/// ```rust
/// # use congruence_core::math::factor::factorize;
/// # use rand::{SeedableRng, rngs::StdRng};
/// let mut rng = StdRng::seed_from_u64(1);
/// let f = factorize(12i64, &mut rng).unwrap();
/// let groups: Vec<(i64, u32)> = f.prime_powers().map(|p| (p.prime(), p.exponent())).collect();
/// assert_eq!(groups, vec![(2, 2), (3, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct PrimePowers<'a, T> {
    factors: &'a [T],
    position: usize,
}

impl<'a, T> Iterator for PrimePowers<'a, T>
where
    T: CongruenceNumeric,
{
    type Item = PrimePower<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let prime = *self.factors.get(self.position)?;
        self.position += 1;

        let mut exponent = 1u32;
        let mut value = prime;
        while self.factors.get(self.position) == Some(&prime) {
            exponent += 1;
            value = value * prime;
            self.position += 1;
        }

        Some(PrimePower {
            prime,
            exponent,
            value,
        })
    }
}

impl<'a, T> FusedIterator for PrimePowers<'a, T> where T: CongruenceNumeric {}

/// A reusable factorization engine.
///
/// Holds the worklist buffer between calls so repeated factorizations (one
/// per modulus during a reduction) do not reallocate, and accumulates
/// `FactorizationStatistics`.
#[derive(Clone, Debug)]
pub struct Factorizer<T>
where
    T: CongruenceNumeric,
{
    config: ProbeConfig,
    worklist: BinaryHeap<Reverse<T>>,
    statistics: FactorizationStatistics,
}

impl<T> Default for Factorizer<T>
where
    T: CongruenceNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Factorizer<T>
where
    T: CongruenceNumeric,
{
    /// Creates a factorizer with the default probe seed range `[2, 10^6]`.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(ProbeConfig::default())
    }

    /// Creates a factorizer with the given probe configuration.
    #[inline]
    pub fn with_config(config: ProbeConfig) -> Self {
        Self {
            config,
            worklist: BinaryHeap::new(),
            statistics: FactorizationStatistics::default(),
        }
    }

    /// Returns the probe configuration.
    #[inline]
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Returns the statistics accumulated since the last reset.
    #[inline]
    pub fn statistics(&self) -> &FactorizationStatistics {
        &self.statistics
    }

    /// Clears the accumulated statistics.
    #[inline]
    pub fn reset_statistics(&mut self) {
        self.statistics = FactorizationStatistics::default();
    }

    /// Factorizes `n` into its ascending multiset of primes.
    ///
    /// # Errors
    ///
    /// Returns `FactorizationError::InvalidArgument` if `n <= 0`.
    pub fn factorize<R>(
        &mut self,
        n: T,
        rng: &mut R,
    ) -> Result<PrimeFactorization<T>, FactorizationError>
    where
        R: Rng,
    {
        if n <= T::zero() {
            return Err(FactorizationError::invalid_argument(n));
        }

        let mut factors: SmallVec<[T; 16]> = SmallVec::new();
        if n == T::one() {
            return Ok(PrimeFactorization { factors });
        }

        self.worklist.clear();
        self.worklist.push(Reverse(n));

        while let Some(Reverse(value)) = self.worklist.pop() {
            self.statistics.on_value_popped();

            if is_prime(value) {
                self.statistics.on_prime_found();
                factors.push(value);
                continue;
            }

            let divisor = self.probe(value, rng);
            if divisor == value {
                self.statistics.on_probe_failed();
                tracing::trace!(%value, "divisor probe failed, retrying with fresh seeds");
                self.worklist.push(Reverse(value));
            } else {
                self.worklist.push(Reverse(divisor));
                self.worklist.push(Reverse(value / divisor));
            }
        }

        factors.sort_unstable();
        Ok(PrimeFactorization { factors })
    }

    /// Looks for a non-trivial divisor of the composite `value`.
    ///
    /// Returns `value` itself when the probe fails.
    fn probe<R>(&mut self, value: T, rng: &mut R) -> T
    where
        R: Rng,
    {
        self.statistics.on_probe();

        let two = T::one() + T::one();
        if (value % two).is_zero() {
            return two;
        }

        let mut x = self.draw_seed(value, rng);
        let c = self.draw_seed(value, rng);
        let mut y = x;
        let step = |v: T| add_mod(mul_mod(v, v, value), c, value);

        loop {
            x = step(x);
            y = step(step(y));
            let divisor = gcd((x - y).abs(), value);
            if divisor == value {
                return value;
            }
            if divisor != T::one() {
                return divisor;
            }
        }
    }

    /// Draws a seed from the configured range and reduces it modulo `value`.
    #[inline]
    fn draw_seed<R>(&self, value: T, rng: &mut R) -> T
    where
        R: Rng,
    {
        let seed = rng.random_range(self.config.seed_min..=self.config.seed_max);
        let reduced = match value.to_u64() {
            Some(bound) => seed % bound,
            None => seed,
        };
        <T as NumCast>::from(reduced).unwrap_or_else(T::zero)
    }
}

/// Factorizes `n` with a fresh `Factorizer` and the default probe configuration.
///
/// # Errors
///
/// Returns `FactorizationError::InvalidArgument` if `n <= 0`.
///
/// # Examples
///
/// ```rust
/// # use congruence_core::math::factor::factorize;
/// # use rand::{SeedableRng, rngs::StdRng};
/// let mut rng = StdRng::seed_from_u64(42);
/// assert_eq!(factorize(12i64, &mut rng).unwrap().factors(), &[2, 2, 3]);
/// assert!(factorize(1i64, &mut rng).unwrap().is_empty());
/// assert!(factorize(0i64, &mut rng).is_err());
/// ```
#[inline]
pub fn factorize<T, R>(n: T, rng: &mut R) -> Result<PrimeFactorization<T>, FactorizationError>
where
    T: CongruenceNumeric,
    R: Rng,
{
    Factorizer::new().factorize(n, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng, rngs::StdRng};
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn factors_of(n: IntegerType) -> Vec<IntegerType> {
        factorize(n, &mut rng()).expect("positive input").into_vec()
    }

    #[test]
    fn test_factorize_small_values() {
        assert_eq!(factors_of(12), vec![2, 2, 3]);
        assert_eq!(factors_of(1), Vec::<IntegerType>::new());
        assert_eq!(factors_of(17), vec![17]);
        assert_eq!(factors_of(2), vec![2]);
        assert_eq!(factors_of(360), vec![2, 2, 2, 3, 3, 5]);
    }

    #[test]
    fn test_factorize_rejects_non_positive() {
        let mut rng = rng();
        assert_eq!(
            factorize(0 as IntegerType, &mut rng),
            Err(FactorizationError::invalid_argument(0))
        );
        assert_eq!(
            factorize(-5 as IntegerType, &mut rng),
            Err(FactorizationError::invalid_argument(-5))
        );
    }

    #[test]
    fn test_factorize_odd_composites_need_the_probe() {
        assert_eq!(factors_of(9), vec![3, 3]);
        assert_eq!(factors_of(25), vec![5, 5]);
        assert_eq!(factors_of(3 * 5 * 7 * 11 * 13), vec![3, 5, 7, 11, 13]);
        assert_eq!(factors_of(7 * 7 * 7), vec![7, 7, 7]);
    }

    #[test]
    fn test_factorize_large_semiprime() {
        // Both factors are prime; the product does not fit in 32 bits so
        // the rho step must go through the overflow-free multiplication.
        let p: IntegerType = 1_000_003;
        let q: IntegerType = 999_983;
        assert_eq!(factors_of(p * q), vec![q, p]);
    }

    #[test]
    fn test_factorize_product_roundtrip() {
        let mut factorizer = Factorizer::<IntegerType>::new();
        let mut rng = rng();
        for n in 1..2000 {
            let f = factorizer.factorize(n, &mut rng).expect("positive input");
            assert_eq!(f.product(), n, "product mismatch for {n}");
            assert!(f.factors().windows(2).all(|w| w[0] <= w[1]));
            assert!(f.factors().iter().all(|&p| is_prime(p)));
        }
    }

    #[test]
    fn test_factorize_is_deterministic_under_seed() {
        let n: IntegerType = 3 * 3 * 1_000_003 * 999_983;
        let mut a = Factorizer::new();
        let mut b = Factorizer::new();
        let fa = a.factorize(n, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let fb = b.factorize(n, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(fa, fb);
        assert_eq!(a.statistics(), b.statistics());
    }

    #[test]
    fn test_factorize_other_widths() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(factorize(100i8, &mut rng).unwrap().into_vec(), vec![2, 2, 5, 5]);
        assert_eq!(factorize(91i32, &mut rng).unwrap().into_vec(), vec![7, 13]);
        let wide: i128 = 1_000_003i128 * 999_983i128 * 4;
        assert_eq!(
            factorize(wide, &mut rng).unwrap().into_vec(),
            vec![2i128, 2, 999_983, 1_000_003]
        );
    }

    #[test]
    fn test_statistics_accumulate_and_reset() {
        let mut factorizer = Factorizer::<IntegerType>::new();
        let mut rng = rng();
        factorizer.factorize(12, &mut rng).unwrap();
        let stats = *factorizer.statistics();
        assert_eq!(stats.primes_found, 3);
        // 12 -> (2, 6) -> 6 -> (2, 3): two even short-cuts.
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.failed_probes, 0);
        assert_eq!(stats.values_popped, 5);

        factorizer.factorize(7, &mut rng).unwrap();
        assert_eq!(factorizer.statistics().primes_found, 4);

        factorizer.reset_statistics();
        assert_eq!(*factorizer.statistics(), FactorizationStatistics::default());
    }

    #[test]
    fn test_prime_powers_grouping() {
        let f = factorize(2 * 2 * 2 * 3 * 3 * 5 * 7 * 7 as IntegerType, &mut rng()).unwrap();
        let groups: Vec<(IntegerType, u32, IntegerType)> = f
            .prime_powers()
            .map(|p| (p.prime(), p.exponent(), p.value()))
            .collect();
        assert_eq!(groups, vec![(2, 3, 8), (3, 2, 9), (5, 1, 5), (7, 2, 49)]);
        assert_eq!(f.to_string(), "2^3 · 3^2 · 5 · 7^2");
    }

    #[test]
    fn test_prime_powers_of_one_is_empty() {
        let f = PrimeFactorization::<IntegerType>::empty();
        assert_eq!(f.prime_powers().count(), 0);
        assert_eq!(f.product(), 1);
        assert_eq!(f.to_string(), "1");
    }

    #[test]
    fn test_probe_config_validation() {
        assert_eq!(ProbeConfig::default().seed_min(), DEFAULT_SEED_MIN);
        assert_eq!(ProbeConfig::default().seed_max(), DEFAULT_SEED_MAX);
        assert!(ProbeConfig::try_new(2, 2).is_some());
        assert!(ProbeConfig::try_new(0, 2).is_none());
    }

    #[test]
    #[should_panic]
    fn test_probe_config_new_panics_on_invalid_range() {
        let _ = ProbeConfig::new(10, 3);
    }

    #[test]
    fn test_narrow_seed_range_still_factors() {
        let mut factorizer = Factorizer::<IntegerType>::with_config(ProbeConfig::new(2, 50));
        let f = factorizer.factorize(15 * 77, &mut rng()).unwrap();
        assert_eq!(f.into_vec(), vec![3, 5, 7, 11]);
    }

    /// Replays a fixed sequence of words, then repeats the last one.
    struct ScriptedRng {
        words: Vec<u64>,
        position: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let word = self.words[self.position.min(self.words.len() - 1)];
            self.position += 1;
            word
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn test_rho_failure_is_retried_with_fresh_seeds() {
        // With seeds drawn from [3, 4], the high bit of each word picks 4.
        // Seeds (3, 3) run the rho walk on 9 into a full cycle; (3, 4) finds 3.
        let config = ProbeConfig::new(3, 4);
        let mut factorizer = Factorizer::<IntegerType>::with_config(config);
        assert_eq!(factorizer.config(), &config);

        let mut rng = ScriptedRng {
            words: vec![0, 0, 0, u64::MAX],
            position: 0,
        };
        let f = factorizer.factorize(9, &mut rng).unwrap();
        assert_eq!(f.into_vec(), vec![3, 3]);

        let stats = *factorizer.statistics();
        assert_eq!(stats.failed_probes, 1);
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.primes_found, 2);
        assert_eq!(stats.values_popped, 4);
    }
}
