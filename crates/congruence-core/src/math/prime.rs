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

use num_traits::PrimInt;

/// Returns `true` if `n` is prime.
///
/// Values below 2 are not prime, 2 and 3 are, multiples of 2 or 3 are
/// rejected immediately, and the remaining candidates are trial-divided by
/// `i` and `i + 2` for `i = 5, 11, 17, ...` while `i <= sqrt(n)`. The bound
/// is evaluated as `i <= n / i`, so the loop cannot overflow.
///
/// Runs in `O(sqrt(n))`; intended for moduli of moderate size, not for
/// cryptographic magnitudes.
///
/// # Examples
///
/// ```rust
/// # use congruence_core::math::prime::is_prime;
/// assert!(!is_prime(0i64));
/// assert!(!is_prime(1i64));
/// assert!(is_prime(2i64));
/// assert!(!is_prime(9i64));
/// assert!(is_prime(1_000_000_007i64));
/// ```
pub fn is_prime<T>(n: T) -> bool
where
    T: PrimInt,
{
    let two = T::one() + T::one();
    let three = two + T::one();

    if n < two {
        return false;
    }
    if n == two || n == three {
        return true;
    }
    if (n % two).is_zero() || (n % three).is_zero() {
        return false;
    }

    let six = three + three;
    let mut candidate = three + two;
    while candidate <= n / candidate {
        if (n % candidate).is_zero() || (n % (candidate + two)).is_zero() {
            return false;
        }
        candidate = match candidate.checked_add(&six) {
            Some(next) => next,
            None => break,
        };
    }
    true
}

#[cfg(test)]
mod tests {
    use super::is_prime;

    fn naive_is_prime(n: i64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_is_prime_boundaries() {
        assert!(!is_prime(0i64));
        assert!(!is_prime(1i64));
        assert!(is_prime(2i64));
        assert!(is_prime(3i64));
        assert!(!is_prime(4i64));
        assert!(is_prime(5i64));
        assert!(!is_prime(9i64));
        assert!(!is_prime(25i64));
        assert!(!is_prime(49i64));
    }

    #[test]
    fn test_is_prime_negative_values_are_not_prime() {
        assert!(!is_prime(-1i64));
        assert!(!is_prime(-7i64));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_is_prime_agrees_with_naive_below_5000() {
        for n in -10..5000i64 {
            assert_eq!(is_prime(n), naive_is_prime(n), "disagreement at {n}");
        }
    }

    #[test]
    fn test_is_prime_large_values() {
        assert!(is_prime(1_000_000_007i64));
        assert!(is_prime(998_244_353i64));
        assert!(!is_prime(1_000_000_007i64 * 3));
        // Square of a prime: the only divisor sits exactly at the sqrt bound.
        assert!(!is_prime(1_000_003i64 * 1_000_003));
    }

    #[test]
    fn test_is_prime_small_and_unsigned_types() {
        assert!(is_prime(127i8));
        assert!(!is_prime(121i8));
        assert!(is_prime(65_521u32));
        assert!(!is_prime(u64::MAX));
    }
}
