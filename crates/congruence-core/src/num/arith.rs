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

//! # Arithmetic Kernel
//!
//! Euclid's algorithm and the modular helpers built on it. All functions are
//! generic over `num_traits` integer bounds and never allocate.
//!
//! `gcd` and `extended_gcd` accept arbitrary signed inputs and do not
//! normalize the sign of the result; callers that need a positive gcd take
//! the absolute value. `T::MIN` paired with `-1` does not overflow: the
//! remainder is 0 and the quotient is never needed.
//!
//! The modular helpers (`add_mod`, `mul_mod`, `mod_inverse`) work on
//! representatives in `[0, m)` and are written so that no intermediate value
//! exceeds `m` twice over, which keeps them free of overflow for every
//! positive modulus the type can hold.

use num_traits::{PrimInt, Signed};

/// Returns the greatest common divisor of `a` and `b` using the Euclidean algorithm.
///
/// `gcd(a, 0) == a`. The sign of the result follows the remainder sequence
/// and is not normalized.
///
/// # Examples
///
/// ```rust
/// # use congruence_core::num::arith::gcd;
/// assert_eq!(gcd(12i64, 18), 6);
/// assert_eq!(gcd(7i64, 0), 7);
/// assert_eq!(gcd(0i64, 0), 0);
/// ```
#[inline]
pub fn gcd<T>(a: T, b: T) -> T
where
    T: PrimInt,
{
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let next = remainder(a, b);
        a = b;
        b = next;
    }
    a
}

/// `a % b` for non-zero `b`, with `T::MIN % -1` evaluating to 0.
#[inline]
fn remainder<T>(a: T, b: T) -> T
where
    T: PrimInt,
{
    match a.checked_div(&b) {
        Some(_) => a % b,
        None => T::zero(),
    }
}

/// Returns `(g, x, y)` such that `a * x + b * y == g`, where `g` is a gcd of `a` and `b`.
///
/// The base case `b == 0` yields `(a, 1, 0)`; otherwise the coefficients of
/// `(b, a mod b)` are back-substituted. Negative inputs are accepted and the
/// sign of `g` is left as the recursion produces it.
///
/// # Examples
///
/// ```rust
/// # use congruence_core::num::arith::extended_gcd;
/// let (g, x, y) = extended_gcd(240i64, 46);
/// assert_eq!(g, 2);
/// assert_eq!(240 * x + 46 * y, g);
/// ```
pub fn extended_gcd<T>(a: T, b: T) -> (T, T, T)
where
    T: PrimInt + Signed,
{
    if b.is_zero() {
        return (a, T::one(), T::zero());
    }
    let (g, x, y) = extended_gcd(b, remainder(a, b));
    match a.checked_div(&b) {
        Some(quotient) => (g, y, x - y * quotient),
        // `T::MIN / -1`: the recursive call was `extended_gcd(-1, 0)`, so `y == 0`.
        None => (g, y, x),
    }
}

/// Returns the representative of `a` in `[0, modulus)`.
///
/// # Panics
///
/// In debug builds, panics if `modulus` is not positive.
///
/// # Examples
///
/// ```rust
/// # use congruence_core::num::arith::normalize;
/// assert_eq!(normalize(-1i64, 5), 4);
/// assert_eq!(normalize(12i64, 5), 2);
/// ```
#[inline]
pub fn normalize<T>(a: T, modulus: T) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(
        modulus > T::zero(),
        "called `normalize` with a non-positive modulus"
    );
    let remainder = a % modulus;
    if remainder < T::zero() {
        remainder + modulus
    } else {
        remainder
    }
}

/// Returns `(a + b) mod modulus` for `a, b` in `[0, modulus)` without overflowing.
///
/// # Examples
///
/// ```rust
/// # use congruence_core::num::arith::add_mod;
/// assert_eq!(add_mod(i64::MAX - 1, i64::MAX - 1, i64::MAX), i64::MAX - 2);
/// assert_eq!(add_mod(3i64, 4, 5), 2);
/// ```
#[inline]
pub fn add_mod<T>(a: T, b: T, modulus: T) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(a >= T::zero() && a < modulus, "`add_mod` operand out of range");
    debug_assert!(b >= T::zero() && b < modulus, "`add_mod` operand out of range");

    let gap = modulus - b;
    if a >= gap { a - gap } else { a + b }
}

/// Returns `(a * b) mod modulus` without overflowing.
///
/// Both operands are normalized first. If the product fits in `T` it is
/// reduced directly; otherwise a double-and-add ladder over the bits of `b`
/// is used, which only ever adds values below `modulus`.
///
/// # Examples
///
/// ```rust
/// # use congruence_core::num::arith::mul_mod;
/// let m = 1_000_000_000_000_000_003i64;
/// let expected = ((m - 1) as i128 * (m - 2) as i128 % m as i128) as i64;
/// assert_eq!(mul_mod(m - 1, m - 2, m), expected);
/// assert_eq!(mul_mod(-2i64, 3, 7), 1);
/// ```
pub fn mul_mod<T>(a: T, b: T, modulus: T) -> T
where
    T: PrimInt + Signed,
{
    let a = normalize(a, modulus);
    let mut b = normalize(b, modulus);

    if let Some(product) = a.checked_mul(&b) {
        return product % modulus;
    }

    let mut accumulator = T::zero();
    let mut addend = a;
    while b > T::zero() {
        if (b & T::one()) == T::one() {
            accumulator = add_mod(accumulator, addend, modulus);
        }
        addend = add_mod(addend, addend, modulus);
        b = b >> 1usize;
    }
    accumulator
}

/// Returns the inverse of `a` modulo `modulus` in `[0, modulus)`, or `None`
/// if `a` and `modulus` are not coprime.
///
/// Every value is invertible modulo 1 (the inverse is 0).
///
/// # Examples
///
/// ```rust
/// # use congruence_core::num::arith::mod_inverse;
/// assert_eq!(mod_inverse(3i64, 7), Some(5));
/// assert_eq!(mod_inverse(-3i64, 7), Some(2));
/// assert_eq!(mod_inverse(4i64, 6), None);
/// ```
pub fn mod_inverse<T>(a: T, modulus: T) -> Option<T>
where
    T: PrimInt + Signed,
{
    let (g, x, _) = extended_gcd(normalize(a, modulus), modulus);
    if g != T::one() {
        return None;
    }
    Some(normalize(x, modulus))
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd::<IntegerType>(12, 18), 6);
        assert_eq!(gcd::<IntegerType>(17, 5), 1);
        assert_eq!(gcd::<IntegerType>(0, 9), 9);
        assert_eq!(gcd::<IntegerType>(9, 0), 9);
    }

    #[test]
    fn test_gcd_negative_inputs_keep_magnitude() {
        assert_eq!(gcd::<IntegerType>(-4, 6).abs(), 2);
        assert_eq!(gcd::<IntegerType>(4, -6).abs(), 2);
        assert_eq!(gcd::<IntegerType>(-12, -18).abs(), 6);
    }

    #[test]
    fn test_gcd_min_and_minus_one() {
        assert_eq!(gcd::<IntegerType>(IntegerType::MIN, -1), -1);
        assert_eq!(gcd::<IntegerType>(-1, IntegerType::MIN), -1);
        assert_eq!(gcd::<i8>(i8::MIN, -1).abs(), 1);
    }

    #[test]
    fn test_extended_gcd_min_and_minus_one() {
        let (g, x, y) = extended_gcd::<IntegerType>(IntegerType::MIN, -1);
        assert_eq!((g, x, y), (-1, 0, 1));
        assert_eq!(IntegerType::MIN * x + -y, g);

        let (g, x, y) = extended_gcd::<IntegerType>(-1, IntegerType::MIN);
        assert_eq!(g.abs(), 1);
        assert_eq!(-x + IntegerType::MIN * y, g);
    }

    #[test]
    fn test_extended_gcd_base_case() {
        assert_eq!(extended_gcd::<IntegerType>(7, 0), (7, 1, 0));
    }

    #[test]
    fn test_extended_gcd_bezout_identity_holds() {
        let cases: [(IntegerType, IntegerType); 8] = [
            (240, 46),
            (46, 240),
            (-3, 7),
            (7, -3),
            (-12, -18),
            (0, 5),
            (1, 1),
            (1_000_000_007, 998_244_353),
        ];
        for (a, b) in cases {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(a * x + b * y, g, "Bezout identity violated for ({a}, {b})");
            assert_eq!(g.abs(), gcd(a, b).abs(), "gcd mismatch for ({a}, {b})");
        }
    }

    #[test]
    fn test_normalize_negative_and_large() {
        assert_eq!(normalize::<IntegerType>(-7, 3), 2);
        assert_eq!(normalize::<IntegerType>(-6, 3), 0);
        assert_eq!(normalize::<IntegerType>(7, 3), 1);
        assert_eq!(normalize::<IntegerType>(5, 1), 0);
    }

    #[test]
    fn test_add_mod_wraps_without_overflow() {
        let m = IntegerType::MAX;
        assert_eq!(add_mod(m - 1, 1, m), 0);
        assert_eq!(add_mod(m - 1, m - 1, m), m - 2);
        assert_eq!(add_mod(0, 0, m), 0);
    }

    #[test]
    fn test_mul_mod_matches_wide_reference() {
        let moduli: [IntegerType; 4] = [
            IntegerType::MAX,
            4_611_686_018_427_387_847,
            1_000_000_000_039,
            97,
        ];
        for m in moduli {
            for (a, b) in [(m - 1, m - 1), (m / 2, m / 3), (-(m / 5), m - 7), (12345, 67890)] {
                let expected = ((a as i128).rem_euclid(m as i128) * (b as i128).rem_euclid(m as i128)
                    % m as i128) as IntegerType;
                assert_eq!(mul_mod(a, b, m), expected, "mul_mod({a}, {b}, {m})");
            }
        }
    }

    #[test]
    fn test_mul_mod_small_type() {
        // 100 * 100 overflows i8, the ladder must still produce 10000 mod 127.
        assert_eq!(mul_mod::<i8>(100, 100, 127), (10000 % 127) as i8);
    }

    #[test]
    fn test_mod_inverse_roundtrip() {
        let m: IntegerType = 1_000_000_007;
        for a in [1, 2, 3, 12345, m - 1, -5] {
            let inv = mod_inverse(a, m).expect("prime modulus admits inverses");
            assert_eq!(mul_mod(a, inv, m), 1);
            assert!((0..m).contains(&inv));
        }
    }

    #[test]
    fn test_mod_inverse_missing_when_not_coprime() {
        assert_eq!(mod_inverse::<IntegerType>(6, 9), None);
        assert_eq!(mod_inverse::<IntegerType>(0, 5), None);
    }

    #[test]
    fn test_mod_inverse_modulus_one() {
        assert_eq!(mod_inverse::<IntegerType>(0, 1), Some(0));
        assert_eq!(mod_inverse::<IntegerType>(42, 1), Some(0));
    }
}
