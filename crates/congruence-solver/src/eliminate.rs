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
    congruence::Congruence,
    error::{CongruenceError, InvalidInputError},
    result::EliminationResult,
};
use congruence_core::num::{
    arith::{extended_gcd, mod_inverse, mul_mod, normalize},
    numeric::CongruenceNumeric,
};

/// Rewrites `c·x ≡ a (mod m)` as an equivalent `x ≡ a' (mod m')`.
///
/// With `g = gcd(c, m)`, the equation is solvable exactly when `g` divides
/// `a`. In that case `c`, `a` and `m` are divided by `g`, `c/g` becomes
/// invertible modulo `m' = m/g`, and `a' = (a/g)·(c/g)⁻¹ mod m'`.
///
/// # Errors
///
/// Returns `InvalidInput(NonPositiveModulus)` if `m <= 0`.
///
/// # Examples
///
/// ```rust
/// # use congruence_solver::{eliminate::eliminate_coefficient, congruence::Congruence};
/// # use congruence_solver::result::EliminationResult;
/// // 3x ≡ 6 (mod 12)  ⇔  x ≡ 2 (mod 4)
/// assert_eq!(
///     eliminate_coefficient(3i64, 6, 12).unwrap(),
///     EliminationResult::Eliminated(Congruence::new(2, 4))
/// );
/// // 2x ≡ 3 (mod 4) has no solution.
/// assert_eq!(
///     eliminate_coefficient(2i64, 3, 4).unwrap(),
///     EliminationResult::Unsatisfiable { gcd: 2 }
/// );
/// ```
pub fn eliminate_coefficient<T>(
    coefficient: T,
    residue: T,
    modulus: T,
) -> Result<EliminationResult<T>, CongruenceError>
where
    T: CongruenceNumeric,
{
    if modulus <= T::zero() {
        return Err(InvalidInputError::NonPositiveModulus {
            index: 0,
            modulus: modulus.to_string(),
        }
        .into());
    }

    let g = extended_gcd(coefficient, modulus).0.abs();
    if !(residue % g).is_zero() {
        return Ok(EliminationResult::Unsatisfiable { gcd: g });
    }

    let reduced_modulus = modulus / g;
    let reduced_coefficient = normalize(coefficient / g, reduced_modulus);
    let reduced_residue = normalize(residue / g, reduced_modulus);

    match mod_inverse(reduced_coefficient, reduced_modulus) {
        Some(inverse) => Ok(EliminationResult::Eliminated(Congruence::new_unchecked(
            mul_mod(reduced_residue, inverse, reduced_modulus),
            reduced_modulus,
        ))),
        None => Ok(EliminationResult::Unsatisfiable { gcd: g }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn eliminated(c: IntegerType, a: IntegerType, m: IntegerType) -> (IntegerType, IntegerType) {
        match eliminate_coefficient(c, a, m).unwrap() {
            EliminationResult::Eliminated(congruence) => {
                (congruence.residue(), congruence.modulus())
            }
            other => panic!("expected an eliminated congruence, got {other}"),
        }
    }

    #[test]
    fn test_eliminate_divides_out_gcd() {
        assert_eq!(eliminated(3, 6, 12), (2, 4));
        assert_eq!(eliminated(4, 2, 6), (2, 3));
    }

    #[test]
    fn test_eliminate_unit_coefficient() {
        assert_eq!(eliminated(1, 5, 7), (5, 7));
        assert_eq!(eliminated(1, -2, 7), (5, 7));
        assert_eq!(eliminated(3, 1, 7), (5, 7));
    }

    #[test]
    fn test_eliminate_negative_coefficient() {
        assert_eq!(eliminated(-3, 6, 12), (2, 4));
        assert_eq!(eliminated(-1, 1, 5), (4, 5));
    }

    #[test]
    fn test_eliminate_unsatisfiable() {
        assert_eq!(
            eliminate_coefficient(2, 3, 4).unwrap(),
            EliminationResult::Unsatisfiable { gcd: 2 }
        );
        assert_eq!(
            eliminate_coefficient(6, 4, 9).unwrap(),
            EliminationResult::Unsatisfiable { gcd: 3 }
        );
    }

    #[test]
    fn test_eliminate_zero_coefficient() {
        // 0·x ≡ 0 (mod m) holds for every x.
        assert_eq!(eliminated(0, 0, 6), (0, 1));
        assert_eq!(eliminated(0, 12, 6), (0, 1));
        assert_eq!(
            eliminate_coefficient(0, 1, 6).unwrap(),
            EliminationResult::Unsatisfiable { gcd: 6 }
        );
    }

    #[test]
    fn test_eliminate_solution_satisfies_equation() {
        for m in 1..40 {
            for c in -10..10 {
                for a in -5..15 {
                    if let EliminationResult::Eliminated(e) = eliminate_coefficient(c, a, m).unwrap()
                    {
                        let x = e.residue();
                        assert_eq!(normalize(c * x, m), normalize(a, m), "{c}x ≡ {a} (mod {m})");
                    } else {
                        assert!((0..m).all(|x| normalize(c * x, m) != normalize(a, m)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_eliminate_rejects_non_positive_modulus() {
        assert!(eliminate_coefficient(1, 1, 0).unwrap_err().is_invalid_input());
        assert!(eliminate_coefficient(1, 1, -4).unwrap_err().is_invalid_input());
    }
}
