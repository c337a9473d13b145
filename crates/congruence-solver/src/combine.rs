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

//! # Chinese Remainder Combination
//!
//! Combines a system with pairwise coprime moduli into the single class
//! `x ≡ A (mod M)`, where `M` is the product of the moduli.
//!
//! For each equation the cofactor `Mᵢ = M / mᵢ` is inverted modulo `mᵢ`, and
//! `A = Σ Mᵢ · (aᵢ · Mᵢ⁻¹ mod mᵢ) mod M`. Every term is below `M` and sums are
//! taken with `add_mod`, so once `M` itself fits in `T` no intermediate value
//! overflows. `M` is computed with checked multiplication and an overflowing
//! product is reported as `CongruenceError::Overflow`.

use crate::{
    congruence::{Congruence, CongruenceSystem},
    error::{CongruenceError, InvalidInputError},
};
use congruence_core::num::{
    arith::{add_mod, gcd, mod_inverse, mul_mod},
    numeric::CongruenceNumeric,
};

/// Solves `x ≡ residues[i] (mod moduli[i])` for pairwise coprime moduli.
///
/// The empty system yields `x ≡ 0 (mod 1)`.
///
/// # Errors
///
/// - `InvalidInput(LengthMismatch | NonPositiveModulus)` for malformed input.
/// - `InvalidInput(NotCoprime)` if two moduli share a factor; reduce the
///   system with `crate::reduce` first.
/// - `Overflow` if the product of the moduli does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use congruence_solver::combine::crt;
/// let solution = crt(&[3i64, 4, 2], &[4, 5, 3]).unwrap();
/// assert_eq!((solution.residue(), solution.modulus()), (59, 60));
/// ```
pub fn crt<T>(residues: &[T], moduli: &[T]) -> Result<Congruence<T>, CongruenceError>
where
    T: CongruenceNumeric,
{
    let system = CongruenceSystem::from_parts(residues, moduli)?;
    combine(&system)
}

/// Combines a system with pairwise coprime moduli into one congruence.
///
/// # Errors
///
/// See `crt`.
pub fn combine<T>(system: &CongruenceSystem<T>) -> Result<Congruence<T>, CongruenceError>
where
    T: CongruenceNumeric,
{
    let product = system
        .modulus_product()
        .ok_or(CongruenceError::Overflow)?;

    let equations = system.as_slice();
    let mut solution = T::zero();
    for (i, equation) in equations.iter().enumerate() {
        let modulus = equation.modulus();
        let cofactor = product / modulus;
        let inverse = match mod_inverse(cofactor % modulus, modulus) {
            Some(inverse) => inverse,
            None => return Err(not_coprime(equations, i).into()),
        };
        let term = cofactor * mul_mod(equation.residue(), inverse, modulus);
        solution = add_mod(solution, term, product);
    }

    tracing::trace!(%solution, %product, equations = equations.len(), "combined");
    Ok(Congruence::new_unchecked(solution, product))
}

/// Finds an equation sharing a factor with equation `i`.
fn not_coprime<T>(equations: &[Congruence<T>], i: usize) -> InvalidInputError
where
    T: CongruenceNumeric,
{
    let modulus = equations[i].modulus();
    let partner = equations
        .iter()
        .enumerate()
        .find(|(j, other)| *j != i && gcd(modulus, other.modulus()).abs() != T::one())
        .map_or(i, |(j, _)| j);
    InvalidInputError::NotCoprime {
        first: i.min(partner),
        second: i.max(partner),
    }
}
