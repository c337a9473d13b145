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

//! Congruences and congruence systems.
//!
//! A `Congruence` is the constraint `x ≡ residue (mod modulus)` with a
//! positive modulus. Constructors that finalize an equation normalize the
//! residue into `[0, modulus)`; `new_unchecked` exists for the few places
//! that already hold a normalized value.
//!
//! A `CongruenceSystem` is an ordered list of congruences. Order carries no
//! meaning for correctness (the system is a conjunction), but the reducer
//! produces its output in a deterministic order that tests rely on.

use crate::error::InvalidInputError;
use congruence_core::num::{
    arith::{gcd, normalize},
    numeric::CongruenceNumeric,
};

/// The constraint `x ≡ residue (mod modulus)`.
///
/// # Invariants
///
/// `modulus > 0` and, for values built by `new`/`try_new`,
/// `0 <= residue < modulus`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Congruence<T> {
    residue: T,
    modulus: T,
}

impl<T> Congruence<T>
where
    T: CongruenceNumeric,
{
    /// Creates a new `Congruence`, normalizing `residue` into `[0, modulus)`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use congruence_solver::congruence::Congruence;
    /// let c = Congruence::new(-1i64, 5);
    /// assert_eq!(c.residue(), 4);
    /// assert_eq!(c.modulus(), 5);
    /// ```
    #[inline]
    pub fn new(residue: T, modulus: T) -> Self {
        assert!(
            modulus > T::zero(),
            "Invalid congruence: modulus must be positive"
        );
        Self {
            residue: normalize(residue, modulus),
            modulus,
        }
    }

    /// Creates a new `Congruence` if `modulus` is positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use congruence_solver::congruence::Congruence;
    /// assert!(Congruence::try_new(3i64, 4).is_some());
    /// assert!(Congruence::try_new(3i64, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(residue: T, modulus: T) -> Option<Self> {
        if modulus > T::zero() {
            Some(Self {
                residue: normalize(residue, modulus),
                modulus,
            })
        } else {
            None
        }
    }

    /// Creates a new `Congruence` without normalizing the residue.
    ///
    /// The caller must ensure `modulus > 0` and `0 <= residue < modulus`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(residue: T, modulus: T) -> Self {
        debug_assert!(
            modulus > T::zero() && residue >= T::zero() && residue < modulus,
            "Invalid congruence: residue must lie in [0, modulus)"
        );
        Self { residue, modulus }
    }

    /// Returns the residue.
    #[inline]
    pub fn residue(&self) -> T {
        self.residue
    }

    /// Returns the modulus.
    #[inline]
    pub fn modulus(&self) -> T {
        self.modulus
    }

    /// Returns `true` if the congruence holds for every integer (`modulus == 1`).
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.modulus == T::one()
    }

    /// Returns `true` if `x` satisfies the congruence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use congruence_solver::congruence::Congruence;
    /// let c = Congruence::new(2i64, 5);
    /// assert!(c.is_satisfied_by(12));
    /// assert!(c.is_satisfied_by(-3));
    /// assert!(!c.is_satisfied_by(3));
    /// ```
    #[inline]
    pub fn is_satisfied_by(&self, x: T) -> bool {
        normalize(x, self.modulus) == normalize(self.residue, self.modulus)
    }

    /// Returns `true` if one modulus divides the other.
    #[inline]
    pub fn is_comparable_with(&self, other: &Self) -> bool {
        (self.modulus % other.modulus).is_zero() || (other.modulus % self.modulus).is_zero()
    }

    /// Returns `true` if every solution of `self` is a solution of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use congruence_solver::congruence::Congruence;
    /// let strong = Congruence::new(3i64, 4);
    /// assert!(strong.implies(&Congruence::new(1, 2)));
    /// assert!(!strong.implies(&Congruence::new(0, 2)));
    /// assert!(!strong.implies(&Congruence::new(0, 3)));
    /// ```
    #[inline]
    pub fn implies(&self, other: &Self) -> bool {
        (self.modulus % other.modulus).is_zero()
            && normalize(self.residue, other.modulus) == normalize(other.residue, other.modulus)
    }
}

impl<T> std::fmt::Display for Congruence<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x ≡ {} (mod {})", self.residue, self.modulus)
    }
}

/// Checks that `residues` and `moduli` describe a congruence system.
///
/// # Errors
///
/// Returns `LengthMismatch` if the slices differ in length and
/// `NonPositiveModulus` for the first modulus that is not positive.
pub fn validate_parts<T>(residues: &[T], moduli: &[T]) -> Result<(), InvalidInputError>
where
    T: CongruenceNumeric,
{
    if residues.len() != moduli.len() {
        return Err(InvalidInputError::LengthMismatch {
            residues: residues.len(),
            moduli: moduli.len(),
        });
    }
    if let Some((index, modulus)) = moduli
        .iter()
        .enumerate()
        .find(|(_, m)| **m <= T::zero())
    {
        return Err(InvalidInputError::NonPositiveModulus {
            index,
            modulus: modulus.to_string(),
        });
    }
    Ok(())
}

/// An ordered conjunction of congruences.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct CongruenceSystem<T> {
    equations: Vec<Congruence<T>>,
}

impl<T> CongruenceSystem<T>
where
    T: CongruenceNumeric,
{
    /// Creates an empty system.
    #[inline]
    pub fn new() -> Self {
        Self {
            equations: Vec::new(),
        }
    }

    /// Creates an empty system with room for `capacity` equations.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            equations: Vec::with_capacity(capacity),
        }
    }

    /// Builds a system from parallel residue and modulus slices.
    ///
    /// Residues are normalized into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// See `validate_parts`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use congruence_solver::congruence::CongruenceSystem;
    /// let system = CongruenceSystem::from_parts(&[7i64, -1], &[4, 3]).unwrap();
    /// assert_eq!(system.residues(), vec![3, 2]);
    /// assert!(CongruenceSystem::from_parts(&[1i64], &[0]).is_err());
    /// ```
    pub fn from_parts(residues: &[T], moduli: &[T]) -> Result<Self, InvalidInputError> {
        validate_parts(residues, moduli)?;
        Ok(residues
            .iter()
            .zip(moduli)
            .map(|(&a, &m)| Congruence::new(a, m))
            .collect())
    }

    /// Appends an equation.
    #[inline]
    pub fn push(&mut self, equation: Congruence<T>) {
        self.equations.push(equation);
    }

    /// Returns the number of equations.
    #[inline]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Returns `true` if the system has no equations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Returns the equations as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Congruence<T>] {
        &self.equations
    }

    /// Returns an iterator over the equations.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Congruence<T>> {
        self.equations.iter()
    }

    /// Returns the residues in order.
    pub fn residues(&self) -> Vec<T> {
        self.equations.iter().map(Congruence::residue).collect()
    }

    /// Returns the moduli in order.
    pub fn moduli(&self) -> Vec<T> {
        self.equations.iter().map(Congruence::modulus).collect()
    }

    /// Splits the system into parallel residue and modulus vectors.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        self.equations
            .into_iter()
            .map(|e| (e.residue, e.modulus))
            .unzip()
    }

    /// Returns the product of all moduli, or `None` on overflow.
    #[inline]
    pub fn modulus_product(&self) -> Option<T> {
        self.equations
            .iter()
            .try_fold(T::one(), |acc, e| acc.checked_mul(&e.modulus))
    }

    /// Returns `true` if every pair of moduli has gcd 1.
    pub fn is_pairwise_coprime(&self) -> bool {
        self.equations.iter().enumerate().all(|(i, a)| {
            self.equations[i + 1..]
                .iter()
                .all(|b| gcd(a.modulus, b.modulus).abs() == T::one())
        })
    }

    /// Returns `true` if `x` satisfies every equation.
    #[inline]
    pub fn is_satisfied_by(&self, x: T) -> bool {
        self.equations.iter().all(|e| e.is_satisfied_by(x))
    }
}

impl<T> From<Vec<Congruence<T>>> for CongruenceSystem<T> {
    #[inline]
    fn from(equations: Vec<Congruence<T>>) -> Self {
        Self { equations }
    }
}

impl<T> FromIterator<Congruence<T>> for CongruenceSystem<T> {
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Congruence<T>>,
    {
        Self {
            equations: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a CongruenceSystem<T> {
    type Item = &'a Congruence<T>;
    type IntoIter = std::slice::Iter<'a, Congruence<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.equations.iter()
    }
}

impl<T> IntoIterator for CongruenceSystem<T> {
    type Item = Congruence<T>;
    type IntoIter = std::vec::IntoIter<Congruence<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.equations.into_iter()
    }
}

impl<T> std::fmt::Display for CongruenceSystem<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.equations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "}}")
    }
}

/// Two equations that cannot hold at the same time.
///
/// `first` is the equation with the larger (or equal) modulus; its residue
/// reduced modulo `second.modulus()` differs from `second.residue()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Conflict<T> {
    pub first: Congruence<T>,
    pub second: Congruence<T>,
}

impl<T> std::fmt::Display for Conflict<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} contradicts {}", self.first, self.second)
    }
}
