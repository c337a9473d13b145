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

use congruence_core::error::FactorizationError;

/// A malformed call: the arguments do not describe a congruence system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// The residue and modulus sequences differ in length.
    #[error("{residues} residues were given for {moduli} moduli")]
    LengthMismatch { residues: usize, moduli: usize },
    /// The coefficient and residue sequences differ in length.
    #[error("{coefficients} coefficients were given for {residues} residues")]
    CoefficientLengthMismatch { coefficients: usize, residues: usize },
    /// A modulus is zero or negative.
    #[error("modulus at index {index} must be positive, got {modulus}")]
    NonPositiveModulus { index: usize, modulus: String },
    /// Two moduli passed to the CRT combiner share a factor.
    #[error("moduli at indices {first} and {second} are not coprime")]
    NotCoprime { first: usize, second: usize },
}

/// The error type of the congruence solver.
///
/// An unsatisfiable system is not an error; it is reported through the
/// `Unsatisfiable` variants of the result enums in `crate::result`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CongruenceError {
    /// The call was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
    /// The product of the moduli does not fit in the integer type.
    #[error("the product of the moduli overflows the integer type")]
    Overflow,
    /// A modulus could not be factorized.
    #[error(transparent)]
    Factorization(#[from] FactorizationError),
}

impl CongruenceError {
    /// Returns `true` if this error reports a malformed call.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Factorization(_))
    }
}
