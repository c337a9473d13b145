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

//! # Congruence Numeric Trait
//!
//! Unified numeric bounds for everything that stores a residue or a modulus.
//! `CongruenceNumeric` collects the intrinsic integer traits from
//! `num_traits` (`PrimInt`, `Signed`), `rand`'s `SampleUniform` so that probe
//! seeds can be drawn directly in the working type, and the usual formatting
//! and hashing bounds used by monitors and logging.
//!
//! The trait is implemented automatically for every type meeting the bounds:
//! `i8`, `i16`, `i32`, `i64` and `i128`. `isize` is excluded because `rand`
//! provides no `SampleUniform` for it. Residues may be negative on input,
//! which is why unsigned types are not admitted.

use num_traits::{PrimInt, Signed};
use rand::distr::uniform::SampleUniform;
use std::hash::Hash;

/// A trait alias for integer types usable as residues and moduli.
///
/// # Note
///
/// Wider types postpone the overflow of the modulus product in the CRT
/// combination step. `i128` is admitted for that reason even though it is
/// slower than `i64` on most targets.
pub trait CongruenceNumeric:
    PrimInt
    + Signed
    + SampleUniform
    + Hash
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
}

impl<T> CongruenceNumeric for T where
    T: PrimInt
        + Signed
        + SampleUniform
        + Hash
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::CongruenceNumeric;

    fn assert_numeric<T: CongruenceNumeric>() {}

    #[test]
    fn test_signed_primitives_are_numeric() {
        assert_numeric::<i8>();
        assert_numeric::<i16>();
        assert_numeric::<i32>();
        assert_numeric::<i64>();
        assert_numeric::<i128>();
    }
}
