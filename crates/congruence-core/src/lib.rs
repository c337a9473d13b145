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

//! # Congruence Core
//!
//! Number-theoretic building blocks for the congruence solver. This crate
//! holds everything the equation reducer needs below the level of a single
//! congruence: integer arithmetic that stays inside the type's range,
//! primality testing, and a randomized factorization engine.
//!
//! ## Modules
//!
//! - `num`: The `CongruenceNumeric` bound shared by every generic routine,
//!   and the arithmetic kernel (`gcd`, `extended_gcd`, `normalize`,
//!   `add_mod`, `mul_mod`, `mod_inverse`).
//! - `math`: Trial-division primality (`is_prime`) and the worklist driven
//!   Pollard-rho factorizer (`Factorizer`, `factorize`) producing sorted
//!   `PrimeFactorization`s that can be grouped into prime powers.
//! - `stats`: Counters collected by the factorizer.
//! - `error`: The factorization error type.
//!
//! ## Randomness
//!
//! The factorizer never reaches for a global random source. Every call takes
//! an `&mut R where R: rand::Rng`, so a seeded generator reproduces the exact
//! probe sequence and concurrent callers never share generator state.

pub mod error;
pub mod math;
pub mod num;
pub mod stats;
