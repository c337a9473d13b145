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

//! # Numeric Foundations
//!
//! Generic integer arithmetic for congruence solving.
//!
//! ## Submodules
//!
//! - `numeric`: `CongruenceNumeric`, the trait alias collecting the bounds
//!   (`PrimInt`, `Signed`, `SampleUniform`, formatting, hashing, `Send + Sync`)
//!   required by the factorizer, reducer and combiner.
//! - `arith`: Euclid, extended Euclid, residue normalization and overflow-free
//!   modular addition/multiplication/inversion.
//!
//! ## Motivation
//!
//! Residues and moduli flow through several phases (splitting, comparison,
//! combination) whose intermediate values can leave `[0, m)` or exceed the
//! type's range if multiplied naively. Centralizing the arithmetic keeps each
//! phase short and makes the overflow story auditable in one place.

pub mod arith;
pub mod numeric;
