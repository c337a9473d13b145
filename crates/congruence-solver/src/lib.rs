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

//! # Congruence Solver
//!
//! Solves systems of simultaneous linear congruences
//! `x ≡ a₀ (mod m₀), …, x ≡ aₙ₋₁ (mod mₙ₋₁)` whose moduli need not be
//! pairwise coprime, and reports the unique solution class `x ≡ A (mod M)` or
//! proves that none exists.
//!
//! ## Core flow
//!
//! - Optionally remove leading coefficients with `eliminate`.
//! - Reduce the system to pairwise coprime prime-power moduli with
//!   `reduce::Reducer` (this is where the moduli are factorized).
//! - Combine the reduced system with the Chinese remainder theorem in
//!   `combine`.
//! - Or run all of it through `solver::CongruenceSolver`.
//!
//! ## Design highlights
//!
//! - Unsatisfiable systems are normal outcomes (`Unsatisfiable` variants in
//!   `result`); `error::CongruenceError` is reserved for malformed input and
//!   overflow of the modulus product.
//! - The random source used by the factorizer and the monitor observing the
//!   reducer are injected per call. A seeded generator makes a run fully
//!   reproducible; `monitor::no_op::NoOperationMonitor` costs nothing.
//! - Every routine is generic over `congruence_core::num::numeric::CongruenceNumeric`;
//!   use `i128` when the lcm of the moduli may exceed `i64`.
//!
//! ## Module map
//!
//! - `congruence`: `Congruence`, `CongruenceSystem` and `Conflict`.
//! - `reduce`: the equation reducer.
//! - `eliminate`: the coefficient eliminator.
//! - `combine`: the CRT combiner.
//! - `solver`: the end-to-end pipeline.
//! - `decision`: identifiers of the reducer's branches.
//! - `monitor`: reducer monitors (no-op, composite, log, coverage).
//! - `result`: outcomes carrying results and statistics.
//! - `stats`: counters and timing.
//! - `error`: the error type.

pub mod combine;
pub mod congruence;
pub mod decision;
pub mod eliminate;
pub mod error;
pub mod monitor;
pub mod reduce;
pub mod result;
pub mod solver;
pub mod stats;
