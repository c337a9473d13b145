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

//! Monitoring utilities for the equation reducer
//!
//! Defines the `ReductionMonitor` trait plus lightweight implementations to
//! observe the reducer without touching its logic. Monitors only watch; they
//! never change what a reduction returns.
//!
//! Components
//! - `reduction_monitor`: the monitoring interface.
//! - `composite`: fan-out monitor, dispatching in insertion order.
//! - `log`: reports every callback as a `tracing` event.
//! - `coverage`: records which decisions fired and reports branch coverage.
//! - `no_op`: zero-overhead placeholder.
//!
//! Notes
//! - Callbacks take `&mut self`; keep handlers fast and non-blocking.
//! - `&mut M` is itself a monitor, so a caller can lend a monitor to a run
//!   and inspect it afterwards.

pub mod composite;
pub mod coverage;
pub mod log;
pub mod no_op;
pub mod reduction_monitor;
