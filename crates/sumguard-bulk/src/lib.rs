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

//! # Sumguard Bulk
//!
//! Element-wise evaluation of the `sumguard-core` predicates and safe sum
//! over whole sequences. Every output element depends only on the input
//! element(s) at the same index, so the work is split across threads freely
//! while results are always written back to the slot of their source index.
//!
//! ## Modules
//!
//! - `vector`: Free functions for the pairwise (`&[T]`, `&[T]`) and broadcast
//!   (`&[T]`, `T` / `T`, `&[T]`) forms, evaluated with the default
//!   configuration.
//! - `evaluator`: `BulkEvaluator`, the configurable engine behind the free
//!   functions.
//! - `config`: `BulkConfig` and `ExecutionStrategy` (sequential, rayon work
//!   stealing, or phased chunks on a fixed pool).
//! - `harness`: `PhasedPool`, a fixed worker pool running
//!   initialize → work → cleanup phases with a barrier between phases.
//! - `error`: `BulkError`, including the length-mismatch precondition failure.
//!
//! ## Usage
//!
//! ```rust
//! use sumguard_bulk::vector::{would_underflow_pairwise, would_underflow_scalar_rhs};
//!
//! let lhs = [i32::MIN, -5, 10];
//! let rhs = [-1, -5, i32::MIN];
//! assert_eq!(would_underflow_pairwise(&lhs, &rhs).unwrap(), vec![true, false, false]);
//! assert_eq!(would_underflow_scalar_rhs(&lhs, -1), vec![true, false, false]);
//! assert!(would_underflow_pairwise(&lhs, &rhs[..2]).is_err());
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod harness;
pub mod vector;
