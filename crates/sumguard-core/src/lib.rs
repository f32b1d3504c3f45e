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

//! # Sumguard Core
//!
//! Scalar building blocks for deciding, before an addition is performed,
//! whether its result would still be a faithful finite value. Everything in
//! this crate is a pure function of its inputs, generic over the fixed-width
//! signed primitives (`i8` through `i128`, `isize`, `f32`, `f64`).
//!
//! ## Modules
//!
//! - `num`: The `GuardNumeric` trait bundle, representable extrema
//!   (`Extrema`), and the special-value classifier (`Classify`, `ValueClass`).
//! - `ops`: The overflow and underflow predicates, the safe-sum evaluator with
//!   its explicit infinity/NaN rules, and `try_safe_add`, which combines the
//!   three into a single fallible call.
//! - `bounded`: `RangedInt<T>`, an integer carrying its own inclusive bounds
//!   and validating every construction and arithmetic step against them.
//! - `error`: Error types returned by the fallible operations above.
//!
//! ## Usage
//!
//! ```rust
//! use sumguard_core::ops::{overflow::would_overflow, underflow::would_underflow, sum::safe_add};
//!
//! let (a, b) = (1_000_i32, 2_000_i32);
//! if !would_overflow(a, b) && !would_underflow(a, b) {
//!     assert_eq!(safe_add(a, b), 3_000);
//! }
//!
//! assert!(would_overflow(i32::MAX, 1));
//! assert!(would_underflow(f64::NAN, 1.0));
//! ```

pub mod bounded;
pub mod error;
pub mod num;
pub mod ops;
