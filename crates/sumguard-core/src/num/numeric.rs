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

//! # Guard Numeric Trait
//!
//! Unified numeric bounds for the safe-addition predicates. `GuardNumeric`
//! collects the intrinsic capabilities the predicates rely on (`Signed` for
//! zero, sign tests and subtraction; `PartialOrd` for the bound comparisons)
//! together with this crate's `Extrema` and `Classify` traits.
//!
//! It is implemented automatically for every type satisfying the bounds,
//! which in practice means `i8`, `i16`, `i32`, `i64`, `i128`, `isize`, `f32`
//! and `f64`. Unsigned types are excluded: they cannot be `Signed`, and an
//! unsigned addition can never underflow in the sense used here.

use crate::num::{classify::Classify, constants::Extrema};
use num_traits::Signed;

/// A trait alias for numeric types accepted by the overflow and underflow
/// predicates.
///
/// `Send + Sync` are required so that bulk evaluators can share operand
/// slices across worker threads.
pub trait GuardNumeric:
    Signed + Copy + PartialOrd + Extrema + Classify + std::fmt::Debug + Send + Sync
{
}

impl<T> GuardNumeric for T where
    T: Signed + Copy + PartialOrd + Extrema + Classify + std::fmt::Debug + Send + Sync
{
}
