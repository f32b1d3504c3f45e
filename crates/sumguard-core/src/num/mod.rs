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
//! Traits describing the numeric types the safe-addition engine operates on.
//! This module consolidates compile-time extrema, special-value
//! classification, and the `GuardNumeric` bundle that generic code bounds on.
//!
//! ## Submodules
//!
//! - `constants`: The `Extrema` trait exposing `MAX`, `MIN` and `NEG_MAX`
//!   as associated constants for every signed primitive. For floating-point
//!   types these are the finite extrema, never the infinities.
//! - `classify`: The `Classify` trait and `ValueClass` enum, sorting a value
//!   into positive infinity, negative infinity, NaN or ordinary, together
//!   with single- and two-operand free-function forms.
//! - `numeric`: `GuardNumeric`, a trait alias combining the `num_traits`
//!   fundamentals with the two traits above.
//!
//! Integer types implement `Classify` as well; they simply never classify as
//! anything but `ValueClass::Ordinary`, which keeps the predicates generic
//! without separate integer and float code paths.

pub mod classify;
pub mod constants;
pub mod numeric;
