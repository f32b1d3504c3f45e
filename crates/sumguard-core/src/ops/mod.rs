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

//! # Safe Addition Operations
//!
//! Predicates and evaluators deciding whether, and how, two operands of the
//! same signed numeric type can be added.
//!
//! ## Submodules
//!
//! - `overflow`: `would_overflow`, `true` when the sum would exceed the
//!   positive bound or an operand is not ordinary.
//! - `underflow`: `would_underflow`, `true` when the sum would fall below the
//!   negative bound or an operand is not ordinary.
//! - `sum`: `safe_add` and the `SumOutcome` state machine resolving sums of
//!   infinities and NaN.
//! - `checked`: `try_safe_add`, which runs both predicates and only then the
//!   evaluator, reporting a typed `AdditionError` on refusal.
//!
//! ## Contract
//!
//! The predicates never compute `lhs + rhs` themselves. They compare one
//! operand against the distance between the bound and the other operand,
//! which is always representable once the sign of that operand is known.
//! A `true` result means "do not add"; only when both predicates return
//! `false` is the sum guaranteed to be a faithful finite value.

pub mod checked;
pub mod overflow;
pub mod sum;
pub mod underflow;
