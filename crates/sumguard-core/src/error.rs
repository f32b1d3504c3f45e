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

//! Error types for the fallible operations of this crate.
//!
//! The predicates themselves are total and never fail; errors only appear
//! where a caller asks for a value to be produced (`try_safe_add`) or
//! validated (`RangedInt::try_new`).

use thiserror::Error;

/// The reason `try_safe_add` refused to add a pair of operands.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AdditionError<T> {
    /// At least one operand is an infinity or NaN.
    #[error("cannot add {lhs:?} and {rhs:?}: an operand is infinite or NaN")]
    SpecialOperand { lhs: T, rhs: T },

    /// The sum would exceed the largest representable value.
    #[error("adding {lhs:?} and {rhs:?} would overflow")]
    Overflow { lhs: T, rhs: T },

    /// The sum would fall below the smallest representable value.
    #[error("adding {lhs:?} and {rhs:?} would underflow")]
    Underflow { lhs: T, rhs: T },
}

impl<T: Copy> AdditionError<T> {
    /// Returns the operands of the refused addition as `(lhs, rhs)`.
    #[inline]
    pub fn operands(&self) -> (T, T) {
        match *self {
            Self::SpecialOperand { lhs, rhs }
            | Self::Overflow { lhs, rhs }
            | Self::Underflow { lhs, rhs } => (lhs, rhs),
        }
    }
}

/// Errors produced while constructing or updating a `RangedInt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RangeError<T> {
    /// The lower bound is greater than the upper bound.
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: T, max: T },

    /// The value does not lie within `[min, max]`.
    #[error("value {value} is outside of [{min}, {max}]")]
    OutOfRange { value: T, min: T, max: T },

    /// The arithmetic overflowed the underlying integer type before the
    /// range could even be checked.
    #[error("{lhs} combined with {rhs} overflows the underlying integer type")]
    Overflow { lhs: T, rhs: T },
}
