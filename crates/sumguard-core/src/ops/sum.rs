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

//! # Safe-Sum Evaluator
//!
//! Computes `lhs + rhs` with explicit rules for infinite and NaN operands.
//! The rules form a small state machine over the classes of the two inputs:
//!
//! | Operands                          | Outcome                 |
//! |-----------------------------------|-------------------------|
//! | both infinite, same sign          | that infinity           |
//! | both infinite, opposite signs     | indeterminate (NaN)     |
//! | one infinite, the other finite    | indeterminate (NaN)     |
//! | any NaN                           | indeterminate (NaN)     |
//! | both finite                       | `finite_add(lhs, rhs)`  |
//!
//! A finite operand added to an infinity deliberately yields NaN rather than
//! the infinity IEEE-754 would produce. Callers that want IEEE propagation
//! must special-case it before calling `safe_add`.
//!
//! Finite sums are total: integers wrap around at their bounds and floats
//! round past the range to an infinity.
//!
//! The evaluator does not re-check the finite bounds. Run `would_overflow`
//! and `would_underflow` first, or use `try_safe_add` which does both.

use crate::num::{
    classify::{Classify, ValueClass},
    numeric::GuardNumeric,
};

/// The terminal state of the safe-sum state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SumOutcome<T> {
    /// Both operands were ordinary; carries `SafeAdd::finite_add` of them.
    ///
    /// The name describes the operands, not the result: a float sum past
    /// the finite range rounds to an infinity, and an integer sum past the
    /// range wraps around.
    Finite(T),
    /// Both operands were the same infinity; carries that infinity.
    SignedInfinity(T),
    /// The sum has no meaningful value (NaN).
    Indeterminate,
}

impl<T> SumOutcome<T> {
    /// Returns the carried value, or `None` for `Indeterminate`.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Finite(v) | Self::SignedInfinity(v) => Some(v),
            Self::Indeterminate => None,
        }
    }

    /// Returns `true` if the outcome is `Indeterminate`.
    #[inline]
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

/// Runs the safe-sum state machine on `lhs` and `rhs`.
///
/// # Examples
///
/// ```rust
/// # use sumguard_core::ops::sum::{sum_outcome, SumOutcome};
/// assert_eq!(sum_outcome(2.0, 3.0), SumOutcome::Finite(5.0));
/// assert_eq!(
///     sum_outcome(f64::NEG_INFINITY, f64::NEG_INFINITY),
///     SumOutcome::SignedInfinity(f64::NEG_INFINITY)
/// );
/// assert!(sum_outcome(f64::INFINITY, 5.0).is_indeterminate());
/// ```
pub fn sum_outcome<T>(lhs: T, rhs: T) -> SumOutcome<T>
where
    T: SafeAdd,
{
    let (lc, rc) = (lhs.value_class(), rhs.value_class());
    match (lc, rc) {
        (ValueClass::PositiveInfinite, ValueClass::PositiveInfinite)
        | (ValueClass::NegativeInfinite, ValueClass::NegativeInfinite) => {
            SumOutcome::SignedInfinity(lhs)
        }
        (ValueClass::PositiveInfinite, ValueClass::NegativeInfinite)
        | (ValueClass::NegativeInfinite, ValueClass::PositiveInfinite) => SumOutcome::Indeterminate,
        (ValueClass::NaN, _) | (_, ValueClass::NaN) => SumOutcome::Indeterminate,
        (l, r) if l.is_infinite() || r.is_infinite() => SumOutcome::Indeterminate,
        _ => SumOutcome::Finite(lhs.finite_add(rhs)),
    }
}

/// A trait for numeric types that support the safe-sum evaluator by value.
///
/// Both methods are total: they never panic, in any build profile.
/// Floating-point implementations map `SumOutcome::Indeterminate` to NaN.
/// Integer types have no special values, so their safe sum is the
/// wrapping sum.
pub trait SafeAdd: GuardNumeric {
    /// Adds two ordinary operands without any bound check.
    ///
    /// Integers wrap around at the type's bounds; floats round to the
    /// nearest representable value, which may be an infinity.
    fn finite_add(self, rhs: Self) -> Self;

    /// Adds `rhs` to `self` following the safe-sum rules.
    fn safe_add(self, rhs: Self) -> Self;
}

macro_rules! safe_add_impl_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl SafeAdd for $t {
                #[inline(always)]
                fn finite_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn safe_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }
        )*
    };
}

macro_rules! safe_add_impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl SafeAdd for $t {
                #[inline(always)]
                fn finite_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn safe_add(self, rhs: Self) -> Self {
                    sum_outcome(self, rhs).value().unwrap_or(<$t>::NAN)
                }
            }
        )*
    };
}

safe_add_impl_int!(i8, i16, i32, i64, i128, isize);
safe_add_impl_float!(f32, f64);

/// Adds `lhs` and `rhs` following the safe-sum rules.
///
/// # Examples
///
/// ```rust
/// # use sumguard_core::ops::sum::safe_add;
/// assert_eq!(safe_add(2.0, 3.0), 5.0);
/// assert_eq!(safe_add(f64::INFINITY, f64::INFINITY), f64::INFINITY);
/// assert!(safe_add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
/// assert!(safe_add(f64::INFINITY, 5.0).is_nan());
/// assert_eq!(safe_add(40_i32, 2), 42);
/// assert_eq!(safe_add(i32::MAX, 1), i32::MIN);
/// ```
#[inline]
pub fn safe_add<T>(lhs: T, rhs: T) -> T
where
    T: SafeAdd,
{
    lhs.safe_add(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_signed_infinities() {
        assert_eq!(safe_add(f64::INFINITY, f64::INFINITY), f64::INFINITY);
        assert_eq!(
            safe_add(f32::NEG_INFINITY, f32::NEG_INFINITY),
            f32::NEG_INFINITY
        );
    }

    #[test]
    fn test_opposite_infinities_are_nan() {
        assert!(safe_add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
        assert!(safe_add(f64::NEG_INFINITY, f64::INFINITY).is_nan());
    }

    #[test]
    fn test_infinity_with_finite_is_nan() {
        assert!(safe_add(f64::INFINITY, 5.0).is_nan());
        assert!(safe_add(5.0, f64::INFINITY).is_nan());
        assert!(safe_add(f32::NEG_INFINITY, 0.0).is_nan());
        assert!(safe_add(-1.0e10_f64, f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_nan_absorbs_everything() {
        let others = [0.0, 1.0, -1.0, f64::MAX, f64::INFINITY, f64::NEG_INFINITY, f64::NAN];
        for o in others {
            assert!(safe_add(f64::NAN, o).is_nan());
            assert!(safe_add(o, f64::NAN).is_nan());
        }
    }

    #[test]
    fn test_finite_sums() {
        assert_eq!(safe_add(2.0, 3.0), 5.0);
        assert_eq!(safe_add(-2.5_f32, 0.5), -2.0);
        assert_eq!(safe_add(i64::MAX - 1, 1), i64::MAX);
        assert_eq!(safe_add(i8::MIN, 0), i8::MIN);
    }

    #[test]
    fn test_integer_sum_is_total() {
        assert_eq!(safe_add(i32::MAX, 1), i32::MIN);
        assert_eq!(safe_add(i32::MIN, -1), i32::MAX);
        assert_eq!(safe_add(i8::MAX, i8::MAX), -2);
        assert_eq!(safe_add(i128::MIN, i128::MIN), 0);
        assert_eq!(sum_outcome(i64::MAX, 1), SumOutcome::Finite(i64::MIN));
    }

    #[test]
    fn test_float_sum_past_range_rounds_to_infinity() {
        assert_eq!(sum_outcome(f64::MAX, f64::MAX), SumOutcome::Finite(f64::INFINITY));
        assert_eq!(safe_add(f64::MAX, f64::MAX), f64::INFINITY);
        assert_eq!(safe_add(f32::MIN, f32::MIN), f32::NEG_INFINITY);
        // Absorbed by rounding, not pushed past the range.
        assert_eq!(safe_add(f64::MAX, 1.0), f64::MAX);
    }

    #[test]
    fn test_outcome_states() {
        assert_eq!(sum_outcome(1_i32, 2), SumOutcome::Finite(3));
        assert_eq!(
            sum_outcome(f64::INFINITY, f64::INFINITY),
            SumOutcome::SignedInfinity(f64::INFINITY)
        );
        assert_eq!(
            sum_outcome(f64::INFINITY, f64::NEG_INFINITY),
            SumOutcome::Indeterminate
        );
        assert_eq!(sum_outcome(f64::INFINITY, f64::NAN), SumOutcome::Indeterminate);
        assert_eq!(sum_outcome(1.0, f64::NAN), SumOutcome::Indeterminate);
    }

    #[test]
    fn test_outcome_value() {
        assert_eq!(SumOutcome::Finite(3).value(), Some(3));
        assert_eq!(SumOutcome::SignedInfinity(f32::INFINITY).value(), Some(f32::INFINITY));
        assert_eq!(SumOutcome::<i32>::Indeterminate.value(), None);
    }
}
