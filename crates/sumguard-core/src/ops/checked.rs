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

use crate::{
    error::AdditionError,
    num::classify::any_special,
    ops::{overflow::would_overflow, sum::SafeAdd, underflow::would_underflow},
};

/// Adds `lhs` and `rhs` only if the sum is guaranteed to be a faithful
/// finite value.
///
/// Runs the special-value check, then `would_underflow`, then
/// `would_overflow`, and reports the first reason for refusal. Underflow is
/// tested before overflow because the overflow predicate also rejects
/// negative pairs summing below `-MAX`, which would otherwise mask every
/// genuine underflow. Unlike
/// `safe_add` this never returns NaN and never panics, not even for
/// integer types in debug builds.
///
/// # Examples
///
/// ```rust
/// # use sumguard_core::{error::AdditionError, ops::checked::try_safe_add};
/// assert_eq!(try_safe_add(2_i32, 3), Ok(5));
/// assert_eq!(
///     try_safe_add(i32::MAX, 1),
///     Err(AdditionError::Overflow { lhs: i32::MAX, rhs: 1 })
/// );
/// assert!(matches!(
///     try_safe_add(f64::NAN, 1.0),
///     Err(AdditionError::SpecialOperand { .. })
/// ));
/// ```
pub fn try_safe_add<T>(lhs: T, rhs: T) -> Result<T, AdditionError<T>>
where
    T: SafeAdd,
{
    if any_special(lhs, rhs) {
        return Err(AdditionError::SpecialOperand { lhs, rhs });
    }
    if would_underflow(lhs, rhs) {
        return Err(AdditionError::Underflow { lhs, rhs });
    }
    if would_overflow(lhs, rhs) {
        return Err(AdditionError::Overflow { lhs, rhs });
    }
    Ok(lhs.safe_add(rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_accepts_safe_pairs() {
        assert_eq!(try_safe_add(10_i8, 20), Ok(30));
        assert_eq!(try_safe_add(-10_i8, -20), Ok(-30));
        assert_eq!(try_safe_add(i8::MAX, i8::MIN), Ok(-1));
        assert_eq!(try_safe_add(2.0_f64, 3.0), Ok(5.0));
    }

    #[test]
    fn test_reports_special_operands_first() {
        // Special operands are also caught by both predicates; the more
        // precise reason wins.
        assert_eq!(
            try_safe_add(f64::INFINITY, f64::INFINITY),
            Err(AdditionError::SpecialOperand {
                lhs: f64::INFINITY,
                rhs: f64::INFINITY
            })
        );
        assert!(matches!(
            try_safe_add(1.0_f32, f32::NEG_INFINITY),
            Err(AdditionError::SpecialOperand { .. })
        ));
    }

    #[test]
    fn test_reports_overflow() {
        assert_eq!(
            try_safe_add(i16::MAX, 1),
            Err(AdditionError::Overflow {
                lhs: i16::MAX,
                rhs: 1
            })
        );
        assert!(matches!(
            try_safe_add(f64::MAX, f64::MAX),
            Err(AdditionError::Overflow { .. })
        ));
    }

    #[test]
    fn test_reports_underflow() {
        assert_eq!(
            try_safe_add(i32::MIN, -1),
            Err(AdditionError::Underflow {
                lhs: i32::MIN,
                rhs: -1
            })
        );
        assert!(matches!(
            try_safe_add(f64::MIN, f64::MIN),
            Err(AdditionError::Underflow { .. })
        ));
    }

    #[test]
    fn test_negative_mirror_is_reported_as_overflow() {
        // -127 + -1 is representable but lies below -MAX.
        assert_eq!(
            try_safe_add(i8::MIN + 1, -1),
            Err(AdditionError::Overflow {
                lhs: i8::MIN + 1,
                rhs: -1
            })
        );
    }

    #[test]
    fn test_never_panics_on_random_integers() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..10_000 {
            let a: i64 = rng.random();
            let b: i64 = rng.random();
            match try_safe_add(a, b) {
                Ok(sum) => assert_eq!(Some(sum), a.checked_add(b)),
                Err(e) => assert_eq!(e.operands(), (a, b)),
            }
        }
    }
}
