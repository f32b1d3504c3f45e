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

use crate::num::{classify::any_special, numeric::GuardNumeric};

/// Returns `true` if `lhs + rhs` must not be computed because it would
/// exceed the positive bound of `T`, or because an operand is not ordinary.
///
/// Decision order:
/// 1. An infinite or NaN operand is always unsafe.
/// 2. Two strictly positive operands overflow when `lhs > MAX - rhs`.
/// 3. Two strictly negative operands are rejected when `lhs < NEG_MAX - rhs`,
///    the mirror image of (2) using `-MAX` as the negative ceiling.
///
/// Operands of opposite sign, or involving zero, can never overflow.
///
/// # Examples
///
/// ```rust
/// # use sumguard_core::ops::overflow::would_overflow;
/// assert!(would_overflow(i32::MAX, 1));
/// assert!(!would_overflow(i32::MAX, 0));
/// assert!(!would_overflow(i32::MAX, i32::MIN));
/// assert!(would_overflow(f64::MAX, f64::MAX));
/// assert!(would_overflow(f64::INFINITY, -1.0));
/// ```
#[inline]
pub fn would_overflow<T>(lhs: T, rhs: T) -> bool
where
    T: GuardNumeric,
{
    if any_special(lhs, rhs) {
        return true;
    }

    let zero = T::zero();
    if lhs > zero && rhs > zero {
        // `MAX - rhs` cannot overflow since `rhs` is positive.
        return lhs > T::MAX - rhs;
    }
    if lhs < zero && rhs < zero {
        // `NEG_MAX - rhs` cannot overflow since `rhs` is negative.
        return lhs < T::NEG_MAX - rhs;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::would_overflow;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_canonical_boundary() {
        assert!(would_overflow(i8::MAX, 1));
        assert!(would_overflow(1, i8::MAX));
        assert!(would_overflow(i32::MAX, 1));
        assert!(would_overflow(i64::MAX, 1));
        assert!(would_overflow(i128::MAX, 1));
        assert!(would_overflow(isize::MAX, 1));
    }

    #[test]
    fn test_just_below_boundary() {
        assert!(!would_overflow(i32::MAX - 1, 1));
        assert!(!would_overflow(i32::MAX, 0));
        assert!(!would_overflow(0, i32::MAX));
        assert!(!would_overflow(i16::MAX / 2, i16::MAX / 2 + 1));
    }

    #[test]
    fn test_mixed_signs_never_overflow() {
        assert!(!would_overflow(i64::MAX, -1));
        assert!(!would_overflow(i64::MIN, i64::MAX));
        assert!(!would_overflow(-1.0, f64::MAX));
    }

    #[test]
    fn test_negative_mirror_uses_negated_max() {
        // -127 + -1 = -128 is representable, but lies beyond -MAX.
        assert!(would_overflow(i8::MIN + 1, -1));
        assert!(would_overflow(i8::MIN, -1));
        assert!(!would_overflow(i8::MIN + 2, -1));
        assert!(!would_overflow(-60_i8, -60));
    }

    #[test]
    fn test_float_boundaries() {
        assert!(would_overflow(f64::MAX, f64::MAX));
        assert!(would_overflow(f32::MAX, f32::MAX / 2.0 * 1.5));
        assert!(would_overflow(f64::MIN, f64::MIN));
        assert!(!would_overflow(1.5_f64, 2.5));
        assert!(!would_overflow(f64::MAX / 2.0, f64::MAX / 2.0));
    }

    #[test]
    fn test_special_operands_are_unsafe() {
        let specials = [f64::INFINITY, f64::NEG_INFINITY, f64::NAN];
        for s in specials {
            assert!(would_overflow(s, 1.0));
            assert!(would_overflow(1.0, s));
            assert!(would_overflow(s, s));
            assert!(would_overflow(0.0, s));
        }
        assert!(would_overflow(f32::NAN, f32::INFINITY));
    }

    #[test]
    fn test_matches_widened_arithmetic_for_random_i32() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let a: i32 = rng.random();
            let b: i32 = rng.random();
            let wide = a as i64 + b as i64;
            let expected =
                wide > i32::MAX as i64 || (a < 0 && b < 0 && wide < -(i32::MAX as i64));
            assert_eq!(would_overflow(a, b), expected, "a = {a}, b = {b}");
        }
    }

    #[test]
    fn test_finite_sums_within_range_are_safe() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let a: f64 = rng.random_range(-1.0e300..1.0e300);
            let b: f64 = rng.random_range(-1.0e300..1.0e300);
            assert!(!would_overflow(a, b), "a = {a}, b = {b}");
        }
    }

    #[test]
    fn test_idempotent() {
        let pairs = [(i64::MAX, 1), (5, 7), (i64::MIN, -1)];
        for (a, b) in pairs {
            let first = would_overflow(a, b);
            for _ in 0..3 {
                assert_eq!(would_overflow(a, b), first);
            }
        }
    }
}
