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

//! # Vector Forms
//!
//! Sequence and broadcast versions of the `sumguard-core` predicates and safe
//! sum, evaluated with `BulkEvaluator::default()`: rayon work stealing on the
//! global pool for long inputs, the calling thread for short ones.
//!
//! Use a configured `BulkEvaluator` directly to pick a strategy or a
//! dedicated pool.

use crate::{error::BulkError, evaluator::BulkEvaluator};
use sumguard_core::{num::numeric::GuardNumeric, ops::sum::SafeAdd};

/// Returns `would_underflow(lhs[i], rhs[i])` for every index.
///
/// # Errors
///
/// Returns `BulkError::LengthMismatch` if `lhs` and `rhs` differ in length;
/// no element is evaluated in that case.
///
/// # Examples
///
/// ```rust
/// # use sumguard_bulk::{error::BulkError, vector::would_underflow_pairwise};
/// assert_eq!(
///     would_underflow_pairwise(&[i64::MIN, -2], &[-1, -2]).unwrap(),
///     vec![true, false]
/// );
/// assert!(matches!(
///     would_underflow_pairwise(&[1, 2, 3], &[1, 2, 3, 4, 5]),
///     Err(BulkError::LengthMismatch { lhs: 3, rhs: 5 })
/// ));
/// ```
#[inline]
pub fn would_underflow_pairwise<T>(lhs: &[T], rhs: &[T]) -> Result<Vec<bool>, BulkError>
where
    T: GuardNumeric,
{
    BulkEvaluator::default().would_underflow_pairwise(lhs, rhs)
}

/// Returns `would_underflow(lhs[i], rhs)` for every index.
#[inline]
pub fn would_underflow_scalar_rhs<T>(lhs: &[T], rhs: T) -> Vec<bool>
where
    T: GuardNumeric,
{
    BulkEvaluator::default().would_underflow_scalar_rhs(lhs, rhs)
}

/// Returns `would_underflow(lhs, rhs[i])` for every index.
///
/// # Examples
///
/// ```rust
/// # use sumguard_bulk::vector::would_underflow_scalar_lhs;
/// assert_eq!(
///     would_underflow_scalar_lhs(f32::MIN, &[f32::MIN, 1.0, f32::NAN]),
///     vec![true, false, true]
/// );
/// ```
#[inline]
pub fn would_underflow_scalar_lhs<T>(lhs: T, rhs: &[T]) -> Vec<bool>
where
    T: GuardNumeric,
{
    BulkEvaluator::default().would_underflow_scalar_lhs(lhs, rhs)
}

/// Returns `would_overflow(lhs[i], rhs[i])` for every index.
///
/// # Errors
///
/// Returns `BulkError::LengthMismatch` if `lhs` and `rhs` differ in length.
#[inline]
pub fn would_overflow_pairwise<T>(lhs: &[T], rhs: &[T]) -> Result<Vec<bool>, BulkError>
where
    T: GuardNumeric,
{
    BulkEvaluator::default().would_overflow_pairwise(lhs, rhs)
}

/// Returns `would_overflow(lhs[i], rhs)` for every index.
#[inline]
pub fn would_overflow_scalar_rhs<T>(lhs: &[T], rhs: T) -> Vec<bool>
where
    T: GuardNumeric,
{
    BulkEvaluator::default().would_overflow_scalar_rhs(lhs, rhs)
}

/// Returns `would_overflow(lhs, rhs[i])` for every index.
#[inline]
pub fn would_overflow_scalar_lhs<T>(lhs: T, rhs: &[T]) -> Vec<bool>
where
    T: GuardNumeric,
{
    BulkEvaluator::default().would_overflow_scalar_lhs(lhs, rhs)
}

/// Returns `safe_add(lhs[i], rhs[i])` for every index.
///
/// # Errors
///
/// Returns `BulkError::LengthMismatch` if `lhs` and `rhs` differ in length.
///
/// # Examples
///
/// ```rust
/// # use sumguard_bulk::vector::safe_add_pairwise;
/// let out = safe_add_pairwise(&[2.0, f64::INFINITY], &[3.0, 1.0]).unwrap();
/// assert_eq!(out[0], 5.0);
/// assert!(out[1].is_nan());
/// ```
#[inline]
pub fn safe_add_pairwise<T>(lhs: &[T], rhs: &[T]) -> Result<Vec<T>, BulkError>
where
    T: SafeAdd,
{
    BulkEvaluator::default().safe_add_pairwise(lhs, rhs)
}

/// Returns `safe_add(lhs[i], rhs)` for every index.
#[inline]
pub fn safe_add_scalar_rhs<T>(lhs: &[T], rhs: T) -> Vec<T>
where
    T: SafeAdd,
{
    BulkEvaluator::default().safe_add_scalar_rhs(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use sumguard_core::ops::{overflow::would_overflow, underflow::would_underflow};

    #[test]
    fn test_pointwise_equivalence_above_cutoff() {
        // Long enough to take the parallel path of the default evaluator.
        let mut rng = StdRng::seed_from_u64(2024);
        let a: Vec<i16> = (0..20_000).map(|_| rng.random()).collect();
        let b: Vec<i16> = (0..20_000).map(|_| rng.random()).collect();

        let under = would_underflow_pairwise(&a, &b).unwrap();
        let over = would_overflow_pairwise(&a, &b).unwrap();
        assert_eq!(under.len(), a.len());
        for i in 0..a.len() {
            assert_eq!(under[i], would_underflow(a[i], b[i]), "index {i}");
            assert_eq!(over[i], would_overflow(a[i], b[i]), "index {i}");
        }
    }

    #[test]
    fn test_broadcast_equivalence() {
        let a = [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX];
        for s in [-1, 1, i32::MIN, i32::MAX] {
            let under = would_underflow_scalar_rhs(&a, s);
            let over = would_overflow_scalar_rhs(&a, s);
            let over_lhs = would_overflow_scalar_lhs(s, &a);
            for i in 0..a.len() {
                assert_eq!(under[i], would_underflow(a[i], s));
                assert_eq!(over[i], would_overflow(a[i], s));
                assert_eq!(over_lhs[i], would_overflow(s, a[i]));
            }
        }
    }

    #[test]
    fn test_scalar_lhs_is_swapped_scalar_rhs() {
        let a = [f64::MIN, -1.0, f64::NEG_INFINITY, 3.0];
        assert_eq!(
            would_underflow_scalar_lhs(f64::MIN, &a),
            would_underflow_scalar_rhs(&a, f64::MIN)
        );
    }

    #[test]
    fn test_mismatch_produces_no_result() {
        let result = safe_add_pairwise(&[1.0_f64; 3], &[1.0; 5]);
        assert!(matches!(
            result,
            Err(BulkError::LengthMismatch { lhs: 3, rhs: 5 })
        ));
    }

    #[test]
    fn test_safe_add_scalar_rhs() {
        let out = safe_add_scalar_rhs(&[1.0_f32, f32::NEG_INFINITY], f32::NEG_INFINITY);
        assert!(out[0].is_nan());
        assert_eq!(out[1], f32::NEG_INFINITY);
    }
}
