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

/// Returns `true` if `lhs + rhs` must not be computed because it would fall
/// below the most negative value of `T`, or because an operand is not
/// ordinary.
///
/// Decision order:
/// 1. An infinite or NaN operand is always unsafe.
/// 2. Two strictly positive operands are rejected when `lhs < MIN + rhs`.
///    For sign-symmetric types `MIN + rhs` is always negative here, so this
///    branch never fires; it is kept for types with lopsided bounds.
/// 3. Two strictly negative operands underflow when `lhs < MIN - rhs`.
///
/// The predicate is symmetric in its operands.
///
/// # Examples
///
/// ```rust
/// # use sumguard_core::ops::underflow::would_underflow;
/// assert!(would_underflow(i32::MIN, -1));
/// assert!(!would_underflow(i32::MIN + 1, -1));
/// assert!(!would_underflow(i32::MIN, 1));
/// assert!(would_underflow(f64::MIN, f64::MIN));
/// assert!(would_underflow(1.0, f64::NAN));
/// ```
#[inline]
pub fn would_underflow<T>(lhs: T, rhs: T) -> bool
where
    T: GuardNumeric,
{
    if any_special(lhs, rhs) {
        return true;
    }

    let zero = T::zero();
    if lhs > zero && rhs > zero {
        // `MIN + rhs` cannot overflow since `rhs` is positive.
        return lhs < T::MIN + rhs;
    }
    if lhs < zero && rhs < zero {
        // `MIN - rhs` cannot overflow since `rhs` is negative.
        return lhs < T::MIN - rhs;
    }

    false
}
