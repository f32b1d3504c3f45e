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

//! # Ranged Integers
//!
//! `RangedInt<T>` is an integer constrained to an inclusive range
//! `[min, max]` that it carries as data. Every constructor and every
//! arithmetic step validates the result against that range, so a value that
//! exists is always in bounds.
//!
//! Small zero-based ranges model digits and enumerations: `RangedInt::digit(10, 7)`
//! is a decimal digit, `RangedInt::digit(2, 1)` a bit.

use crate::error::RangeError;
use num_traits::PrimInt;
use std::cmp::Ordering;

/// An integer value that is guaranteed to lie within `[min, max]`.
///
/// # Invariants
/// `min <= value <= max` holds for every instance.
///
/// Equality and ordering compare the value only; two ranged integers with
/// different bounds but the same value are equal.
#[derive(Clone, Copy, Debug)]
pub struct RangedInt<T>
where
    T: PrimInt,
{
    value: T,
    min: T,
    max: T,
}

impl<T> RangedInt<T>
where
    T: PrimInt,
{
    /// Creates a new `RangedInt`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or if `value` lies outside `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_core::bounded::RangedInt;
    /// let r = RangedInt::new(5, 0, 10);
    /// assert_eq!(r.get(), 5);
    /// ```
    #[inline]
    pub fn new(value: T, min: T, max: T) -> Self {
        assert!(min <= max, "Invalid bounds: min must be less than or equal to max");
        assert!(
            min <= value && value <= max,
            "Invalid value: value must lie within [min, max]"
        );
        Self { value, min, max }
    }

    /// Creates a new `RangedInt` if the inputs are valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_core::{bounded::RangedInt, error::RangeError};
    /// assert!(RangedInt::try_new(2, 0, 2).is_ok());
    /// assert_eq!(
    ///     RangedInt::try_new(3, 0, 2),
    ///     Err(RangeError::OutOfRange { value: 3, min: 0, max: 2 })
    /// );
    /// assert_eq!(
    ///     RangedInt::try_new(0, 2, 0),
    ///     Err(RangeError::InvalidBounds { min: 2, max: 0 })
    /// );
    /// ```
    #[inline]
    pub fn try_new(value: T, min: T, max: T) -> Result<Self, RangeError<T>> {
        if min > max {
            return Err(RangeError::InvalidBounds { min, max });
        }
        if value < min || value > max {
            return Err(RangeError::OutOfRange { value, min, max });
        }
        Ok(Self { value, min, max })
    }

    /// Creates a digit of the given `radix`, i.e. a value in `[0, radix - 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_core::bounded::RangedInt;
    /// let d = RangedInt::digit(16_u8, 15).unwrap();
    /// assert_eq!(d.max(), 15);
    /// assert!(RangedInt::digit(16_u8, 16).is_err());
    /// ```
    #[inline]
    pub fn digit(radix: T, value: T) -> Result<Self, RangeError<T>> {
        if radix.is_zero() {
            return Err(RangeError::InvalidBounds {
                min: T::zero(),
                max: radix,
            });
        }
        Self::try_new(value, T::zero(), radix - T::one())
    }

    /// Creates the value `0` within `[0, max]`.
    #[inline]
    pub fn zero(max: T) -> Result<Self, RangeError<T>> {
        Self::try_new(T::zero(), T::zero(), max)
    }

    /// Creates the value `1` within `[0, max]`.
    #[inline]
    pub fn one(max: T) -> Result<Self, RangeError<T>> {
        Self::try_new(T::one(), T::zero(), max)
    }

    /// Returns the value.
    #[inline]
    pub fn get(self) -> T {
        self.value
    }

    /// Returns the inclusive lower bound.
    ///
    /// Takes `self` by value so it is not shadowed by `Ord::min`.
    #[inline]
    pub fn min(self) -> T {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn max(self) -> T {
        self.max
    }

    /// Returns the number of values in `[min, max]`, or `None` if that count
    /// does not fit into `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_core::bounded::RangedInt;
    /// assert_eq!(RangedInt::new(0, -2, 2).cardinality(), Some(5));
    /// assert_eq!(RangedInt::new(0_u8, 0, u8::MAX).cardinality(), None);
    /// ```
    #[inline]
    pub fn cardinality(&self) -> Option<T> {
        self.max
            .checked_sub(&self.min)
            .and_then(|span| span.checked_add(&T::one()))
    }

    /// Returns a copy holding `value` under the same bounds.
    #[inline]
    pub fn with_value(&self, value: T) -> Result<Self, RangeError<T>> {
        Self::try_new(value, self.min, self.max)
    }

    /// Adds `rhs`, keeping the bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_core::{bounded::RangedInt, error::RangeError};
    /// let r = RangedInt::new(1, 0, 2);
    /// assert_eq!(r.checked_add(1).unwrap().get(), 2);
    /// assert_eq!(
    ///     r.checked_add(2),
    ///     Err(RangeError::OutOfRange { value: 3, min: 0, max: 2 })
    /// );
    /// ```
    #[inline]
    pub fn checked_add(&self, rhs: T) -> Result<Self, RangeError<T>> {
        let value = self.value.checked_add(&rhs).ok_or(RangeError::Overflow {
            lhs: self.value,
            rhs,
        })?;
        self.with_value(value)
    }

    /// Subtracts `rhs`, keeping the bounds.
    #[inline]
    pub fn checked_sub(&self, rhs: T) -> Result<Self, RangeError<T>> {
        let value = self.value.checked_sub(&rhs).ok_or(RangeError::Overflow {
            lhs: self.value,
            rhs,
        })?;
        self.with_value(value)
    }

    /// Returns `true` if the value sits on the lower bound.
    #[inline]
    pub fn is_min(&self) -> bool {
        self.value == self.min
    }

    /// Returns `true` if the value sits on the upper bound.
    #[inline]
    pub fn is_max(&self) -> bool {
        self.value == self.max
    }
}

impl<T> PartialEq for RangedInt<T>
where
    T: PrimInt,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for RangedInt<T> where T: PrimInt {}

impl<T> PartialOrd for RangedInt<T>
where
    T: PrimInt,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for RangedInt<T>
where
    T: PrimInt,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> PartialEq<T> for RangedInt<T>
where
    T: PrimInt,
{
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T> PartialOrd<T> for RangedInt<T>
where
    T: PrimInt,
{
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

impl<T> std::hash::Hash for RangedInt<T>
where
    T: PrimInt + std::hash::Hash,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Display for RangedInt<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ∈ [{}, {}]", self.value, self.min, self.max)
    }
}
