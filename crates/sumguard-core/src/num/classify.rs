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

/// The class a single numeric value falls into for the purpose of addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    /// The value is `+Infinity`.
    PositiveInfinite,
    /// The value is `-Infinity`.
    NegativeInfinite,
    /// The value is NaN.
    NaN,
    /// Any finite, representable value.
    Ordinary,
}

impl ValueClass {
    /// Returns `true` for either infinity.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::PositiveInfinite | Self::NegativeInfinite)
    }

    /// Returns `true` for every class except `Ordinary`.
    #[inline]
    pub const fn is_special(self) -> bool {
        !matches!(self, Self::Ordinary)
    }
}

impl std::fmt::Display for ValueClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PositiveInfinite => "+Infinity",
            Self::NegativeInfinite => "-Infinity",
            Self::NaN => "NaN",
            Self::Ordinary => "Ordinary",
        };
        f.write_str(name)
    }
}

/// A trait for numeric types that can be sorted into a [`ValueClass`].
///
/// Integer implementations always return `ValueClass::Ordinary`.
///
/// # Examples
///
/// ```rust
/// # use sumguard_core::num::classify::{Classify, ValueClass};
/// assert_eq!(f64::INFINITY.value_class(), ValueClass::PositiveInfinite);
/// assert_eq!(f32::NAN.value_class(), ValueClass::NaN);
/// assert_eq!(i32::MAX.value_class(), ValueClass::Ordinary);
/// ```
pub trait Classify: Copy {
    /// Classifies the value.
    ///
    /// Named apart from the inherent `f64::classify`, which returns the
    /// finer-grained `std::num::FpCategory`.
    fn value_class(self) -> ValueClass;

    /// Returns `true` if the value is `+Infinity`.
    #[inline]
    fn is_positive_infinite(self) -> bool {
        self.value_class() == ValueClass::PositiveInfinite
    }

    /// Returns `true` if the value is `-Infinity`.
    #[inline]
    fn is_negative_infinite(self) -> bool {
        self.value_class() == ValueClass::NegativeInfinite
    }

    /// Returns `true` if the value is NaN.
    #[inline]
    fn is_nan_value(self) -> bool {
        self.value_class() == ValueClass::NaN
    }
}

macro_rules! impl_classify_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Classify for $t {
                #[inline(always)]
                fn value_class(self) -> ValueClass {
                    ValueClass::Ordinary
                }
            }
        )*
    };
}

macro_rules! impl_classify_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Classify for $t {
                #[inline(always)]
                fn value_class(self) -> ValueClass {
                    if self.is_nan() {
                        ValueClass::NaN
                    } else if self == <$t>::INFINITY {
                        ValueClass::PositiveInfinite
                    } else if self == <$t>::NEG_INFINITY {
                        ValueClass::NegativeInfinite
                    } else {
                        ValueClass::Ordinary
                    }
                }
            }
        )*
    };
}

impl_classify_int!(i8, i16, i32, i64, i128, isize);
impl_classify_float!(f32, f64);

/// Returns the [`ValueClass`] of `n`.
#[inline]
pub fn classify<T: Classify>(n: T) -> ValueClass {
    n.value_class()
}

/// Returns `true` if `n` is `+Infinity`.
#[inline]
pub fn is_positive_infinite<T: Classify>(n: T) -> bool {
    n.is_positive_infinite()
}

/// Returns `true` if `a` or `b` is `+Infinity`.
///
/// # Examples
///
/// ```rust
/// # use sumguard_core::num::classify::any_positive_infinite;
/// assert!(any_positive_infinite(1.0, f64::INFINITY));
/// assert!(!any_positive_infinite(1.0, f64::NEG_INFINITY));
/// assert!(!any_positive_infinite(i64::MAX, i64::MAX));
/// ```
#[inline]
pub fn any_positive_infinite<T: Classify>(a: T, b: T) -> bool {
    a.is_positive_infinite() || b.is_positive_infinite()
}

/// Returns `true` if `n` is `-Infinity`.
#[inline]
pub fn is_negative_infinite<T: Classify>(n: T) -> bool {
    n.is_negative_infinite()
}

/// Returns `true` if `a` or `b` is `-Infinity`.
#[inline]
pub fn any_negative_infinite<T: Classify>(a: T, b: T) -> bool {
    a.is_negative_infinite() || b.is_negative_infinite()
}

/// Returns `true` if `n` is NaN.
#[inline]
pub fn is_nan_value<T: Classify>(n: T) -> bool {
    n.is_nan_value()
}

/// Returns `true` if `a` or `b` is NaN.
#[inline]
pub fn any_nan<T: Classify>(a: T, b: T) -> bool {
    a.is_nan_value() || b.is_nan_value()
}

/// Returns `true` if either operand is an infinity or NaN.
///
/// This is the first check of both addition predicates: a pair containing a
/// non-ordinary value is never considered safe to add.
#[inline]
pub fn any_special<T: Classify>(a: T, b: T) -> bool {
    any_positive_infinite(a, b) || any_negative_infinite(a, b) || any_nan(a, b)
}
