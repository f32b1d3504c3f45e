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

/// A trait for signed numeric types exposing their finite representable bounds.
///
/// For floating-point types `MAX` and `MIN` are the largest and smallest
/// *finite* values (`f64::MAX`, `f64::MIN`); the infinities are sentinels
/// handled by [`Classify`](crate::num::classify::Classify) instead.
///
/// # Examples
///
/// ```rust
/// # use sumguard_core::num::constants::Extrema;
/// assert_eq!(<i8 as Extrema>::MAX, 127);
/// assert_eq!(<i8 as Extrema>::MIN, -128);
/// assert_eq!(<i8 as Extrema>::NEG_MAX, -127);
/// assert!(<f64 as Extrema>::MAX.is_finite());
/// ```
pub trait Extrema: Sized {
    /// The largest finite value of the implementing type.
    const MAX: Self;
    /// The smallest (most negative) finite value of the implementing type.
    const MIN: Self;
    /// The negated largest value, `-MAX`.
    ///
    /// For two's-complement integers this is `MIN + 1`; for IEEE types it
    /// equals `MIN`.
    const NEG_MAX: Self;
}

macro_rules! impl_extrema_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Extrema for $t {
                const MAX: Self = <$t>::MAX;
                const MIN: Self = <$t>::MIN;
                const NEG_MAX: Self = -<$t>::MAX;
            }
        )*
    };
}

impl_extrema_for!(i8, i16, i32, i64, i128, isize);
impl_extrema_for!(f32, f64);
