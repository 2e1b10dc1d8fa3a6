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

use num_traits::{One, Zero};
use std::fmt::{Debug, Display};

/// A trait for numeric types with real-number semantics.
///
/// This bundles everything the interval and range machinery needs from a
/// scalar: by-value copying, a partial order, additive and multiplicative
/// identities (via [`num_traits::Zero`] and [`num_traits::One`]), and a
/// classification of values into real numbers, infinities, and non-values.
///
/// For the primitive integer types every value is a finite real number.
/// For `f32` and `f64`, NaN is not a real number, and the two infinities are
/// real in the ordering sense but not finite.
pub trait RealNumeric: Copy + PartialOrd + Zero + One + Debug + Display {
    /// Returns `true` if the value is a real number (i.e., not NaN-like).
    fn is_real(self) -> bool;

    /// Returns `true` if the value is one of the infinities.
    fn is_infinite(self) -> bool;

    /// Returns `true` if the value is a real number and not infinite.
    #[inline]
    fn is_finite_real(self) -> bool {
        self.is_real() && !self.is_infinite()
    }
}

macro_rules! impl_real_numeric_int {
    ($t:ty) => {
        impl RealNumeric for $t {
            #[inline]
            fn is_real(self) -> bool {
                true
            }

            #[inline]
            fn is_infinite(self) -> bool {
                false
            }
        }
    };
}

macro_rules! impl_real_numeric_float {
    ($t:ty) => {
        impl RealNumeric for $t {
            #[inline]
            fn is_real(self) -> bool {
                !<$t>::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }
        }
    };
}

impl_real_numeric_int!(i8);
impl_real_numeric_int!(u8);
impl_real_numeric_int!(i16);
impl_real_numeric_int!(u16);
impl_real_numeric_int!(i32);
impl_real_numeric_int!(u32);
impl_real_numeric_int!(i64);
impl_real_numeric_int!(u64);
impl_real_numeric_int!(i128);
impl_real_numeric_int!(u128);
impl_real_numeric_int!(isize);
impl_real_numeric_int!(usize);

impl_real_numeric_float!(f32);
impl_real_numeric_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_finite_real() {
        assert!(42_i32.is_real());
        assert!(!42_i32.is_infinite());
        assert!(42_i32.is_finite_real());
        assert!(i64::MAX.is_finite_real());
        assert!(u8::MIN.is_finite_real());
    }

    #[test]
    fn test_float_classification() {
        assert!(1.5_f64.is_finite_real());
        assert!((-1.5_f32).is_finite_real());

        assert!(!f64::NAN.is_real());
        assert!(!f64::NAN.is_finite_real());

        assert!(f64::INFINITY.is_real());
        assert!(f64::INFINITY.is_infinite());
        assert!(!f64::INFINITY.is_finite_real());

        assert!(f64::NEG_INFINITY.is_real());
        assert!(f64::NEG_INFINITY.is_infinite());
        assert!(!f64::NEG_INFINITY.is_finite_real());
    }
}
