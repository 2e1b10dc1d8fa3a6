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

use crate::num::real::RealNumeric;
use std::iter::FusedIterator;

/// An iterator over `min, min + step, min + 2 * step, ...` while the running
/// value is `<= max`.
///
/// The bound check compares the accumulated running value against `max`, so
/// over floats the emitted sequence follows ordinary IEEE-754 accumulation.
/// Cloning the range restarts iteration with identical output.
///
/// # Examples
///
/// ```rust
/// # use numutil::utils::range::range;
///
/// let values: Vec<i32> = range(0, 5).collect();
/// assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct SteppedRange<N>
where
    N: RealNumeric,
{
    current: N,
    max: N,
    step: N,
}

/// Creates an inclusive range from `min` to `max` in steps of one.
///
/// # Examples
///
/// ```rust
/// # use numutil::utils::range::range;
///
/// let values: Vec<i32> = range(-2, 2).collect();
/// assert_eq!(values, vec![-2, -1, 0, 1, 2]);
/// ```
#[inline]
pub fn range<N>(min: N, max: N) -> SteppedRange<N>
where
    N: RealNumeric,
{
    range_step(min, max, N::one())
}

/// Creates an inclusive range from `min` to `max` in steps of `step`.
///
/// # Examples
///
/// ```rust
/// # use numutil::utils::range::range_step;
///
/// let values: Vec<f64> = range_step(0.0, 1.0, 0.25).collect();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[inline]
pub fn range_step<N>(min: N, max: N, step: N) -> SteppedRange<N>
where
    N: RealNumeric,
{
    SteppedRange {
        current: min,
        max,
        step,
    }
}

impl<N> Iterator for SteppedRange<N>
where
    N: RealNumeric,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current <= self.max {
            let result = self.current;
            self.current = self.current + self.step;
            Some(result)
        } else {
            None
        }
    }
}

impl<N> FusedIterator for SteppedRange<N> where N: RealNumeric {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: &[f64], actual: &[f64]) {
        assert_eq!(expected.len(), actual.len(), "{actual:?}");
        for (e, a) in expected.iter().zip(actual) {
            assert!((e - a).abs() < 1e-9, "expected {e}, got {a}");
        }
    }

    #[test]
    fn test_integers() {
        let values: Vec<i32> = range(0, 5).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);

        let values: Vec<i32> = range(-3, 3).collect();
        assert_eq!(values, vec![-3, -2, -1, 0, 1, 2, 3]);
    }

    #[test]
    fn test_single_and_empty() {
        let values: Vec<i32> = range(3, 3).collect();
        assert_eq!(values, vec![3]);

        let values: Vec<i32> = range(5, 3).collect();
        assert!(values.is_empty());
    }

    #[test]
    fn test_floats_unit_step() {
        let values: Vec<f64> = range(3.0, 6.6).collect();
        assert_close(&[3.0, 4.0, 5.0, 6.0], &values);

        let values: Vec<f64> = range(3.2, 6.2).collect();
        assert_close(&[3.2, 4.2, 5.2, 6.2], &values);

        // The bound falls just below the next accumulated value.
        let values: Vec<f64> = range(3.2, 6.1).collect();
        assert_close(&[3.2, 4.2, 5.2], &values);
    }

    #[test]
    fn test_floats_custom_step() {
        let values: Vec<f64> = range_step(3.2, 6.7, 0.5).collect();
        assert_close(&[3.2, 3.7, 4.2, 4.7, 5.2, 5.7, 6.2, 6.7], &values);

        let values: Vec<f64> = range_step(3.2, 6.6, 0.5).collect();
        assert_close(&[3.2, 3.7, 4.2, 4.7, 5.2, 5.7, 6.2], &values);
    }

    #[test]
    fn test_repeated_iteration_is_identical() {
        let r = range_step(0.0, 2.0, 0.3);
        let first: Vec<f64> = r.clone().collect();
        let second: Vec<f64> = r.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fused() {
        let mut iter = range(0, 1);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
