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
use std::fmt::{self, Write};

/// The open/closed status of an interval boundary.
///
/// A `Closed` boundary includes its endpoint value in the set; an `Open`
/// boundary excludes it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IntervalBoundary {
    Open,
    Closed,
}

/// The error type for interval construction.
///
/// Raised only by [`Interval::try_new`] (and the panicking constructors built
/// on top of it) when the boundary/value combination does not describe a
/// valid convex set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IntervalError {
    /// One of the bounds is not a real number (e.g., NaN).
    NonRealBound,
    /// The minimum bound is greater than the maximum bound.
    DecreasingBounds,
    /// A degenerate point interval with exactly one open boundary.
    ContradictoryPoint,
    /// An infinite bound on a closed side; infinity is never contained.
    ClosedInfiniteBound,
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonRealBound => write!(f, "min and max must be real numbers"),
            Self::DecreasingBounds => write!(f, "min must be less than or equal to max"),
            Self::ContradictoryPoint => write!(f, "interval definition is contradictory"),
            Self::ClosedInfiniteBound => write!(f, "interval cannot include infinite bounds"),
        }
    }
}

impl std::error::Error for IntervalError {}

/// The error type returned when a bound accessor is called on the empty
/// interval, which has no bounds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EmptyIntervalError;

impl fmt::Display for EmptyIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interval is empty")
    }
}

impl std::error::Error for EmptyIntervalError {}

/// The populated representation. `Interval` stores `None` for the empty
/// interval so that two empties compare equal regardless of scalar values.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Rep<N> {
    min: N,
    max: N,
    left: IntervalBoundary,
    right: IntervalBoundary,
}

/// A numeric interval: a convex set of real numbers over some
/// [`RealNumeric`] scalar `N`.
///
/// An interval is either empty or has a minimum and maximum bound, each of
/// which is independently open (endpoint excluded) or closed (endpoint
/// included). Floating-point instantiations may use infinite bounds on open
/// sides, e.g. `(-Infinity, 5]`.
///
/// # Invariants
///
/// - `min <= max`, and both bounds are real numbers (never NaN).
/// - A closed bound is never infinite.
/// - `min == max` only as a closed point interval `[x, x]`; the open form
///   `(x, x)` denotes the empty set and collapses to [`Interval::empty`].
///
/// Instances are immutable values; equality and hashing follow the
/// min/max/boundary representation, with all empty intervals equal.
///
/// # Examples
///
/// ```rust
/// # use numutil::math::interval::Interval;
///
/// let iv = Interval::closed(3, 5);
/// assert!(iv.contains(4));
/// assert!(!Interval::open(3, 5).contains(5));
/// assert_eq!(iv.to_string(), "[3, 5]");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<N>
where
    N: RealNumeric,
{
    rep: Option<Rep<N>>,
}

impl<N> Interval<N>
where
    N: RealNumeric,
{
    /// Creates a new `Interval` if the arguments describe a valid one.
    ///
    /// The degenerate open point `(x, x)` is not an error: it denotes the
    /// empty set and yields [`Interval::empty`].
    ///
    /// # Errors
    ///
    /// - [`IntervalError::NonRealBound`] if either bound is NaN-like.
    /// - [`IntervalError::DecreasingBounds`] if `min > max`.
    /// - [`IntervalError::ContradictoryPoint`] if `min == max` with exactly
    ///   one open boundary.
    /// - [`IntervalError::ClosedInfiniteBound`] if an infinite bound sits on
    ///   a closed side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::{Interval, IntervalBoundary};
    ///
    /// let iv = Interval::try_new(IntervalBoundary::Closed, 3, IntervalBoundary::Open, 5);
    /// assert!(iv.is_ok());
    ///
    /// let bad = Interval::try_new(IntervalBoundary::Closed, 5, IntervalBoundary::Closed, 3);
    /// assert!(bad.is_err());
    ///
    /// let collapsed = Interval::try_new(IntervalBoundary::Open, 3, IntervalBoundary::Open, 3);
    /// assert!(collapsed.unwrap().is_empty());
    /// ```
    pub fn try_new(
        left: IntervalBoundary,
        min: N,
        right: IntervalBoundary,
        max: N,
    ) -> Result<Self, IntervalError> {
        if !(min.is_real() && max.is_real()) {
            return Err(IntervalError::NonRealBound);
        }
        if min > max {
            return Err(IntervalError::DecreasingBounds);
        }
        if min == max {
            if left == IntervalBoundary::Open && right == IntervalBoundary::Open {
                return Ok(Self::empty());
            }
            if left == IntervalBoundary::Open || right == IntervalBoundary::Open {
                return Err(IntervalError::ContradictoryPoint);
            }
        }
        if (min.is_infinite() && left == IntervalBoundary::Closed)
            || (max.is_infinite() && right == IntervalBoundary::Closed)
        {
            return Err(IntervalError::ClosedInfiniteBound);
        }
        Ok(Self {
            rep: Some(Rep {
                min,
                max,
                left,
                right,
            }),
        })
    }

    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if the arguments do not describe a valid interval; see
    /// [`Interval::try_new`] for the fallible variant and the exact rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::{Interval, IntervalBoundary};
    ///
    /// let iv = Interval::new(IntervalBoundary::Open, 3, IntervalBoundary::Closed, 5);
    /// assert_eq!(iv.to_string(), "(3, 5]");
    /// ```
    #[inline]
    pub fn new(left: IntervalBoundary, min: N, right: IntervalBoundary, max: N) -> Self {
        match Self::try_new(left, min, right, max) {
            Ok(interval) => interval,
            Err(e) => panic!("Invalid interval: {e}"),
        }
    }

    /// The empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::Interval;
    ///
    /// let iv = Interval::<i32>::empty();
    /// assert!(iv.is_empty());
    /// assert_eq!(iv.to_string(), "∅");
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { rep: None }
    }

    /// Creates an open interval `(min, max)`.
    ///
    /// `open(x, x)` yields the empty interval.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Interval::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::Interval;
    ///
    /// assert_eq!(Interval::open(3, 5).to_string(), "(3, 5)");
    /// assert!(Interval::open(3, 3).is_empty());
    /// ```
    #[inline]
    pub fn open(min: N, max: N) -> Self {
        Self::new(IntervalBoundary::Open, min, IntervalBoundary::Open, max)
    }

    /// Creates a closed interval `[min, max]`.
    ///
    /// `closed(x, x)` is the valid single-point interval `[x, x]`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Interval::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(3, 5).to_string(), "[3, 5]");
    /// assert!(Interval::closed(3, 3).contains(3));
    /// ```
    #[inline]
    pub fn closed(min: N, max: N) -> Self {
        Self::new(IntervalBoundary::Closed, min, IntervalBoundary::Closed, max)
    }

    /// Returns `true` if the interval is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rep.is_none()
    }

    /// Returns the minimum bound, or an error when the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(3, 5).try_min(), Ok(3));
    /// assert!(Interval::<i32>::empty().try_min().is_err());
    /// ```
    #[inline]
    pub fn try_min(&self) -> Result<N, EmptyIntervalError> {
        match self.rep {
            Some(rep) => Ok(rep.min),
            None => Err(EmptyIntervalError),
        }
    }

    /// Returns the minimum bound.
    ///
    /// # Panics
    ///
    /// Panics if the interval is empty; see [`Interval::try_min`] for the
    /// fallible variant.
    #[inline]
    pub fn min(&self) -> N {
        match self.try_min() {
            Ok(min) => min,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the maximum bound, or an error when the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(3, 5).try_max(), Ok(5));
    /// assert!(Interval::<i32>::empty().try_max().is_err());
    /// ```
    #[inline]
    pub fn try_max(&self) -> Result<N, EmptyIntervalError> {
        match self.rep {
            Some(rep) => Ok(rep.max),
            None => Err(EmptyIntervalError),
        }
    }

    /// Returns the maximum bound.
    ///
    /// # Panics
    ///
    /// Panics if the interval is empty; see [`Interval::try_max`] for the
    /// fallible variant.
    #[inline]
    pub fn max(&self) -> N {
        match self.try_max() {
            Ok(max) => max,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns `true` if the minimum bound is included in the set.
    ///
    /// The empty interval has no bounds, so this is `false` when empty.
    #[inline]
    pub fn is_left_closed(&self) -> bool {
        match self.rep {
            Some(rep) => rep.left == IntervalBoundary::Closed,
            None => false,
        }
    }

    /// Returns `true` if the maximum bound is included in the set.
    ///
    /// The empty interval has no bounds, so this is `false` when empty.
    #[inline]
    pub fn is_right_closed(&self) -> bool {
        match self.rep {
            Some(rep) => rep.right == IntervalBoundary::Closed,
            None => false,
        }
    }

    /// Returns `true` if neither bound is included in the set.
    ///
    /// The empty interval is vacuously open.
    #[inline]
    pub fn is_open(&self) -> bool {
        match self.rep {
            Some(rep) => {
                rep.left == IntervalBoundary::Open && rep.right == IntervalBoundary::Open
            }
            None => true,
        }
    }

    /// Returns `true` if both bounds are included in the set.
    #[inline]
    pub fn is_closed(&self) -> bool {
        match self.rep {
            Some(rep) => {
                rep.left == IntervalBoundary::Closed && rep.right == IntervalBoundary::Closed
            }
            None => false,
        }
    }

    /// Returns `true` if the interval contains `n`.
    ///
    /// Non-real and infinite values belong to no interval, so `contains`
    /// returns `false` for NaN and the infinities even on intervals with an
    /// infinite open bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::{Interval, IntervalBoundary};
    ///
    /// let iv = Interval::new(IntervalBoundary::Closed, 3.0, IntervalBoundary::Open, f64::INFINITY);
    /// assert!(iv.contains(3.0));
    /// assert!(iv.contains(1e300));
    /// assert!(!iv.contains(f64::INFINITY));
    /// assert!(!iv.contains(f64::NAN));
    /// ```
    pub fn contains(&self, n: N) -> bool {
        if !n.is_finite_real() {
            return false;
        }
        match self.rep {
            Some(rep) => {
                if n < rep.min || n > rep.max {
                    return false;
                }
                if rep.left == IntervalBoundary::Open && n == rep.min {
                    return false;
                }
                if rep.right == IntervalBoundary::Open && n == rep.max {
                    return false;
                }
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the two intervals intersect.
    ///
    /// The empty interval intersects nothing, not even another empty
    /// interval. Intervals touching at exactly one shared endpoint intersect
    /// only if both sides include that endpoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::Interval;
    ///
    /// let a = Interval::closed(0, 5);
    /// assert!(a.intersects(Interval::closed(5, 10)));
    /// assert!(!a.intersects(Interval::open(5, 10)));
    /// assert!(!a.intersects(Interval::closed(6, 10)));
    /// assert!(!a.intersects(Interval::empty()));
    /// ```
    pub fn intersects(&self, other: Self) -> bool {
        let (Some(a), Some(b)) = (self.rep, other.rep) else {
            return false;
        };
        if a.max < b.min || a.min > b.max {
            return false;
        }
        if a.max == b.min
            && (a.right == IntervalBoundary::Open || b.left == IntervalBoundary::Open)
        {
            return false;
        }
        if a.min == b.max
            && (a.left == IntervalBoundary::Open || b.right == IntervalBoundary::Open)
        {
            return false;
        }
        true
    }

    /// Returns `true` if `self` is a subset of (or equal to) `other`.
    ///
    /// Derived point-wise: every point of `self` must lie in `other`. At a
    /// shared endpoint value this fails exactly when `self` includes the
    /// endpoint (closed) but `other` excludes it (open). By convention the
    /// empty interval is a subset target for everything: the relation is
    /// `true` whenever `other` is empty, and `false` for an empty `self`
    /// against a populated `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::Interval;
    ///
    /// assert!(Interval::closed(1, 2).is_subset_or_equal(Interval::open(0, 5)));
    /// assert!(Interval::open(0, 5).is_subset_or_equal(Interval::closed(0, 5)));
    /// assert!(!Interval::closed(0, 5).is_subset_or_equal(Interval::open(0, 5)));
    /// ```
    pub fn is_subset_or_equal(&self, other: Self) -> bool {
        let Some(b) = other.rep else {
            return true;
        };
        let Some(a) = self.rep else {
            return false;
        };
        if a.min < b.min || a.max > b.max {
            return false;
        }
        if a.min == b.min
            && a.left == IntervalBoundary::Closed
            && b.left == IntervalBoundary::Open
        {
            return false;
        }
        if a.max == b.max
            && a.right == IntervalBoundary::Closed
            && b.right == IntervalBoundary::Open
        {
            return false;
        }
        true
    }

    /// Returns `true` if `self` is a subset of `other` and not equal to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numutil::math::interval::Interval;
    ///
    /// let a = Interval::closed(1, 2);
    /// assert!(a.is_strict_subset(Interval::closed(0, 5)));
    /// assert!(!a.is_strict_subset(a));
    /// ```
    #[inline]
    pub fn is_strict_subset(&self, other: Self) -> bool {
        *self != other && self.is_subset_or_equal(other)
    }
}

impl<N> Default for Interval<N>
where
    N: RealNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<N> From<std::ops::RangeInclusive<N>> for Interval<N>
where
    N: RealNumeric,
{
    /// Converts an inclusive range into the closed interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not describe a valid closed interval
    /// (decreasing or non-real bounds).
    #[inline]
    fn from(range: std::ops::RangeInclusive<N>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

/// Renders a single bound, forwarding formatter flags (width, precision) to
/// the scalar's own `Display`. Infinities use the canonical spellings.
fn fmt_bound<N>(n: N, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    N: RealNumeric,
{
    if n.is_infinite() {
        if n < N::zero() {
            f.write_str("-Infinity")
        } else {
            f.write_str("Infinity")
        }
    } else {
        fmt::Display::fmt(&n, f)
    }
}

impl<N> fmt::Display for Interval<N>
where
    N: RealNumeric,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rep {
            Some(rep) => {
                f.write_char(if rep.left == IntervalBoundary::Closed {
                    '['
                } else {
                    '('
                })?;
                fmt_bound(rep.min, f)?;
                f.write_str(", ")?;
                fmt_bound(rep.max, f)?;
                f.write_char(if rep.right == IntervalBoundary::Closed {
                    ']'
                } else {
                    ')'
                })
            }
            None => f.write_str("\u{2205}"),
        }
    }
}

impl<N> fmt::Debug for Interval<N>
where
    N: RealNumeric,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rep {
            Some(rep) => f
                .debug_struct("Interval")
                .field("min", &rep.min)
                .field("max", &rep.max)
                .field("left", &rep.left)
                .field("right", &rep.right)
                .finish(),
            None => f.write_str("Interval::Empty"),
        }
    }
}
