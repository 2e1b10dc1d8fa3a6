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

//! # Math Primitives
//!
//! Foundational mathematical structures for numeric code.
//!
//! ## Submodules
//!
//! - `interval`: A generic [`interval::Interval`] type over any
//!   [`RealNumeric`](crate::num::real::RealNumeric) scalar, with open or
//!   closed boundaries on either side, a canonical empty interval, validated
//!   construction, membership and boundary predicates, pairwise relations
//!   (intersection, subset), and canonical text formatting.
//!
//! Unlike the half-open integer intervals common in scheduling code, these
//! intervals model convex sets of real numbers: each endpoint carries its
//! own open/closed flag, and infinite bounds are permitted on open sides of
//! floating-point instantiations.

pub mod interval;
