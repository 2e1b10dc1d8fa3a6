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

//! # Numutil
//!
//! Generic numeric primitives and small, dependency-light utilities. The
//! centerpiece is a mathematical interval type with open/closed boundaries
//! that works uniformly over integers and IEEE-754 floating point, including
//! infinite bounds.
//!
//! ## Modules
//!
//! - `math`: The [`Interval`](math::interval::Interval) value type with
//!   validated construction, emptiness, boundary predicates, membership,
//!   pairwise relations (intersection, subset), and canonical text
//!   formatting.
//! - `num`: The [`RealNumeric`](num::real::RealNumeric) contract bundling
//!   the ordering, identity, and real-number/infinity semantics the interval
//!   type requires, implemented for all primitive integers and floats.
//! - `utils`: Free-standing helpers: inclusive bounds checks, Gregorian
//!   leap-year tests, stepped inclusive ranges, and whitespace collapsing.
//!
//! ## Purpose
//!
//! These primitives are deliberately synchronous, immutable value types with
//! no shared state, making them safe to use from any number of threads
//! without coordination.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
pub mod utils;
