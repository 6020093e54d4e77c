// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use num_traits::{Signed, Zero};

use crate::geometry::{OrientedLine, Point2};
use crate::kernel::orient2d;
use crate::numeric::Coordinate;

/// `true` if `a`, `b` and `c` lie on one line. Coincident points count as
/// collinear.
pub fn are_collinear<C: Coordinate>(a: &Point2<C>, b: &Point2<C>, c: &Point2<C>) -> bool {
    orient2d(a, b, c).is_zero()
}

pub fn is_left_of<C: Coordinate>(p: &Point2<C>, line: &OrientedLine<C>) -> bool {
    line.signed_distance(p).is_positive()
}

pub fn is_right_of<C: Coordinate>(p: &Point2<C>, line: &OrientedLine<C>) -> bool {
    line.signed_distance(p).is_negative()
}
