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

use num_traits::Signed;

use crate::geometry::Point2;
use crate::numeric::Coordinate;

/// Side of a directed line on which a point falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left of the direction of travel.
    CounterClockwise,
    /// Right of the direction of travel.
    Clockwise,
    Collinear,
}

impl Orientation {
    /// Classifies the sign of an orientation determinant.
    pub fn of<W: Signed>(det: &W) -> Self {
        if det.is_positive() {
            Orientation::CounterClockwise
        } else if det.is_negative() {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Returns -1, 0, or +1.
    pub fn sign(self) -> i8 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }

    /// Orientation seen from the reversed line.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// Exact for every input; the value is twice the signed area of `(a, b, c)`.
pub fn orient2d<C: Coordinate>(a: &Point2<C>, b: &Point2<C>, c: &Point2<C>) -> C::Wide {
    C::orient2d(a, b, c)
}
