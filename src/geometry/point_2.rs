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

use std::fmt;

use crate::geometry::Vector2;
use crate::numeric::Coordinate;

/// A lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point2<C> {
    pub x: C,
    pub y: C,
}

impl<C> Point2<C> {
    pub fn new(x: C, y: C) -> Self {
        Self { x, y }
    }
}

impl<C: Coordinate> Point2<C> {
    /// Exact difference `other - self` in the wide type.
    pub fn vector_to(&self, other: &Point2<C>) -> Vector2<C::Wide> {
        Vector2 {
            x: other.x.widen() - self.x.widen(),
            y: other.y.widen() - self.y.widen(),
        }
    }
}

impl<C> From<(C, C)> for Point2<C> {
    fn from((x, y): (C, C)) -> Self {
        Point2 { x, y }
    }
}

impl<C> From<[C; 2]> for Point2<C> {
    fn from([x, y]: [C; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<C: fmt::Display> fmt::Display for Point2<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::BigCoord;

    #[test]
    fn vector_to_is_widened() {
        let a = Point2::new(i8::MIN, i8::MAX);
        let b = Point2::new(i8::MAX, i8::MIN);
        let v = a.vector_to(&b);
        assert_eq!(v.x, 255);
        assert_eq!(v.y, -255);
    }

    #[test]
    fn lexicographic_order() {
        assert!(Point2::new(0, 5) < Point2::new(1, 0));
        assert!(Point2::new(1, 0) < Point2::new(1, 2));
    }

    #[test]
    fn display_and_conversions() {
        let p: Point2<i32> = (3, -4).into();
        assert_eq!(p.to_string(), "(3, -4)");
        let q: Point2<BigCoord> = Point2::new(BigCoord::from(1), BigCoord::from(2));
        assert_eq!(q.to_string(), "(1, 2)");
        assert_eq!(Point2::from([7, 8]), Point2::new(7, 8));
    }
}
