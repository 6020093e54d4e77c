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

use crate::error::LineError;
use crate::geometry::{OrientedLine, Point2};
use crate::numeric::Coordinate;

/// Closed half-plane: the points on or to the left of its boundary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfPlane<C> {
    boundary: OrientedLine<C>,
}

impl<C: Coordinate> HalfPlane<C> {
    pub fn left_of(line: OrientedLine<C>) -> Self {
        Self { boundary: line }
    }

    pub fn right_of(line: OrientedLine<C>) -> Self {
        Self {
            boundary: line.reversed(),
        }
    }

    /// Half-plane left of the line from `first` to `second`.
    pub fn through(first: Point2<C>, second: Point2<C>) -> Result<Self, LineError> {
        Ok(Self::left_of(OrientedLine::new(first, second)?))
    }

    /// Boundary line, oriented so that the interior lies to its left.
    pub fn boundary(&self) -> &OrientedLine<C> {
        &self.boundary
    }

    pub fn contains(&self, p: &Point2<C>) -> bool {
        !self.boundary.signed_distance(p).is_negative()
    }

    pub fn contains_strictly(&self, p: &Point2<C>) -> bool {
        self.boundary.signed_distance(p).is_positive()
    }

    /// The opposite closed half-plane. Both contain the boundary.
    pub fn complement(&self) -> Self {
        Self::right_of(self.boundary.clone())
    }
}
