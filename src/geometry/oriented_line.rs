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

use num_traits::Zero;

use crate::error::LineError;
use crate::geometry::{Point2, Vector2};
use crate::kernel::{Orientation, orient2d};
use crate::log::debug;
use crate::numeric::Coordinate;

/// Infinite line through two distinct lattice points, directed from `first`
/// toward `second`.
///
/// The two points are fixed at construction. Every query is an exact integer
/// computation carried out in `C::Wide`, so no answer is ever rounded or
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrientedLine<C> {
    first: Point2<C>,
    second: Point2<C>,
}

impl<C: Coordinate> OrientedLine<C> {
    /// Builds the line through `first` and `second`.
    ///
    /// Fails with [`LineError::Degenerate`] when the points coincide, so every
    /// `OrientedLine` in existence is valid.
    pub fn new(first: Point2<C>, second: Point2<C>) -> Result<Self, LineError> {
        if first == second {
            debug!("rejecting degenerate line through {}", first);
            return Err(LineError::Degenerate {
                point: first.to_string(),
            });
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &Point2<C> {
        &self.first
    }

    pub fn second(&self) -> &Point2<C> {
        &self.second
    }

    /// `true` iff the defining points differ. Holds for every constructed line.
    pub fn is_valid(&self) -> bool {
        self.first != self.second
    }

    /// Direction vector `second - first`.
    pub fn direction(&self) -> Vector2<C::Wide> {
        self.first.vector_to(&self.second)
    }

    /// Cross product of the direction with `point - first`.
    ///
    /// - `> 0`: `point` is strictly left of the line (counter-clockwise side)
    /// - `< 0`: strictly right (clockwise side)
    /// - `= 0`: on the line
    ///
    /// The magnitude is twice the area of the triangle `(first, second,
    /// point)`. Divide by the direction's length to get a Euclidean distance.
    pub fn signed_distance(&self, point: &Point2<C>) -> C::Wide {
        orient2d(&self.first, &self.second, point)
    }

    /// [`signed_distance`](Self::signed_distance) narrowed back to `C`.
    ///
    /// Fails with [`LineError::Overflow`] instead of wrapping when the exact
    /// value is outside the range of `C`.
    pub fn checked_signed_distance(&self, point: &Point2<C>) -> Result<C, LineError> {
        let wide = self.signed_distance(point);
        C::narrow(&wide).ok_or_else(|| {
            debug!("signed distance {} does not fit the coordinate type", wide);
            LineError::Overflow {
                value: wide.to_string(),
            }
        })
    }

    pub fn orientation(&self, point: &Point2<C>) -> Orientation {
        Orientation::of(&self.signed_distance(point))
    }

    /// `true` if `point` lies exactly on the line.
    pub fn contains(&self, point: &Point2<C>) -> bool {
        self.signed_distance(point).is_zero()
    }

    /// The same line traversed from `second` to `first`.
    pub fn reversed(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }

    /// `true` if both directions are collinear, whichever way they point.
    pub fn is_parallel_to(&self, other: &OrientedLine<C>) -> bool {
        self.direction().cross(&other.direction()).is_zero()
    }

    /// `true` if `other` spans the same point set, whatever its direction.
    pub fn is_coincident_with(&self, other: &OrientedLine<C>) -> bool {
        self.contains(&other.first) && self.contains(&other.second)
    }
}

impl<C: Coordinate> TryFrom<(Point2<C>, Point2<C>)> for OrientedLine<C> {
    type Error = LineError;

    fn try_from((first, second): (Point2<C>, Point2<C>)) -> Result<Self, LineError> {
        Self::new(first, second)
    }
}

impl<C: fmt::Display> fmt::Display for OrientedLine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[OrientedLine] passing through: {} {}",
            self.first, self.second
        )
    }
}
