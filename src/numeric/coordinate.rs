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

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{NumRef, Signed};

use crate::geometry::Point2;
use crate::log::debug;
use crate::numeric::big_coord::BigCoord;

/// Integer type able to hold an exact orientation determinant.
///
/// Blanket-implemented; any `num_traits::Signed` integer that also takes its
/// right operand by reference and is totally ordered, hashable and printable
/// qualifies.
pub trait Exact: Signed + NumRef + Clone + Ord + Hash + Debug + Display + Send + Sync {}

impl<T> Exact for T where
    T: Signed + NumRef + Clone + Ord + Hash + Debug + Display + Send + Sync
{
}

/// A signed lattice coordinate.
///
/// Every coordinate type names a `Wide` type in which the cross product of two
/// coordinate differences is representable without overflow. For a `B`-bit
/// input that needs `2B + 3` bits, so `i32` widens to `i128` while `i64` and up
/// widen to [`BigCoord`].
pub trait Coordinate: Clone + Ord + Hash + Debug + Display + Send + Sync {
    type Wide: Exact;

    fn widen(&self) -> Self::Wide;

    /// Converts back from the wide type, `None` if the value does not fit.
    fn narrow(wide: &Self::Wide) -> Option<Self>;

    /// Twice the signed area of the triangle `(a, b, c)`.
    ///
    /// Positive when `c` lies to the left of the directed line `a -> b`.
    fn orient2d(a: &Point2<Self>, b: &Point2<Self>, c: &Point2<Self>) -> Self::Wide {
        a.vector_to(b).cross(&a.vector_to(c))
    }
}

macro_rules! impl_widening_coordinate {
    ($t:ty => $w:ty) => {
        impl Coordinate for $t {
            type Wide = $w;

            #[inline]
            fn widen(&self) -> $w {
                <$w>::from(*self)
            }

            #[inline]
            fn narrow(wide: &$w) -> Option<$t> {
                <$t>::try_from(*wide).ok()
            }
        }
    };
}

impl_widening_coordinate!(i8 => i32);
impl_widening_coordinate!(i16 => i64);
impl_widening_coordinate!(i32 => i128);

/// Orientation determinant in checked `i128` arithmetic.
///
/// `None` as soon as any difference, product or the final subtraction leaves
/// the `i128` range.
pub fn checked_orient2d_i128(a: [i128; 2], b: [i128; 2], c: [i128; 2]) -> Option<i128> {
    let vx = b[0].checked_sub(a[0])?;
    let vy = b[1].checked_sub(a[1])?;
    let wx = c[0].checked_sub(a[0])?;
    let wy = c[1].checked_sub(a[1])?;
    vx.checked_mul(wy)?.checked_sub(vy.checked_mul(wx)?)
}

// Machine types too wide for an `i128` determinant: try the checked fast path
// first and only fall back to `rug` when it overflows.
macro_rules! impl_filtered_coordinate {
    ($t:ty, $to:ident) => {
        impl Coordinate for $t {
            type Wide = BigCoord;

            #[inline]
            fn widen(&self) -> BigCoord {
                BigCoord::from(*self)
            }

            #[inline]
            fn narrow(wide: &BigCoord) -> Option<$t> {
                wide.0.$to()
            }

            fn orient2d(a: &Point2<$t>, b: &Point2<$t>, c: &Point2<$t>) -> BigCoord {
                let lift = |p: &Point2<$t>| [p.x as i128, p.y as i128];
                match checked_orient2d_i128(lift(a), lift(b), lift(c)) {
                    Some(det) => BigCoord::from(det),
                    None => {
                        debug!(
                            "orient2d: i128 filter overflowed for {} {} {}, using exact integers",
                            a, b, c
                        );
                        a.vector_to(b).cross(&a.vector_to(c))
                    }
                }
            }
        }
    };
}

impl_filtered_coordinate!(i64, to_i64);
impl_filtered_coordinate!(isize, to_isize);
impl_filtered_coordinate!(i128, to_i128);

impl Coordinate for BigCoord {
    type Wide = BigCoord;

    fn widen(&self) -> BigCoord {
        self.clone()
    }

    fn narrow(wide: &BigCoord) -> Option<BigCoord> {
        Some(wide.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_rejects_out_of_range() {
        assert_eq!(i8::narrow(&127), Some(127i8));
        assert_eq!(i8::narrow(&128), None);
        assert_eq!(i8::narrow(&-129), None);
        assert_eq!(i64::narrow(&BigCoord::from(i64::MIN)), Some(i64::MIN));
        assert_eq!(i64::narrow(&BigCoord::from(u64::MAX)), None);
    }

    #[test]
    fn checked_filter_detects_overflow() {
        assert_eq!(checked_orient2d_i128([0, 0], [10, 0], [5, 5]), Some(50));
        assert_eq!(
            checked_orient2d_i128([i128::MIN, 0], [i128::MAX, 0], [0, 1]),
            None
        );
    }

    #[test]
    fn filtered_and_exact_paths_agree() {
        let a = Point2::new(i64::MIN, i64::MIN);
        let b = Point2::new(i64::MAX, i64::MAX);
        let c = Point2::new(i64::MIN, i64::MAX);
        let expected = &BigCoord::from(u64::MAX) * &BigCoord::from(u64::MAX);
        assert_eq!(i64::orient2d(&a, &b, &c), expected);

        let a = Point2::new(-3i64, 4);
        let b = Point2::new(7i64, -2);
        let c = Point2::new(1i64, 1);
        let slow = a.vector_to(&b).cross(&a.vector_to(&c));
        assert_eq!(i64::orient2d(&a, &b, &c), slow);
    }
}
