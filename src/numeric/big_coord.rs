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

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_traits::{Num, One, Signed, Zero};
use rug::Integer;

/// Arbitrary-precision lattice coordinate backed by `rug::Integer`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigCoord(pub Integer);

impl BigCoord {
    pub fn new<V: Into<Integer>>(v: V) -> Self {
        BigCoord(v.into())
    }
}

impl fmt::Display for BigCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! big_coord_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigCoord {
                fn from(v: $t) -> Self {
                    BigCoord(Integer::from(v))
                }
            }
        )*
    };
}

big_coord_from!(i8, i16, i32, i64, i128, isize, u64);

impl From<Integer> for BigCoord {
    fn from(v: Integer) -> Self {
        BigCoord(v)
    }
}

impl<'a, 'b> Add<&'b BigCoord> for &'a BigCoord {
    type Output = BigCoord;

    fn add(self, rhs: &'b BigCoord) -> BigCoord {
        let mut result = self.0.clone();
        result += &rhs.0;
        BigCoord(result)
    }
}

impl<'a, 'b> Sub<&'b BigCoord> for &'a BigCoord {
    type Output = BigCoord;

    fn sub(self, rhs: &'b BigCoord) -> BigCoord {
        let mut result = self.0.clone();
        result -= &rhs.0;
        BigCoord(result)
    }
}

impl<'a, 'b> Mul<&'b BigCoord> for &'a BigCoord {
    type Output = BigCoord;

    fn mul(self, rhs: &'b BigCoord) -> BigCoord {
        let mut result = self.0.clone();
        result *= &rhs.0;
        BigCoord(result)
    }
}

impl Add for BigCoord {
    type Output = BigCoord;
    fn add(mut self, rhs: BigCoord) -> BigCoord {
        self.0 += rhs.0;
        self
    }
}

impl Sub for BigCoord {
    type Output = BigCoord;
    fn sub(mut self, rhs: BigCoord) -> BigCoord {
        self.0 -= rhs.0;
        self
    }
}

impl Mul for BigCoord {
    type Output = BigCoord;
    fn mul(mut self, rhs: BigCoord) -> BigCoord {
        self.0 *= rhs.0;
        self
    }
}

macro_rules! big_coord_assign_ref {
    ($($tr:ident, $f:ident, $op:tt);*) => {
        $(
            impl<'b> $tr<&'b BigCoord> for BigCoord {
                type Output = BigCoord;
                fn $f(mut self, rhs: &'b BigCoord) -> BigCoord {
                    self.0 $op &rhs.0;
                    self
                }
            }
        )*
    };
}

big_coord_assign_ref!(Add, add, +=; Sub, sub, -=; Mul, mul, *=; Div, div, /=; Rem, rem, %=);

// Truncating division, matching the primitive integer types.
impl Div for BigCoord {
    type Output = BigCoord;
    fn div(mut self, rhs: BigCoord) -> BigCoord {
        self.0 /= rhs.0;
        self
    }
}

impl Rem for BigCoord {
    type Output = BigCoord;
    fn rem(mut self, rhs: BigCoord) -> BigCoord {
        self.0 %= rhs.0;
        self
    }
}

impl Neg for BigCoord {
    type Output = BigCoord;
    fn neg(self) -> BigCoord {
        BigCoord(-self.0)
    }
}

impl Zero for BigCoord {
    fn zero() -> Self {
        BigCoord(Integer::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for BigCoord {
    fn one() -> Self {
        BigCoord(Integer::from(1))
    }
}

impl Num for BigCoord {
    type FromStrRadixErr = rug::integer::ParseIntegerError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Integer::from_str_radix(s, radix as i32).map(BigCoord)
    }
}

impl Signed for BigCoord {
    fn abs(&self) -> Self {
        BigCoord(self.0.clone().abs())
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self.0 <= other.0 {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        BigCoord(self.0.clone().signum())
    }

    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }

    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
}
