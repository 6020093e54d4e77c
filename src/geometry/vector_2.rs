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

use crate::numeric::Exact;

/// Displacement between two lattice points, held in a wide exact type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector2<W> {
    pub x: W,
    pub y: W,
}

impl<W: Exact> Vector2<W> {
    pub fn new(x: W, y: W) -> Self {
        Self { x, y }
    }

    /// z-component of the 3D cross product; positive when `other` turns
    /// counter-clockwise from `self`.
    pub fn cross(&self, other: &Vector2<W>) -> W {
        self.x.clone() * &other.y - self.y.clone() * &other.x
    }

    pub fn dot(&self, other: &Vector2<W>) -> W {
        self.x.clone() * &other.x + self.y.clone() * &other.y
    }

    pub fn norm_squared(&self) -> W {
        self.dot(self)
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn reversed(&self) -> Self {
        Vector2 {
            x: -self.x.clone(),
            y: -self.y.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::BigCoord;

    #[test]
    fn cross_sign_follows_turn() {
        let e1 = Vector2::new(1i64, 0);
        let e2 = Vector2::new(0i64, 1);
        assert_eq!(e1.cross(&e2), 1);
        assert_eq!(e2.cross(&e1), -1);
        assert_eq!(e1.cross(&e1), 0);
    }

    #[test]
    fn big_products_take_operands_by_reference() {
        let m = BigCoord::from(u64::MAX);
        let v = Vector2::new(m.clone(), BigCoord::from(0));
        let w = Vector2::new(BigCoord::from(0), m.clone());
        assert_eq!(v.cross(&w), &m * &m);
        assert_eq!(v.dot(&v), &m * &m);
        assert_eq!(w.cross(&v), -(&m * &m));
        // Operands are left untouched.
        assert_eq!(v.x, m);
    }

    #[test]
    fn dot_and_norm() {
        let v = Vector2::new(3i32, 4);
        assert_eq!(v.norm_squared(), 25);
        assert_eq!(v.dot(&v.reversed()), -25);
        assert!(Vector2::new(0i32, 0).is_zero());
    }
}
