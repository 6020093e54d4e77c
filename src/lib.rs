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

//! Exact oriented lines on the integer lattice.
//!
//! [`OrientedLine`] is the line through two distinct lattice points. Its
//! [`signed_distance`](OrientedLine::signed_distance) classifies any other
//! point as left of, right of, or on the line without rounding or overflow,
//! whatever [`Coordinate`] type the points use.
//!
//! ```
//! use dgeom::{OrientedLine, Point2};
//!
//! let line = OrientedLine::new(Point2::new(0i32, 0), Point2::new(10, 0)).unwrap();
//! assert_eq!(line.signed_distance(&Point2::new(5, 5)), 50);
//! assert_eq!(line.signed_distance(&Point2::new(5, -5)), -50);
//! ```

pub mod draw;
pub mod error;
pub mod geometry;
pub mod kernel;
mod log;
pub mod numeric;

pub use error::LineError;
pub use geometry::{HalfPlane, OrientedLine, Point2, Vector2};
pub use kernel::{Orientation, orient2d};
pub use numeric::{BigCoord, Coordinate};
