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

//! Boundary between the geometric types and whatever surface draws them.
//!
//! Geometry never depends on a surface: a surface implements [`Board2D`], and
//! shapes implement [`Drawable`] by handing their defining points to it.

use crate::geometry::{HalfPlane, OrientedLine, Point2};
use crate::numeric::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    pub const GRAY: Rgb = Rgb {
        r: 160,
        g: 160,
        b: 160,
    };
}

/// Pen settings plus the style tag a surface may key custom styling on.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub name: String,
    pub pen: Rgb,
    pub width: f32,
}

impl Style {
    pub fn new(name: impl Into<String>, pen: Rgb, width: f32) -> Self {
        Self {
            name: name.into(),
            pen,
            width,
        }
    }
}

/// A drawing surface.
pub trait Board2D<C> {
    fn draw_line(&mut self, from: &Point2<C>, to: &Point2<C>, style: &Style);
}

pub trait Drawable<C> {
    /// Tag identifying the kind of shape to the surface.
    fn style_name(&self) -> &'static str;

    fn default_style(&self) -> Style;

    fn draw_with<B: Board2D<C>>(&self, board: &mut B, style: &Style);

    fn draw<B: Board2D<C>>(&self, board: &mut B) {
        self.draw_with(board, &self.default_style());
    }
}

impl<C: Coordinate> Drawable<C> for OrientedLine<C> {
    fn style_name(&self) -> &'static str {
        "OrientedLine"
    }

    fn default_style(&self) -> Style {
        Style::new(self.style_name(), Rgb::BLACK, 1.0)
    }

    fn draw_with<B: Board2D<C>>(&self, board: &mut B, style: &Style) {
        board.draw_line(self.first(), self.second(), style);
    }
}

impl<C: Coordinate> Drawable<C> for HalfPlane<C> {
    fn style_name(&self) -> &'static str {
        "HalfPlane"
    }

    fn default_style(&self) -> Style {
        Style::new(self.style_name(), Rgb::GRAY, 1.0)
    }

    fn draw_with<B: Board2D<C>>(&self, board: &mut B, style: &Style) {
        self.boundary().draw_with(board, style);
    }
}

/// One recorded `draw_line` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke<C> {
    pub from: Point2<C>,
    pub to: Point2<C>,
    pub style: Style,
}

/// Surface that just records what it was asked to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList<C> {
    strokes: Vec<Stroke<C>>,
}

impl<C> Default for DisplayList<C> {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }
}

impl<C> DisplayList<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke<C>] {
        &self.strokes
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

impl<C: Clone> Board2D<C> for DisplayList<C> {
    fn draw_line(&mut self, from: &Point2<C>, to: &Point2<C>, style: &Style) {
        self.strokes.push(Stroke {
            from: from.clone(),
            to: to.clone(),
            style: style.clone(),
        });
    }
}
