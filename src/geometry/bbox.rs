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

use crate::geometry::{Axis, Point2};

/// An axis-aligned bounding box in the plane.
///
/// The default box is empty (`min` above `max`), so expanding it by any point
/// yields the degenerate box around that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Point2,
    max: Point2,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    pub fn new(min: Point2, max: Point2) -> Self {
        BoundingBox { min, max }
    }

    pub fn empty() -> Self {
        BoundingBox {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing `points`, or `None` for an empty slice.
    pub fn fit<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bbox = BoundingBox::new(*first, *first);
        bbox.expand(points);
        Some(bbox)
    }

    /// Grows the box so that it contains every point of `points`.
    pub fn expand<'a, I>(&mut self, points: I)
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        for p in points {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
        }
    }

    /// Scales the box about its centre.
    pub fn scale(&mut self, factor: f64) {
        let c = self.center();
        self.min = Point2::new(
            factor * (self.min.x - c.x) + c.x,
            factor * (self.min.y - c.y) + c.y,
        );
        self.max = Point2::new(
            factor * (self.max.x - c.x) + c.x,
            factor * (self.max.y - c.y) + c.y,
        );
    }

    pub fn min(&self) -> &Point2 {
        &self.min
    }

    pub fn max(&self) -> &Point2 {
        &self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }

    /// Axis with the largest extent; ties go to `Y`.
    pub fn longest_axis(&self) -> Axis {
        if self.width() > self.height() {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// Closed containment test.
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Splits the box at `value` along `axis` into the lower and upper halves.
    pub fn split(&self, axis: Axis, value: f64) -> (BoundingBox, BoundingBox) {
        let mut lower = *self;
        let mut upper = *self;
        match axis {
            Axis::X => {
                lower.max.x = value;
                upper.min.x = value;
            }
            Axis::Y => {
                lower.max.y = value;
                upper.min.y = value;
            }
        }
        (lower, upper)
    }
}
