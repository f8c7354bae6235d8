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

use crate::geometry::Point2;
use crate::numeric::{Sign, incircle_sign, orient2d_sign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl From<Sign> for Orientation {
    fn from(s: Sign) -> Self {
        match s {
            Sign::Negative => Orientation::Clockwise,
            Sign::Zero => Orientation::Collinear,
            Sign::Positive => Orientation::CounterClockwise,
        }
    }
}

/// Position of a point relative to the circle through a ccw triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CircleSide {
    Outside,
    OnCircle,
    Inside,
}

impl From<Sign> for CircleSide {
    fn from(s: Sign) -> Self {
        match s {
            Sign::Negative => CircleSide::Outside,
            Sign::Zero => CircleSide::OnCircle,
            Sign::Positive => CircleSide::Inside,
        }
    }
}

#[inline]
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    orient2d_sign(a, b, c).into()
}

/// Where `d` lies with respect to the circumcircle of the ccw triangle
/// `(a, b, c)`.
#[inline]
pub fn incircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> CircleSide {
    incircle_sign(a, b, c, d).into()
}

/// For collinear `p`, `q`, `r`: true when `r` lies strictly between `p` and
/// `q`. Compares x coordinates, or y coordinates on a vertical line.
pub fn in_between(p: &Point2, q: &Point2, r: &Point2) -> bool {
    let (a, b, c) = if p.x != q.x {
        (p.x, q.x, r.x)
    } else {
        (p.y, q.y, r.y)
    };
    (a < c && c < b) || (b < c && c < a)
}
