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

//! Adaptive determinant signs.
//!
//! Both determinants are first evaluated in `f64` and compared against
//! Shewchuk's static error bounds. Only results that fall inside the bound
//! are recomputed with `rug::Rational`, which is exact for every finite
//! double.

use std::cmp::Ordering;

use rug::Rational;

use crate::geometry::Point2;

const EPSILON: f64 = f64::EPSILON / 2.0;
const CCW_ERRBOUND: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;
const ICC_ERRBOUND: f64 = (10.0 + 96.0 * EPSILON) * EPSILON;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn of(v: f64) -> Sign {
        if v > 0.0 {
            Sign::Positive
        } else if v < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }
}

impl From<Ordering> for Sign {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

// Callers only pass finite coordinates.
fn rat(v: f64) -> Rational {
    Rational::from_f64(v).unwrap_or_default()
}

/// Sign of `(b - a) x (c - a)`: positive when `a, b, c` turn counter-clockwise.
pub fn orient2d_sign(a: &Point2, b: &Point2, c: &Point2) -> Sign {
    let detleft = (a.x - c.x) * (b.y - c.y);
    let detright = (a.y - c.y) * (b.x - c.x);
    let det = detleft - detright;
    let errbound = CCW_ERRBOUND * (detleft.abs() + detright.abs());
    if det.is_finite() && errbound.is_finite() && (det > errbound || -det > errbound) {
        return Sign::of(det);
    }
    orient2d_exact(a, b, c)
}

fn orient2d_exact(a: &Point2, b: &Point2, c: &Point2) -> Sign {
    let (ax, ay) = (rat(a.x), rat(a.y));
    let bx = rat(b.x) - &ax;
    let by = rat(b.y) - &ay;
    let cx = rat(c.x) - &ax;
    let cy = rat(c.y) - &ay;
    let det = bx * cy - by * cx;
    det.cmp0().into()
}

/// Sign of the incircle determinant: positive when `d` lies inside the circle
/// through the counter-clockwise triangle `a, b, c`.
pub fn incircle_sign(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Sign {
    let (adx, ady) = (a.x - d.x, a.y - d.y);
    let (bdx, bdy) = (b.x - d.x, b.y - d.y);
    let (cdx, cdy) = (c.x - d.x, c.y - d.y);

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);
    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;
    let errbound = ICC_ERRBOUND * permanent;
    if det.is_finite() && errbound.is_finite() && (det > errbound || -det > errbound) {
        return Sign::of(det);
    }
    incircle_exact(a, b, c, d)
}

fn incircle_exact(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Sign {
    let (dx, dy) = (rat(d.x), rat(d.y));
    let adx = rat(a.x) - &dx;
    let ady = rat(a.y) - &dy;
    let bdx = rat(b.x) - &dx;
    let bdy = rat(b.y) - &dy;
    let cdx = rat(c.x) - &dx;
    let cdy = rat(c.y) - &dy;

    let alift = adx.clone() * &adx + ady.clone() * &ady;
    let blift = bdx.clone() * &bdx + bdy.clone() * &bdy;
    let clift = cdx.clone() * &cdx + cdy.clone() * &cdy;

    let a_minor = bdx.clone() * &cdy - cdx.clone() * &bdy;
    let b_minor = cdx * &ady - adx.clone() * &cdy;
    let c_minor = adx * &bdy - bdx * &ady;

    let det = alift * a_minor + blift * b_minor + clift * c_minor;
    det.cmp0().into()
}
