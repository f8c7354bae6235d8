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

//! Synthetic point sets, mostly after Blelloch et al. (1999).

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::{Error, Result};
use crate::geometry::Point2;

#[derive(Clone, Debug)]
pub struct Generator {
    rng: StdRng,
    seed: Option<u64>,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Generator { rng, seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sample of U[0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.rng.random()
    }

    /// Sample of N(0, 1).
    pub fn normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    /// Uniform points in the unit square `[0,1)^2`.
    pub fn uniform_distribution(&mut self, n: usize) -> Vec<Point2> {
        (0..n)
            .map(|_| Point2::new(self.uniform(), self.uniform()))
            .collect()
    }

    /// Points with standard normal coordinates.
    pub fn normal_distribution(&mut self, n: usize) -> Vec<Point2> {
        (0..n)
            .map(|_| Point2::new(self.normal(), self.normal()))
            .collect()
    }

    /// Kuzmin distribution, scaled so that the farthest point lies on the
    /// unit circle. Strongly concentrated around the origin.
    pub fn kuzmin_distribution(&mut self, n: usize) -> Vec<Point2> {
        let mut points = Vec::with_capacity(n);
        let mut scale: f64 = 0.0;
        for _ in 0..n {
            let theta = 2.0 * PI * self.uniform();
            let x = self.uniform();
            let r = ((1.0 / (1.0 - x)).powi(2) - 1.0).sqrt();
            points.push(Point2::new(r * theta.cos(), r * theta.sin()));
            scale = scale.max(r);
        }
        if scale > 0.0 {
            for p in &mut points {
                p.set_coords(p.x / scale, p.y / scale);
            }
        }
        points
    }

    /// Points over `[0,1)` whose heights follow `b / (v - b v + b)`. Small
    /// values of `b` push almost every point onto the x-axis.
    pub fn line_distribution(&mut self, n: usize, b: f64) -> Result<Vec<Point2>> {
        if !(b > 0.0 && b <= 1.0) {
            return Err(Error::invalid_param("b", b, "must lie in (0, 1]"));
        }
        Ok((0..n)
            .map(|_| {
                let u = self.uniform();
                let v = self.uniform();
                Point2::new(u, b / (v - b * v + b))
            })
            .collect())
    }

    /// Uniform points in the unit disc.
    pub fn disc_distribution(&mut self, n: usize) -> Vec<Point2> {
        (0..n)
            .map(|_| {
                let r = self.uniform().sqrt();
                let theta = 2.0 * PI * self.uniform();
                Point2::new(r * theta.cos(), r * theta.sin())
            })
            .collect()
    }

    /// Points on `y = x^2` for `x` in `[-1, 1)`.
    pub fn parabola_distribution(&mut self, n: usize) -> Vec<Point2> {
        (0..n)
            .map(|_| {
                let x = 2.0 * self.uniform() - 1.0;
                Point2::new(x, x * x)
            })
            .collect()
    }

    /// Points on the two coordinate axes within `[-1, 1)`, alternating
    /// between the x-axis and the y-axis.
    pub fn axes_distribution(&mut self, n: usize) -> Vec<Point2> {
        (0..n)
            .map(|i| {
                let t = 2.0 * self.uniform() - 1.0;
                if i % 2 == 0 {
                    Point2::new(t, 0.0)
                } else {
                    Point2::new(0.0, t)
                }
            })
            .collect()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(None)
    }
}
