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

//! Biased randomized insertion orders (Amenta, Choi, Rote 2003).
//!
//! Points are shuffled and split into rounds of roughly doubling size; the
//! rounds are inserted in turn and, with [`SortingMethod::KdTree`], each
//! round is sorted along a kd-tree traversal so that consecutive points are
//! close to each other.

pub mod kdtree;

use std::ops::Range;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand_distr::{Binomial, Distribution};

pub use kdtree::{KdTree, Traversal};

use crate::geometry::Point2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortingMethod {
    /// Input order.
    None,
    /// Uniform shuffle.
    Random,
    /// Shuffle, split into rounds, sort each round along a kd-tree.
    #[default]
    KdTree,
}

#[derive(Clone, Debug)]
pub struct Brio {
    method: SortingMethod,
    rng: StdRng,
}

impl Brio {
    pub fn new(method: SortingMethod, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Brio { method, rng }
    }

    pub fn method(&self) -> SortingMethod {
        self.method
    }

    /// Permutation of `0..points.len()` giving the insertion order.
    pub fn order(&mut self, points: &[Point2]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..points.len()).collect();
        match self.method {
            SortingMethod::None => {}
            SortingMethod::Random => order.shuffle(&mut self.rng),
            SortingMethod::KdTree => {
                order.shuffle(&mut self.rng);
                let rounds = self.rounds(order.len());
                debug!("BRIO rounds: {:?}", rounds.iter().map(|r| r.len()).collect::<Vec<_>>());
                for round in rounds {
                    let slice = &mut order[round];
                    let tree = KdTree::build(points, slice);
                    slice.copy_from_slice(&tree.traverse(Traversal::Alternating));
                }
            }
        }
        order
    }

    /// Splits `0..n` into `floor(log2 n)` consecutive rounds. Round `i` for
    /// `i >= 1` takes a Binomial(remaining, 1/2) share of the points left
    /// after the rounds above it; round 0 takes the rest.
    pub fn rounds(&mut self, n: usize) -> Vec<Range<usize>> {
        if n < 4 {
            return vec![0..n];
        }
        let r = n.ilog2() as usize;
        let mut sizes = vec![0; r];
        let mut remaining = n;
        for i in (1..r).rev() {
            let size = Binomial::new(remaining as u64, 0.5)
                .map_or(remaining / 2, |d| d.sample(&mut self.rng) as usize);
            sizes[i] = size;
            remaining -= size;
        }
        sizes[0] = remaining;

        let mut start = 0;
        sizes
            .into_iter()
            .map(|size| {
                let range = start..start + size;
                start += size;
                range
            })
            .collect()
    }
}

/// Sum of squared distances between consecutive points of `order`.
pub fn squared_walk_length(points: &[Point2], order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|w| points[w[0]].squared_distance(&points[w[1]]))
        .sum()
}
