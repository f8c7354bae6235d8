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

use crate::brio::SortingMethod;

/// Settings of a [`DelaunayTriangulation`](crate::DelaunayTriangulation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DelaunayConfig {
    /// Insertion order of each batch of points.
    pub sorting: SortingMethod,
    /// Seed of the random source used for insertion orders and walks.
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Step budget of a point location walk. `None` derives it from the
    /// number of faces.
    pub max_walk_steps: Option<usize>,
}

impl DelaunayConfig {
    pub fn with_sorting(mut self, sorting: SortingMethod) -> Self {
        self.sorting = sorting;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_walk_steps(mut self, steps: usize) -> Self {
        self.max_walk_steps = Some(steps);
        self
    }

    pub(crate) fn walk_budget(&self, faces: usize) -> usize {
        self.max_walk_steps.unwrap_or(10 * faces + 100)
    }
}
