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

//! Choice of the guard vertices.
//!
//! The non-guards form a greedy maximal independent set among the vertices
//! whose link is a single path or cycle; everything else with at least one
//! face is a guard. Every edge then has a guard endpoint and every face at
//! least two.

use std::borrow::Cow;

use log::debug;

use crate::error::Result;
use crate::tds::{Link, Tds, VertexId};

/// Order in which candidates are offered to the independent set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GuardStrategy {
    /// Increasing degree, ties by id. Low-degree vertices leave more room for
    /// other non-guards and give the smallest guard sets in practice.
    #[default]
    MinDegree,
    /// Increasing id.
    Sequential,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardSet {
    is_guard: Vec<bool>,
    count: usize,
}

impl GuardSet {
    pub fn select<T: Tds + ?Sized>(tds: &T, strategy: GuardStrategy) -> Result<Self> {
        let n = tds.number_of_vertices();
        let links = (0..n)
            .map(|v| tds.link(v).map(Cow::into_owned))
            .collect::<Result<Vec<Link>>>()?;

        let mut order: Vec<VertexId> = (0..n).collect();
        if strategy == GuardStrategy::MinDegree {
            order.sort_by_key(|&v| (links[v].degree(), v));
        }

        let mut blocked = vec![false; n];
        let mut independent = vec![false; n];
        for v in order {
            let link = &links[v];
            if link.is_empty() || !link.is_manifold() || blocked[v] {
                continue;
            }
            independent[v] = true;
            for w in link.vertices() {
                blocked[w] = true;
            }
        }

        let is_guard: Vec<bool> = (0..n)
            .map(|v| !links[v].is_empty() && !independent[v])
            .collect();
        let set = GuardSet::from_flags(is_guard);
        debug!("{strategy:?} selection: {} guards out of {n} vertices", set.len());
        Ok(set)
    }

    pub fn from_flags(is_guard: Vec<bool>) -> Self {
        let count = is_guard.iter().filter(|&&g| g).count();
        GuardSet { is_guard, count }
    }

    pub fn is_guard(&self, v: VertexId) -> bool {
        self.is_guard.get(v).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn number_of_vertices(&self) -> usize {
        self.is_guard.len()
    }

    pub fn guards(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.is_guard.len()).filter(|&v| self.is_guard[v])
    }

    pub fn non_guards(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.is_guard.len()).filter(|&v| !self.is_guard[v])
    }

    /// Every edge of `tds` has at least one guard endpoint.
    pub fn covers_edges<T: Tds + ?Sized>(&self, tds: &T) -> bool {
        self.non_guards().all(|v| {
            tds.link(v)
                .is_ok_and(|l| l.vertices().all(|w| self.is_guard(w)))
        })
    }

    /// Every face of `tds` has at least two guards.
    pub fn covers_faces<T: Tds + ?Sized>(&self, tds: &T) -> bool {
        tds.faces().iter().all(|f| {
            f.vertices().iter().filter(|&&v| self.is_guard(v)).count() >= 2
        })
    }
}
