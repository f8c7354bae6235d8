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

//! Conflict region of a new point.

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::error::{Error, Result};
use crate::geometry::Point2;
use crate::kernel::{CircleSide, Orientation, in_between, incircle, orient2d};
use crate::tds::{Face, INFINITE_VERTEX, Tds, VertexId, ccw, cw};

/// Faces to remove and the boundary of the hole they leave, as directed
/// edges seen from inside the hole.
#[derive(Clone, Debug, Default)]
pub(crate) struct Cavity {
    pub faces: Vec<Face>,
    pub boundary: Vec<(VertexId, VertexId)>,
}

/// `p` conflicts with a finite face whose closed circumdisc contains it,
/// and with an infinite face `(inf, a, b)` when it sees the hull edge
/// `a b` from outside or lies strictly inside that edge.
pub(crate) fn in_conflict(points: &[Point2], p: &Point2, face: Face) -> bool {
    match face.index_of(INFINITE_VERTEX) {
        Some(i) => {
            let a = &points[face[ccw(i)]];
            let b = &points[face[cw(i)]];
            match orient2d(a, b, p) {
                Orientation::CounterClockwise => true,
                Orientation::Collinear => in_between(a, b, p),
                Orientation::Clockwise => false,
            }
        }
        None => {
            let [a, b, c] = face.vertices().map(|v| &points[v]);
            incircle(a, b, c, p) != CircleSide::Outside
        }
    }
}

/// Breadth-first search of the faces in conflict with `p`, starting from
/// `first`, which must be in conflict.
pub(crate) fn find_conflicts<D: Tds + ?Sized>(
    tds: &D,
    points: &[Point2],
    p: &Point2,
    first: Face,
) -> Result<Cavity> {
    let mut cavity = Cavity {
        faces: vec![first],
        boundary: Vec::new(),
    };
    let mut visited = AHashSet::new();
    visited.insert(first.canonical());
    let mut queue = VecDeque::from([first]);

    while let Some(f) = queue.pop_front() {
        for i in 0..3 {
            let n = tds
                .neighbor(i, f)
                .ok_or_else(|| Error::BoundaryEdge(f[cw(i)], f[ccw(i)]))?;
            if visited.contains(&n.canonical()) {
                continue;
            }
            if in_conflict(points, p, n) {
                visited.insert(n.canonical());
                cavity.faces.push(n);
                queue.push_back(n);
            } else {
                cavity.boundary.push(f.edge(i));
            }
        }
    }
    Ok(cavity)
}
