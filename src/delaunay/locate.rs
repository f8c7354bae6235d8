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

//! Stochastic visibility walk (Devillers, Pion, Teillaud 2002).

use rand::Rng;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::geometry::Point2;
use crate::kernel::{Orientation, orient2d};
use crate::tds::{Face, INFINITE_VERTEX, Tds, VertexId, ccw, cw};

/// Result of a point location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Strictly inside a finite face.
    InFace(Face),
    /// On the edge opposite `face[i]`, strictly between its endpoints.
    OnEdge(Face, usize),
    OnVertex(VertexId),
    /// Outside the convex hull; the infinite face reached by the walk.
    OutsideHull(Face),
}

impl Location {
    pub fn face(&self) -> Option<Face> {
        match *self {
            Location::InFace(f) | Location::OnEdge(f, _) | Location::OutsideHull(f) => Some(f),
            Location::OnVertex(_) => None,
        }
    }
}

fn neighbor<D: Tds + ?Sized>(tds: &D, i: usize, face: Face) -> Result<Face> {
    tds.neighbor(i, face)
        .ok_or_else(|| Error::BoundaryEdge(face[cw(i)], face[ccw(i)]))
}

/// Walks from `start` towards `p`. At each finite face, one of the edges
/// having `p` strictly on their outer side is crossed, chosen uniformly at
/// random; when there is none the face contains `p`.
pub(crate) fn walk<D, R>(
    tds: &D,
    points: &[Point2],
    p: &Point2,
    start: Face,
    rng: &mut R,
    max_steps: usize,
) -> Result<Location>
where
    D: Tds + ?Sized,
    R: Rng + ?Sized,
{
    let mut face = start;
    if let Some(i) = face.index_of(INFINITE_VERTEX) {
        face = neighbor(tds, i, face)?;
    }

    for _ in 0..max_steps {
        let q = face.vertices().map(|v| points[v]);
        let side: [Orientation; 3] = std::array::from_fn(|k| orient2d(&q[ccw(k)], &q[cw(k)], p));

        let exits: SmallVec<[usize; 3]> = (0..3)
            .filter(|&k| side[k] == Orientation::Clockwise)
            .collect();
        if !exits.is_empty() {
            let k = exits[rng.random_range(0..exits.len())];
            face = neighbor(tds, k, face)?;
            if face.is_infinite() {
                return Ok(Location::OutsideHull(face));
            }
            continue;
        }

        let on: SmallVec<[usize; 3]> = (0..3)
            .filter(|&k| side[k] == Orientation::Collinear)
            .collect();
        return match on.as_slice() {
            [] => Ok(Location::InFace(face)),
            &[k] => Ok(Location::OnEdge(face, k)),
            &[k1, k2] => Ok(Location::OnVertex(face[3 - k1 - k2])),
            _ => Err(Error::DegenerateFace(face)),
        };
    }
    Err(Error::WalkFailed(max_steps))
}
