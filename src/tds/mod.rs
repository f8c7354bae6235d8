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

//! Triangulation data structures.
//!
//! Every structure stores an oriented, combinatorial triangulation and
//! answers the same queries through the [`Tds`] trait. Faces are
//! counter-clockwise vertex triples; the link of a vertex `v` lists the
//! wedges `(a, b)` of its faces `(v, a, b)` as ccw paths or cycles.

pub mod check;
pub mod edit;
pub mod faces;
pub mod link;
pub mod links;

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

pub use faces::{FaceHandle, FaceMesh};
pub use link::{Link, LinkPath};
pub use links::LinkVertices;

use crate::error::Result;

pub type VertexId = usize;

/// Vertex closing the convex hull into a topological sphere.
pub const INFINITE_VERTEX: VertexId = 0;

#[inline]
pub const fn ccw(i: usize) -> usize {
    (i + 1) % 3
}

#[inline]
pub const fn cw(i: usize) -> usize {
    (i + 2) % 3
}

/// An oriented triangle. Rotations of the triple denote the same face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face(pub [VertexId; 3]);

impl Face {
    #[inline]
    pub const fn new(v0: VertexId, v1: VertexId, v2: VertexId) -> Self {
        Face([v0, v1, v2])
    }

    #[inline]
    pub fn vertices(&self) -> [VertexId; 3] {
        self.0
    }

    pub fn index_of(&self, v: VertexId) -> Option<usize> {
        self.0.iter().position(|&w| w == v)
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.0.contains(&v)
    }

    pub fn is_infinite(&self) -> bool {
        self.contains(INFINITE_VERTEX)
    }

    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.0;
        a == b || b == c || c == a
    }

    /// The same face listed from its `k`-th vertex.
    #[inline]
    pub fn rotated(&self, k: usize) -> Face {
        Face::new(self.0[k % 3], self.0[ccw(k % 3)], self.0[cw(k % 3)])
    }

    pub fn starting_at(&self, v: VertexId) -> Option<Face> {
        self.index_of(v).map(|k| self.rotated(k))
    }

    /// Rotation starting at the smallest vertex id.
    pub fn canonical(&self) -> Face {
        let [a, b, c] = self.0;
        if a <= b && a <= c {
            *self
        } else if b <= c {
            self.rotated(1)
        } else {
            self.rotated(2)
        }
    }

    /// Directed edge opposite the `i`-th vertex.
    #[inline]
    pub fn edge(&self, i: usize) -> (VertexId, VertexId) {
        (self.0[ccw(i)], self.0[cw(i)])
    }

    /// `(v, next, prev)` for each corner: the face contributes wedge
    /// `(next, prev)` to the link of `v`.
    #[inline]
    pub fn corners(&self) -> [(VertexId, VertexId, VertexId); 3] {
        let [a, b, c] = self.0;
        [(a, b, c), (b, c, a), (c, a, b)]
    }
}

impl Index<usize> for Face {
    type Output = VertexId;

    fn index(&self, i: usize) -> &VertexId {
        &self.0[i]
    }
}

impl From<[VertexId; 3]> for Face {
    fn from(v: [VertexId; 3]) -> Self {
        Face(v)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TdsStatistics {
    pub vertices: usize,
    pub faces: usize,
    pub edges: usize,
    pub storage_words: usize,
}

impl fmt::Display for TdsStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices, {} edges, {} faces, {} words",
            self.vertices, self.edges, self.faces, self.storage_words
        )
    }
}

/// Triangulation data structure.
///
/// Implementors keep vertex `0` as the infinite vertex and never delete
/// vertices; a vertex whose faces were all removed keeps an empty link.
/// Failed mutations leave the structure unchanged.
pub trait Tds {
    /// Number of vertices, the infinite vertex included.
    fn number_of_vertices(&self) -> usize;

    fn number_of_faces(&self) -> usize;

    fn create_vertex(&mut self) -> VertexId;

    /// Adds an oriented face, extending the link of each corner.
    ///
    /// Fails with [`Error::NonManifold`](crate::Error::NonManifold) when one of
    /// the directed edges of `face` already belongs to another face.
    fn insert_face(&mut self, face: Face) -> Result<()>;

    fn remove_face(&mut self, face: Face) -> Result<()>;

    fn link(&self, v: VertexId) -> Result<Cow<'_, Link>>;

    /// The face containing the directed edge `v0 -> v1`, listed from `v0`.
    fn find_face(&self, v0: VertexId, v1: VertexId) -> Option<Face>;

    /// Connectivity words held by the structure.
    fn storage_words(&self) -> usize;

    fn is_infinite(&self, v: VertexId) -> bool {
        v == INFINITE_VERTEX
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.number_of_vertices()
    }

    fn has_face(&self, face: Face) -> bool {
        self.find_face(face[0], face[1]) == Some(face)
    }

    /// The face across the edge opposite `face[i]`.
    fn neighbor(&self, i: usize, face: Face) -> Option<Face> {
        self.find_face(face[cw(i)], face[ccw(i)])
    }

    fn any_face(&self, v: VertexId) -> Option<Face> {
        let link = self.link(v).ok()?;
        link.wedges().next().map(|(a, b)| Face::new(v, a, b))
    }

    /// Faces around `v`, each listed from `v`, in link order.
    fn incident_faces(&self, v: VertexId) -> Result<Vec<Face>> {
        let link = self.link(v)?;
        Ok(link.wedges().map(|(a, b)| Face::new(v, a, b)).collect())
    }

    fn adjacent_vertices(&self, v: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.link(v)?.vertices().collect())
    }

    fn degree(&self, v: VertexId) -> Result<usize> {
        Ok(self.link(v)?.degree())
    }

    fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.find_face(u, v).is_some() || self.find_face(v, u).is_some()
    }

    /// Every face once, in canonical form.
    fn faces(&self) -> Vec<Face> {
        let mut out = Vec::with_capacity(self.number_of_faces());
        for v in 0..self.number_of_vertices() {
            let Ok(link) = self.link(v) else { continue };
            out.extend(
                link.wedges()
                    .filter(|&(a, b)| v < a && v < b)
                    .map(|(a, b)| Face::new(v, a, b)),
            );
        }
        out
    }

    fn number_of_edges(&self) -> usize {
        (0..self.number_of_vertices())
            .filter_map(|v| self.link(v).ok().map(|l| l.vertices().filter(|&w| v < w).count()))
            .sum()
    }

    fn statistics(&self) -> TdsStatistics {
        TdsStatistics {
            vertices: self.number_of_vertices(),
            faces: self.number_of_faces(),
            edges: self.number_of_edges(),
            storage_words: self.storage_words(),
        }
    }

    /// Replaces the two faces sharing edge `v0 v1` by the two faces sharing
    /// the opposite diagonal.
    fn flip_edge(&mut self, v0: VertexId, v1: VertexId) -> Result<(Face, Face)> {
        edit::flip_edge(self, v0, v1)
    }

    /// Splits `face` into three around a new vertex.
    fn insert_in_face(&mut self, face: Face) -> Result<VertexId> {
        edit::insert_in_face(self, face)
    }

    /// Splits edge `v0 v1` and each face on it with a new vertex.
    fn insert_in_edge(&mut self, v0: VertexId, v1: VertexId) -> Result<VertexId> {
        edit::insert_in_edge(self, v0, v1)
    }

    fn validate(&self) -> Result<()> {
        check::validate(self)
    }
}
