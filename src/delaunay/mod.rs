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

//! Incremental Delaunay triangulation (Bowyer-Watson) over any [`Tds`].
//!
//! The convex hull is closed with the infinite vertex `0`, so the
//! triangulation is always a topological sphere and every edge has two
//! faces. Points are inserted in a biased randomized order; each one is
//! located with a visibility walk from the last inserted vertex, its
//! conflict region is removed and the hole is re-triangulated as a star.

mod conflict;
mod locate;

use std::iter;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use locate::Location;

use crate::brio::Brio;
use crate::config::DelaunayConfig;
use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Point2};
use crate::kernel::{CircleSide, Orientation, incircle, orient2d};
use crate::tds::{Face, INFINITE_VERTEX, LinkVertices, Tds, TdsStatistics, VertexId};

#[derive(Clone, Debug)]
pub struct DelaunayTriangulation<D: Tds + Default = LinkVertices> {
    tds: D,
    // points[v] is the position of vertex v; points[0] is a placeholder
    points: Vec<Point2>,
    bbox: BoundingBox,
    config: DelaunayConfig,
    rng: StdRng,
    hint: Option<Face>,
}

impl<D: Tds + Default> Default for DelaunayTriangulation<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Tds + Default> DelaunayTriangulation<D> {
    pub fn new() -> Self {
        Self::with_config(DelaunayConfig::default())
    }

    pub fn with_config(config: DelaunayConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        DelaunayTriangulation {
            tds: D::default(),
            points: vec![Point2::INFINITE],
            bbox: BoundingBox::default(),
            config,
            rng,
            hint: None,
        }
    }

    pub fn tds(&self) -> &D {
        &self.tds
    }

    pub fn into_tds(self) -> D {
        self.tds
    }

    pub fn config(&self) -> &DelaunayConfig {
        &self.config
    }

    pub fn point(&self, v: VertexId) -> Option<&Point2> {
        if v == INFINITE_VERTEX {
            return None;
        }
        self.points.get(v)
    }

    /// Vertex positions indexed by vertex id; entry `0` stands for the
    /// infinite vertex.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Vertices, the infinite one included.
    pub fn number_of_vertices(&self) -> usize {
        self.tds.number_of_vertices()
    }

    pub fn number_of_finite_vertices(&self) -> usize {
        self.tds.number_of_vertices() - 1
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn finite_faces(&self) -> Vec<Face> {
        self.tds
            .faces()
            .into_iter()
            .filter(|f| !f.is_infinite())
            .collect()
    }

    pub fn neighbor(&self, i: usize, face: Face) -> Option<Face> {
        self.tds.neighbor(i, face)
    }

    pub fn incident_faces(&self, v: VertexId) -> Result<Vec<Face>> {
        self.tds.incident_faces(v)
    }

    pub fn statistics(&self) -> TdsStatistics {
        self.tds.statistics()
    }

    /// Inserts `points` and returns the vertex of each of them, in input
    /// order. A point equal to an existing vertex maps to that vertex.
    pub fn insert(&mut self, points: &[Point2]) -> Result<Vec<VertexId>> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFinitePoint { index });
        }
        if points.is_empty() {
            return Ok(Vec::new());
        }
        let started = self.tds.number_of_faces() > 0;
        if !started && points.len() < 3 {
            return Err(Error::NotEnoughPoints(points.len()));
        }

        info!("sorting {} points ({:?})", points.len(), self.config.sorting);
        let seed = self.rng.random();
        let mut order = Brio::new(self.config.sorting, Some(seed)).order(points);

        let mut ids = vec![INFINITE_VERTEX; points.len()];
        let mut next = 0;
        if !started {
            self.first_triangle(points, &mut order)?;
            for (k, &i) in order[..3].iter().enumerate() {
                ids[i] = k + 1;
            }
            next = 3;
        }

        info!("inserting {} points", order.len() - next);
        for &i in &order[next..] {
            ids[i] = self.insert_point(points[i])?;
        }
        info!(
            "triangulation done: {} vertices, {} faces",
            self.number_of_finite_vertices(),
            self.tds.number_of_faces()
        );
        Ok(ids)
    }

    /// Moves a non-collinear triple to the front of `order`, oriented ccw,
    /// and builds the initial triangle with its three infinite faces.
    fn first_triangle(&mut self, points: &[Point2], order: &mut [usize]) -> Result<()> {
        let p0 = points[order[0]];
        let i1 = (1..order.len())
            .find(|&k| points[order[k]] != p0)
            .ok_or(Error::CollinearPoints)?;
        order.swap(1, i1);
        let p1 = points[order[1]];
        let i2 = (2..order.len())
            .find(|&k| orient2d(&p0, &p1, &points[order[k]]) != Orientation::Collinear)
            .ok_or(Error::CollinearPoints)?;
        order.swap(2, i2);
        if orient2d(&p0, &p1, &points[order[2]]) == Orientation::Clockwise {
            order.swap(0, 1);
        }

        for &i in &order[..3] {
            self.tds.create_vertex();
            self.points.push(points[i]);
        }
        self.bbox.expand(&self.points[1..4]);
        for f in [[1, 2, 3], [0, 2, 1], [0, 3, 2], [0, 1, 3]] {
            self.tds.insert_face(Face(f))?;
        }
        self.hint = Some(Face::new(1, 2, 3));
        info!("first triangle: {}, {}, {}", self.points[1], self.points[2], self.points[3]);
        Ok(())
    }

    fn start_face(&self) -> Result<Face> {
        match self.hint {
            Some(f) if self.tds.has_face(f) => Ok(f),
            _ => self
                .tds
                .any_face(1)
                .ok_or_else(|| Error::NotEnoughPoints(self.number_of_finite_vertices())),
        }
    }

    fn insert_point(&mut self, p: Point2) -> Result<VertexId> {
        let start = self.start_face()?;
        let budget = self.config.walk_budget(self.tds.number_of_faces());
        let location = locate::walk(&self.tds, &self.points, &p, start, &mut self.rng, budget)?;
        let first = match location {
            Location::OnVertex(v) => {
                debug!("point {p} duplicates vertex {v}");
                return Ok(v);
            }
            Location::InFace(f) | Location::OnEdge(f, _) | Location::OutsideHull(f) => f,
        };

        let cavity = conflict::find_conflicts(&self.tds, &self.points, &p, first)?;
        debug!(
            "point {p}: {} faces in conflict, {} boundary edges",
            cavity.faces.len(),
            cavity.boundary.len()
        );
        for &f in &cavity.faces {
            self.tds.remove_face(f)?;
        }
        let v = self.tds.create_vertex();
        debug_assert_eq!(v, self.points.len());
        self.points.push(p);
        self.bbox.expand(iter::once(&p));
        for (a, b) in cavity.boundary {
            self.tds.insert_face(Face::new(v, a, b))?;
        }
        self.hint = self.tds.any_face(v);
        Ok(v)
    }

    /// Locates `p` without modifying the triangulation. The walk is seeded
    /// from the configured seed, so repeated queries give the same answer.
    pub fn locate(&self, p: &Point2) -> Result<Location> {
        if !p.is_finite() {
            return Err(Error::NonFiniteQuery(p.to_string()));
        }
        let start = self.start_face()?;
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or_default());
        let budget = self.config.walk_budget(self.tds.number_of_faces());
        locate::walk(&self.tds, &self.points, p, start, &mut rng, budget)
    }

    /// Checks that finite faces are ccw and that no vertex lies inside the
    /// circumcircle of a neighbouring finite face.
    pub fn is_delaunay(&self) -> bool {
        self.finite_faces().into_iter().all(|f| {
            let [a, b, c] = f.vertices().map(|v| &self.points[v]);
            if orient2d(a, b, c) != Orientation::CounterClockwise {
                return false;
            }
            (0..3).all(|i| {
                let Some(n) = self.tds.neighbor(i, f) else {
                    return false;
                };
                let (u, w) = f.edge(i);
                match n.vertices().into_iter().find(|&x| x != u && x != w) {
                    None => false,
                    Some(INFINITE_VERTEX) => true,
                    Some(d) => incircle(a, b, c, &self.points[d]) != CircleSide::Inside,
                }
            })
        })
    }
}
