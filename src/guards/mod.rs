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

//! Guard-vertex triangulation.
//!
//! Only guards store their link. Every other vertex stores one adjacent
//! guard, its hint, from which its link is rebuilt on demand. The encoding
//! stays valid while
//!
//! - every edge has a guard endpoint,
//! - every guarded vertex has a single path or cycle as link,
//! - the hint of a guarded vertex is an adjacent guard, and isolated guarded
//!   vertices have no hint.

mod reconstruct;
pub mod selection;

use std::borrow::Cow;
use std::cmp::Reverse;
use std::fmt;

use log::debug;

pub use selection::{GuardSet, GuardStrategy};

use crate::error::{Error, Result};
use crate::tds::{Face, Link, Tds, VertexId, check};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum VertexRecord {
    Guard(Link),
    Guarded(Option<VertexId>),
}

#[derive(Clone, Debug)]
pub struct GuardVertices {
    records: Vec<VertexRecord>,
    faces: usize,
}

impl Default for GuardVertices {
    fn default() -> Self {
        Self::new()
    }
}

impl GuardVertices {
    pub fn new() -> Self {
        GuardVertices {
            records: vec![VertexRecord::Guarded(None)],
            faces: 0,
        }
    }

    /// Encodes the connectivity of `tds` with guards chosen by `strategy`.
    pub fn from_tds<T: Tds + ?Sized>(tds: &T, strategy: GuardStrategy) -> Result<Self> {
        let set = GuardSet::select(tds, strategy)?;
        let records = (0..tds.number_of_vertices())
            .map(|v| {
                let link = tds.link(v)?;
                Ok(if set.is_guard(v) {
                    VertexRecord::Guard(link.into_owned())
                } else {
                    VertexRecord::Guarded(link.vertices().next())
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(GuardVertices {
            records,
            faces: tds.number_of_faces(),
        })
    }

    /// Drops the current guards and selects new ones.
    pub fn reselect(&mut self, strategy: GuardStrategy) -> Result<()> {
        let before = self.number_of_guards();
        *self = GuardVertices::from_tds(&*self, strategy)?;
        debug!(
            "reselected guards: {before} -> {}",
            self.number_of_guards()
        );
        Ok(())
    }

    /// Demotes every guard that can become guarded without touching the
    /// other vertices: a manifold link made of guards only. Lowest degrees go
    /// first. Returns the number of demoted vertices.
    pub fn compact(&mut self) -> usize {
        let mut candidates: Vec<(usize, VertexId)> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(v, r)| match r {
                VertexRecord::Guard(link) => Some((link.degree(), v)),
                VertexRecord::Guarded(_) => None,
            })
            .collect();
        candidates.sort_unstable();

        let mut demoted = 0;
        for (_, v) in candidates {
            let VertexRecord::Guard(link) = &self.records[v] else {
                continue;
            };
            if !link.is_manifold() || !link.vertices().all(|w| self.is_guard(w)) {
                continue;
            }
            let hint = link.vertices().next();
            self.records[v] = VertexRecord::Guarded(hint);
            demoted += 1;
        }
        debug!("compaction demoted {demoted} guards");
        demoted
    }

    pub fn is_guard(&self, v: VertexId) -> bool {
        matches!(self.records.get(v), Some(VertexRecord::Guard(_)))
    }

    pub fn number_of_guards(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, VertexRecord::Guard(_)))
            .count()
    }

    pub fn guard_set(&self) -> GuardSet {
        GuardSet::from_flags((0..self.records.len()).map(|v| self.is_guard(v)).collect())
    }

    /// Adjacent guard stored by a guarded vertex.
    pub fn hint(&self, v: VertexId) -> Option<VertexId> {
        match self.records.get(v)? {
            VertexRecord::Guarded(hint) => *hint,
            VertexRecord::Guard(_) => None,
        }
    }

    /// Checks the guard invariants.
    pub fn verify_guards(&self) -> Result<()> {
        for v in 0..self.records.len() {
            let VertexRecord::Guarded(hint) = self.records[v] else {
                continue;
            };
            let (link, _) = self.reconstruct(v)?;
            if !link.is_manifold() {
                return Err(Error::Inconsistent(format!(
                    "guarded vertex {v} has link {link}"
                )));
            }
            if let Some(w) = link.vertices().find(|&w| !self.is_guard(w)) {
                return Err(Error::Inconsistent(format!(
                    "edge ({v}, {w}) has no guard"
                )));
            }
            if hint.is_some_and(|g| !link.contains(g)) {
                return Err(Error::Inconsistent(format!(
                    "hint of vertex {v} is not adjacent to it"
                )));
            }
        }
        Ok(())
    }

    /// Compares the encoded triangulation with `truth`.
    pub fn verify_against<T: Tds + ?Sized>(&self, truth: &T) -> Result<()> {
        if self.number_of_vertices() != truth.number_of_vertices() {
            return Err(Error::Inconsistent(format!(
                "{} vertices, expected {}",
                self.number_of_vertices(),
                truth.number_of_vertices()
            )));
        }
        check::same_connectivity(self, truth)
    }

    fn check_face(&self, face: Face) -> Result<()> {
        if face.is_degenerate() {
            return Err(Error::DegenerateFace(face));
        }
        match face.vertices().into_iter().find(|&v| v >= self.records.len()) {
            Some(v) => Err(Error::VertexOutOfBounds(v)),
            None => Ok(()),
        }
    }

    fn current_links(&self, face: Face) -> Result<[Option<Link>; 3]> {
        let mut links: [Option<Link>; 3] = Default::default();
        for (k, (x, _, _)) in face.corners().into_iter().enumerate() {
            if !self.is_guard(x) {
                links[k] = Some(self.reconstruct(x)?.0);
            }
        }
        Ok(links)
    }

    fn promote(&mut self, v: VertexId, link: Link) {
        debug!("vertex {v} promoted to guard");
        self.records[v] = VertexRecord::Guard(link);
    }
}

impl Tds for GuardVertices {
    fn number_of_vertices(&self) -> usize {
        self.records.len()
    }

    fn number_of_faces(&self) -> usize {
        self.faces
    }

    fn create_vertex(&mut self) -> VertexId {
        self.records.push(VertexRecord::Guarded(None));
        self.records.len() - 1
    }

    /// Guarded corners get their links rebuilt first. When two or three
    /// corners are guarded, all but the one of largest degree are promoted so
    /// that the new edges have a guard endpoint; a guarded corner whose link
    /// would split into several paths is promoted as well.
    fn insert_face(&mut self, face: Face) -> Result<()> {
        self.check_face(face)?;
        let corners = face.corners();
        let mut links = self.current_links(face)?;

        for (k, &(x, y, z)) in corners.iter().enumerate() {
            let link = match &links[k] {
                Some(link) => link,
                None => self.guard_link(x)?,
            };
            if !link.can_insert_wedge(y, z) {
                return Err(Error::NonManifold { face, vertex: x });
            }
        }

        let keep = (0..3)
            .filter(|&k| links[k].is_some())
            .max_by_key(|&k| (links[k].as_ref().map_or(0, Link::degree), Reverse(corners[k].0)));

        for (k, (x, y, z)) in corners.into_iter().enumerate() {
            match links[k].take() {
                None => {
                    if let VertexRecord::Guard(link) = &mut self.records[x] {
                        link.insert_wedge(y, z);
                    }
                }
                Some(mut link) => {
                    link.insert_wedge(y, z);
                    if keep == Some(k) && link.is_manifold() {
                        self.records[x] = VertexRecord::Guarded(Some(y));
                    } else {
                        self.promote(x, link);
                    }
                }
            }
        }
        self.faces += 1;
        Ok(())
    }

    fn remove_face(&mut self, face: Face) -> Result<()> {
        self.check_face(face)?;
        let corners = face.corners();
        let mut links = self.current_links(face)?;

        for (k, &(x, y, z)) in corners.iter().enumerate() {
            let link = match &links[k] {
                Some(link) => link,
                None => self.guard_link(x)?,
            };
            if !link.has_wedge(y, z) {
                return Err(Error::FaceNotFound(face));
            }
        }

        for (k, (x, y, z)) in corners.into_iter().enumerate() {
            match links[k].take() {
                None => {
                    if let VertexRecord::Guard(link) = &mut self.records[x] {
                        link.remove_wedge(y, z);
                    }
                }
                Some(mut link) => {
                    link.remove_wedge(y, z);
                    if link.is_manifold() {
                        self.records[x] = VertexRecord::Guarded(link.vertices().next());
                    } else {
                        self.promote(x, link);
                    }
                }
            }
        }
        self.faces -= 1;
        Ok(())
    }

    fn link(&self, v: VertexId) -> Result<Cow<'_, Link>> {
        match self.records.get(v) {
            Some(VertexRecord::Guard(link)) => Ok(Cow::Borrowed(link)),
            Some(VertexRecord::Guarded(_)) => Ok(Cow::Owned(self.reconstruct(v)?.0)),
            None => Err(Error::VertexOutOfBounds(v)),
        }
    }

    /// Read from the guard among `v0` and `v1`; two guarded vertices are
    /// never adjacent.
    fn find_face(&self, v0: VertexId, v1: VertexId) -> Option<Face> {
        let v2 = match (self.records.get(v0)?, self.records.get(v1)?) {
            (VertexRecord::Guard(link), _) => link.successor(v1)?,
            (_, VertexRecord::Guard(link)) => link.predecessor(v0)?,
            _ => return None,
        };
        Some(Face::new(v0, v1, v2))
    }

    /// Link entries and path headers of the guards, plus one hint per
    /// guarded vertex.
    fn storage_words(&self) -> usize {
        self.records
            .iter()
            .map(|r| match r {
                VertexRecord::Guard(link) => link.degree() + link.number_of_paths(),
                VertexRecord::Guarded(_) => 1,
            })
            .sum()
    }
}

impl fmt::Display for GuardVertices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "> guards:")?;
        for (v, record) in self.records.iter().enumerate() {
            match record {
                VertexRecord::Guard(link) => writeln!(f, "  {v}: {link}")?,
                VertexRecord::Guarded(Some(g)) => writeln!(f, "  {v} -> {g}")?,
                VertexRecord::Guarded(None) => writeln!(f, "  {v} -> -")?,
            }
        }
        Ok(())
    }
}
