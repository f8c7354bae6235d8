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

use std::borrow::Cow;

use ahash::AHashMap;
use log::trace;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::tds::{Face, Link, Tds, VertexId, ccw, cw};

pub type FaceHandle = usize;

#[derive(Clone, Debug)]
struct FaceRecord {
    face: Face,
    // neighbors[i] lies across the edge opposite face[i]
    neighbors: [Option<FaceHandle>; 3],
    removed: bool,
}

/// Face-based triangulation: each face stores its three vertices and its
/// three neighbours. Slots of removed faces are recycled.
#[derive(Clone, Debug)]
pub struct FaceMesh {
    faces: Vec<FaceRecord>,
    free: Vec<FaceHandle>,
    // directed edge -> face containing it
    edges: AHashMap<(VertexId, VertexId), FaceHandle>,
    vertex_faces: Vec<SmallVec<[FaceHandle; 6]>>,
    live: usize,
}

impl Default for FaceMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceMesh {
    pub fn new() -> Self {
        FaceMesh {
            faces: Vec::new(),
            free: Vec::new(),
            edges: AHashMap::new(),
            vertex_faces: vec![SmallVec::new()],
            live: 0,
        }
    }

    /// Copies the connectivity of another structure.
    pub fn from_tds<T: Tds + ?Sized>(tds: &T) -> Result<Self> {
        let mut mesh = FaceMesh::new();
        mesh.edges.reserve(tds.number_of_faces() * 3);
        while mesh.number_of_vertices() < tds.number_of_vertices() {
            mesh.create_vertex();
        }
        for face in tds.faces() {
            mesh.insert_face(face)?;
        }
        Ok(mesh)
    }

    pub fn face_handle(&self, face: Face) -> Option<FaceHandle> {
        let h = *self.edges.get(&(face[0], face[1]))?;
        (self.faces[h].face.starting_at(face[0]) == Some(face)).then_some(h)
    }

    pub fn face(&self, h: FaceHandle) -> Option<Face> {
        self.faces.get(h).filter(|r| !r.removed).map(|r| r.face)
    }

    pub fn neighbor_handle(&self, h: FaceHandle, i: usize) -> Option<FaceHandle> {
        self.faces.get(h).filter(|r| !r.removed)?.neighbors[i]
    }

    /// Handles of the faces around `v`, in no particular order.
    pub fn vertex_faces(&self, v: VertexId) -> Option<&[FaceHandle]> {
        self.vertex_faces.get(v).map(|f| f.as_slice())
    }

    fn check_face(&self, face: Face) -> Result<()> {
        if face.is_degenerate() {
            return Err(Error::DegenerateFace(face));
        }
        match face
            .vertices()
            .into_iter()
            .find(|&v| v >= self.vertex_faces.len())
        {
            Some(v) => Err(Error::VertexOutOfBounds(v)),
            None => Ok(()),
        }
    }

    fn allocate(&mut self, face: Face) -> FaceHandle {
        let record = FaceRecord {
            face,
            neighbors: [None; 3],
            removed: false,
        };
        match self.free.pop() {
            Some(h) => {
                self.faces[h] = record;
                h
            }
            None => {
                self.faces.push(record);
                self.faces.len() - 1
            }
        }
    }

    // Index of the vertex of `h` opposite its directed edge `a -> b`.
    fn opposite_index(&self, h: FaceHandle, a: VertexId) -> Option<usize> {
        self.faces[h].face.index_of(a).map(cw)
    }
}

impl Tds for FaceMesh {
    fn number_of_vertices(&self) -> usize {
        self.vertex_faces.len()
    }

    fn number_of_faces(&self) -> usize {
        self.live
    }

    fn create_vertex(&mut self) -> VertexId {
        self.vertex_faces.push(SmallVec::new());
        self.vertex_faces.len() - 1
    }

    fn insert_face(&mut self, face: Face) -> Result<()> {
        self.check_face(face)?;
        for i in 0..3 {
            let e = face.edge(cw(i));
            if self.edges.contains_key(&e) {
                return Err(Error::NonManifold {
                    face,
                    vertex: face[i],
                });
            }
        }

        let h = self.allocate(face);
        for i in 0..3 {
            let (a, b) = face.edge(i);
            self.edges.insert((a, b), h);
            self.vertex_faces[face[i]].push(h);
            if let Some(&g) = self.edges.get(&(b, a)) {
                if let Some(j) = self.opposite_index(g, b) {
                    self.faces[g].neighbors[j] = Some(h);
                    self.faces[h].neighbors[i] = Some(g);
                }
            }
        }
        self.live += 1;
        trace!("face {h} = {face}");
        Ok(())
    }

    fn remove_face(&mut self, face: Face) -> Result<()> {
        self.check_face(face)?;
        let h = self.face_handle(face).ok_or(Error::FaceNotFound(face))?;
        for i in 0..3 {
            let (a, b) = face.edge(i);
            self.edges.remove(&(a, b));
            let v = face[i];
            if let Some(pos) = self.vertex_faces[v].iter().position(|&x| x == h) {
                self.vertex_faces[v].swap_remove(pos);
            }
            if let Some(g) = self.faces[h].neighbors[i] {
                if let Some(j) = self.opposite_index(g, b) {
                    self.faces[g].neighbors[j] = None;
                }
            }
        }
        self.faces[h].removed = true;
        self.faces[h].neighbors = [None; 3];
        self.free.push(h);
        self.live -= 1;
        trace!("face {h} removed");
        Ok(())
    }

    fn link(&self, v: VertexId) -> Result<Cow<'_, Link>> {
        let handles = self
            .vertex_faces
            .get(v)
            .ok_or(Error::VertexOutOfBounds(v))?;
        let mut link = Link::new();
        for &h in handles {
            let f = self.faces[h].face;
            let k = f.index_of(v).ok_or_else(|| {
                Error::Inconsistent(format!("face {f} is listed at vertex {v}"))
            })?;
            if !link.insert_wedge(f[ccw(k)], f[cw(k)]) {
                return Err(Error::Inconsistent(format!(
                    "faces around vertex {v} do not form a link"
                )));
            }
        }
        Ok(Cow::Owned(link))
    }

    fn find_face(&self, v0: VertexId, v1: VertexId) -> Option<Face> {
        let &h = self.edges.get(&(v0, v1))?;
        self.faces[h].face.starting_at(v0)
    }

    fn neighbor(&self, i: usize, face: Face) -> Option<Face> {
        let h = self.face_handle(face)?;
        self.face(self.faces[h].neighbors[i]?)
    }

    fn any_face(&self, v: VertexId) -> Option<Face> {
        let &h = self.vertex_faces.get(v)?.first()?;
        self.faces[h].face.starting_at(v)
    }

    fn degree(&self, v: VertexId) -> Result<usize> {
        let handles = self
            .vertex_faces
            .get(v)
            .ok_or(Error::VertexOutOfBounds(v))?;
        let mut adjacent: SmallVec<[VertexId; 12]> = handles
            .iter()
            .flat_map(|&h| self.faces[h].face.vertices())
            .filter(|&w| w != v)
            .collect();
        adjacent.sort_unstable();
        adjacent.dedup();
        Ok(adjacent.len())
    }

    /// Six words per face plus one face reference per vertex.
    fn storage_words(&self) -> usize {
        6 * self.live + self.vertex_faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> FaceMesh {
        let mut mesh = FaceMesh::new();
        for _ in 0..4 {
            mesh.create_vertex();
        }
        mesh.insert_face(Face::new(1, 2, 3)).unwrap();
        mesh.insert_face(Face::new(1, 3, 4)).unwrap();
        mesh
    }

    #[test]
    fn neighbors_are_linked_both_ways() {
        let mesh = square();
        let f = Face::new(1, 2, 3);
        let g = Face::new(1, 3, 4);
        assert_eq!(mesh.neighbor(1, f), Some(Face::new(1, 3, 4)));
        assert_eq!(mesh.neighbor(2, g), Some(Face::new(1, 2, 3)));
        assert_eq!(mesh.neighbor(0, f), None);

        let h = mesh.face_handle(f).unwrap();
        let k = mesh.face_handle(g).unwrap();
        assert_eq!(mesh.neighbor_handle(h, 1), Some(k));
        assert_eq!(mesh.neighbor_handle(k, 2), Some(h));
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut mesh = square();
        mesh.remove_face(Face::new(3, 4, 1)).unwrap();
        assert_eq!(mesh.number_of_faces(), 1);
        assert_eq!(mesh.neighbor(1, Face::new(1, 2, 3)), None);
        mesh.insert_face(Face::new(4, 1, 3)).unwrap();
        assert_eq!(mesh.faces.len(), 2);
        assert_eq!(mesh.degree(1).unwrap(), 3);
        assert!(mesh.link(1).unwrap().is_equivalent(&Link::path([2, 3, 4])));
    }
}
