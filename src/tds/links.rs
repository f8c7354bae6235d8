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
use std::fmt;

use log::trace;

use crate::error::{Error, Result};
use crate::tds::{Face, Link, Tds, VertexId};

/// Link-vertex triangulation: every vertex stores its link.
#[derive(Clone, Debug)]
pub struct LinkVertices {
    links: Vec<Link>,
    faces: usize,
}

impl Default for LinkVertices {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkVertices {
    /// An empty structure holding only the infinite vertex.
    pub fn new() -> Self {
        LinkVertices {
            links: vec![Link::new()],
            faces: 0,
        }
    }

    /// Copies the connectivity of another structure.
    pub fn from_tds<T: Tds + ?Sized>(tds: &T) -> Result<Self> {
        let links = (0..tds.number_of_vertices())
            .map(|v| tds.link(v).map(Cow::into_owned))
            .collect::<Result<Vec<_>>>()?;
        Ok(LinkVertices {
            links,
            faces: tds.number_of_faces(),
        })
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    fn check_face(&self, face: Face) -> Result<()> {
        if face.is_degenerate() {
            return Err(Error::DegenerateFace(face));
        }
        match face.vertices().into_iter().find(|&v| v >= self.links.len()) {
            Some(v) => Err(Error::VertexOutOfBounds(v)),
            None => Ok(()),
        }
    }
}

impl Tds for LinkVertices {
    fn number_of_vertices(&self) -> usize {
        self.links.len()
    }

    fn number_of_faces(&self) -> usize {
        self.faces
    }

    fn create_vertex(&mut self) -> VertexId {
        self.links.push(Link::new());
        self.links.len() - 1
    }

    fn insert_face(&mut self, face: Face) -> Result<()> {
        self.check_face(face)?;
        let corners = face.corners();
        if let Some(&(x, _, _)) = corners
            .iter()
            .find(|&&(x, y, z)| !self.links[x].can_insert_wedge(y, z))
        {
            return Err(Error::NonManifold { face, vertex: x });
        }
        for (x, y, z) in corners {
            self.links[x].insert_wedge(y, z);
            trace!("link({x}) += ({y}, {z}): {}", self.links[x]);
        }
        self.faces += 1;
        Ok(())
    }

    fn remove_face(&mut self, face: Face) -> Result<()> {
        self.check_face(face)?;
        let corners = face.corners();
        if corners
            .iter()
            .any(|&(x, y, z)| !self.links[x].has_wedge(y, z))
        {
            return Err(Error::FaceNotFound(face));
        }
        for (x, y, z) in corners {
            self.links[x].remove_wedge(y, z);
            trace!("link({x}) -= ({y}, {z}): {}", self.links[x]);
        }
        self.faces -= 1;
        Ok(())
    }

    fn link(&self, v: VertexId) -> Result<Cow<'_, Link>> {
        self.links
            .get(v)
            .map(Cow::Borrowed)
            .ok_or(Error::VertexOutOfBounds(v))
    }

    fn find_face(&self, v0: VertexId, v1: VertexId) -> Option<Face> {
        let v2 = self.links.get(v0)?.successor(v1)?;
        Some(Face::new(v0, v1, v2))
    }

    /// One word per link entry plus one header per path.
    fn storage_words(&self) -> usize {
        self.links
            .iter()
            .map(|l| l.degree() + l.number_of_paths())
            .sum()
    }
}

impl fmt::Display for LinkVertices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "> links:")?;
        for (v, link) in self.links.iter().enumerate() {
            writeln!(f, "  {v}: {link}")?;
        }
        Ok(())
    }
}
