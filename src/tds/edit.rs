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

//! Local modifications expressed with face insertions and removals, so they
//! apply to every [`Tds`].

use log::debug;

use crate::error::{Error, Result};
use crate::tds::{Face, Tds, VertexId};

pub fn flip_edge<T: Tds + ?Sized>(tds: &mut T, v0: VertexId, v1: VertexId) -> Result<(Face, Face)> {
    let f = tds.find_face(v0, v1).ok_or(Error::BoundaryEdge(v0, v1))?;
    let g = tds.find_face(v1, v0).ok_or(Error::BoundaryEdge(v0, v1))?;
    let (a, b) = (f[2], g[2]);
    if a == b || tds.are_adjacent(a, b) {
        return Err(Error::IllegalFlip(v0, v1));
    }

    tds.remove_face(f)?;
    tds.remove_face(g)?;
    let flipped = (Face::new(v0, b, a), Face::new(v1, a, b));
    tds.insert_face(flipped.0)?;
    tds.insert_face(flipped.1)?;
    debug!("flipped ({v0}, {v1}) into ({a}, {b})");
    Ok(flipped)
}

pub fn insert_in_face<T: Tds + ?Sized>(tds: &mut T, face: Face) -> Result<VertexId> {
    if !tds.has_face(face) {
        return Err(Error::FaceNotFound(face));
    }
    let [v0, v1, v2] = face.vertices();
    tds.remove_face(face)?;
    let v = tds.create_vertex();
    for f in [
        Face::new(v0, v1, v),
        Face::new(v1, v2, v),
        Face::new(v2, v0, v),
    ] {
        tds.insert_face(f)?;
    }
    Ok(v)
}

pub fn insert_in_edge<T: Tds + ?Sized>(tds: &mut T, v0: VertexId, v1: VertexId) -> Result<VertexId> {
    let f = tds.find_face(v0, v1);
    let g = tds.find_face(v1, v0);
    if f.is_none() && g.is_none() {
        return Err(Error::EdgeNotFound(v0, v1));
    }
    // both sides on the same apex: the new vertex would see it twice
    if let (Some(f), Some(g)) = (f, g) {
        if f[2] == g[2] {
            return Err(Error::NonManifold { face: f, vertex: f[2] });
        }
    }
    for side in [f, g].into_iter().flatten() {
        tds.remove_face(side)?;
    }
    let v = tds.create_vertex();
    if let Some(f) = f {
        let a = f[2];
        tds.insert_face(Face::new(v0, v, a))?;
        tds.insert_face(Face::new(v, v1, a))?;
    }
    if let Some(g) = g {
        let b = g[2];
        tds.insert_face(Face::new(v1, v, b))?;
        tds.insert_face(Face::new(v, v0, b))?;
    }
    Ok(v)
}
