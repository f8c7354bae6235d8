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

use guardtri::tds::check::{euler_characteristic, same_connectivity};
use guardtri::{Error, Face, FaceMesh, GuardVertices, LinkVertices, Tds};

// Unit square 1 2 3 4 split along 1-3, closed by the infinite vertex.
fn square<T: Tds + Default>() -> T {
    let mut tds = T::default();
    for _ in 0..4 {
        tds.create_vertex();
    }
    for f in [
        [1, 2, 3],
        [1, 3, 4],
        [0, 2, 1],
        [0, 3, 2],
        [0, 4, 3],
        [0, 1, 4],
    ] {
        tds.insert_face(Face(f)).unwrap();
    }
    tds
}

fn flip_round_trip<T: Tds + Default>() {
    let mut tds: T = square();
    let (f, g) = tds.flip_edge(1, 3).unwrap();
    assert_eq!(f, Face::new(1, 2, 4));
    assert_eq!(g, Face::new(3, 4, 2));
    assert!(tds.are_adjacent(2, 4));
    assert!(!tds.are_adjacent(1, 3));
    tds.validate().unwrap();

    tds.flip_edge(2, 4).unwrap();
    same_connectivity(&tds, &square::<LinkVertices>()).unwrap();
}

fn illegal_flips<T: Tds + Default>() {
    let mut tds: T = square();
    // hull edge: the opposite vertices 3 and 0 are already adjacent
    assert_eq!(tds.flip_edge(1, 2), Err(Error::IllegalFlip(1, 2)));
    tds.remove_face(Face::new(0, 2, 1)).unwrap();
    assert_eq!(tds.flip_edge(1, 2), Err(Error::BoundaryEdge(1, 2)));
    assert_eq!(tds.number_of_faces(), 5);
    tds.validate().unwrap();
}

fn split_face_and_edge<T: Tds + Default>() {
    let mut tds: T = square();
    let v = tds.insert_in_face(Face::new(2, 3, 1)).unwrap();
    assert_eq!(v, 5);
    assert_eq!(tds.number_of_faces(), 8);
    assert_eq!(tds.degree(v).unwrap(), 3);
    assert!(tds.link(v).unwrap().is_cycle());

    let w = tds.insert_in_edge(1, 3).unwrap();
    assert_eq!(w, 6);
    assert_eq!(tds.number_of_faces(), 10);
    assert_eq!(tds.degree(w).unwrap(), 4);
    assert!(!tds.are_adjacent(1, 3));
    assert_eq!(euler_characteristic(&tds), 2);
    tds.validate().unwrap();

    assert_eq!(
        tds.insert_in_face(Face::new(1, 3, 2)),
        Err(Error::FaceNotFound(Face::new(1, 3, 2)))
    );
    assert_eq!(tds.insert_in_edge(2, 4), Err(Error::EdgeNotFound(2, 4)));
    assert_eq!(tds.number_of_vertices(), 7);
}

// Two faces on the same three vertices, glued along all their edges.
fn shared_apex_split<T: Tds + Default>() {
    let mut tds = T::default();
    for _ in 0..3 {
        tds.create_vertex();
    }
    tds.insert_face(Face::new(1, 2, 3)).unwrap();
    tds.insert_face(Face::new(1, 3, 2)).unwrap();
    let before = tds.faces();

    assert_eq!(
        tds.insert_in_edge(1, 2),
        Err(Error::NonManifold {
            face: Face::new(1, 2, 3),
            vertex: 3
        })
    );
    assert_eq!(tds.number_of_vertices(), 4);
    assert_eq!(tds.number_of_faces(), 2);
    assert_eq!(tds.faces(), before);
    tds.validate().unwrap();
}

#[test]
fn test_flip_link_vertices() {
    flip_round_trip::<LinkVertices>();
    illegal_flips::<LinkVertices>();
}

#[test]
fn test_flip_face_mesh() {
    flip_round_trip::<FaceMesh>();
    illegal_flips::<FaceMesh>();
}

#[test]
fn test_flip_guard_vertices() {
    flip_round_trip::<GuardVertices>();
    illegal_flips::<GuardVertices>();
}

#[test]
fn test_splits() {
    split_face_and_edge::<LinkVertices>();
    split_face_and_edge::<FaceMesh>();
    split_face_and_edge::<GuardVertices>();
}

#[test]
fn test_split_rejected_on_shared_apex() {
    shared_apex_split::<LinkVertices>();
    shared_apex_split::<FaceMesh>();
    shared_apex_split::<GuardVertices>();
}

#[test]
fn test_guards_survive_edits() {
    let mut tds: GuardVertices = square();
    tds.verify_guards().unwrap();
    tds.flip_edge(1, 3).unwrap();
    tds.verify_guards().unwrap();
    tds.insert_in_face(Face::new(1, 2, 4)).unwrap();
    tds.verify_guards().unwrap();
    tds.insert_in_edge(2, 4).unwrap();
    tds.verify_guards().unwrap();
    tds.verify_against(&LinkVertices::from_tds(&tds).unwrap()).unwrap();
}
