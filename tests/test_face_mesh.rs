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

use guardtri::tds::check::same_connectivity;
use guardtri::{DelaunayConfig, DelaunayTriangulation, FaceMesh, Generator, LinkVertices, Tds};

fn random_links(n: usize, seed: u64) -> LinkVertices {
    let points = Generator::new(Some(seed)).uniform_distribution(n);
    let mut dt: DelaunayTriangulation =
        DelaunayTriangulation::with_config(DelaunayConfig::default().with_seed(seed));
    dt.insert(&points).unwrap();
    dt.into_tds()
}

#[test]
fn test_from_tds_copies_connectivity() {
    let links = random_links(100, 11);
    let mesh = FaceMesh::from_tds(&links).unwrap();
    assert_eq!(mesh.number_of_vertices(), links.number_of_vertices());
    assert_eq!(mesh.number_of_faces(), links.number_of_faces());
    assert_eq!(mesh.number_of_edges(), links.number_of_edges());
    same_connectivity(&mesh, &links).unwrap();
    mesh.validate().unwrap();
}

#[test]
fn test_neighbors_agree_with_links() {
    let links = random_links(60, 3);
    let mesh = FaceMesh::from_tds(&links).unwrap();
    for f in links.faces() {
        let h = mesh.face_handle(f).unwrap();
        for i in 0..3 {
            let a = links.neighbor(i, f).map(|n| n.canonical());
            let b = mesh.neighbor(i, f).map(|n| n.canonical());
            assert_eq!(a, b);
            assert!(a.is_some());

            let n = mesh.neighbor_handle(h, i).and_then(|g| mesh.face(g));
            assert_eq!(n.map(|n| n.canonical()), a);
        }
    }
}

#[test]
fn test_links_rebuilt_from_faces() {
    let links = random_links(40, 5);
    let mesh = FaceMesh::from_tds(&links).unwrap();
    for v in 0..links.number_of_vertices() {
        let expected = links.link(v).unwrap();
        let found = mesh.link(v).unwrap();
        assert!(found.is_equivalent(&expected), "vertex {v}: {found} vs {expected}");
        assert_eq!(mesh.degree(v).unwrap(), expected.degree());
        assert_eq!(mesh.vertex_faces(v).unwrap().len(), expected.degree());
    }
}

#[test]
fn test_storage_words() {
    let links = random_links(50, 8);
    let mesh = FaceMesh::from_tds(&links).unwrap();
    let stats = mesh.statistics();
    assert_eq!(stats.storage_words, 6 * stats.faces + stats.vertices);
    assert_eq!(stats.faces, 2 * stats.vertices - 4);
    assert!(stats.to_string().contains("faces"));
}
