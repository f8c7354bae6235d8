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

use guardtri::tds::check::{euler_characteristic, is_closed, same_connectivity};
use guardtri::{
    DelaunayConfig, DelaunayTriangulation, Error, FaceMesh, Generator, GuardVertices, LinkVertices,
    Location, Point2, SortingMethod, Tds,
};

fn blandford() -> Vec<Point2> {
    [
        (0.0, 1.0),
        (3.0, 0.0),
        (6.0, 1.0),
        (9.0, 0.0),
        (9.0, 2.0),
        (6.0, 3.0),
        (3.0, 2.0),
        (3.0, 4.0),
        (9.0, 4.0),
    ]
    .into_iter()
    .map(Point2::from)
    .collect()
}

fn config(seed: u64) -> DelaunayConfig {
    DelaunayConfig::default().with_seed(seed)
}

fn triangulate<T: Tds + Default>(
    points: &[Point2],
    config: DelaunayConfig,
) -> DelaunayTriangulation<T> {
    let mut dt = DelaunayTriangulation::<T>::with_config(config);
    dt.insert(points).unwrap();
    dt
}

#[test]
fn test_blandford_example() {
    let _ = env_logger::builder().is_test(true).try_init();
    let points = blandford();
    let dt: DelaunayTriangulation = triangulate(&points, config(3));

    assert_eq!(dt.number_of_vertices(), 10);
    assert_eq!(dt.number_of_finite_vertices(), 9);
    assert_eq!(dt.tds().number_of_faces(), 16);
    assert_eq!(dt.finite_faces().len(), 10);
    assert!(dt.is_delaunay());
    assert!(is_closed(dt.tds()));
    assert_eq!(euler_characteristic(dt.tds()), 2);
    dt.tds().validate().unwrap();

    // (9, 2) lies on the hull edge between (9, 0) and (9, 4)
    assert_eq!(dt.tds().degree(0).unwrap(), 6);
    assert_eq!(*dt.bbox().min(), Point2::new(0.0, 0.0));
    assert_eq!(*dt.bbox().max(), Point2::new(9.0, 4.0));
}

#[test]
fn test_ids_follow_input_order() {
    let points = blandford();
    let mut dt: DelaunayTriangulation = DelaunayTriangulation::with_config(config(1));
    let ids = dt.insert(&points).unwrap();
    for (p, &v) in points.iter().zip(&ids) {
        assert_eq!(dt.point(v), Some(p));
    }
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=9).collect::<Vec<_>>());
    assert_eq!(dt.point(0), None);
}

#[test]
fn test_same_triangulation_for_every_structure() {
    let points = Generator::new(Some(17)).uniform_distribution(500);
    let links = triangulate::<LinkVertices>(&points, config(17));
    let faces = triangulate::<FaceMesh>(&points, config(17));
    let guards = triangulate::<GuardVertices>(&points, config(17));

    assert!(links.is_delaunay());
    same_connectivity(links.tds(), faces.tds()).unwrap();
    same_connectivity(links.tds(), guards.tds()).unwrap();
    guards.tds().verify_guards().unwrap();

    let l = links.statistics();
    let g = guards.statistics();
    assert_eq!(l.faces, g.faces);
    assert_eq!(l.edges, g.edges);
    assert!(g.storage_words < l.storage_words);
}

#[test]
fn test_hull_and_face_counts() {
    let mut generate = Generator::new(Some(99));
    for points in [
        generate.uniform_distribution(200),
        generate.normal_distribution(200),
        generate.kuzmin_distribution(200),
        generate.disc_distribution(200),
    ] {
        let dt: DelaunayTriangulation = triangulate(&points, config(4));
        let n = dt.number_of_finite_vertices();
        let h = dt.tds().degree(0).unwrap();
        assert_eq!(dt.finite_faces().len(), 2 * n - h - 2);
        assert!(dt.is_delaunay());
    }
}

#[test]
fn test_degenerate_grid_with_duplicates() {
    let mut points: Vec<Point2> = (0..6)
        .flat_map(|i| (0..6).map(move |j| Point2::new(i as f64, j as f64)))
        .collect();
    let duplicates = points[..5].to_vec();
    points.extend(duplicates);

    for sorting in [SortingMethod::None, SortingMethod::Random, SortingMethod::KdTree] {
        let mut dt: DelaunayTriangulation<GuardVertices> =
            DelaunayTriangulation::with_config(config(2).with_sorting(sorting));
        let ids = dt.insert(&points).unwrap();
        assert_eq!(dt.number_of_vertices(), 37);
        assert_eq!(dt.finite_faces().len(), 50);
        assert!(dt.is_delaunay());
        for k in 0..5 {
            assert_eq!(ids[36 + k], ids[k]);
        }
        dt.tds().verify_guards().unwrap();
        dt.tds().validate().unwrap();
    }
}

#[test]
fn test_collinear_and_cocircular_inputs() {
    let mut generate = Generator::new(Some(6));
    for points in [
        generate.parabola_distribution(100),
        generate.axes_distribution(100),
    ] {
        let dt: DelaunayTriangulation<FaceMesh> = triangulate(&points, config(8));
        assert!(dt.is_delaunay());
        dt.tds().validate().unwrap();
    }

    let circle: Vec<Point2> = (0..16)
        .map(|k| {
            let t = k as f64 * std::f64::consts::PI / 8.0;
            Point2::new(t.cos(), t.sin())
        })
        .collect();
    let dt: DelaunayTriangulation = triangulate(&circle, config(1));
    assert!(dt.is_delaunay());
    assert_eq!(euler_characteristic(dt.tds()), 2);
}

#[test]
fn test_incremental_batches() {
    let mut generate = Generator::new(Some(21));
    let first = generate.uniform_distribution(50);
    let second = generate.uniform_distribution(50);

    let mut dt: DelaunayTriangulation = DelaunayTriangulation::with_config(config(21));
    dt.insert(&first).unwrap();
    let ids = dt.insert(&second).unwrap();
    assert_eq!(dt.number_of_finite_vertices(), 100);
    assert!(ids.iter().all(|&v| v > 50));
    assert!(dt.is_delaunay());
    assert_eq!(dt.insert(&[]).unwrap(), Vec::<usize>::new());
    // a single point is enough once the triangulation exists
    dt.insert(&[Point2::new(0.5, 0.5)]).unwrap();
}

#[test]
fn test_locate() {
    let points = blandford();
    let dt: DelaunayTriangulation = triangulate(&points, config(5));

    match dt.locate(&Point2::new(3.0, 0.0)).unwrap() {
        Location::OnVertex(v) => assert_eq!(dt.point(v), Some(&Point2::new(3.0, 0.0))),
        other => panic!("expected a vertex, got {other:?}"),
    }
    assert!(matches!(
        dt.locate(&Point2::new(-5.0, 1.0)).unwrap(),
        Location::OutsideHull(f) if f.is_infinite()
    ));
    assert!(matches!(
        dt.locate(&Point2::new(9.0, 1.0)).unwrap(),
        Location::OnEdge(_, _)
    ));
    let inside = dt.locate(&Point2::new(4.0, 2.1)).unwrap();
    let Location::InFace(f) = inside else {
        panic!("expected a face, got {inside:?}");
    };
    let around = dt.incident_faces(f[0]).unwrap();
    assert!(around.iter().any(|g| g.canonical() == f.canonical()));
    assert_eq!(dt.neighbor(0, f).map(|n| n.contains(f[1])), Some(true));
    assert_eq!(inside.face(), Some(f));
    assert_eq!(Location::OnVertex(1).face(), None);

    assert_eq!(
        dt.locate(&Point2::new(f64::INFINITY, 0.0)),
        Err(Error::NonFiniteQuery("(inf, 0)".to_string()))
    );
}

#[test]
fn test_errors() {
    let mut dt: DelaunayTriangulation = DelaunayTriangulation::with_config(config(0));
    assert_eq!(
        dt.insert(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]),
        Err(Error::NotEnoughPoints(2))
    );
    assert_eq!(
        dt.insert(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 0.0),
        ]),
        Err(Error::CollinearPoints)
    );
    assert_eq!(
        dt.insert(&[
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 1.0),
            Point2::new(2.0, 0.0),
        ]),
        Err(Error::NonFinitePoint { index: 1 })
    );
    assert_eq!(dt.number_of_vertices(), 1);
    assert_eq!(dt.tds().number_of_faces(), 0);
    assert!(dt.locate(&Point2::new(0.0, 0.0)).is_err());

    let mut dt: DelaunayTriangulation =
        DelaunayTriangulation::with_config(config(0).with_max_walk_steps(0));
    let points = Generator::new(Some(1)).uniform_distribution(20);
    assert_eq!(dt.insert(&points), Err(Error::WalkFailed(0)));
}
