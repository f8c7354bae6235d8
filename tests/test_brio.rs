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

use guardtri::brio::{KdTree, Traversal, squared_walk_length};
use guardtri::{Brio, Generator, Point2, SortingMethod};

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

#[test]
fn test_orders_are_permutations() {
    let points = Generator::new(Some(3)).uniform_distribution(500);
    for method in [SortingMethod::None, SortingMethod::Random, SortingMethod::KdTree] {
        let order = Brio::new(method, Some(11)).order(&points);
        assert!(is_permutation(&order, points.len()), "{method:?}");
    }

    let order = Brio::new(SortingMethod::None, Some(11)).order(&points);
    assert_eq!(order, (0..points.len()).collect::<Vec<_>>());
}

#[test]
fn test_orders_are_reproducible() {
    let points = Generator::new(Some(5)).normal_distribution(200);
    let a = Brio::new(SortingMethod::KdTree, Some(1)).order(&points);
    let b = Brio::new(SortingMethod::KdTree, Some(1)).order(&points);
    assert_eq!(a, b);
}

#[test]
fn test_small_inputs() {
    let points = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
    let mut brio = Brio::new(SortingMethod::KdTree, Some(0));
    assert!(brio.order(&[]).is_empty());
    assert!(is_permutation(&brio.order(&points), 2));
    assert_eq!(brio.rounds(3), vec![0..3]);
}

#[test]
fn test_rounds_cover_input() {
    let mut brio = Brio::new(SortingMethod::KdTree, Some(7));
    for n in [4, 5, 17, 1000, 4096] {
        let rounds = brio.rounds(n);
        assert_eq!(rounds.len(), n.ilog2() as usize);
        assert_eq!(rounds.first().map(|r| r.start), Some(0));
        assert_eq!(rounds.last().map(|r| r.end), Some(n));
        for w in rounds.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
    }
}

#[test]
fn test_kd_tree_traversals() {
    let points = Generator::new(Some(2)).uniform_distribution(100);
    let indices: Vec<usize> = (0..points.len()).collect();
    let tree = KdTree::build(&points, &indices);
    assert_eq!(tree.len(), 100);
    assert!(tree.depth() >= 7);

    for traversal in [Traversal::InOrder, Traversal::BreadthFirst, Traversal::Alternating] {
        assert!(is_permutation(&tree.traverse(traversal), 100));
    }

    // every point lies in the cell of the node holding it
    let root = tree.root().unwrap();
    let mut stack = vec![root];
    let mut leaves = 0;
    while let Some(node) = stack.pop() {
        assert!(tree.cell(node).contains(&points[tree.point(node)]));
        if tree.is_leaf(node) {
            assert_eq!(tree.split_axis(node), None);
            leaves += 1;
        }
        stack.extend(tree.children(node).into_iter().flatten());
    }
    assert!(leaves > 0 && leaves < 100);
}

#[test]
fn test_kd_tree_order_is_local() {
    let points = Generator::new(Some(9)).uniform_distribution(2000);
    let random = Brio::new(SortingMethod::Random, Some(4)).order(&points);
    let sorted = Brio::new(SortingMethod::KdTree, Some(4)).order(&points);
    assert!(squared_walk_length(&points, &sorted) < squared_walk_length(&points, &random));
}
