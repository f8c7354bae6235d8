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

//! kd-tree with points stored in every node, after Liu et al. (2013).

use std::collections::VecDeque;

use crate::geometry::{Axis, BoundingBox, Point2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    InOrder,
    BreadthFirst,
    /// Left subtree, node, then the right subtree traversed backwards, so
    /// consecutive points stay close across subtree boundaries.
    #[default]
    Alternating,
}

#[derive(Clone, Debug)]
struct Node {
    point: usize,
    // None for leaves
    axis: Option<Axis>,
    children: [Option<usize>; 2],
    bbox: BoundingBox,
}

#[derive(Clone, Debug, Default)]
pub struct KdTree {
    nodes: Vec<Node>,
    root: Option<usize>,
    bbox: BoundingBox,
}

impl KdTree {
    /// Builds the tree over `points[i]` for every `i` in `indices`. Each node
    /// splits its cell at the median along the longest axis of the cell.
    pub fn build(points: &[Point2], indices: &[usize]) -> Self {
        let bbox = BoundingBox::fit(indices.iter().map(|&i| &points[i])).unwrap_or_default();
        let mut idx = indices.to_vec();
        let mut nodes = Vec::with_capacity(idx.len());
        let root = Self::build_node(points, &mut idx, bbox, &mut nodes);
        KdTree { nodes, root, bbox }
    }

    fn build_node(
        points: &[Point2],
        idx: &mut [usize],
        bbox: BoundingBox,
        nodes: &mut Vec<Node>,
    ) -> Option<usize> {
        if idx.is_empty() {
            return None;
        }
        let id = nodes.len();
        if idx.len() == 1 {
            nodes.push(Node {
                point: idx[0],
                axis: None,
                children: [None, None],
                bbox,
            });
            return Some(id);
        }

        let axis = bbox.longest_axis();
        // ceil(n/2)-th smallest coordinate
        let k = idx.len().div_ceil(2) - 1;
        idx.select_nth_unstable_by(k, |&a, &b| {
            points[a].coord(axis).total_cmp(&points[b].coord(axis))
        });
        let pivot = idx[k];
        let (lower, upper) = bbox.split(axis, points[pivot].coord(axis));
        nodes.push(Node {
            point: pivot,
            axis: Some(axis),
            children: [None, None],
            bbox,
        });

        let (left, rest) = idx.split_at_mut(k);
        let l = Self::build_node(points, left, lower, nodes);
        let r = Self::build_node(points, &mut rest[1..], upper, nodes);
        nodes[id].children = [l, r];
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Point index stored at `node`.
    pub fn point(&self, node: usize) -> usize {
        self.nodes[node].point
    }

    pub fn cell(&self, node: usize) -> &BoundingBox {
        &self.nodes[node].bbox
    }

    pub fn split_axis(&self, node: usize) -> Option<Axis> {
        self.nodes[node].axis
    }

    pub fn children(&self, node: usize) -> [Option<usize>; 2] {
        self.nodes[node].children
    }

    pub fn is_leaf(&self, node: usize) -> bool {
        self.nodes[node].children == [None, None]
    }

    pub fn depth(&self) -> usize {
        fn depth(tree: &KdTree, node: Option<usize>) -> usize {
            match node {
                None => 0,
                Some(n) => {
                    let [l, r] = tree.nodes[n].children;
                    1 + depth(tree, l).max(depth(tree, r))
                }
            }
        }
        depth(self, self.root)
    }

    /// Point indices in the given traversal order.
    pub fn traverse(&self, traversal: Traversal) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.nodes.len());
        match traversal {
            Traversal::InOrder => self.in_order(self.root, &mut out),
            Traversal::Alternating => self.alternating(self.root, false, &mut out),
            Traversal::BreadthFirst => {
                let mut queue: VecDeque<usize> = self.root.into_iter().collect();
                while let Some(n) = queue.pop_front() {
                    out.push(self.nodes[n].point);
                    queue.extend(self.nodes[n].children.into_iter().flatten());
                }
            }
        }
        out
    }

    fn in_order(&self, node: Option<usize>, out: &mut Vec<usize>) {
        let Some(n) = node else { return };
        let [l, r] = self.nodes[n].children;
        self.in_order(l, out);
        out.push(self.nodes[n].point);
        self.in_order(r, out);
    }

    fn alternating(&self, node: Option<usize>, reversed: bool, out: &mut Vec<usize>) {
        let Some(n) = node else { return };
        let [l, r] = self.nodes[n].children;
        if reversed {
            self.alternating(r, false, out);
            out.push(self.nodes[n].point);
            self.alternating(l, true, out);
        } else {
            self.alternating(l, false, out);
            out.push(self.nodes[n].point);
            self.alternating(r, true, out);
        }
    }
}
