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

use std::fmt;

use smallvec::SmallVec;

use crate::tds::VertexId;

/// A ccw sequence of link vertices; consecutive `a, b` stand for a face
/// `(v, a, b)`. A closed path also has the wedge from its last vertex back to
/// its first one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkPath {
    vertices: SmallVec<[VertexId; 8]>,
    closed: bool,
}

impl LinkPath {
    pub fn new<I: IntoIterator<Item = VertexId>>(vertices: I, closed: bool) -> Self {
        LinkPath {
            vertices: vertices.into_iter().collect(),
            closed,
        }
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn first(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    pub fn wedges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        let closing = match (self.closed, self.first(), self.last()) {
            (true, Some(first), Some(last)) => Some((last, first)),
            _ => None,
        };
        self.vertices
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }
}

/// The link of a vertex: the paths and cycles of its neighbours.
///
/// A manifold vertex has at most one path. Edits that would break the link
/// structure are refused and leave the link untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Link {
    paths: SmallVec<[LinkPath; 1]>,
}

impl Link {
    pub fn new() -> Self {
        Link::default()
    }

    pub fn from_paths<I: IntoIterator<Item = LinkPath>>(paths: I) -> Self {
        Link {
            paths: paths.into_iter().filter(|p| p.len() >= 2).collect(),
        }
    }

    pub fn cycle<I: IntoIterator<Item = VertexId>>(vertices: I) -> Self {
        Link::from_paths([LinkPath::new(vertices, true)])
    }

    pub fn path<I: IntoIterator<Item = VertexId>>(vertices: I) -> Self {
        Link::from_paths([LinkPath::new(vertices, false)])
    }

    pub fn paths(&self) -> &[LinkPath] {
        &self.paths
    }

    pub fn number_of_paths(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn is_cycle(&self) -> bool {
        self.paths.len() == 1 && self.paths[0].closed
    }

    pub fn is_manifold(&self) -> bool {
        self.paths.len() <= 1
    }

    pub fn degree(&self) -> usize {
        self.paths.iter().map(LinkPath::len).sum()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.locate(v).is_some()
    }

    /// Path index and position of `v`.
    pub fn locate(&self, v: VertexId) -> Option<(usize, usize)> {
        self.paths
            .iter()
            .enumerate()
            .find_map(|(p, path)| path.vertices.iter().position(|&w| w == v).map(|i| (p, i)))
    }

    pub fn successor(&self, v: VertexId) -> Option<VertexId> {
        let (p, i) = self.locate(v)?;
        let path = &self.paths[p];
        if i + 1 < path.len() {
            Some(path.vertices[i + 1])
        } else if path.closed {
            path.first()
        } else {
            None
        }
    }

    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        let (p, i) = self.locate(v)?;
        let path = &self.paths[p];
        if i > 0 {
            Some(path.vertices[i - 1])
        } else if path.closed {
            path.last()
        } else {
            None
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.paths.iter().flat_map(|p| p.vertices.iter().copied())
    }

    pub fn wedges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.paths.iter().flat_map(LinkPath::wedges)
    }

    pub fn has_wedge(&self, a: VertexId, b: VertexId) -> bool {
        self.successor(a) == Some(b)
    }

    /// True when both links hold the same wedges, regardless of where their
    /// cycles start or in which order their paths are listed.
    pub fn is_equivalent(&self, other: &Link) -> bool {
        let mut mine: Vec<_> = self.wedges().collect();
        let mut theirs: Vec<_> = other.wedges().collect();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }

    /// `(a, b)` can be added if `a` ends an open path (or is absent) and `b`
    /// starts an open path (or is absent).
    pub fn can_insert_wedge(&self, a: VertexId, b: VertexId) -> bool {
        if a == b {
            return false;
        }
        let ends_path = |p: usize, i: usize| {
            let path = &self.paths[p];
            !path.closed && i + 1 == path.len()
        };
        let starts_path = |q: usize, j: usize| !self.paths[q].closed && j == 0;
        match (self.locate(a), self.locate(b)) {
            (None, None) => true,
            (Some((p, i)), None) => ends_path(p, i),
            (None, Some((q, j))) => starts_path(q, j),
            (Some((p, i)), Some((q, j))) => ends_path(p, i) && starts_path(q, j),
        }
    }

    /// Adds wedge `(a, b)`: opens a new path, extends a path at either end,
    /// joins two paths, or closes a path into a cycle.
    pub fn insert_wedge(&mut self, a: VertexId, b: VertexId) -> bool {
        if !self.can_insert_wedge(a, b) {
            return false;
        }
        match (self.locate(a), self.locate(b)) {
            (None, None) => self.paths.push(LinkPath::new([a, b], false)),
            (Some((p, _)), None) => self.paths[p].vertices.push(b),
            (None, Some((q, _))) => self.paths[q].vertices.insert(0, a),
            (Some((p, _)), Some((q, _))) if p == q => self.paths[p].closed = true,
            (Some((p, _)), Some((q, _))) => {
                let tail = self.paths.remove(q);
                let p = if q < p { p - 1 } else { p };
                self.paths[p].vertices.extend(tail.vertices);
            }
        }
        true
    }

    /// Removes wedge `(a, b)`: a cycle opens at the wedge, an open path is
    /// split and pieces shorter than two vertices are dropped.
    pub fn remove_wedge(&mut self, a: VertexId, b: VertexId) -> bool {
        if !self.has_wedge(a, b) {
            return false;
        }
        let Some((p, i)) = self.locate(a) else {
            return false;
        };
        if self.paths[p].closed {
            let path = &mut self.paths[p];
            path.vertices.rotate_left(i + 1);
            path.closed = false;
            return true;
        }

        let rest: SmallVec<[VertexId; 8]> = self.paths[p].vertices.drain(i + 1..).collect();
        let mut at = p;
        if self.paths[p].len() < 2 {
            self.paths.remove(p);
        } else {
            at += 1;
        }
        if rest.len() >= 2 {
            self.paths.insert(
                at,
                LinkPath {
                    vertices: rest,
                    closed: false,
                },
            );
        }
        true
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, path) in self.paths.iter().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            let (open, close) = if path.closed { ("(", ")") } else { ("[", "]") };
            write!(f, "{open}")?;
            for (i, v) in path.vertices.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "{close}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedges_build_a_cycle() {
        let mut link = Link::new();
        assert!(link.insert_wedge(1, 2));
        assert!(link.insert_wedge(3, 4));
        assert_eq!(link.number_of_paths(), 2);
        // join
        assert!(link.insert_wedge(2, 3));
        assert_eq!(link.paths()[0].vertices(), &[1, 2, 3, 4]);
        // close
        assert!(link.insert_wedge(4, 1));
        assert!(link.is_cycle());
        assert_eq!(link.successor(4), Some(1));
        assert_eq!(link.predecessor(1), Some(4));
        assert_eq!(link.to_string(), "(1 2 3 4)");
    }

    #[test]
    fn join_keeps_paths_in_order() {
        let mut link = Link::new();
        link.insert_wedge(5, 6);
        link.insert_wedge(1, 2);
        link.insert_wedge(9, 8);
        // tail path (index 0) is appended to head path (index 1)
        assert!(link.insert_wedge(2, 5));
        assert_eq!(link.number_of_paths(), 2);
        assert_eq!(link.paths()[0].vertices(), &[1, 2, 5, 6]);
        assert_eq!(link.paths()[1].vertices(), &[9, 8]);
    }

    #[test]
    fn refused_edits_leave_link_unchanged() {
        let mut link = Link::cycle([1, 2, 3]);
        let before = link.clone();
        assert!(!link.insert_wedge(1, 4));
        assert!(!link.insert_wedge(4, 1));
        assert!(!link.insert_wedge(2, 2));
        assert!(!link.remove_wedge(2, 1));
        assert_eq!(link, before);
    }

    #[test]
    fn removing_wedges_opens_then_splits() {
        let mut link = Link::cycle([1, 2, 3, 4, 5]);
        assert!(link.remove_wedge(3, 4));
        assert_eq!(link.paths()[0].vertices(), &[4, 5, 1, 2, 3]);
        assert!(!link.paths()[0].is_closed());

        assert!(link.remove_wedge(1, 2));
        assert_eq!(link.number_of_paths(), 2);
        assert_eq!(link.paths()[0].vertices(), &[4, 5, 1]);
        assert_eq!(link.paths()[1].vertices(), &[2, 3]);

        assert!(link.remove_wedge(4, 5));
        assert_eq!(link.paths()[0].vertices(), &[5, 1]);
        assert!(link.remove_wedge(5, 1));
        assert!(link.remove_wedge(2, 3));
        assert!(link.is_empty());
    }

    #[test]
    fn equivalence_ignores_rotation() {
        let a = Link::cycle([1, 2, 3]);
        let b = Link::cycle([3, 1, 2]);
        assert_ne!(a, b);
        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&Link::cycle([3, 2, 1])));
    }
}
