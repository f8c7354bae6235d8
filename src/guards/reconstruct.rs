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

//! Star reconstruction of guarded vertices.
//!
//! For a guarded vertex `v` with hint `g`, the successor of `g` in link(v)
//! is the predecessor of `v` in link(g): both name the third vertex of face
//! `(v, g, w)`. Walking guard links this way yields link(v) ccw from `g`;
//! when the walk stops before returning to `g` the link is an open path and
//! the part before `g` is recovered by walking successors instead.

use crate::error::{Error, Result};
use crate::guards::{GuardVertices, VertexRecord};
use crate::tds::{Link, LinkPath, VertexId};

impl GuardVertices {
    pub(crate) fn guard_link(&self, g: VertexId) -> Result<&Link> {
        match self.records.get(g) {
            Some(VertexRecord::Guard(link)) => Ok(link),
            Some(VertexRecord::Guarded(_)) => Err(Error::NotAGuard(g)),
            None => Err(Error::VertexOutOfBounds(g)),
        }
    }

    /// Link of `v` and the number of guard links read to obtain it.
    pub(crate) fn reconstruct(&self, v: VertexId) -> Result<(Link, usize)> {
        let hint = match self.records.get(v) {
            None => return Err(Error::VertexOutOfBounds(v)),
            Some(VertexRecord::Guard(link)) => return Ok((link.clone(), 0)),
            Some(VertexRecord::Guarded(hint)) => *hint,
        };
        let Some(start) = hint else {
            return Ok((Link::new(), 0));
        };

        let limit = self.records.len();
        let mut reads = 0;
        let mut forward = vec![start];
        let mut closed = false;
        let mut cur = start;
        loop {
            reads += 1;
            match self.guard_link(cur)?.predecessor(v) {
                None => break,
                Some(next) if next == start => {
                    closed = true;
                    break;
                }
                Some(next) => {
                    forward.push(next);
                    cur = next;
                }
            }
            if forward.len() > limit {
                return Err(Error::Inconsistent(format!(
                    "link of vertex {v} does not close"
                )));
            }
        }

        let mut backward = Vec::new();
        if !closed {
            cur = start;
            loop {
                reads += 1;
                match self.guard_link(cur)?.successor(v) {
                    None => break,
                    Some(prev) => {
                        backward.push(prev);
                        cur = prev;
                    }
                }
                if forward.len() + backward.len() > limit {
                    return Err(Error::Inconsistent(format!(
                        "link of vertex {v} does not end"
                    )));
                }
            }
        }

        if forward.len() + backward.len() < 2 {
            return Err(Error::Inconsistent(format!(
                "hint {start} of vertex {v} is not adjacent to it"
            )));
        }
        backward.reverse();
        backward.extend(forward);
        Ok((Link::from_paths([LinkPath::new(backward, closed)]), reads))
    }

    /// Guard links read to recover the link of `v`; zero for guards.
    pub fn reconstruction_cost(&self, v: VertexId) -> Result<usize> {
        self.reconstruct(v).map(|(_, reads)| reads)
    }
}
