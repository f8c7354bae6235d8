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

//! Consistency checks.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::tds::{Face, Link, Tds};

/// Checks that every wedge `(a, b)` in the link of `v` is matched by wedge
/// `(b, v)` in link(a) and wedge `(v, a)` in link(b), that no vertex repeats
/// in a link, and that the wedge count agrees with the face count.
pub fn validate<T: Tds + ?Sized>(tds: &T) -> Result<()> {
    let n = tds.number_of_vertices();
    let links = (0..n)
        .map(|v| tds.link(v).map(Cow::into_owned))
        .collect::<Result<Vec<Link>>>()?;

    let mut wedges = 0;
    for (v, link) in links.iter().enumerate() {
        let mut seen: Vec<_> = link.vertices().collect();
        seen.sort_unstable();
        if seen.windows(2).any(|w| w[0] == w[1]) {
            return Err(Error::Inconsistent(format!(
                "vertex repeated in the link of {v}: {link}"
            )));
        }
        if link.paths().iter().any(|p| p.len() < 2) {
            return Err(Error::Inconsistent(format!("short path in the link of {v}")));
        }

        for (a, b) in link.wedges() {
            wedges += 1;
            let face = Face::new(v, a, b);
            if a >= n || b >= n || face.is_degenerate() {
                return Err(Error::Inconsistent(format!("invalid face {face}")));
            }
            if !links[a].has_wedge(b, v) || !links[b].has_wedge(v, a) {
                return Err(Error::Inconsistent(format!(
                    "face {face} is missing from a corner link"
                )));
            }
        }
    }

    if wedges != 3 * tds.number_of_faces() {
        return Err(Error::Inconsistent(format!(
            "{wedges} wedges for {} faces",
            tds.number_of_faces()
        )));
    }
    Ok(())
}

/// `V - E + F`, counting only vertices with at least one face.
pub fn euler_characteristic<T: Tds + ?Sized>(tds: &T) -> i64 {
    let vertices = (0..tds.number_of_vertices())
        .filter(|&v| tds.link(v).is_ok_and(|l| !l.is_empty()))
        .count();
    vertices as i64 - tds.number_of_edges() as i64 + tds.number_of_faces() as i64
}

/// True when every non-isolated vertex has a single closed link.
pub fn is_closed<T: Tds + ?Sized>(tds: &T) -> bool {
    (0..tds.number_of_vertices()).all(|v| {
        tds.link(v)
            .is_ok_and(|l| l.is_empty() || l.is_cycle())
    })
}

/// Compares two structures face by face.
pub fn same_connectivity<A, B>(a: &A, b: &B) -> Result<()>
where
    A: Tds + ?Sized,
    B: Tds + ?Sized,
{
    let fa: BTreeSet<[usize; 3]> = a.faces().iter().map(|f| f.canonical().0).collect();
    let fb: BTreeSet<[usize; 3]> = b.faces().iter().map(|f| f.canonical().0).collect();
    if let Some(f) = fa.difference(&fb).next() {
        return Err(Error::Inconsistent(format!(
            "face {} is missing from the second structure",
            Face(*f)
        )));
    }
    if let Some(f) = fb.difference(&fa).next() {
        return Err(Error::Inconsistent(format!(
            "face {} is missing from the first structure",
            Face(*f)
        )));
    }
    Ok(())
}
