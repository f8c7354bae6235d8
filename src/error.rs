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

//! Error types shared by every structure in the crate.

use thiserror::Error;

use crate::tds::{Face, VertexId};

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Topology.
    #[error("vertex {0} does not exist")]
    VertexOutOfBounds(VertexId),

    #[error("face {0} repeats a vertex")]
    DegenerateFace(Face),

    #[error("face {0} does not exist")]
    FaceNotFound(Face),

    /// Adding the face would bind a directed edge that already has a face on
    /// the same side.
    #[error("face {face} cannot be attached to the link of vertex {vertex}")]
    NonManifold { face: Face, vertex: VertexId },

    #[error("edge ({0}, {1}) does not exist")]
    EdgeNotFound(VertexId, VertexId),

    #[error("edge ({0}, {1}) is not shared by two faces")]
    BoundaryEdge(VertexId, VertexId),

    #[error("flipping edge ({0}, {1}) would duplicate an existing edge")]
    IllegalFlip(VertexId, VertexId),

    #[error("inconsistent triangulation: {0}")]
    Inconsistent(String),

    // Guards.
    #[error("vertex {0} is not a guard")]
    NotAGuard(VertexId),

    // Delaunay.
    #[error("at least three points are required to start a triangulation, got {0}")]
    NotEnoughPoints(usize),

    #[error("all input points are collinear")]
    CollinearPoints,

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("query point {0} has a non-finite coordinate")]
    NonFiniteQuery(String),

    #[error("point location did not terminate after {0} steps")]
    WalkFailed(usize),

    // Other.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl Error {
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
