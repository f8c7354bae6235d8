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

//! Compact planar triangulations.
//!
//! Three interchangeable triangulation data structures implement [`Tds`]:
//!
//! - [`FaceMesh`] stores faces with their neighbours, the usual
//!   face-based layout;
//! - [`LinkVertices`] stores the link of every vertex (Blandford et al.
//!   2005);
//! - [`GuardVertices`] stores links for a set of guard vertices only and
//!   rebuilds the other stars on demand (after Batista 2010).
//!
//! [`DelaunayTriangulation`] builds Delaunay triangulations on top of any of
//! them, with biased randomized insertion orders from [`brio`] and synthetic
//! inputs from [`generators`].

pub mod brio;
pub mod config;
pub mod delaunay;
pub mod error;
pub mod generators;
pub mod geometry;
pub mod guards;
pub mod kernel;
pub mod numeric;
pub mod tds;

pub use brio::{Brio, SortingMethod};
pub use config::DelaunayConfig;
pub use delaunay::{DelaunayTriangulation, Location};
pub use error::{Error, Result};
pub use generators::Generator;
pub use geometry::{BoundingBox, Point2};
pub use guards::{GuardSet, GuardStrategy, GuardVertices};
pub use tds::{Face, FaceMesh, INFINITE_VERTEX, Link, LinkVertices, Tds, VertexId};
