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

use guardtri::{Error, Generator};

#[test]
fn test_uniform_and_disc() {
    let mut generator = Generator::new(Some(1));
    assert_eq!(generator.seed(), Some(1));

    let square = generator.uniform_distribution(1000);
    assert_eq!(square.len(), 1000);
    assert!(square.iter().all(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y)));

    let disc = generator.disc_distribution(1000);
    assert!(disc.iter().all(|p| p.x * p.x + p.y * p.y <= 1.0 + 1e-12));
}

#[test]
fn test_kuzmin_fits_unit_disc() {
    let points = Generator::new(Some(2)).kuzmin_distribution(500);
    let farthest = points
        .iter()
        .map(|p| (p.x * p.x + p.y * p.y).sqrt())
        .fold(0.0, f64::max);
    approx::assert_relative_eq!(farthest, 1.0, epsilon = 1e-9);
}

#[test]
fn test_line() {
    let mut generator = Generator::new(Some(3));
    let points = generator.line_distribution(500, 0.001).unwrap();
    assert!(points.iter().all(|p| p.y > 0.0 && p.y <= 1.0));
    assert!(points.iter().all(|p| (0.0..1.0).contains(&p.x)));

    for b in [0.0, -1.0, 1.5, f64::NAN] {
        assert!(matches!(
            generator.line_distribution(10, b),
            Err(Error::InvalidParameter { name: "b", .. })
        ));
    }
}

#[test]
fn test_degenerate_sets() {
    let mut generator = Generator::new(Some(4));
    for p in generator.parabola_distribution(200) {
        assert_eq!(p.y, p.x * p.x);
        assert!((-1.0..1.0).contains(&p.x));
    }
    for (i, p) in generator.axes_distribution(200).iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(p.y, 0.0);
        } else {
            assert_eq!(p.x, 0.0);
        }
    }
}

#[test]
fn test_seeds_are_reproducible() {
    let a = Generator::new(Some(42)).normal_distribution(50);
    let b = Generator::new(Some(42)).normal_distribution(50);
    assert_eq!(a, b);
    assert_eq!(Generator::default().seed(), None);
}
