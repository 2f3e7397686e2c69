// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve interpolation between series points.
//!
//! Every interpolation is expressed as one cubic Bézier per pair of adjacent points, so
//! callers can split segments (for per-point fills) without caring which curve produced
//! them.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, CubicBez, Point};

/// How a series connects its points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interpolation {
    /// Straight segments.
    Linear,
    /// A cardinal spline through every point.
    ///
    /// `tension` is in `[0, 1]`: `0` gives a Catmull-Rom-like curve, `1` straight lines.
    Cardinal {
        /// Spline tension.
        tension: f64,
    },
}

impl Interpolation {
    /// A cardinal spline with zero tension.
    pub const CARDINAL: Self = Self::Cardinal { tension: 0.0 };

    /// Returns one cubic segment per adjacent point pair.
    ///
    /// Fewer than two points yield no segments.
    pub fn segments(self, points: &[Point]) -> Vec<CubicBez> {
        if points.len() < 2 {
            return Vec::new();
        }
        let last = points.len() - 1;
        (0..last)
            .map(|i| {
                let p1 = points[i];
                let p2 = points[i + 1];
                match self {
                    Self::Linear => {
                        CubicBez::new(p1, p1.lerp(p2, 1.0 / 3.0), p1.lerp(p2, 2.0 / 3.0), p2)
                    }
                    Self::Cardinal { tension } => {
                        let k = (1.0 - tension.clamp(0.0, 1.0)) / 6.0;
                        // Endpoints reuse themselves as their missing neighbor.
                        let p0 = if i == 0 { p1 } else { points[i - 1] };
                        let p3 = if i + 1 == last { p2 } else { points[i + 2] };
                        CubicBez::new(p1, p1 + (p2 - p0) * k, p2 - (p3 - p1) * k, p2)
                    }
                }
            })
            .collect()
    }

    /// Appends `segment` to `path`, which must already be positioned at `segment.p0`.
    pub fn trace(self, path: &mut BezPath, segment: CubicBez) {
        match self {
            Self::Linear => path.line_to(segment.p3),
            Self::Cardinal { .. } => path.curve_to(segment.p1, segment.p2, segment.p3),
        }
    }

    /// Returns an open path through `points`.
    ///
    /// A single point yields a lone `move_to`; no points yield an empty path.
    pub fn path(self, points: &[Point]) -> BezPath {
        let mut path = BezPath::new();
        let Some(&first) = points.first() else {
            return path;
        };
        path.move_to(first);
        for segment in self.segments(points) {
            self.trace(&mut path, segment);
        }
        path
    }
}
