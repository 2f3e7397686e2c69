// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, CubicBez, ParamCurve, Point};
use peniko::Brush;
use thermo_core::{Mark, MarkId};

use crate::interpolate::Interpolation;
use crate::scale::{ScaleBand, ScaleLinear};

/// The region between zero and a curve through one value per band, split into one slice
/// per point.
#[derive(Clone, Debug)]
pub struct AreaMarkSpec {
    /// Stable-id base; slice `i` uses `id_base + i`.
    pub id_base: u64,
    /// Band scale; points sit at band centers.
    pub band: ScaleBand,
    /// Scale for values along y.
    pub y_scale: ScaleLinear,
    /// Curve between points.
    pub interpolation: Interpolation,
    /// Rendering order hint.
    pub z_index: i32,
}

impl AreaMarkSpec {
    /// Creates a straight-segment area.
    pub fn new(id_base: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            band,
            y_scale,
            interpolation: Interpolation::Linear,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the interpolation.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    fn points(&self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(self.band.center(i), self.y_scale.map(v)))
            .collect()
    }

    /// Generates one slice per point, asking `fill_for(index, value)` for its paint.
    ///
    /// Point `i` owns the area from the middle of the segment arriving at it to the middle
    /// of the segment leaving it (the first and last points own half a segment). Colors
    /// therefore switch at segment midpoints rather than blending.
    pub fn marks_by(&self, values: &[f64], fill_for: impl Fn(usize, f64) -> Brush) -> Vec<Mark> {
        let points = self.points(values);
        let halves: Vec<(CubicBez, CubicBez)> = self
            .interpolation
            .segments(&points)
            .iter()
            .map(ParamCurve::subdivide)
            .collect();
        let y0 = self.y_scale.map(0.0);
        let n = points.len();

        (0..n)
            .map(|i| {
                let arriving = i.checked_sub(1).map(|j| halves[j].1);
                let leaving = if i + 1 < n { Some(halves[i].0) } else { None };
                let start = arriving.map_or(points[i], |s| s.p0);
                let end = leaving.map_or(points[i], |s| s.p3);

                let mut path = BezPath::new();
                path.move_to((start.x, y0));
                path.line_to(start);
                if let Some(s) = arriving {
                    self.interpolation.trace(&mut path, s);
                }
                if let Some(s) = leaving {
                    self.interpolation.trace(&mut path, s);
                }
                path.line_to((end.x, y0));
                path.close_path();

                Mark::builder(MarkId::from_raw(self.id_base).offset(i as u64))
                    .z_index(self.z_index)
                    .path(path)
                    .fill(fill_for(i, values[i]))
                    .build()
            })
            .collect()
    }
}
