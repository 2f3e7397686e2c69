// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use thermo_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::interpolate::Interpolation;
use crate::scale::{ScaleBand, ScaleLinear};

/// A single stroked path through one value per band, in band order.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable id of the emitted path.
    pub id: MarkId,
    /// Band scale; points sit at band centers.
    pub band: ScaleBand,
    /// Scale for values along y.
    pub y_scale: ScaleLinear,
    /// Curve between points.
    pub interpolation: Interpolation,
    /// Stroke style.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a straight-segment line with a black 1-unit stroke.
    pub fn new(id: MarkId, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id,
            band,
            y_scale,
            interpolation: Interpolation::Linear,
            stroke: StrokeStyle::default(),
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the interpolation.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Returns the scene-space vertices for `values`.
    pub fn points(&self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(self.band.center(i), self.y_scale.map(v)))
            .collect()
    }

    /// Generates the line; no values produce no marks.
    pub fn marks(&self, values: &[f64]) -> Vec<Mark> {
        if values.is_empty() {
            return Vec::new();
        }
        let path = self.interpolation.path(&self.points(values));
        alloc::vec![
            Mark::builder(self.id)
                .z_index(self.z_index)
                .path(path)
                .no_fill()
                .stroke(self.stroke.brush.clone(), self.stroke.stroke_width)
                .build()
        ]
    }
}
