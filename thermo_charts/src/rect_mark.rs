// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle (tile) mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use thermo_core::{Mark, MarkId};

use crate::scale::{ScaleBand, ScaleLinear};

/// One tile per value: a band-wide rectangle of fixed height centered on the value.
///
/// With a categorical x and a continuous y this reads as a single-row heatmap.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable-id base; tile `i` uses `id_base + i`.
    pub id_base: u64,
    /// Band scale for tile positions along x.
    pub band: ScaleBand,
    /// Scale for values along y.
    pub y_scale: ScaleLinear,
    /// Tile height in scene coordinates.
    pub height: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a tile spec with a height of 20.
    pub fn new(id_base: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            band,
            y_scale,
            height: 20.0,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the tile height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height.max(0.0);
        self
    }

    /// Returns the rectangle for tile `index` with `value`.
    pub fn tile_rect(&self, index: usize, value: f64) -> Rect {
        let x0 = self.band.x(index);
        let cy = self.y_scale.map(value);
        let half = 0.5 * self.height;
        Rect::new(x0, cy - half, x0 + self.band.band_width(), cy + half)
    }

    /// Generates tiles, asking `fill_for(index, value)` for each tile's paint.
    pub fn marks_by(&self, values: &[f64], fill_for: impl Fn(usize, f64) -> Brush) -> Vec<Mark> {
        values
            .iter()
            .copied()
            .enumerate()
            .map(|(i, v)| {
                Mark::builder(MarkId::from_raw(self.id_base).offset(i as u64))
                    .z_index(self.z_index)
                    .rect(self.tile_rect(i, v))
                    .fill(fill_for(i, v))
                    .build()
            })
            .collect()
    }
}
