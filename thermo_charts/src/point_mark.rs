// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
use thermo_core::{Mark, MarkId};

use crate::scale::{ScaleBand, ScaleLinear};
use crate::symbol::Symbol;

/// One symbol per value, at the band center.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Stable-id base; point `i` uses `id_base + i`.
    pub id_base: u64,
    /// Band scale for positions along x.
    pub band: ScaleBand,
    /// Scale for values along y.
    pub y_scale: ScaleLinear,
    /// Symbol box size in scene coordinates.
    pub size: f64,
    /// Symbol paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a point spec with size 8 and a default fill.
    pub fn new(id_base: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            band,
            y_scale,
            size: 8.0,
            fill: Brush::default(),
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the symbol size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates points, asking `symbol_for(index)` for each point's symbol.
    pub fn marks_by(&self, values: &[f64], symbol_for: impl Fn(usize) -> Symbol) -> Vec<Mark> {
        values
            .iter()
            .copied()
            .enumerate()
            .map(|(i, v)| {
                let center = Point::new(self.band.center(i), self.y_scale.map(v));
                symbol_for(i).mark(
                    MarkId::from_raw(self.id_base).offset(i as u64),
                    self.z_index,
                    center,
                    self.size,
                    self.fill.clone(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_sit_on_band_centers() {
        let spec = PointMarkSpec::new(
            0x40,
            ScaleBand::new((0.0, 90.0), 3),
            ScaleLinear::new((0.0, 1.0), (10.0, 0.0)),
        );
        let marks = spec.marks_by(&[0.0, 1.0, 0.5], Symbol::for_index);
        assert_eq!(marks.len(), 3);
        for (i, m) in marks.iter().enumerate() {
            let b = m.payload.bounds().expect("symbols have bounds");
            assert!((b.center().x - spec.band.center(i)).abs() < 1e-6);
        }
    }
}
