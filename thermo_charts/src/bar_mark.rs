// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use thermo_core::{Mark, MarkId};

use crate::scale::{ScaleBand, ScaleLinear};

/// Vertical bars: one rect per value, positioned by a band scale.
///
/// Bars span from zero to the value, so negative values hang below the zero line.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id base; bar `i` uses `id_base + i`.
    pub id_base: u64,
    /// Band scale for bar positions along x.
    pub band: ScaleBand,
    /// Scale for values along y.
    pub y_scale: ScaleLinear,
    /// Rendering order hint.
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar spec.
    pub fn new(id_base: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            band,
            y_scale,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Returns the rectangle for bar `index` with `value`.
    pub fn bar_rect(&self, index: usize, value: f64) -> Rect {
        let x0 = self.band.x(index);
        let y_base = self.y_scale.map(0.0);
        let y_value = self.y_scale.map(value);
        Rect::new(
            x0,
            y_value.min(y_base),
            x0 + self.band.band_width(),
            y_value.max(y_base),
        )
    }

    /// Generates bars, asking `fill_for(index, value)` for each bar's paint.
    pub fn marks_by(&self, values: &[f64], fill_for: impl Fn(usize, f64) -> Brush) -> Vec<Mark> {
        values
            .iter()
            .copied()
            .enumerate()
            .map(|(i, v)| {
                Mark::builder(MarkId::from_raw(self.id_base).offset(i as u64))
                    .z_index(self.z_index)
                    .rect(self.bar_rect(i, v))
                    .fill(fill_for(i, v))
                    .build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;
    use thermo_core::MarkPayload;

    use super::*;

    fn spec() -> BarMarkSpec {
        BarMarkSpec::new(
            0x100,
            ScaleBand::new((0.0, 100.0), 4),
            ScaleLinear::new((-10.0, 10.0), (200.0, 0.0)),
        )
    }

    #[test]
    fn negative_bars_hang_from_zero() {
        let s = spec();
        let up = s.bar_rect(0, 5.0);
        let down = s.bar_rect(1, -5.0);
        assert_eq!(up.y1, 100.0, "positive bar ends at zero");
        assert_eq!(down.y0, 100.0, "negative bar starts at zero");
        assert_eq!(up.height(), down.height());
    }

    #[test]
    fn per_bar_fill_and_ids() {
        let marks = spec().marks_by(&[1.0, -1.0], |_, v| {
            Brush::Solid(if v < 0.0 { css::BLUE } else { css::RED })
        });
        assert_eq!(marks[0].id, MarkId(0x100));
        assert_eq!(marks[1].id, MarkId(0x101));
        let MarkPayload::Rect(r) = &marks[1].payload else {
            panic!("bars are rects");
        };
        assert_eq!(r.fill, Brush::Solid(css::BLUE));
    }
}
