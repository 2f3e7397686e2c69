// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::vec::Vec;

use thermo_charts::{
    Interpolation, LegendItem, LineMarkSpec, PointMarkSpec, StrokeStyle, Symbol, TextMeasurer,
};
use thermo_core::MarkId;

use super::{RenderedChart, SERIES_ID_BASE, SYMBOL_ID_BASE, chart_legend, render};
use crate::dataset::TemperatureRecord;
use crate::palette::SYSTEM_BLUE;

const LINE_WIDTH: f64 = 4.0;
const SYMBOL_SIZE: f64 = 8.0;
const LEGEND_COLUMNS: usize = 6;

/// A blue cardinal spline through the months, with one symbol per month and a legend
/// keying symbols to months.
pub fn line_chart(
    records: &[TemperatureRecord],
    viewport_width: f64,
    measurer: &dyn TextMeasurer,
) -> RenderedChart {
    let items: Vec<LegendItem> = records
        .iter()
        .enumerate()
        .map(|(i, r)| LegendItem::symbol(r.month.label(), Symbol::for_index(i), SYSTEM_BLUE))
        .collect();
    let legend = chart_legend(items, LEGEND_COLUMNS);
    render(records, viewport_width, Some(legend), measurer, |values, _, scales| {
        let mut out = LineMarkSpec::new(MarkId::from_raw(SERIES_ID_BASE), scales.x, scales.y)
            .with_interpolation(Interpolation::CARDINAL)
            .with_stroke(StrokeStyle::solid(SYSTEM_BLUE, LINE_WIDTH))
            .marks(values);
        out.extend(
            PointMarkSpec::new(SYMBOL_ID_BASE, scales.x, scales.y)
                .with_size(SYMBOL_SIZE)
                .with_fill(SYSTEM_BLUE)
                .marks_by(values, Symbol::for_index),
        );
        out
    })
}
