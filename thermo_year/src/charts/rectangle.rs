// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thermo_charts::{RectMarkSpec, TextMeasurer};

use super::{RenderedChart, SERIES_ID_BASE, chart_legend, render};
use crate::category::classify;
use crate::dataset::TemperatureRecord;
use crate::legend::{LegendEntry, category_legend_items};

const TILE_HEIGHT: f64 = 20.0;

/// One band-wide tile per month, centered on the reading and colored by bucket.
pub fn rectangle_chart(
    records: &[TemperatureRecord],
    legend_entries: &[LegendEntry],
    viewport_width: f64,
    measurer: &dyn TextMeasurer,
) -> RenderedChart {
    let legend = chart_legend(category_legend_items(legend_entries), legend_entries.len());
    render(records, viewport_width, Some(legend), measurer, |values, _, scales| {
        RectMarkSpec::new(SERIES_ID_BASE, scales.x, scales.y)
            .with_height(TILE_HEIGHT)
            .marks_by(values, |_, v| classify(v).color().into())
    })
}
