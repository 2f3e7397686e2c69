// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four temperature charts.
//!
//! Every chart shares one frame: `(viewport_width - CHART_MARGIN) x CHART_HEIGHT`, months
//! on a band axis along the bottom, a zero-including value axis with gridlines on the
//! trailing edge, and an optional legend underneath.
//!
//! Mark ids are local to a chart; the screen composer moves each chart into its own id
//! namespace. Within a chart every layer (series, annotations, symbols, guides) starts at
//! its own multiple of `1 << 24`, so no record count short of that makes two layers meet.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use thermo_charts::{
    AxisStyle, BandAxisSpec, ChartLayout, ChartSpec, LegendItem, LegendSpec, ScaleBand,
    ScaleLinear, ScaleLinearSpec, Size, StrokeStyle, TextMeasurer, ValueAxisSpec, infer_domain,
};
use thermo_core::Mark;

use crate::dataset::TemperatureRecord;
use crate::palette::{AXIS_FONT_SIZE, CAPTION_FONT_SIZE, SECONDARY_LABEL, SEPARATOR};

mod area;
mod bar;
mod line;
mod rectangle;

pub use area::area_chart;
pub use bar::bar_chart;
pub use line::line_chart;
pub use rectangle::rectangle_chart;

/// Height of every chart frame.
pub const CHART_HEIGHT: f64 = 300.0;
/// Horizontal space a chart leaves free within the viewport width.
pub const CHART_MARGIN: f64 = 20.0;

const fn layer(n: u64) -> u64 {
    n << 24
}

/// Bars, tiles, area slices and the line.
const SERIES_ID_BASE: u64 = layer(0);
/// Value labels above the bars.
const ANNOTATION_ID_BASE: u64 = layer(1);
/// Line symbols.
const SYMBOL_ID_BASE: u64 = layer(2);
const MEAN_RULE_ID: u64 = layer(3);
/// First guide id; everything below is data.
pub(crate) const X_AXIS_ID_BASE: u64 = layer(4);
const Y_AXIS_ID_BASE: u64 = layer(5);
const LEGEND_ID_BASE: u64 = layer(6);
const Y_TICK_COUNT: usize = 5;

/// Returns the chart frame for a viewport width; the width never goes negative.
pub fn frame_size(viewport_width: f64) -> Size {
    Size::new(viewport_width - CHART_MARGIN, CHART_HEIGHT)
}

/// The scales a chart's series were placed with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    /// Month bands along x.
    pub x: ScaleBand,
    /// Temperatures along y.
    pub y: ScaleLinear,
}

/// A chart ready for composition.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedChart {
    /// Frame size.
    pub size: Size,
    /// Arranged plot and guides; `None` when there was nothing to plot.
    pub layout: Option<ChartLayout>,
    /// Scales used for the series; `None` when there was nothing to plot.
    pub scales: Option<ChartScales>,
    /// Marks in frame coordinates, origin at the frame's top-left.
    pub marks: Vec<Mark>,
}

impl RenderedChart {
    fn empty(size: Size) -> Self {
        Self {
            size,
            layout: None,
            scales: None,
            marks: Vec::new(),
        }
    }

    /// The plot rectangle, if the chart has one.
    pub fn plot(&self) -> Option<Rect> {
        self.layout.map(|l| l.plot)
    }
}

fn axis_style() -> AxisStyle {
    AxisStyle {
        rule: StrokeStyle::solid(SEPARATOR, 1.0),
        label_fill: SECONDARY_LABEL.into(),
        label_font_size: AXIS_FONT_SIZE,
    }
}

/// Builds a legend with the shared styling.
fn chart_legend(items: Vec<LegendItem>, columns: usize) -> LegendSpec {
    LegendSpec::new(LEGEND_ID_BASE, items)
        .with_columns(columns)
        .with_font_size(CAPTION_FONT_SIZE)
        .with_text_fill(SECONDARY_LABEL)
}

/// Lays out a month chart and asks `series` for the data marks.
///
/// Empty input yields an empty chart of the usual frame size.
fn render(
    records: &[TemperatureRecord],
    viewport_width: f64,
    legend: Option<LegendSpec>,
    measurer: &dyn TextMeasurer,
    series: impl FnOnce(&[f64], &ChartLayout, ChartScales) -> Vec<Mark>,
) -> RenderedChart {
    let size = frame_size(viewport_width);
    let values: Vec<f64> = records.iter().map(|r| r.celsius).collect();
    let Some(domain) = infer_domain(&values) else {
        return RenderedChart::empty(size);
    };

    let x_axis = BandAxisSpec::new(
        X_AXIS_ID_BASE,
        records.iter().map(|r| r.month.label().into()).collect(),
    )
    .with_style(axis_style());
    let y_axis = ValueAxisSpec::new(
        Y_AXIS_ID_BASE,
        ScaleLinearSpec::new(domain).with_zero(true).with_nice(true),
    )
    .with_tick_count(Y_TICK_COUNT)
    .with_style(axis_style())
    .with_grid(StrokeStyle::solid(SEPARATOR, 0.5));

    let mut spec = ChartSpec::new(size)
        .with_x_axis(x_axis.clone())
        .with_y_axis(y_axis.clone());
    if let Some(legend) = legend {
        spec = spec.with_legend(legend);
    }

    let mut scales = None;
    let (layout, marks) = spec.marks(measurer, |_, layout| {
        let s = ChartScales {
            x: x_axis.scale(layout.plot),
            y: y_axis.scale(layout.plot),
        };
        scales = Some(s);
        series(&values, layout, s)
    });

    RenderedChart {
        size,
        layout: Some(layout),
        scales,
        marks,
    }
}
