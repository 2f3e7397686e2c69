// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition helpers.
//!
//! A [`ChartSpec`] owns a fixed view size and its guides (axes, legend). It measures
//! the guides, arranges the plot, and then hands the plot rectangle to a caller-provided
//! series builder.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use thermo_core::Mark;

use crate::{
    BandAxisSpec, ChartLayout, ChartLayoutSpec, LegendSpec, Size, TextMeasurer, ValueAxisSpec,
};

/// A composed chart description.
#[derive(Clone, Debug, Default)]
pub struct ChartSpec {
    /// Outer chart bounds.
    pub view_size: Size,
    /// Optional categorical x axis along the bottom.
    pub x_axis: Option<BandAxisSpec>,
    /// Optional value axis on the trailing edge.
    pub y_axis: Option<ValueAxisSpec>,
    /// Optional legend below the bottom axis.
    pub legend: Option<LegendSpec>,
    /// Gap between the bottom axis and the legend.
    pub legend_offset: f64,
}

impl ChartSpec {
    /// Creates a chart of `view_size` with no guides.
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            legend_offset: 8.0,
            ..Self::default()
        }
    }

    /// Sets the x axis.
    pub fn with_x_axis(mut self, axis: BandAxisSpec) -> Self {
        self.x_axis = Some(axis);
        self
    }

    /// Sets the y axis.
    pub fn with_y_axis(mut self, axis: ValueAxisSpec) -> Self {
        self.y_axis = Some(axis);
        self
    }

    /// Sets the legend. An empty legend is dropped.
    pub fn with_legend(mut self, legend: LegendSpec) -> Self {
        self.legend = (!legend.items.is_empty()).then_some(legend);
        self
    }

    /// Computes layout for this chart.
    pub fn layout(&self, measurer: &dyn TextMeasurer) -> ChartLayout {
        let spec = ChartLayoutSpec {
            view_size: self.view_size,
            axis_right: self.y_axis.as_ref().map(|a| a.measure(measurer)),
            axis_bottom: self.x_axis.as_ref().map(|a| a.measure(measurer)),
            legend_bottom: self
                .legend
                .as_ref()
                .map(|l| (l.measure(measurer), self.legend_offset)),
        };
        ChartLayout::arrange(&spec)
    }

    /// Generates marks for the axes and legend, given a computed layout.
    pub fn guide_marks(&self, measurer: &dyn TextMeasurer, layout: &ChartLayout) -> Vec<Mark> {
        let mut out = Vec::new();
        let plot = layout.plot;

        if let (Some(axis), Some(rect)) = (&self.x_axis, layout.axis_bottom) {
            out.extend(axis.marks(plot, rect));
        }
        if let (Some(axis), Some(rect)) = (&self.y_axis, layout.axis_right) {
            out.extend(axis.marks(plot, rect));
        }
        if let (Some(legend), Some(rect)) = (&self.legend, layout.legend) {
            out.extend(legend.marks(measurer, Point::new(rect.x0, rect.y0)));
        }
        out
    }

    /// Produces the full mark list: series marks followed by guide marks.
    ///
    /// `build_series` receives the chart and its resolved layout.
    pub fn marks(
        &self,
        measurer: &dyn TextMeasurer,
        build_series: impl FnOnce(&Self, &ChartLayout) -> Vec<Mark>,
    ) -> (ChartLayout, Vec<Mark>) {
        let layout = self.layout(measurer);
        let mut marks = build_series(self, &layout);
        marks.extend(self.guide_marks(measurer, &layout));
        (layout, marks)
    }
}
