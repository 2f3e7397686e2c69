// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scrolling screen: a title over the four charts.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use thermo_charts::{Size, TextMeasurer, TitleSpec};
use thermo_core::{FontWeight, Mark, MarkId};

use crate::charts::{RenderedChart, area_chart, bar_chart, line_chart, rectangle_chart};
use crate::dataset::TemperatureRecord;
use crate::legend::LegendEntry;
use crate::palette::{LABEL, TITLE_FONT_SIZE};

/// Screen title.
pub const TITLE: &str = "Temperatures in a year";
/// Horizontal padding on both sides of the screen content.
pub const SCREEN_PADDING: f64 = 10.0;
/// Vertical space below each chart.
pub const CHART_GAP: f64 = 30.0;

const TITLE_NAMESPACE: u32 = 0;

/// The visible area the screen is laid out for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The four charts, in screen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Bars with value annotations.
    Bar,
    /// Cardinal line with month symbols.
    Line,
    /// Tiles centered on each reading.
    Rectangle,
    /// Colored area with the mean rule.
    Area,
}

impl ChartKind {
    /// All charts in screen order.
    pub const ALL: [Self; 4] = [Self::Bar, Self::Line, Self::Rectangle, Self::Area];

    /// The mark id namespace this chart's marks are moved into.
    pub const fn namespace(self) -> u32 {
        match self {
            Self::Bar => 1,
            Self::Line => 2,
            Self::Rectangle => 3,
            Self::Area => 4,
        }
    }

    fn render(
        self,
        records: &[TemperatureRecord],
        legend: &[LegendEntry],
        viewport_width: f64,
        measurer: &dyn TextMeasurer,
    ) -> RenderedChart {
        match self {
            Self::Bar => bar_chart(records, legend, viewport_width, measurer),
            Self::Line => line_chart(records, viewport_width, measurer),
            Self::Rectangle => rectangle_chart(records, legend, viewport_width, measurer),
            Self::Area => area_chart(records, viewport_width, measurer),
        }
    }
}

/// Where a chart landed on the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedChart {
    /// Which chart.
    pub kind: ChartKind,
    /// Frame in screen coordinates.
    pub frame: Rect,
}

/// A composed screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenLayout {
    /// The viewport the screen was laid out for.
    pub viewport: Viewport,
    /// Size of the scrollable content; its height may exceed the viewport's.
    pub content_size: Size,
    /// Title rectangle in screen coordinates.
    pub title: Rect,
    /// Chart frames in screen order.
    pub charts: Vec<PlacedChart>,
    /// All marks in screen coordinates, ids namespaced per chart.
    pub marks: Vec<Mark>,
}

/// Lays out the title and the four charts for `viewport`.
///
/// Charts are stacked top to bottom with [`CHART_GAP`] below each, inset by
/// [`SCREEN_PADDING`] horizontally. Only the viewport width affects the result.
pub fn compose(
    records: &[TemperatureRecord],
    legend: &[LegendEntry],
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> ScreenLayout {
    let content_width = (viewport.width - 2.0 * SCREEN_PADDING).max(0.0);
    let title_spec = TitleSpec::new(MarkId::from_raw(0), TITLE)
        .with_font_size(TITLE_FONT_SIZE)
        .with_font_weight(FontWeight::BOLD)
        .with_fill(LABEL);
    let title = Rect::new(
        SCREEN_PADDING,
        0.0,
        SCREEN_PADDING + content_width,
        title_spec.measure(measurer),
    );

    let mut marks: Vec<Mark> = title_spec
        .marks(title)
        .into_iter()
        .map(|m| m.namespaced(TITLE_NAMESPACE))
        .collect();
    let mut charts = Vec::with_capacity(ChartKind::ALL.len());
    let mut y = title.y1;

    for kind in ChartKind::ALL {
        let chart = kind.render(records, legend, viewport.width, measurer);
        let origin = Vec2::new(SCREEN_PADDING, y);
        let frame = Rect::from_origin_size(origin.to_point(), (chart.size.width, chart.size.height));
        marks.extend(
            chart
                .marks
                .into_iter()
                .map(|m| m.namespaced(kind.namespace()).translated(origin)),
        );
        charts.push(PlacedChart { kind, frame });
        y = frame.y1 + CHART_GAP;
    }

    ScreenLayout {
        viewport,
        content_size: Size::new(viewport.width, y),
        title,
        charts,
        marks,
    }
}
