// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Temperatures in a year.
//!
//! Twelve monthly temperatures rendered four ways (bars, a line, tiles, and an area with
//! its mean), stacked into one scrolling screen:
//! - [`temperatures`] is the fixed sample dataset.
//! - [`classify`] buckets a temperature into a [`ColorCategory`]; [`LEGEND`] lists the
//!   buckets in threshold order.
//! - [`bar_chart`], [`line_chart`], [`rectangle_chart`] and [`area_chart`] turn records
//!   into [`thermo_core::Mark`]s for a given viewport width.
//! - [`compose`] lays the title and the four charts out for a viewport.
//!
//! Everything here is pure: the viewport size is the only environment input.

#![no_std]

extern crate alloc;

mod category;
mod charts;
mod dataset;
mod legend;
mod palette;
mod screen;

#[cfg(test)]
mod renderer_tests;

pub use category::{ColorCategory, classify};
pub use charts::{
    CHART_HEIGHT, CHART_MARGIN, ChartScales, RenderedChart, area_chart, bar_chart, frame_size,
    line_chart, rectangle_chart,
};
pub use dataset::{Month, TEMPERATURES, TemperatureRecord, mean_celsius, temperatures};
pub use legend::{LEGEND, LegendEntry, category_legend_items};
pub use palette::*;
pub use screen::{
    CHART_GAP, ChartKind, PlacedChart, SCREEN_PADDING, ScreenLayout, TITLE, Viewport, compose,
};
