// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! Two axis flavors cover categorical-x / continuous-y charts:
//! - [`BandAxisSpec`]: one label per category under the plot.
//! - [`ValueAxisSpec`]: nice ticks on the trailing edge, optionally with horizontal
//!   gridlines.
//!
//! Both follow the same two-pass shape: `measure` returns the thickness to reserve, then
//! `marks` emits marks once the plot and axis rectangles are known.
//!
//! Per-tick marks interleave their ids, so an axis with any number of ticks never reuses
//! one.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use thermo_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::format::format_tick;
use crate::measure::TextMeasurer;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, ScaleLinearSpec};
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks, gridlines, series lines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// A continuous y axis on the plot's trailing edge.
#[derive(Clone, Debug)]
pub struct ValueAxisSpec {
    /// Stable-id base; tick `i` has its gridline at `id_base + 2i` and its label at
    /// `id_base + 2i + 1`.
    pub id_base: u64,
    /// Domain and its policies.
    pub scale: ScaleLinearSpec,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Gap between the plot edge and the labels.
    pub label_padding: f64,
    /// Label and rule styling.
    pub style: AxisStyle,
    /// Horizontal gridlines across the plot, if any.
    pub grid: Option<StrokeStyle>,
}

impl ValueAxisSpec {
    /// Creates an axis with 5 ticks, 6 units of label padding, default style, no grid.
    pub fn new(id_base: u64, scale: ScaleLinearSpec) -> Self {
        Self {
            id_base,
            scale,
            tick_count: 5,
            label_padding: 6.0,
            style: AxisStyle::default(),
            grid: None,
        }
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the styling.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enables gridlines.
    pub fn with_grid(mut self, grid: StrokeStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Instantiates the y scale for a plot rectangle.
    pub fn scale(&self, plot: Rect) -> ScaleLinear {
        self.scale.instantiate((plot.y1, plot.y0), self.tick_count)
    }

    /// Tick values inside the resolved domain.
    pub fn ticks(&self) -> Vec<f64> {
        let (lo, hi) = self.scale.resolved_domain(self.tick_count);
        let eps = (hi - lo).abs() * 1e-9;
        ScaleLinear::new((lo, hi), (0.0, 1.0))
            .ticks(self.tick_count)
            .into_iter()
            .filter(|t| *t >= lo - eps && *t <= hi + eps)
            .collect()
    }

    fn labels(&self, ticks: &[f64]) -> Vec<String> {
        let step = match ticks {
            [a, b, ..] => b - a,
            _ => 1.0,
        };
        ticks.iter().map(|&t| format_tick(t, step)).collect()
    }

    /// Thickness (width) to reserve beside the plot.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let ticks = self.ticks();
        let widest = self
            .labels(&ticks)
            .iter()
            .map(|s| measurer.measure(s, self.style.label_font_size).0)
            .fold(0.0_f64, f64::max);
        self.label_padding + widest
    }

    /// Generates gridlines and labels.
    pub fn marks(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let scale = self.scale(plot);
        let ticks = self.ticks();
        let labels = self.labels(&ticks);
        let mut out = Vec::with_capacity(2 * ticks.len());

        for (i, (&t, label)) in ticks.iter().zip(labels).enumerate() {
            let y = scale.map(t);
            if let Some(grid) = &self.grid {
                out.push(
                    RuleMarkSpec::horizontal(
                        MarkId::from_raw(self.id_base).offset(2 * i as u64),
                        y,
                        plot.x0,
                        plot.x1,
                    )
                    .with_stroke(grid.brush.clone(), grid.stroke_width)
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
                );
            }
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base).offset(2 * i as u64 + 1))
                    .z_index(z_order::AXIS_LABELS)
                    .text(Point::new(axis_rect.x0 + self.label_padding, y), label)
                    .font_size(self.style.label_font_size)
                    .anchor(TextAnchor::Start)
                    .baseline(TextBaseline::Middle)
                    .fill(self.style.label_fill.clone())
                    .build(),
            );
        }
        out
    }
}

/// A categorical x axis: one label per band, below the plot.
#[derive(Clone, Debug)]
pub struct BandAxisSpec {
    /// Stable-id base; the domain line is `id_base`, band `i` has its tick at
    /// `id_base + 2i + 1` and its label at `id_base + 2i + 2`.
    pub id_base: u64,
    /// Category labels in band order.
    pub labels: Vec<String>,
    /// Inner band padding.
    pub padding_inner: f64,
    /// Outer band padding.
    pub padding_outer: f64,
    /// Tick length below the domain line.
    pub tick_size: f64,
    /// Gap between tick end and label.
    pub label_padding: f64,
    /// Label and rule styling.
    pub style: AxisStyle,
}

impl BandAxisSpec {
    /// Creates an axis with `0.2` / `0.1` band padding, 4-unit ticks and 2 units of label
    /// padding.
    pub fn new(id_base: u64, labels: Vec<String>) -> Self {
        Self {
            id_base,
            labels,
            padding_inner: 0.2,
            padding_outer: 0.1,
            tick_size: 4.0,
            label_padding: 2.0,
            style: AxisStyle::default(),
        }
    }

    /// Sets band padding.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner;
        self.padding_outer = outer;
        self
    }

    /// Sets the styling.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Instantiates the band scale for a plot rectangle.
    pub fn scale(&self, plot: Rect) -> ScaleBand {
        ScaleBand::new((plot.x0, plot.x1), self.labels.len())
            .with_padding(self.padding_inner, self.padding_outer)
    }

    /// Thickness (height) to reserve below the plot.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let (_w, h) = measurer.measure("Mg", self.style.label_font_size);
        self.tick_size.max(0.0) + self.label_padding.max(0.0) + h
    }

    /// Generates the domain line, ticks and labels.
    pub fn marks(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let band = self.scale(plot);
        let rule = &self.style.rule;
        let mut out = Vec::with_capacity(1 + 2 * self.labels.len());

        out.push(
            RuleMarkSpec::horizontal(MarkId::from_raw(self.id_base), plot.y1, plot.x0, plot.x1)
                .with_stroke(rule.brush.clone(), rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
        );

        let label_y = axis_rect.y0 + self.tick_size + self.label_padding;
        for (i, label) in self.labels.iter().enumerate() {
            let x = band.center(i);
            out.push(
                RuleMarkSpec::vertical(
                    MarkId::from_raw(self.id_base).offset(2 * i as u64 + 1),
                    x,
                    plot.y1,
                    plot.y1 + self.tick_size,
                )
                .with_stroke(rule.brush.clone(), rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
            );
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base).offset(2 * i as u64 + 2))
                    .z_index(z_order::AXIS_LABELS)
                    .text(Point::new(x, label_y), label.clone())
                    .font_size(self.style.label_font_size)
                    .anchor(TextAnchor::Middle)
                    .baseline(TextBaseline::Top)
                    .fill(self.style.label_fill.clone())
                    .build(),
            );
        }
        out
    }
}
