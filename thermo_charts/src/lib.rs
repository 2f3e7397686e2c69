// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `thermo_core`.
//!
//! This crate sits between raw [`thermo_core::Mark`]s and a concrete chart:
//! - **Scales** map data values into plot coordinates ([`ScaleLinear`], [`ScaleBand`]).
//! - **Series marks** turn a slice of values into marks: bars, tiles, lines, points,
//!   areas, rules and text annotations.
//! - **Guides** (axes, legends) are measured first and then arranged around the plot by
//!   [`ChartSpec`]. A [`TitleSpec`] measures and places a standalone heading.
//!
//! Text shaping is out of scope; guides size text through a [`TextMeasurer`].

#![no_std]

extern crate alloc;

mod area_mark;
mod axis;
mod bar_mark;
mod chart_spec;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod interpolate;
mod layout;
mod legend;
mod line_mark;
mod measure;
mod point_mark;
mod rect_mark;
mod rule_mark;
mod scale;
mod symbol;
mod text_mark;
mod title;
mod z_order;

pub use area_mark::AreaMarkSpec;
pub use axis::{AxisStyle, BandAxisSpec, StrokeStyle, ValueAxisSpec};
pub use bar_mark::BarMarkSpec;
pub use chart_spec::ChartSpec;
pub use format::{format_fixed, format_tick};
pub use interpolate::Interpolation;
pub use layout::{ChartLayout, ChartLayoutSpec, Size};
pub use legend::{LegendItem, LegendSpec};
pub use line_mark::LineMarkSpec;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use point_mark::PointMarkSpec;
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleBand, ScaleLinear, ScaleLinearSpec, infer_domain, nice_ticks};
pub use symbol::{Symbol, SymbolShape};
pub use text_mark::TextMarkSpec;
pub use title::TitleSpec;
pub use z_order::*;
