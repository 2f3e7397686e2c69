// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Values are coarse. Renderers sort by `(z_index, MarkId)`, so ties are
//! still deterministic.

/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (bars, tiles, areas).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines, rules).
pub const SERIES_STROKE: i32 = 10;
/// Point symbols drawn above lines.
pub const SERIES_POINTS: i32 = 20;
/// Per-datum text annotations.
pub const ANNOTATIONS: i32 = 25;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Chart- and screen-level titles.
pub const TITLES: i32 = 80;
