// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and type sizes, after the light system palette.

use peniko::Color;

/// System blue.
pub const SYSTEM_BLUE: Color = Color::from_rgb8(0x00, 0x7A, 0xFF);
/// System teal.
pub const SYSTEM_TEAL: Color = Color::from_rgb8(0x30, 0xB0, 0xC7);
/// System green.
pub const SYSTEM_GREEN: Color = Color::from_rgb8(0x34, 0xC7, 0x59);
/// System orange.
pub const SYSTEM_ORANGE: Color = Color::from_rgb8(0xFF, 0x95, 0x00);
/// System red.
pub const SYSTEM_RED: Color = Color::from_rgb8(0xFF, 0x3B, 0x30);

/// Primary text.
pub const LABEL: Color = Color::from_rgb8(0x00, 0x00, 0x00);
/// Secondary text, e.g. value annotations and axis labels.
pub const SECONDARY_LABEL: Color = Color::from_rgba8(0x3C, 0x3C, 0x43, 0x99);
/// Gridlines and axis rules.
pub const SEPARATOR: Color = Color::from_rgba8(0x3C, 0x3C, 0x43, 0x4A);
/// Screen background.
pub const BACKGROUND: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// Screen title size.
pub const TITLE_FONT_SIZE: f64 = 28.0;
/// Caption size, used for value annotations and legends.
pub const CAPTION_FONT_SIZE: f64 = 12.0;
/// Axis label size.
pub const AXIS_FONT_SIZE: f64 = 10.0;
