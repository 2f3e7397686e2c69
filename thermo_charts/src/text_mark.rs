// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;
use thermo_core::{FontWeight, Mark, MarkId, TextAnchor, TextBaseline};

/// A single text run centered above its anchor point, e.g. a per-datum annotation.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a 12-unit, normal-weight, centered annotation sitting on `pos`.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            font_size: 12.0,
            font_weight: FontWeight::NORMAL,
            fill: Brush::default(),
            z_index: crate::z_order::ANNOTATIONS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::builder(self.id)
            .z_index(self.z_index)
            .text(self.pos, self.text.clone())
            .font_size(self.font_size)
            .font_weight(self.font_weight)
            .anchor(TextAnchor::Middle)
            .baseline(TextBaseline::Bottom)
            .fill(self.fill.clone())
            .build()
    }
}
