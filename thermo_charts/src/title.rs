// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Titles.
//!
//! A title reports the height it needs, then renders as a single text mark centered in the
//! rectangle it was given.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use thermo_core::{FontWeight, Mark, MarkId, TextAnchor, TextBaseline};

use crate::measure::TextMeasurer;
use crate::z_order;

/// A single-line title.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Title text (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Fill paint.
    pub fill: Brush,
    /// Vertical padding above and below the text.
    pub padding: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TitleSpec {
    /// Creates a centered 12-unit title with 6 units of padding.
    pub fn new(id: MarkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            font_size: 12.0,
            font_weight: FontWeight::NORMAL,
            fill: Brush::default(),
            padding: 6.0,
            z_index: z_order::TITLES,
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

    /// Returns the height this title reserves.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let (_w, h) = measurer.measure(&self.text, self.font_size);
        2.0 * self.padding.max(0.0) + h
    }

    /// Emits the title mark placed within `rect`.
    pub fn marks(&self, rect: Rect) -> Vec<Mark> {
        alloc::vec![
            Mark::builder(self.id)
                .z_index(self.z_index)
                .text(rect.center(), self.text.clone())
                .font_size(self.font_size)
                .font_weight(self.font_weight)
                .anchor(TextAnchor::Middle)
                .baseline(TextBaseline::Middle)
                .fill(self.fill.clone())
                .build()
        ]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;
    use thermo_core::MarkPayload;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    #[test]
    fn centered_title_sits_mid_rect() {
        let title = TitleSpec::new(MarkId(7), "Title")
            .with_font_size(20.0)
            .with_font_weight(FontWeight::BOLD);
        let h = title.measure(&HeuristicTextMeasurer);
        assert_eq!(h, 32.0);

        let marks = title.marks(Rect::new(0.0, 0.0, 200.0, h));
        assert_eq!(marks.len(), 1);
        let MarkPayload::Text(t) = &marks[0].payload else {
            panic!("title is text");
        };
        assert_eq!(t.pos, Point::new(100.0, 16.0));
        assert_eq!(t.font_weight, FontWeight::BOLD);
        assert_eq!(t.anchor, TextAnchor::Middle);
    }
}
