// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for guide layout.
//!
//! Axes, legends and titles reserve space before any mark exists, so they need
//! approximate text extents. Shaping stays downstream; callers plug in whatever
//! measurer matches their renderer.

/// A minimal text measurement interface used by guide generators.
pub trait TextMeasurer {
    /// Returns `(width, height)` of a single line, in mark coordinates.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A heuristic measurer: ~0.6em per glyph, 1em tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_glyph_count() {
        let m = HeuristicTextMeasurer;
        let (w1, h1) = m.measure("JAN", 10.0);
        let (w2, h2) = m.measure("JANUARY", 10.0);
        assert!(w2 > w1, "longer text is wider");
        assert_eq!(h1, h2, "height depends on font size only");
    }
}
