// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A legend is a grid of "swatch + label" cells. Items fill rows left to right, and the
//! column count is fixed, so a legend's height never depends on the width it is given.
//! Cell `i` owns ids `id_base + 2i` (swatch) and `id_base + 2i + 1` (label), so legends of
//! any length keep their ids distinct.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::palette::css;
use peniko::{Brush, Color};
use thermo_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::layout::Size;
use crate::measure::TextMeasurer;
use crate::symbol::Symbol;
use crate::z_order;

/// One legend cell.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label shown next to the swatch.
    pub label: String,
    /// Swatch shape.
    pub symbol: Symbol,
    /// Swatch paint.
    pub fill: Brush,
}

impl LegendItem {
    /// A solid-color circle swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            symbol: Symbol::CIRCLE,
            fill: Brush::Solid(color),
        }
    }

    /// A swatch drawn as `symbol`.
    pub fn symbol(label: impl Into<String>, symbol: Symbol, fill: impl Into<Brush>) -> Self {
        Self {
            label: label.into(),
            symbol,
            fill: fill.into(),
        }
    }
}

/// A swatch legend laid out in a fixed number of columns.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    /// Stable-id base; see the module docs for the per-cell layout.
    pub id_base: u64,
    /// Items in display order.
    pub items: Vec<LegendItem>,
    /// Number of columns.
    pub columns: usize,
    /// Swatch box size.
    pub swatch_size: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label paint.
    pub text_fill: Brush,
}

impl LegendSpec {
    /// Creates a single-row legend (one column per item).
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            columns: items.len().max(1),
            items,
            swatch_size: 8.0,
            label_dx: 4.0,
            column_gap: 12.0,
            row_gap: 4.0,
            font_size: 10.0,
            text_fill: Brush::Solid(css::BLACK),
        }
    }

    /// Sets the column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the label paint.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    fn rows(&self) -> usize {
        self.items.len().div_ceil(self.columns.max(1))
    }

    fn column_width(&self, measurer: &dyn TextMeasurer) -> f64 {
        let widest = self
            .items
            .iter()
            .map(|it| measurer.measure(&it.label, self.font_size).0)
            .fold(0.0_f64, f64::max);
        self.swatch_size + self.label_dx + widest
    }

    /// Returns the legend's desired size. An empty legend measures zero.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        if self.items.is_empty() {
            return Size::default();
        }
        let columns = self.columns.max(1).min(self.items.len());
        let rows = self.rows();
        Size {
            width: columns as f64 * self.column_width(measurer)
                + (columns - 1) as f64 * self.column_gap,
            height: rows as f64 * self.row_height() + (rows - 1) as f64 * self.row_gap,
        }
    }

    /// Generates swatch and label marks with the legend's top-left corner at `origin`.
    pub fn marks(&self, measurer: &dyn TextMeasurer, origin: Point) -> Vec<Mark> {
        let columns = self.columns.max(1);
        let row_height = self.row_height();
        let column_width = self.column_width(measurer);
        let mut out = Vec::with_capacity(2 * self.items.len());

        for (i, item) in self.items.iter().enumerate() {
            let col = i % columns;
            let row = i / columns;
            let x = origin.x + col as f64 * (column_width + self.column_gap);
            let cy = origin.y + row as f64 * (row_height + self.row_gap) + 0.5 * row_height;

            out.push(item.symbol.mark(
                MarkId::from_raw(self.id_base).offset(2 * i as u64),
                z_order::LEGEND_SWATCHES,
                Point::new(x + 0.5 * self.swatch_size, cy),
                self.swatch_size,
                item.fill.clone(),
            ));
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base).offset(2 * i as u64 + 1))
                    .z_index(z_order::LEGEND_LABELS)
                    .text(
                        Point::new(x + self.swatch_size + self.label_dx, cy),
                        item.label.clone(),
                    )
                    .font_size(self.font_size)
                    .anchor(TextAnchor::Start)
                    .baseline(TextBaseline::Middle)
                    .fill(self.text_fill.clone())
                    .build(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use std::collections::HashSet;
    use std::format;

    use thermo_core::MarkPayload;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn items(n: usize) -> Vec<LegendItem> {
        (0..n)
            .map(|i| LegendItem::solid(format!("item {i}"), css::TEAL))
            .collect()
    }

    #[test]
    fn empty_legend_is_zero_sized() {
        let legend = LegendSpec::new(0, Vec::new());
        assert_eq!(legend.measure(&HeuristicTextMeasurer), Size::default());
        assert!(legend.marks(&HeuristicTextMeasurer, Point::ORIGIN).is_empty());
    }

    #[test]
    fn rows_wrap_at_the_column_count() {
        let legend = LegendSpec::new(0, items(5)).with_columns(2);
        let size = legend.measure(&HeuristicTextMeasurer);
        // Three rows of 10 units with two 4-unit gaps.
        assert!((size.height - 38.0).abs() < 1e-9);

        let ys: Vec<f64> = legend
            .marks(&HeuristicTextMeasurer, Point::ORIGIN)
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.pos.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![5.0, 5.0, 19.0, 19.0, 33.0]);
    }

    #[test]
    fn swatches_and_labels_have_distinct_ids() {
        let marks = LegendSpec::new(40, items(3)).marks(&HeuristicTextMeasurer, Point::ORIGIN);
        let ids: Vec<u64> = marks.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![40, 41, 42, 43, 44, 45]);
    }

    #[test]
    fn long_legends_keep_ids_unique() {
        let marks =
            LegendSpec::new(0, items(1500)).marks(&HeuristicTextMeasurer, Point::ORIGIN);
        let ids: HashSet<u64> = marks.iter().map(|m| m.id.0).collect();
        assert_eq!(ids.len(), 3000);
    }

    #[test]
    fn swatch_uses_item_paint() {
        let marks = LegendSpec::new(0, items(1)).marks(&HeuristicTextMeasurer, Point::ORIGIN);
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("swatch is a symbol path");
        };
        assert_eq!(p.fill, Brush::Solid(css::TEAL));
    }
}
