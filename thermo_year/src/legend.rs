// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The threshold legend shared by the bar and rectangle charts.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use thermo_charts::LegendItem;

use crate::category::ColorCategory;

/// A legend row: a threshold label and the bucket it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    /// Threshold label, e.g. `"<= 10"`.
    pub label: &'static str,
    /// The bucket the label describes.
    pub category: ColorCategory,
}

impl LegendEntry {
    /// The swatch color.
    pub const fn color(self) -> Color {
        self.category.color()
    }
}

/// Threshold labels in ascending order, one per bucket.
pub const LEGEND: [LegendEntry; 5] = [
    LegendEntry {
        label: "<= 0",
        category: ColorCategory::FreezingOrBelow,
    },
    LegendEntry {
        label: "<= 10",
        category: ColorCategory::Cold,
    },
    LegendEntry {
        label: "<= 15",
        category: ColorCategory::Mild,
    },
    LegendEntry {
        label: "<= 20",
        category: ColorCategory::Warm,
    },
    LegendEntry {
        label: "> 20",
        category: ColorCategory::Hot,
    },
];

/// Converts legend entries into chart legend items, preserving order.
pub fn category_legend_items(entries: &[LegendEntry]) -> Vec<LegendItem> {
    entries
        .iter()
        .map(|e| LegendItem::solid(e.label, e.color()))
        .collect()
}
