// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Temperature buckets and their colors.

use peniko::Color;

use crate::palette::{SYSTEM_BLUE, SYSTEM_GREEN, SYSTEM_ORANGE, SYSTEM_RED, SYSTEM_TEAL};

/// A temperature bucket. The five buckets partition the real line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorCategory {
    /// At or below 0 °C.
    FreezingOrBelow,
    /// Above 0 °C, at most 10 °C.
    Cold,
    /// Above 10 °C, at most 15 °C.
    Mild,
    /// Above 15 °C, at most 20 °C.
    Warm,
    /// Above 20 °C.
    Hot,
}

impl ColorCategory {
    /// All buckets in ascending threshold order.
    pub const ALL: [Self; 5] = [
        Self::FreezingOrBelow,
        Self::Cold,
        Self::Mild,
        Self::Warm,
        Self::Hot,
    ];

    /// The bucket's color.
    pub const fn color(self) -> Color {
        match self {
            Self::FreezingOrBelow => SYSTEM_BLUE,
            Self::Cold => SYSTEM_TEAL,
            Self::Mild => SYSTEM_GREEN,
            Self::Warm => SYSTEM_ORANGE,
            Self::Hot => SYSTEM_RED,
        }
    }

    /// Whether `celsius` falls inside this bucket's range.
    pub fn contains(self, celsius: f64) -> bool {
        match self {
            Self::FreezingOrBelow => celsius <= 0.0,
            Self::Cold => celsius > 0.0 && celsius <= 10.0,
            Self::Mild => celsius > 10.0 && celsius <= 15.0,
            Self::Warm => celsius > 15.0 && celsius <= 20.0,
            Self::Hot => celsius > 20.0,
        }
    }
}

/// Buckets a temperature; the first matching upper bound wins.
///
/// Infinities land in the outer buckets. NaN fails every `<=` test and lands in
/// [`ColorCategory::Hot`].
pub fn classify(celsius: f64) -> ColorCategory {
    if celsius <= 0.0 {
        ColorCategory::FreezingOrBelow
    } else if celsius <= 10.0 {
        ColorCategory::Cold
    } else if celsius <= 15.0 {
        ColorCategory::Mild
    } else if celsius <= 20.0 {
        ColorCategory::Warm
    } else {
        ColorCategory::Hot
    }
}
