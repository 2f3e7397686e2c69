// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point symbols for series points and legend swatches.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Brush;
use thermo_core::{Mark, MarkId};

const SQRT_3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// Outline shapes, in the order categorical palettes assign them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolShape {
    /// A circle.
    Circle,
    /// An axis-aligned square.
    Square,
    /// An upward-pointing triangle.
    Triangle,
    /// A square rotated by 45 degrees.
    Diamond,
    /// A regular pentagon, point up.
    Pentagon,
    /// A plus-shaped cross.
    Cross,
}

impl SymbolShape {
    /// All shapes in palette order.
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Square,
        Self::Triangle,
        Self::Diamond,
        Self::Pentagon,
        Self::Cross,
    ];
}

/// A point symbol: a shape drawn either filled or as an outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Outline shape.
    pub shape: SymbolShape,
    /// Draw as a stroked outline instead of a filled shape.
    pub hollow: bool,
}

impl Symbol {
    /// A filled circle.
    pub const CIRCLE: Self = Self::filled(SymbolShape::Circle);

    /// A filled symbol of `shape`.
    pub const fn filled(shape: SymbolShape) -> Self {
        Self {
            shape,
            hollow: false,
        }
    }

    /// The `index`-th symbol of the categorical palette.
    ///
    /// Shapes cycle first; after all six filled shapes the palette repeats them hollow,
    /// so the first twelve indices are pairwise distinct.
    pub fn for_index(index: usize) -> Self {
        let n = SymbolShape::ALL.len();
        Self {
            shape: SymbolShape::ALL[index % n],
            hollow: (index / n) % 2 == 1,
        }
    }

    /// Returns the outline centered at `center`, fitting a `size` x `size` box.
    pub fn path(self, center: Point, size: f64) -> BezPath {
        let r = 0.5 * size;
        let Point { x: cx, y: cy } = center;
        match self.shape {
            SymbolShape::Circle => Circle::new(center, r).path_elements(0.1).collect(),
            SymbolShape::Square => polygon(&[
                (cx - r, cy - r),
                (cx + r, cy - r),
                (cx + r, cy + r),
                (cx - r, cy + r),
            ]),
            SymbolShape::Triangle => {
                let h = 0.5 * size * SQRT_3_OVER_2;
                polygon(&[(cx, cy - h), (cx + r, cy + h), (cx - r, cy + h)])
            }
            SymbolShape::Diamond => {
                polygon(&[(cx, cy - r), (cx + r, cy), (cx, cy + r), (cx - r, cy)])
            }
            SymbolShape::Pentagon => {
                let mut pts = [(0.0, 0.0); 5];
                for (k, p) in pts.iter_mut().enumerate() {
                    let a = -0.5 * PI + k as f64 * 2.0 * PI / 5.0;
                    *p = (cx + r * a.cos(), cy + r * a.sin());
                }
                polygon(&pts)
            }
            SymbolShape::Cross => {
                let t = r / 3.0;
                polygon(&[
                    (cx - t, cy - r),
                    (cx + t, cy - r),
                    (cx + t, cy - t),
                    (cx + r, cy - t),
                    (cx + r, cy + t),
                    (cx + t, cy + t),
                    (cx + t, cy + r),
                    (cx - t, cy + r),
                    (cx - t, cy + t),
                    (cx - r, cy + t),
                    (cx - r, cy - t),
                    (cx - t, cy - t),
                ])
            }
        }
    }

    /// Builds a path mark for this symbol painted with `paint`.
    ///
    /// Hollow symbols are stroked with a width of `size / 6` and left unfilled.
    pub fn mark(
        self,
        id: MarkId,
        z_index: i32,
        center: Point,
        size: f64,
        paint: impl Into<Brush>,
    ) -> Mark {
        let paint = paint.into();
        let builder = Mark::builder(id)
            .z_index(z_index)
            .path(self.path(center, size));
        if self.hollow {
            builder.no_fill().stroke(paint, size / 6.0).build()
        } else {
            builder.fill(paint).build()
        }
    }
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    for (i, &pt) in points.iter().enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();
    p
}
