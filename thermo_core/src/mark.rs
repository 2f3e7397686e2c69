// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: the unit of output for every chart.

use alloc::string::String;

use kurbo::{Affine, BezPath, Point, Rect, Shape, Vec2};
use peniko::{Brush, Color};

/// A stable mark identity.
///
/// Ids only need to be unique within one frame. The upper 32 bits are conventionally a
/// namespace (one per composed chart), see [`MarkId::namespaced`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns `self + n` (wrapping), used for per-row ids derived from a base.
    pub const fn offset(self, n: u64) -> Self {
        Self(self.0.wrapping_add(n))
    }

    /// Replaces the namespace (upper 32 bits) and keeps the local part.
    pub fn namespaced(self, namespace: u32) -> Self {
        Self((u64::from(namespace) << 32) | (self.0 & 0xFFFF_FFFF))
    }

    /// Returns the namespace (upper 32 bits).
    pub fn namespace(self) -> u32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the shifted value always fits in 32 bits"
        )]
        {
            (self.0 >> 32) as u32
        }
    }
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start of the run.
    Start,
    /// The position is the horizontal center of the run.
    Middle,
    /// The position is the end of the run.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the top edge of the line box.
    Top,
    /// The position is the vertical middle of the line box.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the bottom edge of the line box.
    Bottom,
}

/// CSS-style font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (`500`).
    pub const MEDIUM: Self = Self(500);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// An axis-aligned filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled and/or stroked Bézier path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint (use a transparent color for stroke-only paths).
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables stroking.
    pub stroke_width: f64,
}

/// A single line of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The resolved visual content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectPayload),
    /// A path.
    Path(PathPayload),
    /// A text run.
    Text(TextPayload),
}

impl MarkPayload {
    /// Geometric bounds, excluding stroke width.
    ///
    /// Text has no intrinsic bounds without a measurer, so this returns `None` for text,
    /// and for empty paths.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Text(_) => None,
        }
    }

    /// Moves the payload by `offset`.
    pub fn translate(&mut self, offset: Vec2) {
        match self {
            Self::Rect(r) => r.rect = r.rect + offset,
            Self::Path(p) => p.path.apply_affine(Affine::translate(offset)),
            Self::Text(t) => t.pos += offset,
        }
    }
}

/// A renderable mark with a stable identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity within a frame.
    pub id: MarkId,
    /// Paint-order hint; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Visual content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder { id, z_index: 0 }
    }

    /// Returns this mark moved by `offset`.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.payload.translate(offset);
        self
    }

    /// Returns this mark with its id moved into `namespace`.
    #[must_use]
    pub fn namespaced(mut self, namespace: u32) -> Self {
        self.id = self.id.namespaced(namespace);
        self
    }
}

/// Entry point of the mark builder; pick a kind with [`rect`](Self::rect),
/// [`path`](Self::path) or [`text`](Self::text).
#[derive(Clone, Copy, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
}

impl MarkBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Builds a rectangle mark.
    pub fn rect(self, rect: Rect) -> RectBuilder {
        RectBuilder {
            id: self.id,
            z_index: self.z_index,
            payload: RectPayload {
                rect,
                fill: Brush::default(),
            },
        }
    }

    /// Builds a path mark; the default is a black fill with no stroke.
    pub fn path(self, path: BezPath) -> PathBuilder {
        PathBuilder {
            id: self.id,
            z_index: self.z_index,
            payload: PathPayload {
                path,
                fill: Brush::default(),
                stroke: Brush::Solid(Color::TRANSPARENT),
                stroke_width: 0.0,
            },
        }
    }

    /// Builds a text mark with 12-unit, normal-weight, start-anchored, middle-baseline text.
    pub fn text(self, pos: Point, text: impl Into<String>) -> TextBuilder {
        TextBuilder {
            id: self.id,
            z_index: self.z_index,
            payload: TextPayload {
                pos,
                text: text.into(),
                font_size: 12.0,
                font_weight: FontWeight::NORMAL,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                fill: Brush::default(),
            },
        }
    }
}

/// Builder for [`MarkPayload::Rect`].
#[derive(Clone, Debug)]
pub struct RectBuilder {
    id: MarkId,
    z_index: i32,
    payload: RectPayload,
}

impl RectBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload: MarkPayload::Rect(self.payload),
        }
    }
}

/// Builder for [`MarkPayload::Path`].
#[derive(Clone, Debug)]
pub struct PathBuilder {
    id: MarkId,
    z_index: i32,
    payload: PathPayload,
}

impl PathBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Disables filling.
    pub fn no_fill(mut self) -> Self {
        self.payload.fill = Brush::Solid(Color::TRANSPARENT);
        self
    }

    /// Sets stroke paint and width.
    pub fn stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.payload.stroke = stroke.into();
        self.payload.stroke_width = stroke_width.max(0.0);
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload: MarkPayload::Path(self.payload),
        }
    }
}

/// Builder for [`MarkPayload::Text`].
#[derive(Clone, Debug)]
pub struct TextBuilder {
    id: MarkId,
    z_index: i32,
    payload: TextPayload,
}

impl TextBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.payload.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn font_weight(mut self, font_weight: FontWeight) -> Self {
        self.payload.font_weight = font_weight;
        self
    }

    /// Sets the horizontal anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.payload.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.payload.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload: MarkPayload::Text(self.payload),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn namespacing_keeps_local_part() {
        let id = MarkId::from_raw(0x1234).namespaced(7);
        assert_eq!(id.namespace(), 7, "namespace is stored in the upper bits");
        assert_eq!(id.0 & 0xFFFF_FFFF, 0x1234, "local part survives");
        assert_eq!(id.namespaced(9).0 & 0xFFFF_FFFF, 0x1234, "re-namespacing");
    }

    #[test]
    fn translation_moves_every_payload_kind() {
        let offset = Vec2::new(10.0, 5.0);

        let rect = Mark::builder(MarkId(1))
            .rect(Rect::new(0.0, 0.0, 2.0, 2.0))
            .build()
            .translated(offset);
        assert_eq!(rect.payload.bounds(), Some(Rect::new(10.0, 5.0, 12.0, 7.0)));

        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((4.0, 4.0));
        let path = Mark::builder(MarkId(2)).path(p).build().translated(offset);
        assert_eq!(path.payload.bounds(), Some(Rect::new(10.0, 5.0, 14.0, 9.0)));

        let text = Mark::builder(MarkId(3))
            .text(Point::new(1.0, 1.0), "x")
            .build()
            .translated(offset);
        let MarkPayload::Text(t) = text.payload else {
            panic!("expected a text payload");
        };
        assert_eq!(t.pos, Point::new(11.0, 6.0));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let mark = Mark::builder(MarkId(1)).path(BezPath::new()).build();
        assert_eq!(mark.payload.bounds(), None);
    }
}
