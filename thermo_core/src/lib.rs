// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal retained scene for chart marks.
//!
//! Charts compile down to a flat list of [`Mark`]s: rectangles, Bézier paths and
//! unshaped text runs, each with a stable [`MarkId`] and a `z_index` paint-order hint.
//! A [`Scene`] keeps the previous frame and reports what changed when a host
//! recomposes (for example after a viewport resize), so renderers can patch
//! instead of repainting.
//!
//! Text shaping and rasterization are out of scope; hosts decide how to paint.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    FontWeight, Mark, MarkBuilder, MarkId, MarkPayload, PathBuilder, PathPayload, RectBuilder,
    RectPayload, TextAnchor, TextBaseline, TextBuilder, TextPayload,
};
pub use scene::{MarkDiff, Scene};
