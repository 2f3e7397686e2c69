// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained set of marks with frame-to-frame diffing.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::mark::{Mark, MarkId, MarkPayload};

/// A change between two frames, keyed by mark id.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark that was not present in the previous frame.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Paint-order hint.
        z_index: i32,
        /// New content.
        new: Box<MarkPayload>,
    },
    /// A mark whose content or z-index changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// Previous paint-order hint.
        old_z_index: i32,
        /// New paint-order hint.
        new_z_index: i32,
        /// Previous content.
        old: Box<MarkPayload>,
        /// New content.
        new: Box<MarkPayload>,
    },
    /// A mark that is no longer present.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Last paint-order hint.
        z_index: i32,
        /// Last content.
        old: Box<MarkPayload>,
    },
}

impl MarkDiff {
    /// The id this diff applies to.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The marks of the most recent frame.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current frame with `marks` and returns what changed.
    ///
    /// Diffs are ordered by id: enters and updates first, then exits. If `marks` contains
    /// the same id twice, the later mark wins.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, Mark> = HashMap::with_capacity(marks.len());
        for mark in marks {
            next.insert(mark.id, mark);
        }

        let mut ids: Vec<MarkId> = next.keys().copied().collect();
        ids.sort_unstable();

        let mut diffs = Vec::new();
        for id in ids {
            let new = &next[&id];
            match self.marks.get(&id) {
                None => diffs.push(MarkDiff::Enter {
                    id,
                    z_index: new.z_index,
                    new: Box::new(new.payload.clone()),
                }),
                Some(old) if old != new => diffs.push(MarkDiff::Update {
                    id,
                    old_z_index: old.z_index,
                    new_z_index: new.z_index,
                    old: Box::new(old.payload.clone()),
                    new: Box::new(new.payload.clone()),
                }),
                Some(_) => {}
            }
        }

        let mut gone: Vec<MarkId> = self
            .marks
            .keys()
            .filter(|id| !next.contains_key(*id))
            .copied()
            .collect();
        gone.sort_unstable();
        for id in gone {
            if let Some(old) = self.marks.remove(&id) {
                diffs.push(MarkDiff::Exit {
                    id,
                    z_index: old.z_index,
                    old: Box::new(old.payload),
                });
            }
        }

        self.marks = next;
        diffs
    }

    /// Number of marks in the current frame.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the current frame has no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the current marks sorted by `(z_index, id)`.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }
}
