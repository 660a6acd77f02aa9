// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashSet;
use stipple_data::IndexMap;

/// How a freshly resolved target set combines with the existing selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionModifier {
    /// The targets become the selection.
    #[default]
    Replace,
    /// The targets are added to the selection.
    Add,
    /// The targets are removed from the selection.
    Subtract,
}

/// A set of global point indices plus a revision counter.
///
/// The revision bumps only when the contents actually change, so observers
/// can compare revisions instead of contents.
#[derive(Clone, Debug, Default)]
pub struct IndexSelection {
    indices: HashSet<u32>,
    revision: u64,
}

impl IndexSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from global indices; duplicates are ignored.
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of selected points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if `index` is selected.
    #[must_use]
    pub fn contains(&self, index: u32) -> bool {
        self.indices.contains(&index)
    }

    /// Iterates the selected indices in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// The selected indices in ascending order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<u32> {
        let mut out: Vec<u32> = self.indices.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// Current revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.indices.is_empty() {
            return;
        }
        self.indices.clear();
        self.bump_revision();
    }

    /// Combines `targets` into the selection according to `modifier`.
    pub fn apply(&mut self, modifier: SelectionModifier, targets: impl IntoIterator<Item = u32>) {
        match modifier {
            SelectionModifier::Replace => self.replace_with(targets),
            SelectionModifier::Add => self.extend_with(targets),
            SelectionModifier::Subtract => self.subtract(targets),
        }
    }

    /// Replaces the selection with `targets`.
    pub fn replace_with(&mut self, targets: impl IntoIterator<Item = u32>) {
        let new: HashSet<u32> = targets.into_iter().collect();
        if new == self.indices {
            return;
        }
        self.indices = new;
        self.bump_revision();
    }

    /// Adds `targets` to the selection.
    pub fn extend_with(&mut self, targets: impl IntoIterator<Item = u32>) {
        let before = self.indices.len();
        self.indices.extend(targets);
        if self.indices.len() != before {
            self.bump_revision();
        }
    }

    /// Removes `targets` from the selection.
    pub fn subtract(&mut self, targets: impl IntoIterator<Item = u32>) {
        let mut changed = false;
        for index in targets {
            changed |= self.indices.remove(&index);
        }
        if changed {
            self.bump_revision();
        }
    }

    /// Selects every point materialized by `map`.
    ///
    /// Points of the global index space that the map does not materialize keep
    /// their current state.
    pub fn select_all(&mut self, map: &IndexMap) {
        self.extend_with(map.local_to_global().iter().copied());
    }

    /// Flips the state of every point materialized by `map`.
    ///
    /// Points outside the map keep their current state.
    pub fn invert(&mut self, map: &IndexMap) {
        if map.is_empty() {
            return;
        }
        for &index in map.local_to_global() {
            if !self.indices.remove(&index) {
                self.indices.insert(index);
            }
        }
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl PartialEq for IndexSelection {
    fn eq(&self, other: &Self) -> bool {
        self.indices == other.indices
    }
}

impl Eq for IndexSelection {}

impl FromIterator<u32> for IndexSelection {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}
