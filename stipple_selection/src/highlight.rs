// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashSet;
use stipple_data::IndexMap;

/// Per-point highlight flags for the point renderer, in local order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    flags: Vec<u8>,
    selected: usize,
}

impl Highlights {
    /// Flags every materialized point whose global index is in `selection`.
    ///
    /// Selected points the map does not materialize are ignored.
    #[must_use]
    pub fn from_selection(selection: impl IntoIterator<Item = u32>, map: &IndexMap) -> Self {
        let selection: HashSet<u32> = selection.into_iter().collect();
        let flags = map
            .local_to_global()
            .iter()
            .map(|global| u8::from(selection.contains(global)))
            .collect();
        let selected = selection
            .iter()
            .filter(|&&global| map.global_to_local(global).is_some())
            .count();
        Self { flags, selected }
    }

    /// One flag per local point, `1` if selected.
    #[must_use]
    pub fn flags(&self) -> &[u8] {
        &self.flags
    }

    /// Number of distinct selected points among the materialized ones.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use stipple_data::{DatasetId, IndexMap, MemoryDataset};

    use super::Highlights;

    #[test]
    fn subset_highlights_in_local_order() {
        let full = MemoryDataset::full(DatasetId::new(1), 1, vec![0.0; 10]);
        let subset = full.subset(DatasetId::new(2), vec![8, 3, 6]).unwrap();
        let map = IndexMap::for_dataset(&subset).unwrap();

        let highlights = Highlights::from_selection([6, 1, 8, 8], &map);
        assert_eq!(highlights.flags(), &[1, 0, 1]);
        assert_eq!(highlights.selected_count(), 2);
    }
}
