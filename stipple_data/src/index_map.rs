// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Local/global index translation.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::dataset::Dataset;
use crate::error::DataError;
use crate::id::DatasetId;

/// Translation between local and global point indices of one dataset.
///
/// Built by [`IndexMap::for_dataset`] and owned by the caller; it holds no
/// reference to the dataset, so it stays valid (if stale) after the host
/// drops or changes the dataset. Rebuild it on every dataset change.
#[derive(Clone, Debug, Default)]
pub struct IndexMap {
    local_to_global: Vec<u32>,
    global_to_local: Option<HashMap<u32, usize>>,
    global_count: usize,
}

impl IndexMap {
    /// Builds the mapping for `dataset`.
    ///
    /// For a full dataset the mapping is the identity `0..n`; for a subset it
    /// is the subset's stored index list.
    ///
    /// # Errors
    ///
    /// - [`DataError::CountMismatch`] if the dataset is derived and its
    ///   declared source has a different point count than the dataset itself.
    /// - [`DataError::IndexOutOfRange`] if a subset lists an index outside the
    ///   global index space.
    pub fn for_dataset(dataset: &dyn Dataset) -> Result<Self, DataError> {
        let full = dataset.full_point_count();
        let global_count = match dataset.derived_from() {
            Some(source) if source.point_count != full => {
                return Err(DataError::CountMismatch {
                    expected: source.point_count,
                    actual: full,
                });
            }
            Some(source) => source.point_count,
            None => full,
        };

        let Some(subset) = dataset.subset_indices() else {
            let local_to_global = (0..full)
                .map(|i| u32::try_from(i).map_err(|_| out_of_range(i, full)))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self {
                local_to_global,
                global_to_local: None,
                global_count,
            });
        };

        let mut lookup = HashMap::with_capacity(subset.len());
        for (local, &global) in subset.iter().enumerate() {
            if global as usize >= global_count {
                return Err(out_of_range(global as usize, global_count));
            }
            // First occurrence wins if a host lists a point twice.
            lookup.entry(global).or_insert(local);
        }
        Ok(Self {
            local_to_global: subset.to_vec(),
            global_to_local: Some(lookup),
            global_count,
        })
    }

    /// Entry `i` is the global index of local point `i`.
    #[must_use]
    pub fn local_to_global(&self) -> &[u32] {
        &self.local_to_global
    }

    /// Global index of local point `local`, if it exists.
    #[must_use]
    pub fn global(&self, local: usize) -> Option<u32> {
        self.local_to_global.get(local).copied()
    }

    /// Local index of the point with global index `global`, if it is materialized.
    #[must_use]
    pub fn global_to_local(&self, global: u32) -> Option<usize> {
        match &self.global_to_local {
            Some(lookup) => lookup.get(&global).copied(),
            None => {
                let local = global as usize;
                (local < self.local_to_global.len()).then_some(local)
            }
        }
    }

    /// Number of materialized (local) points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.local_to_global.len()
    }

    /// Returns `true` if no points are materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.local_to_global.is_empty()
    }

    /// Size of the global index space.
    ///
    /// For a derived dataset this is the full point count of its source;
    /// otherwise it is the dataset's own full point count.
    #[must_use]
    pub fn global_count(&self) -> usize {
        self.global_count
    }

    /// Returns `true` if local and global indices coincide.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.global_to_local.is_none()
    }

    /// Gathers a buffer indexed by global index into local order.
    ///
    /// # Errors
    ///
    /// [`DataError::IndexOutOfRange`] if `global_buffer` is too short for one
    /// of the mapped global indices.
    pub fn gather<T: Copy>(&self, global_buffer: &[T]) -> Result<Vec<T>, DataError> {
        self.local_to_global
            .iter()
            .map(|&g| {
                global_buffer
                    .get(g as usize)
                    .copied()
                    .ok_or_else(|| out_of_range(g as usize, global_buffer.len()))
            })
            .collect()
    }
}

/// The dataset whose selection a view of `dataset` reads and writes.
///
/// Selections are kept once per lineage: a derived dataset selects in its
/// source, a subset selects in the dataset it was cut from, and everything
/// else selects in itself.
#[must_use]
pub fn selection_owner(dataset: &dyn Dataset) -> DatasetId {
    dataset
        .derived_from()
        .map(|source| source.id)
        .or_else(|| dataset.parent())
        .unwrap_or_else(|| dataset.id())
}

fn out_of_range(index: usize, len: usize) -> DataError {
    DataError::IndexOutOfRange { index, len }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{IndexMap, selection_owner};
    use crate::{DataError, DatasetId, MemoryDataset};

    fn column(n: usize) -> Vec<f32> {
        (0..n).map(|v| v as f32).collect()
    }

    #[test]
    fn full_dataset_is_identity() {
        let ds = MemoryDataset::full(DatasetId::new(1), 1, column(4));
        let map = IndexMap::for_dataset(&ds).unwrap();
        assert!(map.is_identity());
        assert_eq!(map.local_to_global(), &[0, 1, 2, 3]);
        assert_eq!(map.global_to_local(3), Some(3));
        assert_eq!(map.global_to_local(4), None);
        assert_eq!(map.global_count(), 4);
    }

    #[test]
    fn subset_lookup_both_ways() {
        let full = MemoryDataset::full(DatasetId::new(1), 1, column(10));
        let subset = full.subset(DatasetId::new(2), vec![9, 2, 5]).unwrap();
        let map = IndexMap::for_dataset(&subset).unwrap();
        assert!(!map.is_identity());
        assert_eq!(map.global(0), Some(9));
        assert_eq!(map.global_to_local(5), Some(2));
        assert_eq!(map.global_to_local(3), None);
        assert_eq!(map.global_count(), 10);
    }

    #[test]
    fn gather_reports_short_buffer() {
        let full = MemoryDataset::full(DatasetId::new(1), 1, column(10));
        let subset = full.subset(DatasetId::new(2), vec![1, 8]).unwrap();
        let map = IndexMap::for_dataset(&subset).unwrap();
        assert_eq!(
            map.gather(&[0_u8; 4]),
            Err(DataError::IndexOutOfRange { index: 8, len: 4 })
        );
    }

    #[test]
    fn derived_count_mismatch_is_recoverable() {
        let source = MemoryDataset::full(DatasetId::new(1), 1, column(5));
        let mut derived = MemoryDataset::derived(DatasetId::new(2), 1, column(5), &source);
        derived.set_declared_source_count(6);
        assert_eq!(
            IndexMap::for_dataset(&derived).unwrap_err(),
            DataError::CountMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn owner_follows_lineage() {
        let source = MemoryDataset::full(DatasetId::new(1), 2, column(8));
        let derived = MemoryDataset::derived(DatasetId::new(2), 1, column(4), &source);
        let subset = source.subset(DatasetId::new(3), vec![0, 1]).unwrap();
        let derived_subset = derived.subset(DatasetId::new(4), vec![3]).unwrap();

        assert_eq!(selection_owner(&source), DatasetId::new(1));
        assert_eq!(selection_owner(&derived), DatasetId::new(1));
        assert_eq!(selection_owner(&subset), DatasetId::new(1));
        assert_eq!(selection_owner(&derived_subset), DatasetId::new(1));
    }
}
