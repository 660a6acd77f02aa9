// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host, for tests, benches and embedding without a real host.

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::cluster::ClusterSet;
use crate::dataset::{Dataset, SourceRef};
use crate::error::DataError;
use crate::host::DataHost;
use crate::id::DatasetId;

/// A row-major table of `f32` values held in memory.
///
/// Subsets share the parent's value storage and only add an index list.
#[derive(Clone, Debug)]
pub struct MemoryDataset {
    id: DatasetId,
    dimensions: usize,
    values: Arc<[f32]>,
    subset: Option<Vec<u32>>,
    parent: Option<DatasetId>,
    derived_from: Option<SourceRef>,
}

impl MemoryDataset {
    /// Creates a full dataset from row-major `values` with `dimensions` columns.
    ///
    /// A trailing partial row is ignored.
    #[must_use]
    pub fn full(id: DatasetId, dimensions: usize, values: Vec<f32>) -> Self {
        Self {
            id,
            dimensions,
            values: values.into(),
            subset: None,
            parent: None,
            derived_from: None,
        }
    }

    /// Creates a full dataset derived from `source`.
    ///
    /// The derivation always points at the ultimate source: deriving from a
    /// derived dataset (or a subset of one) records that dataset's source.
    #[must_use]
    pub fn derived(
        id: DatasetId,
        dimensions: usize,
        values: Vec<f32>,
        source: &Self,
    ) -> Self {
        let derived_from = source.derived_from.unwrap_or(SourceRef {
            id: source.parent.unwrap_or(source.id),
            point_count: source.full_point_count(),
        });
        Self {
            derived_from: Some(derived_from),
            ..Self::full(id, dimensions, values)
        }
    }

    /// Cuts a subset materializing the given global indices, in order.
    ///
    /// # Errors
    ///
    /// [`DataError::IndexOutOfRange`] if an index is outside the full indexing.
    pub fn subset(&self, id: DatasetId, indices: Vec<u32>) -> Result<Self, DataError> {
        let len = self.full_point_count();
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= len) {
            return Err(DataError::IndexOutOfRange {
                index: bad as usize,
                len,
            });
        }
        Ok(Self {
            id,
            dimensions: self.dimensions,
            values: Arc::clone(&self.values),
            subset: Some(indices),
            parent: Some(self.parent.unwrap_or(self.id)),
            derived_from: self.derived_from,
        })
    }

    /// Overrides the point count this dataset declares for its source.
    ///
    /// Simulates a host whose derivation metadata went stale.
    pub fn set_declared_source_count(&mut self, point_count: usize) {
        if let Some(source) = &mut self.derived_from {
            source.point_count = point_count;
        }
    }
}

impl Dataset for MemoryDataset {
    fn id(&self) -> DatasetId {
        self.id
    }

    fn full_point_count(&self) -> usize {
        self.values.len().checked_div(self.dimensions).unwrap_or(0)
    }

    fn subset_indices(&self) -> Option<&[u32]> {
        self.subset.as_deref()
    }

    fn parent(&self) -> Option<DatasetId> {
        self.parent
    }

    fn derived_from(&self) -> Option<SourceRef> {
        self.derived_from
    }

    fn dimension_count(&self) -> usize {
        self.dimensions
    }

    fn extract_dimension(&self, dimension: usize) -> Result<Vec<f32>, DataError> {
        if dimension >= self.dimensions {
            return Err(DataError::DimensionOutOfRange {
                dimension,
                count: self.dimensions,
            });
        }
        let at = |row: usize| self.values[row * self.dimensions + dimension];
        Ok(match &self.subset {
            Some(indices) => indices.iter().map(|&i| at(i as usize)).collect(),
            None => (0..self.full_point_count()).map(at).collect(),
        })
    }
}

/// A host that keeps datasets, clusters and selections in hash maps.
///
/// Selection change notifications are recorded in order and can be inspected
/// with [`MemoryHost::notifications`].
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    datasets: HashMap<DatasetId, MemoryDataset>,
    clusters: HashMap<DatasetId, ClusterSet>,
    selections: HashMap<DatasetId, Vec<u32>>,
    notifications: Vec<DatasetId>,
}

impl MemoryHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a dataset.
    pub fn insert_dataset(&mut self, dataset: MemoryDataset) {
        self.datasets.insert(dataset.id, dataset);
    }

    /// Removes a dataset, returning it if it was present.
    pub fn remove_dataset(&mut self, id: DatasetId) -> Option<MemoryDataset> {
        self.clusters.remove(&id);
        self.datasets.remove(&id)
    }

    /// Adds or replaces a cluster dataset.
    pub fn insert_clusters(&mut self, id: DatasetId, clusters: ClusterSet) {
        self.clusters.insert(id, clusters);
    }

    /// Selection change notifications received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[DatasetId] {
        &self.notifications
    }

    /// Forgets recorded notifications.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}

impl DataHost for MemoryHost {
    fn dataset(&self, id: DatasetId) -> Option<&dyn Dataset> {
        self.datasets.get(&id).map(|ds| ds as &dyn Dataset)
    }

    fn clusters(&self, id: DatasetId) -> Option<&ClusterSet> {
        self.clusters.get(&id)
    }

    fn clusters_mut(&mut self, id: DatasetId) -> Option<&mut ClusterSet> {
        self.clusters.get_mut(&id)
    }

    fn selection(&self, owner: DatasetId) -> Vec<u32> {
        self.selections.get(&owner).cloned().unwrap_or_default()
    }

    fn set_selection(&mut self, owner: DatasetId, indices: Vec<u32>) {
        self.selections.insert(owner, indices);
    }

    fn notify_selection_changed(&mut self, owner: DatasetId) {
        self.notifications.push(owner);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::MemoryDataset;
    use crate::{DataError, Dataset, DatasetId};

    #[test]
    fn extracts_columns_in_local_order() {
        let ds = MemoryDataset::full(DatasetId::new(1), 2, vec![0., 10., 1., 11., 2., 12.]);
        assert_eq!(ds.point_count(), 3);
        assert_eq!(ds.extract_dimension(1).unwrap(), [10., 11., 12.]);

        let subset = ds.subset(DatasetId::new(2), vec![2, 0]).unwrap();
        assert!(!subset.is_full());
        assert_eq!(subset.point_count(), 2);
        assert_eq!(subset.extract_dimension(0).unwrap(), [2., 0.]);
    }

    #[test]
    fn rejects_bad_dimension_and_subset() {
        let ds = MemoryDataset::full(DatasetId::new(1), 1, vec![0., 1.]);
        assert_eq!(
            ds.extract_dimension(1),
            Err(DataError::DimensionOutOfRange {
                dimension: 1,
                count: 1
            })
        );
        assert!(matches!(
            ds.subset(DatasetId::new(2), vec![2]),
            Err(DataError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn derived_of_derived_points_at_root() {
        let root = MemoryDataset::full(DatasetId::new(1), 1, vec![0.; 3]);
        let first = MemoryDataset::derived(DatasetId::new(2), 1, vec![1.; 3], &root);
        let second = MemoryDataset::derived(DatasetId::new(3), 1, vec![2.; 3], &first);
        assert!(second.is_derived());
        assert_eq!(second.derived_from().unwrap().id, DatasetId::new(1));
    }
}
