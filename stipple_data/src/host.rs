// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::cluster::ClusterSet;
use crate::dataset::Dataset;
use crate::id::DatasetId;

/// The storage and notification side of the host application.
///
/// Selections are keyed by their owning dataset (see
/// [`selection_owner`](crate::selection_owner)) and hold global indices. The
/// view never keeps its own copy across events: every read goes through
/// [`DataHost::selection`].
pub trait DataHost {
    /// Looks up a dataset.
    fn dataset(&self, id: DatasetId) -> Option<&dyn Dataset>;

    /// Clusters of a cluster dataset.
    fn clusters(&self, id: DatasetId) -> Option<&ClusterSet>;

    /// Mutable clusters of a cluster dataset.
    fn clusters_mut(&mut self, id: DatasetId) -> Option<&mut ClusterSet>;

    /// The current selection of `owner`, as global indices in no particular order.
    fn selection(&self, owner: DatasetId) -> Vec<u32>;

    /// Replaces the selection of `owner`.
    fn set_selection(&mut self, owner: DatasetId, indices: Vec<u32>);

    /// Tells listeners that the selection of `owner` changed.
    fn notify_selection_changed(&mut self, owner: DatasetId);
}
