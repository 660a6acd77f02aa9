// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use peniko::Color;
use stipple_data::{ClusterSet, DataError, Dataset, IndexMap};

/// Color of points that belong to no cluster.
pub const UNASSIGNED: Color = Color::BLACK;

/// Projects cluster membership onto per-point colors of `dataset`, in local order.
///
/// Clusters are defined over global indices, so colors are first written into
/// a buffer covering the whole global index space (the source's when
/// `dataset` is derived) and then gathered through the dataset's local to
/// global mapping. Where clusters overlap the later one wins; points in no
/// cluster get [`UNASSIGNED`].
///
/// # Errors
///
/// - [`DataError::IndexOutOfRange`] if any cluster lists an index outside the
///   global index space. Nothing is clamped.
/// - [`DataError::CountMismatch`] if a derived dataset disagrees with its source.
pub fn project_cluster_colors(
    clusters: &ClusterSet,
    dataset: &dyn Dataset,
) -> Result<Vec<Color>, DataError> {
    let map = IndexMap::for_dataset(dataset)?;
    let total = map.global_count();
    let mut global = vec![UNASSIGNED; total];
    for cluster in clusters.clusters() {
        for &index in &cluster.indices {
            let slot = global
                .get_mut(index as usize)
                .ok_or(DataError::IndexOutOfRange {
                    index: index as usize,
                    len: total,
                })?;
            *slot = cluster.color;
        }
    }
    map.gather(&global)
}

/// Keeps the last good cluster color buffer.
#[derive(Clone, Debug, Default)]
pub struct ClusterColorBinder {
    colors: Vec<Color>,
}

impl ClusterColorBinder {
    /// Creates a binder with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last successfully projected colors.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Reprojects `clusters` onto `dataset`.
    ///
    /// # Errors
    ///
    /// See [`project_cluster_colors`]. The previous buffer is retained and the
    /// error has already been logged.
    pub fn project(
        &mut self,
        clusters: &ClusterSet,
        dataset: &dyn Dataset,
    ) -> Result<&[Color], DataError> {
        match project_cluster_colors(clusters, dataset) {
            Ok(colors) => {
                self.colors = colors;
                Ok(self.colors.as_slice())
            }
            Err(err) => {
                log::warn!(
                    target: "stipple::channels",
                    "cluster colors not updated for dataset {}: {err}",
                    dataset.id()
                );
                Err(err)
            }
        }
    }
}
