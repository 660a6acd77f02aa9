// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use peniko::Color;

/// A named, colored group of points.
///
/// `indices` are global indices into the dataset that owns the cluster. They
/// are kept in insertion order and may overlap with other clusters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    /// Display name.
    pub name: String,
    /// Color applied to every member.
    pub color: Color,
    /// Global indices of the members.
    pub indices: Vec<u32>,
}

impl Cluster {
    /// Creates a cluster.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            color,
            indices,
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the cluster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// An ordered sequence of clusters over one dataset.
///
/// Later clusters win where memberships overlap. Points in no cluster are
/// unassigned.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
}

impl ClusterSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The clusters, in order.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns `true` if there are no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Appends a cluster.
    pub fn push(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    /// Turns a selection into a new cluster and appends it.
    ///
    /// Duplicate indices in `selection` are dropped; the remaining order is
    /// preserved. Returns a reference to the new cluster.
    pub fn add_cluster_from_selection(
        &mut self,
        name: impl Into<String>,
        color: Color,
        selection: impl IntoIterator<Item = u32>,
    ) -> &Cluster {
        let mut seen = HashSet::new();
        let indices = selection
            .into_iter()
            .filter(|&index| seen.insert(index))
            .collect();
        let index = self.clusters.len();
        self.clusters.push(Cluster::new(name, color, indices));
        &self.clusters[index]
    }
}

impl FromIterator<Cluster> for ClusterSet {
    fn from_iter<I: IntoIterator<Item = Cluster>>(iter: I) -> Self {
        Self {
            clusters: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::ClusterSet;

    #[test]
    fn selection_becomes_cluster() {
        let mut set = ClusterSet::new();
        let cluster = set.add_cluster_from_selection("picked", Color::WHITE, [4, 2, 4, 7]);
        assert_eq!(cluster.name, "picked");
        assert_eq!(cluster.indices, [4, 2, 7]);
        assert_eq!(set.len(), 1);
    }
}
