// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

use crate::error::DataError;
use crate::id::DatasetId;

/// The dataset a derived dataset was computed from.
///
/// This is a one-directional relation: the derived dataset names its source
/// and the source's point count, nothing more. Lookups that need the source
/// itself go through the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceRef {
    /// Identifier of the source dataset.
    pub id: DatasetId,
    /// Full point count of the source dataset.
    pub point_count: usize,
}

/// A host-owned table of points.
///
/// Values are addressed by *local* index: position within the points this
/// dataset materializes. A full dataset materializes all of its
/// [`full_point_count`](Dataset::full_point_count) points; a subset
/// materializes only the global indices listed by
/// [`subset_indices`](Dataset::subset_indices), in that order.
pub trait Dataset {
    /// Identifier of this dataset.
    fn id(&self) -> DatasetId;

    /// Number of points in the full (un-subsetted) indexing.
    fn full_point_count(&self) -> usize;

    /// Global indices of the materialized points, or `None` for a full dataset.
    fn subset_indices(&self) -> Option<&[u32]>;

    /// The full dataset a subset was cut from, if this is a subset.
    fn parent(&self) -> Option<DatasetId>;

    /// The dataset this one was derived from, if any.
    ///
    /// Subsets of a derived dataset report the same source as the dataset
    /// they were cut from.
    fn derived_from(&self) -> Option<SourceRef>;

    /// Number of dimensions per point.
    fn dimension_count(&self) -> usize;

    /// Extracts one dimension as a column, in local order.
    fn extract_dimension(&self, dimension: usize) -> Result<Vec<f32>, DataError>;

    /// Extracts two dimensions as data-space positions, in local order.
    fn extract_positions(&self, x: usize, y: usize) -> Result<Vec<Point>, DataError> {
        let xs = self.extract_dimension(x)?;
        let ys = self.extract_dimension(y)?;
        Ok(xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
            .collect())
    }

    /// Number of materialized points.
    fn point_count(&self) -> usize {
        self.subset_indices()
            .map_or_else(|| self.full_point_count(), <[u32]>::len)
    }

    /// Returns `true` if every point of the full indexing is materialized in order.
    fn is_full(&self) -> bool {
        self.subset_indices().is_none()
    }

    /// Returns `true` if this dataset was derived from another one.
    fn is_derived(&self) -> bool {
        self.derived_from().is_some()
    }
}
