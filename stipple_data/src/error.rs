// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::id::DatasetId;

/// Recoverable data problems.
///
/// None of these is fatal: the operation that hits one is skipped and the
/// previous result stays in place.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    /// Two datasets that must describe the same points disagree on how many there are.
    #[error("point count mismatch: expected {expected} points, found {actual}")]
    CountMismatch {
        /// Count required by the position dataset.
        expected: usize,
        /// Count reported by the other dataset.
        actual: usize,
    },
    /// A stored index does not address a point of the dataset it refers to.
    #[error("index {index} is out of range for {len} points")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of addressable points.
        len: usize,
    },
    /// A dimension was requested that the dataset does not have.
    #[error("dimension {dimension} is out of range for {count} dimensions")]
    DimensionOutOfRange {
        /// The requested dimension.
        dimension: usize,
        /// Number of dimensions in the dataset.
        count: usize,
    },
    /// The host no longer knows a dataset that is still referenced.
    #[error("dataset {0} is not known to the host")]
    UnknownDataset(DatasetId),
}
