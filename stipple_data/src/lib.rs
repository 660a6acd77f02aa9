// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Data: the host-facing contracts of a scatterplot view.
//!
//! A scatterplot does not own its data. Datasets, selections and clusters are
//! stored by a host application; the view reads them through the narrow traits
//! in this crate and writes back only through [`DataHost::set_selection`].
//!
//! Points have two identities:
//! - A **local index**: position in the array the view actually materializes
//!   (the whole dataset, or a subset of it).
//! - A **global index**: stable identity in the full dataset's indexing. Derived
//!   datasets (for example an embedding computed from a source) share the
//!   global indexing of their source.
//!
//! [`IndexMap`] resolves one into the other. It is built fresh from a
//! [`Dataset`] whenever the dataset changes and never holds a reference back
//! into the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use stipple_data::{DatasetId, IndexMap, MemoryDataset};
//!
//! let full = MemoryDataset::full(DatasetId::new(1), 1, (0..10).map(|v| v as f32).collect());
//! let subset = full.subset(DatasetId::new(2), vec![5, 7, 9]).unwrap();
//!
//! let map = IndexMap::for_dataset(&subset).unwrap();
//! assert_eq!(map.local_to_global(), &[5, 7, 9]);
//! assert_eq!(map.global_to_local(7), Some(1));
//!
//! // Gathering a global buffer reproduces the subset's own values.
//! let global: Vec<f32> = full.extract_dimension(0).unwrap();
//! assert_eq!(map.gather(&global).unwrap(), subset.extract_dimension(0).unwrap());
//! # use stipple_data::Dataset;
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cluster;
mod dataset;
mod error;
mod host;
mod id;
mod index_map;
mod memory;

pub use cluster::{Cluster, ClusterSet};
pub use dataset::{Dataset, SourceRef};
pub use error::DataError;
pub use host::DataHost;
pub use id::DatasetId;
pub use index_map::{IndexMap, selection_owner};
pub use memory::{MemoryDataset, MemoryHost};
