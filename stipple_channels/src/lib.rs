// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Channels: per-point visual attributes.
//!
//! Two kinds of buffers feed the point renderer besides positions:
//!
//! - **Scalar channels** ([`ScalarChannel`]): one `f32` per point for size,
//!   opacity or color-map coordinate. A [`ScalarChannelConfig`] either fills
//!   the buffer with a constant or reads one dimension of a dataset, clamps it
//!   into a [`ScalarRange`], normalizes it to `t` in `[0, 1]` and combines `t`
//!   with an offset and magnitude (see [`combine`]).
//! - **Cluster colors**: [`project_cluster_colors`] paints each point with the
//!   color of the cluster it belongs to, translating the clusters' global
//!   indices into the view's local order.
//!
//! Both come with a binder ([`ChannelBinder`], [`ClusterColorBinder`]) that
//! keeps the last good buffer when a recomputation fails, logs the failure at
//! `warn` level under the `stipple::channels` target, and hands the error back
//! so the caller can skip pushing anything to the renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use stipple_channels::{ChannelBinder, ScalarChannel, ScalarChannelConfig, ScalarRange};
//! use stipple_data::{DatasetId, MemoryDataset, MemoryHost};
//!
//! let id = DatasetId::new(1);
//! let mut host = MemoryHost::new();
//! host.insert_dataset(MemoryDataset::full(id, 1, vec![-5.0, 5.0, 15.0]));
//!
//! let config = ScalarChannelConfig::dimension(id, 0, ScalarRange::new(0.0, 10.0));
//! let mut sizes = ChannelBinder::new(ScalarChannel::Size, config.with_scale(2.0, 10.0));
//!
//! // Raw values clamp into [0, 10] before normalization.
//! assert_eq!(sizes.bind(&host, 3).unwrap(), &[2.0, 7.0, 12.0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binder;
mod clusters;
mod scalar;
mod settings;

pub use binder::ChannelBinder;
pub use clusters::{ClusterColorBinder, UNASSIGNED, project_cluster_colors};
pub use scalar::{
    ChannelMode, ScalarChannel, ScalarChannelConfig, ScalarRange, combine, compute_channel,
};
pub use settings::{MAX_POINT_SIZE, MIN_POINT_SIZE, PointSettings};
