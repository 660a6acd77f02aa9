// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple: the interaction and visual-channel engine behind a scatterplot view.
//!
//! This crate ties the Stipple building blocks together into [`Scatterplot`],
//! which a host application drives with one call per event:
//!
//! - dataset events load positions, bounds and the local/global index mapping
//!   ([`stipple_data`], [`stipple_bounds`]),
//! - selection gestures resolve pixel masks into global indices and write
//!   them back to the host ([`stipple_selection`]),
//! - channel configuration produces per-point size, opacity and color buffers
//!   ([`stipple_channels`]),
//! - render mode and kernel width changes are routed to the point and density
//!   renderers ([`stipple_render`]).
//!
//! The host owns datasets and selections and is reached through
//! [`DataHost`](stipple_data::DataHost). Renderers are reached through
//! [`PointRenderer`](stipple_render::PointRenderer) and
//! [`DensityRenderer`](stipple_render::DensityRenderer).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use stipple::{EngineConfig, Scatterplot};
//! use stipple_data::{DataHost, DatasetId, MemoryDataset, MemoryHost};
//! use stipple_render::{RecordingDensityRenderer, RecordingPointRenderer};
//! use stipple_selection::{PixelMask, SelectionModifier};
//!
//! let id = DatasetId::new(1);
//! let mut host = MemoryHost::new();
//! // Two points on a diagonal: (0, 0) and (1, 1).
//! host.insert_dataset(MemoryDataset::full(id, 2, vec![0.0, 0.0, 1.0, 1.0]));
//!
//! let mut plot = Scatterplot::new(
//!     RecordingPointRenderer::default(),
//!     RecordingDensityRenderer::default(),
//!     EngineConfig::default(),
//! );
//! plot.set_position_dataset(&host, id).unwrap();
//! assert_eq!(plot.point_count(), 2);
//!
//! // Brush the top-right quadrant of a 100x100 view: only (1, 1) is there.
//! let mut mask = PixelMask::new(100, 100);
//! mask.fill_rect(Rect::new(50.0, 0.0, 100.0, 50.0));
//! plot.begin_selection(SelectionModifier::Replace);
//! assert!(plot.end_selection(&mut host, &mask));
//! assert_eq!(host.selection(id), vec![1]);
//!
//! plot.selection_changed(&host);
//! assert_eq!(plot.coordinator().point_renderer().highlights, vec![0, 1]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod scatterplot;

pub use config::{DEFAULT_POINT_COLOR, EngineConfig};
pub use scatterplot::{ColorDataset, Scatterplot};
